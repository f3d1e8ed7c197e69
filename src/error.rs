/// Any failure the renderer can produce.
///
/// Configuration and per-call validation problems are programmer errors;
/// callers are expected to fix the input rather than retry. I/O errors
/// come straight from the underlying sink.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A construction option failed validation. Each variant names the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("width must be a positive integer")]
    Width,
    #[error("complete must be a non-empty string")]
    Complete,
    #[error("incomplete must be a non-empty string")]
    Incomplete,
    #[error("display must be a non-empty template string")]
    Display,
}

/// A bar passed to [`render`](crate::BarRenderer::render) failed validation.
///
/// Raised before any line state is updated or any byte is written, so a
/// failing call leaves the renderer exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("bar {index}: completed must be greater than or equal to 0, got {completed}")]
    NegativeCompleted { index: usize, completed: i64 },
    #[error("bar {index}: total must be a positive integer, got {total}")]
    NonPositiveTotal { index: usize, total: i64 },
}
