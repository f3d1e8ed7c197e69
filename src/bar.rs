/// One progress snapshot, supplied fresh on every render call.
///
/// The renderer never stores bars between calls — position in the slice
/// passed to [`render`](crate::BarRenderer::render) determines which display
/// line a bar maps to.
///
/// ```rust,ignore
/// bars.render(&[
///     Bar::new(done_a).total(512).text("file-a"),
///     Bar::new(done_b).total(2048).text("file-b"),
/// ])?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub(crate) completed: i64,
    pub(crate) total: i64,
    pub(crate) text: String,
}

impl Bar {
    /// A bar with the given completed count, a total of 100 and no text.
    pub fn new(completed: i64) -> Self {
        Self {
            completed,
            total: 100,
            text: String::new(),
        }
    }

    /// Total number of ticks to complete.
    pub fn total(mut self, total: i64) -> Self {
        self.total = total;
        self
    }

    /// Label substituted for the `:text` placeholder.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}
