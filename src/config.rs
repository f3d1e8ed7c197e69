use std::time::Duration;

use crate::error::ConfigError;
use crate::style;

/// Construction options for a [`BarRenderer`](crate::BarRenderer).
///
/// Immutable after construction. Every option has a default:
///
/// ```rust,ignore
/// let config = Config::new()
///     .title("downloads")
///     .width(30)
///     .complete("=")
///     .incomplete("-")
///     .display("[:bar] :text :percent :time :completed/:total")
///     .clear(true);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) title: String,
    pub(crate) width: usize,
    pub(crate) complete: String,
    pub(crate) incomplete: String,
    pub(crate) clear: bool,
    pub(crate) interval: Duration,
    pub(crate) display: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: 50,
            complete: style::default_complete(),
            incomplete: style::default_incomplete(),
            clear: false,
            interval: Duration::from_millis(16),
            display: ":bar :text :percent :time :completed/:total".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title rendered on its own line above all bars. Default: none.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Displayed width of the bar segment in cells. Default: 50.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Token repeated for the filled part of the bar. Typically one visual
    /// cell, but any string works. Default: a green-background space.
    pub fn complete(mut self, token: impl Into<String>) -> Self {
        self.complete = token.into();
        self
    }

    /// Token repeated for the unfilled part of the bar.
    /// Default: a white-background space.
    pub fn incomplete(mut self, token: impl Into<String>) -> Self {
        self.incomplete = token.into();
        self
    }

    /// Erase the bar region on [`finish`](crate::BarRenderer::finish)
    /// instead of leaving the last frame in scroll-back. Default: false.
    pub fn clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Minimum time between terminal repaints. Default: 16 ms.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Per-bar display template. Recognized placeholders: `:bar`, `:text`,
    /// `:percent`, `:time`, `:completed`, `:total` — each substituted at
    /// its first occurrence only.
    /// Default: `":bar :text :percent :time :completed/:total"`.
    pub fn display(mut self, template: impl Into<String>) -> Self {
        self.display = template.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::Width);
        }
        if self.complete.is_empty() {
            return Err(ConfigError::Complete);
        }
        if self.incomplete.is_empty() {
            return Err(ConfigError::Incomplete);
        }
        if self.display.is_empty() {
            return Err(ConfigError::Display);
        }
        Ok(())
    }
}
