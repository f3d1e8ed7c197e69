use std::io;
use std::time::{Duration, Instant};

use crate::bar::Bar;
use crate::config::Config;
use crate::error::{ConfigError, Error, ValidationError};
use crate::term::{AnsiTerm, HIDE_CURSOR, SHOW_CURSOR, Term};

/// Renders a group of progress bars into one shared terminal region.
///
/// The caller repeatedly passes a snapshot of every bar to [`render`]; the
/// renderer formats each into a line from the display template, throttles
/// repaints to the configured interval, and redraws the region in place only
/// when the composed frame actually changed. [`println`] interleaves a log
/// line above the bars, [`finish`] ends the session (and is invoked
/// automatically once every bar reports complete).
///
/// ```rust,ignore
/// let mut bars = BarRenderer::stdout(Config::new().width(30))?;
/// for i in 0..=100 {
///     bars.render(&[Bar::new(i).text("file1"), Bar::new(i * 2).text("file2")])?;
///     std::thread::sleep(Duration::from_millis(50));
/// }
/// ```
///
/// [`render`]: BarRenderer::render
/// [`println`]: BarRenderer::println
/// [`finish`]: BarRenderer::finish
pub struct BarRenderer<T: Term> {
    config: Config,
    term: T,
    start: Instant,
    last_render: Option<Instant>,
    last_frame: String,
    last_rows: usize,
    lines: Vec<String>,
    start_index: usize,
    ended: bool,
    eol_compensation: bool,
}

impl BarRenderer<AnsiTerm<io::Stdout>> {
    /// A renderer writing to stdout.
    pub fn stdout(config: Config) -> Result<Self, ConfigError> {
        Self::new(config, AnsiTerm::stdout())
    }
}

impl BarRenderer<AnsiTerm<io::Stderr>> {
    /// A renderer writing to stderr, leaving stdout pipeable.
    pub fn stderr(config: Config) -> Result<Self, ConfigError> {
        Self::new(config, AnsiTerm::stderr())
    }
}

impl<T: Term> BarRenderer<T> {
    /// Validates `config` and binds the renderer to `term`.
    ///
    /// A non-empty title reserves display line 0; bars then start at line 1.
    /// Records the session start for `:time`, writes nothing yet.
    pub fn new(config: Config, term: T) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut lines = Vec::new();
        let mut start_index = 0;
        if !config.title.is_empty() {
            lines.push(config.title.clone());
            start_index = 1;
        }
        Ok(Self {
            config,
            term,
            start: Instant::now(),
            last_render: None,
            last_frame: String::new(),
            last_rows: 1,
            lines,
            start_index,
            ended: false,
            eol_compensation: cfg!(windows),
        })
    }

    /// Formats every bar and repaints the region when due.
    ///
    /// A no-op once the session has ended or when the sink is not an
    /// interactive terminal. Bars map to display lines by their position in
    /// `bars`; a bar whose `completed` exceeds its `total` keeps its
    /// previously rendered line untouched (a frozen line) and no longer
    /// counts against session completion. When the time since the previous
    /// call is below the configured interval the line state still updates
    /// but the terminal is left alone, so a later repaint shows the latest
    /// values rather than stale ones. Once every bar is complete the
    /// session finishes automatically.
    pub fn render(&mut self, bars: &[Bar]) -> Result<(), Error> {
        if self.ended || !self.term.is_tty() {
            return Ok(());
        }

        // Validate up front so a failing call mutates nothing.
        for (index, bar) in bars.iter().enumerate() {
            if bar.completed < 0 {
                return Err(ValidationError::NegativeCompleted {
                    index,
                    completed: bar.completed,
                }
                .into());
            }
            if bar.total < 1 {
                return Err(ValidationError::NonPositiveTotal {
                    index,
                    total: bar.total,
                }
                .into());
            }
        }

        let now = Instant::now();
        let since_last = self
            .last_render
            .map(|at| now.duration_since(at))
            .unwrap_or(Duration::MAX);
        self.last_render = Some(now);
        let time = format!("{:.1}s", self.start.elapsed().as_secs_f64());

        let mut all_done = true;
        let columns = self.term.columns();
        for (position, bar) in bars.iter().enumerate() {
            let index = self.start_index + position;

            // Overshot bars freeze at their last rendered content.
            if bar.completed > bar.total && index < self.lines.len() {
                continue;
            }
            if bar.completed < bar.total {
                all_done = false;
            }

            let line = self.format_line(bar, &time, columns);
            if index < self.lines.len() {
                self.lines[index] = line;
            } else {
                self.lines.push(line);
            }
        }

        if since_last < self.config.interval && !all_done {
            #[cfg(feature = "tracing")]
            tracing::trace!(since_last = ?since_last, "repaint throttled");
            return Ok(());
        }

        let frame = format!("{}{}", self.lines.join("\n"), HIDE_CURSOR);
        if frame != self.last_frame {
            #[cfg(feature = "tracing")]
            tracing::trace!(rows = self.lines.len(), "repaint");
            self.term.move_cursor_up(self.last_rows.saturating_sub(1))?;
            self.term.cursor_to_column(0)?;
            self.term.clear_screen_down()?;
            self.term.write_str(&frame)?;
            self.term.flush()?;
            self.last_rows = self.lines.len();
            self.last_frame = frame;
        }

        if all_done {
            self.finish()?;
        }
        Ok(())
    }

    /// Ends the session: erases the region when `clear` is set, otherwise
    /// preserves the last frame in scroll-back with a trailing newline.
    /// Always re-shows the cursor. Subsequent [`render`] calls are no-ops.
    ///
    /// [`render`]: BarRenderer::render
    pub fn finish(&mut self) -> io::Result<()> {
        self.ended = true;
        #[cfg(feature = "tracing")]
        tracing::trace!(clear = self.config.clear, "finish");

        if self.config.clear {
            self.term.move_cursor_up(self.last_rows.saturating_sub(1))?;
            self.term.cursor_to_column(0)?;
            self.term.clear_screen_down()?;
        } else {
            self.term.write_str("\n")?;
        }
        self.term.write_str(SHOW_CURSOR)?;
        self.term.flush()
    }

    /// Writes `message` above the bar region, then restores the bars.
    ///
    /// Erases the region, prints the message and a newline, and rewrites
    /// the last painted frame verbatim below it. Touches neither numeric
    /// state nor the throttle clock, and is callable before the first
    /// render (the restored region is then empty).
    pub fn println(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        self.term.move_cursor_up(self.last_rows.saturating_sub(1))?;
        self.term.cursor_to_column(0)?;
        self.term.clear_screen_down()?;
        self.term.write_str(&format!("{message}\n"))?;
        self.term.write_str(&self.last_frame)?;
        self.term.flush()
    }

    /// Expands the display template for one bar against the current width.
    ///
    /// Placeholders substitute at their first occurrence only. The `:bar`
    /// segment gets whatever horizontal space the other placeholders leave,
    /// capped at the configured width.
    fn format_line(&self, bar: &Bar, time: &str, columns: usize) -> String {
        let percent = format!("{:.2}%", bar.completed as f64 / bar.total as f64 * 100.0);
        let line = self
            .config
            .display
            .replacen(":text", &bar.text, 1)
            .replacen(":time", time, 1)
            .replacen(":percent", &percent, 1)
            .replacen(":completed", &bar.completed.to_string(), 1)
            .replacen(":total", &bar.total.to_string(), 1);

        let used = line.replacen(":bar", "", 1).chars().count();
        let mut available = columns.saturating_sub(used);
        // Native Windows consoles wrap one column early; keep the quirk.
        if available > 0 && self.eol_compensation {
            available -= 1;
        }
        let width = self.config.width.min(available);

        let filled = ((width as f64) * bar.completed as f64 / bar.total as f64).round() as usize;
        let filled = filled.min(width);
        let segment = format!(
            "{}{}",
            self.config.complete.repeat(filled),
            self.config.incomplete.repeat(width - filled)
        );
        line.replacen(":bar", &segment, 1)
    }

    #[cfg(test)]
    pub(crate) fn set_eol_compensation(&mut self, on: bool) {
        self.eol_compensation = on;
    }

    #[cfg(test)]
    pub(crate) fn term(&self) -> &T {
        &self.term
    }

    #[cfg(test)]
    pub(crate) fn ended(&self) -> bool {
        self.ended
    }
}
