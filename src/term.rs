use std::io::{self, IsTerminal, Write};

/// Standard ANSI hide/show cursor sequences, appended as literal bytes.
pub(crate) const HIDE_CURSOR: &str = "\x1b[?25l";
pub(crate) const SHOW_CURSOR: &str = "\x1b[?25h";

/// The output sink a [`BarRenderer`](crate::BarRenderer) draws to.
///
/// Anything that can report whether it is an interactive terminal, report
/// its column count, move the cursor, clear, and accept raw text. The
/// renderer is the exclusive writer to the sink between calls — interleaving
/// independent writes corrupts the cursor bookkeeping. That is a caller
/// obligation, not enforced here.
///
/// Implement this on a capturing fake for deterministic tests; see the
/// crate's own test module for one.
pub trait Term {
    /// Whether the sink is an interactive terminal. Renders to non-TTY
    /// sinks are silently discarded.
    fn is_tty(&self) -> bool;

    /// Current column count, re-read on every render.
    fn columns(&self) -> usize;

    /// Move the cursor up by `rows` lines. `rows == 0` is a no-op.
    fn move_cursor_up(&mut self, rows: usize) -> io::Result<()>;

    /// Move the cursor to the given column (0-based).
    fn cursor_to_column(&mut self, column: usize) -> io::Result<()>;

    /// Clear from the cursor to the end of the screen.
    fn clear_screen_down(&mut self) -> io::Result<()>;

    /// Write raw text.
    fn write_str(&mut self, s: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

/// [`Term`] over any [`Write`] target, emitting raw ANSI control bytes.
///
/// TTY detection is captured at construction; the column count is queried
/// from the terminal on each call, falling back to 80 when the size is
/// unavailable (e.g. under a pipe or a dumb terminal).
pub struct AnsiTerm<W: Write> {
    target: W,
    tty: bool,
}

impl AnsiTerm<io::Stdout> {
    pub fn stdout() -> Self {
        let tty = io::stdout().is_terminal();
        Self::new(io::stdout(), tty)
    }
}

impl AnsiTerm<io::Stderr> {
    /// Progress on stderr keeps stdout pipeable.
    pub fn stderr() -> Self {
        let tty = io::stderr().is_terminal();
        Self::new(io::stderr(), tty)
    }
}

impl<W: Write> AnsiTerm<W> {
    /// Wrap an arbitrary writer, stating up front whether it is a TTY.
    pub fn new(target: W, tty: bool) -> Self {
        Self { target, tty }
    }
}

impl<W: Write> Term for AnsiTerm<W> {
    fn is_tty(&self) -> bool {
        self.tty
    }

    fn columns(&self) -> usize {
        crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(80)
    }

    fn move_cursor_up(&mut self, rows: usize) -> io::Result<()> {
        if rows > 0 {
            write!(self.target, "\x1b[{rows}A")?;
        }
        Ok(())
    }

    fn cursor_to_column(&mut self, column: usize) -> io::Result<()> {
        match column {
            0 => write!(self.target, "\r"),
            c => write!(self.target, "\x1b[{}G", c + 1),
        }
    }

    fn clear_screen_down(&mut self) -> io::Result<()> {
        write!(self.target, "\x1b[J")
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.target.write_all(s.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.target.flush()
    }
}
