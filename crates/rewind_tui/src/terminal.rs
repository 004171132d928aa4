//! Terminal mode guard.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Restores the terminal when dropped.
///
/// Create it before touching terminal modes so every exit path, including
/// a failed setup step, leaves the alternate screen and raw mode.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Wraps `out` without changing any terminal mode yet.
    pub fn new(out: W) -> Self {
        Self {
            out,
            raw_mode: false,
        }
    }

    /// Switches the terminal to raw mode.
    pub fn enable_raw_mode(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        self.raw_mode = true;
        Ok(())
    }

    /// Enters the alternate screen on the wrapped writer.
    pub fn enter_alternate_screen(&mut self) -> io::Result<()> {
        execute!(self.out, EnterAlternateScreen)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!(raw_mode = self.raw_mode, "Restoring terminal");
        if self.raw_mode
            && let Err(err) = disable_raw_mode()
        {
            warn!(error = %err, "Failed to disable raw mode");
        }
        if let Err(err) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(error = %err, "Failed to leave alternate screen");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTER: &str = "\x1b[?1049h";
    const LEAVE: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    #[test]
    fn test_restores_after_setup_error() {
        fn setup(out: &mut Vec<u8>) -> io::Result<()> {
            let mut guard = TerminalGuard::new(out);
            guard.enter_alternate_screen()?;
            Err(io::Error::other("backend failed"))
        }

        let mut out = Vec::new();
        assert!(setup(&mut out).is_err());

        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with(ENTER));
        assert!(written.ends_with(&format!("{LEAVE}{SHOW_CURSOR}")));
    }

    #[test]
    fn test_restores_without_entering() {
        let mut out = Vec::new();
        drop(TerminalGuard::new(&mut out));

        let written = String::from_utf8(out).unwrap();
        assert_eq!(written, format!("{LEAVE}{SHOW_CURSOR}"));
    }
}
