//! Terminal mode handling

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Raw mode plus the alternate screen, undone when dropped
pub struct TerminalGuard<W: Write> {
    writer: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Switch the terminal into TUI mode.
    ///
    /// The guard exists before the alternate screen is entered, so a failure
    /// there still restores raw mode.
    pub fn enter(writer: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { writer };
        execute!(guard.writer, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::warn!("Failed to disable raw mode: {err}");
        }
        if let Err(err) = execute!(self.writer, LeaveAlternateScreen, Show) {
            tracing::warn!("Failed to leave alternate screen: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAVE_ALTERNATE_SCREEN: &[u8] = b"\x1b[?1049l";
    const SHOW_CURSOR: &[u8] = b"\x1b[?25h";

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_drop_restores_screen_and_cursor() {
        let mut out = Vec::new();
        drop(TerminalGuard { writer: &mut out });
        assert!(contains(&out, LEAVE_ALTERNATE_SCREEN));
        assert!(contains(&out, SHOW_CURSOR));
    }

    #[test]
    fn test_early_return_still_restores() {
        fn setup(out: &mut Vec<u8>, backend_fails: bool) -> io::Result<()> {
            let _guard = TerminalGuard { writer: out };
            if backend_fails {
                return Err(io::Error::other("backend failed"));
            }
            Ok(())
        }

        let mut out = Vec::new();
        assert!(setup(&mut out, true).is_err());
        assert!(contains(&out, LEAVE_ALTERNATE_SCREEN));
    }
}
