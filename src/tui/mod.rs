//! Terminal UI for noughts.

mod controller;
mod input;
mod screen;
mod screens;
mod ui;

pub use controller::{Controller, Showing};
pub use screen::{Screen, ScreenTransition};
pub use screens::{BoardScreen, ModeSelectScreen, Pending};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use tracing::{debug, error, info};

use crate::AppConfig;

/// Puts the terminal back in cooked mode when dropped.
///
/// Created right after raw mode is switched on; any later exit, including
/// a panic unwinding out of the event loop, restores the terminal.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(err) = restore_terminal(&mut self.out) {
            error!(error = %err, "Failed to restore terminal");
        }
    }
}

fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
}

/// Runs the game in the terminal until the user quits.
///
/// The terminal is restored even when the event loop fails.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    info!("Starting noughts TUI");

    let _guard = TerminalGuard::enter(io::stdout())?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut controller = Controller::new(&config);
    let res = controller.run(&mut terminal).await;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    // "\x1b[?1049l" leaves the alternate screen.
    const LEAVE_ALTERNATE: &str = "\u{1b}[?1049l";

    #[test]
    fn test_restore_outside_raw_mode_succeeds() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();
        assert!(String::from_utf8_lossy(&out).contains(LEAVE_ALTERNATE));
    }

    #[test]
    fn test_guard_restores_on_drop() {
        let mut out = Vec::new();
        {
            let _guard = TerminalGuard { out: &mut out };
        }
        assert!(String::from_utf8_lossy(&out).contains(LEAVE_ALTERNATE));
    }

    #[test]
    fn test_guard_restores_when_unwinding() {
        let mut out = Vec::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = TerminalGuard { out: &mut out };
            panic!("event loop blew up");
        }));
        assert!(result.is_err());
        assert!(String::from_utf8_lossy(&out).contains(LEAVE_ALTERNATE));
    }
}
