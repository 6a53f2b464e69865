//! Screen trait and transition type for the UI state machine.

use crossterm::event::{KeyEvent, MouseEvent};
use noughts_core::Mode;
use ratatui::Frame;
use std::time::Instant;

/// The result of handling an event on a screen.
///
/// Screens return this to drive the [`Controller`](crate::Controller).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Start a round in the given mode and show the board.
    StartGame(Mode),
    /// Go back to the mode selection screen.
    GoToModeSelect,
    /// Exit cleanly.
    Quit,
}

/// Trait implemented by each screen.
///
/// Each screen owns its own state, renders its UI, and handles events.
/// Rendering takes `&mut self` so a screen can remember where it drew its
/// clickable areas.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&mut self, frame: &mut Frame);

    /// Handles a key press.
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> ScreenTransition;

    /// Handles a mouse event.
    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> ScreenTransition;

    /// Fires anything scheduled for `now` or earlier.
    fn tick(&mut self, _now: Instant) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
