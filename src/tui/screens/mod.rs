//! Screen implementations for the UI state machine.

mod board;
mod mode_select;

pub use board::{BoardScreen, Pending};
pub use mode_select::ModeSelectScreen;
