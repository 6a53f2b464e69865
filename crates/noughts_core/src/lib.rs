//! Tic-tac-toe game state.
//!
//! The crate owns everything that decides the game: the [`Board`], the
//! turn state machine in [`Game`], the pure win/draw [`rules`] and the
//! random computer [`Opponent`]. It has no idea how the board is drawn.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Game, Mark, Mode, MoveReport, Outcome, Position};
//!
//! let mut game = Game::with_mode(Mode::Friend);
//! for pos in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::BottomRight,
//! ] {
//!     game.attempt_move(pos);
//! }
//! let report = game.attempt_move(Position::TopRight);
//! assert_eq!(report, MoveReport::Finished(Outcome::Winner(Mark::X)));
//! assert_eq!(game.message().as_deref(), Some("Player X wins!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod opponent;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError, MoveReport};
pub use game::Game;
pub use opponent::{Opponent, RandomOpponent};
pub use phases::{Mode, Outcome, Phase};
pub use position::Position;
pub use types::{Board, Cell, Mark};
