//! Moves, move errors and what a move did to the round.

use derive_new::new;
use serde::{Deserialize, Serialize};

use super::{Mark, Outcome, Position};

/// A mark placed at a position, as recorded in the round's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// No round is running.
    #[display("No game in progress")]
    NotInProgress,

    /// The computer owns this turn; only [`crate::Game::play_computer_move`] may place.
    #[display("It is the computer's turn")]
    ComputerToMove,
}

/// What an accepted (or ignored) move did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReport {
    /// Nothing changed.
    Ignored,
    /// The round continues; the other mark is a human.
    Continue,
    /// The round continues and the computer plays next.
    ComputerToMove,
    /// The move ended the round.
    Finished(Outcome),
}

impl MoveReport {
    /// Returns true if the board changed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveReport::Ignored)
    }
}
