//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: every mark went into an empty cell and is still there.
///
/// Replays the history onto an empty board; each move must land on an
/// empty cell and the result must equal the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut replayed = Board::new();

        for mov in game.history() {
            if !replayed.is_empty(mov.position) {
                return false;
            }
            replayed.place(mov.position, mov.mark);
        }

        &replayed == game.board()
    }

    fn description() -> &'static str {
        "Board cells are only ever filled, and match the move history"
    }
}
