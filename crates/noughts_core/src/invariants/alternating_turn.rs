//! Alternating turn invariant: X, O, X, ...

use super::Invariant;
use crate::{Game, Mark, Phase};

/// Invariant: marks alternate starting with X, and the turn follows the
/// last move while the round is running.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let mut expected = Mark::X;
        for mov in game.history() {
            if mov.mark != expected {
                return false;
            }
            expected = expected.opponent();
        }

        match game.phase() {
            Phase::InProgress => *game.turn() == expected,
            Phase::AwaitingMode => game.history().is_empty(),
            Phase::GameOver(_) => true,
        }
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
