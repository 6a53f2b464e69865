//! Computer opponents.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

use super::{Board, Position};

/// Something that picks O's move when the computer is playing.
pub trait Opponent {
    /// Chooses an empty position, or `None` if the board is full.
    fn choose(&mut self, board: &Board) -> Option<Position>;
}

/// Picks uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    /// Creates an opponent seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an opponent with a fixed seed, so moves are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    #[instrument(skip_all)]
    fn choose(&mut self, board: &Board) -> Option<Position> {
        let empty = board.empty_positions();
        let choice = empty.choose(&mut self.rng).copied();
        debug!(candidates = empty.len(), ?choice, "Computer picked a cell");
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;
    use std::collections::HashSet;

    #[test]
    fn test_full_board_yields_none() {
        let board = Board::from_rows(["XOX", "OXX", "OXO"]);
        assert_eq!(RandomOpponent::seeded(7).choose(&board), None);
    }

    #[test]
    fn test_only_empty_cell_is_chosen() {
        let board = Board::from_rows(["XOX", "OXX", "O O"]);
        let mut opponent = RandomOpponent::seeded(1);
        for _ in 0..20 {
            assert_eq!(opponent.choose(&board), Some(Position::BottomCenter));
        }
    }

    #[test]
    fn test_choices_cover_every_empty_cell() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X);
        let mut opponent = RandomOpponent::seeded(42);
        let seen: HashSet<Position> = (0..500).filter_map(|_| opponent.choose(&board)).collect();
        assert_eq!(seen.len(), 8);
        assert!(!seen.contains(&Position::Center));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomOpponent::seeded(99);
        let mut b = RandomOpponent::seeded(99);
        for _ in 0..10 {
            assert_eq!(a.choose(&board), b.choose(&board));
        }
    }
}
