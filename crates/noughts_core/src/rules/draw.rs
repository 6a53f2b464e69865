//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// A draw is a full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = Board::from_rows(["XOX", "OXO", "OX "]);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_rows(["XOX", "OXX", "OXO"]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let board = Board::from_rows(["XXX", "OOX", "XOO"]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
