//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use tracing::instrument;

/// The eight lines that win the game.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::BottomLeft, Position::Center, Position::TopRight],
];

/// Checks whether `mark` holds any full line.
///
/// Every cell of the line must be exactly `Occupied(mark)`.
#[instrument(skip(board))]
pub fn has_won(board: &Board, mark: Mark) -> bool {
    let target = Cell::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == target))
}

/// Returns the mark holding a full line, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|mark| has_won(board, *mark))
}
