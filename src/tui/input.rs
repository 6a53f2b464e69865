//! Keyboard cursor movement and mouse hit testing.

use crossterm::event::KeyCode;
use noughts_core::Position;
use ratatui::layout::Rect;

/// Moves cursor based on arrow keys.
///
/// The cursor stops at the board's edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Returns true if the terminal cell `(column, row)` lies inside `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Finds the board cell drawn at `(column, row)`.
///
/// `areas` is indexed like the board, so the hit index is the position.
pub fn hit_test(areas: &[Rect; 9], column: u16, row: u16) -> Option<Position> {
    areas
        .iter()
        .position(|area| contains(*area, column, row))
        .and_then(Position::from_index)
}
