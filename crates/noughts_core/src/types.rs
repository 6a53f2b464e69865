//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Mark a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (always moves first).
    #[default]
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Single-character label shown in a cell: ` `, `X` or `O`.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::Occupied(Mark::X) => "X",
            Cell::Occupied(Mark::O) => "O",
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order, indexed the same way as
/// [`Position::to_index`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns the cell at `(row, col)`, or `None` when out of range.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_row_col(row, col).map(|pos| self.get(pos))
    }

    /// Places a mark, overwriting whatever was there.
    ///
    /// Callers outside the crate go through [`crate::Game`], which only
    /// ever writes into empty cells.
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.to_index()] = Cell::Occupied(mark);
    }

    /// Checks whether the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Checks whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns every position that is still empty, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Iterates the board as three rows of three cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(3)
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; 3]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let Some(pos) = Position::from_row_col(row, col) else {
                    continue;
                };
                match ch {
                    'X' => board.place(pos, Mark::X),
                    'O' => board.place(pos, Mark::O),
                    _ => {}
                }
            }
        }
        board
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let symbols: Vec<&str> = row.iter().map(|c| c.symbol()).collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}
