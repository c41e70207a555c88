use std::fmt;

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::error::GameError;

/// A position on the arena grid
///
/// Cells order row-major, so sorting a set of cells walks the arena
/// top-left to bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Build a cell, checking both coordinates against the arena size
    pub fn encode(row: i32, col: i32, size: usize) -> Result<Self, GameError> {
        let in_range = |v: i32| v >= 0 && (v as usize) < size && v <= u8::MAX as i32;
        if !in_range(row) || !in_range(col) {
            return Err(GameError::OutOfBounds { row, col, size });
        }

        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Split the cell back into `(row, col)`
    pub fn decode(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// True iff the Manhattan distance between the cells is exactly one
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.row.abs_diff(other.row) as u16 + self.col.abs_diff(other.col) as u16 == 1
    }

    /// The neighbouring cell one step along `direction`, or `None` when that
    /// step leaves the arena
    pub fn step(self, direction: Direction, size: usize) -> Option<Cell> {
        let (d_row, d_col) = direction.delta();
        Cell::encode(self.row as i32 + d_row, self.col as i32 + d_col, size).ok()
    }

    /// Every cell of a `size`x`size` arena, row-major
    pub fn all(size: usize) -> impl Iterator<Item = Cell> {
        let size = size.min(u8::MAX as usize + 1);
        (0..size).flat_map(move |row| {
            (0..size).map(move |col| Cell {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
