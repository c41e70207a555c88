//! Builders shared by the game unit tests

use super::cell::Cell;
use super::config::ARENA_SIZE;
use super::state::Snake;

pub(crate) fn cell(row: i32, col: i32) -> Cell {
    Cell::encode(row, col, ARENA_SIZE).unwrap()
}

/// Snake from `(row, col)` pairs, head first
pub(crate) fn snake(cells: &[(i32, i32)]) -> Snake {
    Snake::new(cells.iter().map(|&(r, c)| cell(r, c)).collect(), ARENA_SIZE).unwrap()
}

/// Boustrophedon walk over the arena: row 0 left to right, row 1 right to
/// left, and so on. Consecutive cells are always adjacent.
pub(crate) fn serpentine(size: usize) -> Vec<Cell> {
    (0..size)
        .flat_map(|row| {
            let cols: Vec<usize> = if row % 2 == 0 {
                (0..size).collect()
            } else {
                (0..size).rev().collect()
            };
            cols.into_iter()
                .map(move |col| Cell::encode(row as i32, col as i32, size).unwrap())
        })
        .collect()
}
