use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::cell::Cell;
use super::state::Snake;

/// Pick a free cell uniformly at random.
///
/// Returns `None` when the snake covers the whole arena.
pub fn place_egg<R: Rng + ?Sized>(snake: &Snake, size: usize, rng: &mut R) -> Option<Cell> {
    let occupied: HashSet<Cell> = snake.cells().collect();
    let free: Vec<Cell> = Cell::all(size).filter(|c| !occupied.contains(c)).collect();

    free.choose(rng).copied()
}
