//! Food placement.

use super::grid::Cell;
use super::snake::Snake;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Every cell of the grid not covered by the snake, row by row.
pub fn free_cells(snake: &Snake, bound: i32) -> Vec<Cell> {
    (0..bound)
        .flat_map(|y| (0..bound).map(move |x| Cell::new(x, y)))
        .filter(|cell| !snake.contains(*cell))
        .collect()
}

/// Picks a uniformly random free cell. `None` when the snake fills the grid.
#[instrument(skip(snake, rng), fields(snake_len = snake.len()))]
pub fn place_food<R: Rng + ?Sized>(snake: &Snake, bound: i32, rng: &mut R) -> Option<Cell> {
    let food = free_cells(snake, bound).choose(rng).copied();
    debug!(?food, "Placed food");
    food
}
