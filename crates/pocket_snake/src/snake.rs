//! The snake body: an ordered, duplicate-free run of cells, head first.

use super::grid::Cell;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use tracing::instrument;

/// Error building a snake from raw cells.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SnakeError {
    /// No cells were supplied.
    #[display("snake needs at least one cell")]
    Empty,
    /// The same cell appears twice.
    #[display("snake body repeats cell {}", _0)]
    Duplicate(#[error(not(source))] Cell),
}

/// Snake body, head at the front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Builds a snake from cells listed head first.
    ///
    /// # Errors
    ///
    /// Fails on an empty list or a repeated cell.
    #[instrument(skip(cells))]
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Result<Self, SnakeError> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return Err(SnakeError::Empty);
        }
        let mut seen = HashSet::with_capacity(body.len());
        if let Some(dup) = body.iter().find(|cell| !seen.insert(**cell)) {
            return Err(SnakeError::Duplicate(*dup));
        }
        Ok(Self { body })
    }

    /// A horizontal snake with its head at the grid centre, tail trailing
    /// to the left. `len` is clamped so the tail stays on the grid.
    #[instrument]
    pub fn centered(bound: i32, len: usize) -> Self {
        let center = bound / 2;
        let len = (len as i32).clamp(1, center.max(0) + 1);
        let body = (0..len)
            .map(|i| Cell::new(center - i, center))
            .collect();
        Self { body }
    }

    /// The head cell.
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// A snake is never empty; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// True if any segment occupies `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Segments, head first.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Pushes a new head. The tail is dropped unless `grow` is set.
    pub(crate) fn advance(&mut self, head: Cell, grow: bool) {
        self.body.push_front(head);
        if !grow {
            self.body.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_layout() {
        let snake = Snake::centered(15, 3);
        let cells: Vec<_> = snake.cells().collect();
        assert_eq!(cells, vec![Cell::new(7, 7), Cell::new(6, 7), Cell::new(5, 7)]);
    }

    #[test]
    fn test_centered_negative_bound_keeps_head() {
        let snake = Snake::centered(-4, 3);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(-2, -2));
    }

    #[test]
    fn test_centered_clamps_to_grid() {
        let snake = Snake::centered(2, 3);
        let cells: Vec<_> = snake.cells().collect();
        assert_eq!(cells, vec![Cell::new(1, 1), Cell::new(0, 1)]);
    }

    #[test]
    fn test_from_cells_rejects_duplicates() {
        let err =
            Snake::from_cells([Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 1)]).unwrap_err();
        assert_eq!(err, SnakeError::Duplicate(Cell::new(1, 1)));
        assert_eq!(Snake::from_cells(Vec::<Cell>::new()).unwrap_err(), SnakeError::Empty);
    }
}
