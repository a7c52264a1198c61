//! The pure snake transition.

use super::food::place_food;
use super::grid::{Cell, Direction};
use super::snake::Snake;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why the snake died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Collision {
    /// The head left the grid.
    #[strum(to_string = "hit the wall")]
    Wall,
    /// The head ran into the body.
    #[strum(to_string = "bit its own tail")]
    SelfBite,
}

/// Result of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Moved without eating; length unchanged.
    Moved {
        /// The snake after the move.
        snake: Snake,
    },
    /// Ate the food and grew by one.
    Ate {
        /// The grown snake.
        snake: Snake,
        /// Replacement food; `None` when the snake now fills the grid.
        food: Option<Cell>,
    },
    /// The move was fatal. Nothing changed.
    Crashed(Collision),
}

impl Step {
    /// False only for [`Step::Crashed`].
    pub fn is_alive(&self) -> bool {
        !matches!(self, Step::Crashed(_))
    }

    /// The snake after a surviving move.
    pub fn snake(&self) -> Option<&Snake> {
        match self {
            Step::Moved { snake } | Step::Ate { snake, .. } => Some(snake),
            Step::Crashed(_) => None,
        }
    }
}

/// Advances the snake one cell in `direction` on a `bound`×`bound` grid.
///
/// The body check covers every current segment, tail included, so moving
/// into the cell the tail is about to vacate is fatal.
#[instrument(skip(snake, rng), fields(head = %snake.head(), len = snake.len()))]
pub fn step<R: Rng + ?Sized>(
    snake: &Snake,
    direction: Direction,
    food: Cell,
    bound: i32,
    rng: &mut R,
) -> Step {
    let head = snake.head().offset(direction);

    if !head.in_bounds(bound) {
        debug!(%head, "Wall collision");
        return Step::Crashed(Collision::Wall);
    }
    if snake.contains(head) {
        debug!(%head, "Self collision");
        return Step::Crashed(Collision::SelfBite);
    }

    let mut next = snake.clone();
    if head == food {
        next.advance(head, true);
        let food = place_food(&next, bound, rng);
        Step::Ate { snake: next, food }
    } else {
        next.advance(head, false);
        Step::Moved { snake: next }
    }
}
