//! Pure snake game logic.
//!
//! [`step`] is the whole engine: one move on a square grid, returning the
//! moved snake, the grown snake with fresh food, or the collision that
//! ended the game. [`SnakeGame`] keeps the surrounding session state
//! (heading, score, high score, lifecycle).
//!
//! ```
//! use pocket_snake::{Cell, Direction, Snake, Step, step};
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
//! let snake = Snake::from_cells([Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]).unwrap();
//! let next = step(&snake, Direction::Right, Cell::new(0, 0), 15, &mut rng);
//! assert!(next.is_alive());
//! assert_eq!(next.snake().unwrap().head(), Cell::new(6, 5));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod food;
mod game;
mod grid;
mod snake;
mod step;

pub use food::{free_cells, place_food};
pub use game::{POINTS_PER_FOOD, START_LENGTH, SnakeGame, Status, Tick};
pub use grid::{Cell, Direction};
pub use snake::{Snake, SnakeError};
pub use step::{Collision, Step, step};
