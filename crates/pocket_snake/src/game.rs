//! A snake game session: the state one interactive session owns.

use super::food::place_food;
use super::grid::{Cell, Direction};
use super::snake::Snake;
use super::step::{Collision, Step, step};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Points awarded per food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Segments in a fresh snake.
pub const START_LENGTH: usize = 3;

/// Lifecycle of a snake game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Waiting for the first turn.
    Ready,
    /// Moving.
    Playing,
    /// Crashed.
    Over(Collision),
    /// The snake covers the whole grid.
    Filled,
}

impl Status {
    /// True once no further moves are possible.
    pub fn is_finished(self) -> bool {
        matches!(self, Status::Over(_) | Status::Filled)
    }
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The game is not running.
    Idle,
    /// The snake moved.
    Moved,
    /// The snake ate.
    Ate,
    /// The snake died.
    Crashed(Collision),
    /// The snake ate the last free cell.
    Filled,
}

/// Snake, heading, food and scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnakeGame {
    grid: i32,
    snake: Snake,
    direction: Direction,
    heading: Direction,
    food: Option<Cell>,
    score: u32,
    high_score: u32,
    status: Status,
}

impl SnakeGame {
    /// A fresh game on a `grid`×`grid` board.
    #[instrument(skip(rng))]
    pub fn new<R: Rng + ?Sized>(grid: i32, rng: &mut R) -> Self {
        let snake = Snake::centered(grid, START_LENGTH);
        let food = place_food(&snake, grid, rng);
        Self {
            grid,
            snake,
            direction: Direction::Right,
            heading: Direction::Right,
            food,
            score: 0,
            high_score: 0,
            status: Status::Ready,
        }
    }

    /// Grid side length.
    pub fn grid(&self) -> i32 {
        self.grid
    }

    /// The snake.
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Direction the next tick will move in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current food cell.
    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    /// Points this game.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score across restarts.
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Lifecycle state.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Requests a new heading.
    ///
    /// Reversing onto the neck is ignored. The heading compared against is
    /// the one last moved in, so two quick turns cannot fold the snake back.
    /// The first accepted turn starts the game.
    #[instrument(skip(self), fields(heading = %self.heading))]
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.status.is_finished() {
            return false;
        }
        if direction == self.heading.opposite() {
            debug!("Ignoring reverse turn");
            return false;
        }
        self.direction = direction;
        if self.status == Status::Ready {
            info!("Snake game started");
            self.status = Status::Playing;
        }
        true
    }

    /// Advances one cell if the game is running.
    #[instrument(skip(self, rng), fields(direction = %self.direction))]
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Tick {
        if self.status != Status::Playing {
            return Tick::Idle;
        }
        // A full grid leaves no food; the status is already Filled then.
        let Some(food) = self.food else {
            return Tick::Idle;
        };

        match step(&self.snake, self.direction, food, self.grid, rng) {
            Step::Moved { snake } => {
                self.snake = snake;
                self.heading = self.direction;
                Tick::Moved
            }
            Step::Ate { snake, food } => {
                self.snake = snake;
                self.heading = self.direction;
                self.food = food;
                self.score += POINTS_PER_FOOD;
                self.high_score = self.high_score.max(self.score);
                debug!(score = self.score, len = self.snake.len(), "Ate food");
                if food.is_none() {
                    info!(score = self.score, "Snake filled the grid");
                    self.status = Status::Filled;
                    Tick::Filled
                } else {
                    Tick::Ate
                }
            }
            Step::Crashed(collision) => {
                info!(%collision, score = self.score, "Snake game over");
                self.status = Status::Over(collision);
                Tick::Crashed(collision)
            }
        }
    }

    /// Starts over with a fresh snake and food. The high score is kept.
    #[instrument(skip(self, rng))]
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let high_score = self.high_score;
        *self = Self::new(self.grid, rng);
        self.high_score = high_score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_is_ready() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let game = SnakeGame::new(15, &mut rng);
        assert_eq!(game.status(), Status::Ready);
        assert_eq!(game.snake().head(), Cell::new(7, 7));
        assert_eq!(game.snake().len(), START_LENGTH);
        let food = game.food().unwrap();
        assert!(!game.snake().contains(food));
    }

    #[test]
    fn test_tick_before_start_is_idle() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut game = SnakeGame::new(15, &mut rng);
        assert_eq!(game.tick(&mut rng), Tick::Idle);
        assert_eq!(game.snake().head(), Cell::new(7, 7));
    }

    #[test]
    fn test_reverse_turn_ignored() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut game = SnakeGame::new(15, &mut rng);
        assert!(!game.turn(Direction::Left));
        assert_eq!(game.status(), Status::Ready);
        assert!(game.turn(Direction::Up));
        // Still heading right until a tick happens.
        assert!(!game.turn(Direction::Left));
        assert_eq!(game.direction(), Direction::Up);
    }
}
