//! Session state for one run of the arcade.
//!
//! Every game keeps its state in an explicit object owned here; the UI
//! loop owns the session and passes it to each transition.

use crate::config::ArcadeConfig;
use crate::rng::GameRng;
use pocket_rps::{Choice, Round, RpsMatch};
use pocket_snake::{Direction, SnakeGame, Tick};
use pocket_tictactoe::{Position, Table};
use tracing::{info, instrument};

/// All game state for one session.
#[derive(Debug, Clone)]
pub struct ArcadeSession {
    table: Table,
    snake: SnakeGame,
    rps: RpsMatch,
    rng: GameRng,
}

impl ArcadeSession {
    /// Builds fresh games from `config`.
    #[instrument(skip(config))]
    pub fn new(config: &ArcadeConfig) -> Self {
        let mut rng = GameRng::from_seed_or_entropy(*config.seed());
        let snake = SnakeGame::new(*config.snake().grid_size(), &mut rng);
        info!(seed = rng.seed(), "Arcade session created");
        Self {
            table: Table::new(*config.tictactoe().mode()),
            snake,
            rps: RpsMatch::new(),
            rng,
        }
    }

    /// Tic-tac-toe table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Mutable tic-tac-toe table for moves that need no randomness.
    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Snake game.
    pub fn snake(&self) -> &SnakeGame {
        &self.snake
    }

    /// Rock-paper-scissors match.
    pub fn rps(&self) -> &RpsMatch {
        &self.rps
    }

    /// Seed of the session RNG.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Human tic-tac-toe move. `false` if it was not allowed.
    pub fn play_square(&mut self, pos: Position) -> bool {
        self.table.play(pos)
    }

    /// Computer tic-tac-toe move, if one is due.
    pub fn computer_turn(&mut self) -> Option<Position> {
        self.table.computer_turn(&mut self.rng)
    }

    /// Steers the snake.
    pub fn turn_snake(&mut self, direction: Direction) -> bool {
        self.snake.turn(direction)
    }

    /// Advances the snake one cell.
    pub fn tick_snake(&mut self) -> Tick {
        self.snake.tick(&mut self.rng)
    }

    /// New snake game, keeping the high score.
    pub fn restart_snake(&mut self) {
        self.snake.restart(&mut self.rng);
    }

    /// Plays one rock-paper-scissors round.
    pub fn play_rps(&mut self, choice: Choice) -> Round {
        self.rps.play(choice, &mut self.rng)
    }

    /// Clears the rock-paper-scissors match.
    pub fn reset_rps(&mut self) {
        self.rps.reset();
    }
}
