//! Arcade configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use pocket_tictactoe::GameMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Smallest grid the snake game accepts.
pub const MIN_GRID: i32 = 5;
/// Largest grid the snake game accepts.
pub const MAX_GRID: i32 = 40;
/// Fastest snake tick in milliseconds.
pub const MIN_TICK_MS: u64 = 50;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    /// Fixed RNG seed; random when absent.
    seed: Option<u64>,

    /// Tic-tac-toe settings.
    tictactoe: TicTacToeConfig,

    /// Snake settings.
    snake: SnakeConfig,

    /// Logging settings.
    log: LogConfig,
}

/// `[tictactoe]` section.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeConfig {
    /// Starting mode.
    mode: GameMode,

    /// Pause before the computer replies, in milliseconds.
    computer_delay_ms: u64,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::VsComputer,
            computer_delay_ms: 500,
        }
    }
}

/// `[snake]` section.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Side length of the square grid.
    grid_size: i32,

    /// Milliseconds between automatic moves.
    tick_ms: u64,

    /// Move on a timer instead of once per key press.
    auto_play: bool,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_size: 15,
            tick_ms: 500,
            auto_play: false,
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file; the terminal belongs to the UI.
    file: PathBuf,

    /// `tracing` filter used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("pocket_arcade.log"),
            filter: "info".to_string(),
        }
    }
}

impl ArcadeConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks value ranges.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = self.snake.grid_size;
        if !(MIN_GRID..=MAX_GRID).contains(&grid) {
            return Err(ConfigError::new(format!(
                "snake.grid_size must be between {} and {}, got {}",
                MIN_GRID, MAX_GRID, grid
            )));
        }
        if self.snake.tick_ms < MIN_TICK_MS {
            return Err(ConfigError::new(format!(
                "snake.tick_ms must be at least {}, got {}",
                MIN_TICK_MS, self.snake.tick_ms
            )));
        }
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::new("log.filter must not be empty".to_string()));
        }
        Ok(())
    }

    /// Applies command-line overrides, then re-validates.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(mode) = overrides.mode {
            self.tictactoe.mode = mode;
        }
        if let Some(grid) = overrides.grid_size {
            self.snake.grid_size = grid;
        }
        if let Some(tick_ms) = overrides.tick_ms {
            self.snake.tick_ms = tick_ms;
        }
        if overrides.auto_play {
            self.snake.auto_play = true;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Values given on the command line that win over the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--seed`.
    pub seed: Option<u64>,
    /// `tictactoe --mode`.
    pub mode: Option<GameMode>,
    /// `snake --grid`.
    pub grid_size: Option<i32>,
    /// `snake --tick-ms`.
    pub tick_ms: Option<u64>,
    /// `snake --auto`.
    pub auto_play: bool,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
