//! Command-line interface for pocket_arcade.

use crate::config::Overrides;
use clap::{Parser, Subcommand};
use pocket_tictactoe::GameMode;
use std::path::PathBuf;

/// Pocket Arcade - tic-tac-toe, snake and rock-paper-scissors in the terminal
#[derive(Parser, Debug)]
#[command(name = "pocket_arcade")]
#[command(about = "Small turn-based games in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional; defaults apply if missing)
    #[arg(
        short,
        long,
        env = "POCKET_ARCADE_CONFIG",
        default_value = "pocket_arcade.toml"
    )]
    pub config: PathBuf,

    /// Fixed RNG seed for reproducible games
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Game to open; the menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the game menu
    Menu,

    /// Play tic-tac-toe
    Tictactoe {
        /// two-player or vs-computer
        #[arg(long)]
        mode: Option<GameMode>,
    },

    /// Play snake
    Snake {
        /// Grid side length
        #[arg(long)]
        grid: Option<i32>,

        /// Milliseconds between automatic moves
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Move on a timer instead of once per key press
        #[arg(long)]
        auto: bool,
    },

    /// Play rock-paper-scissors
    Rps,
}

impl Cli {
    /// Command-line values that override the config file.
    pub fn overrides(&self) -> Overrides {
        let mut overrides = Overrides {
            seed: self.seed,
            ..Overrides::default()
        };
        match &self.command {
            Some(Command::Tictactoe { mode }) => overrides.mode = *mode,
            Some(Command::Snake {
                grid,
                tick_ms,
                auto,
            }) => {
                overrides.grid_size = *grid;
                overrides.tick_ms = *tick_ms;
                overrides.auto_play = *auto;
            }
            Some(Command::Menu) | Some(Command::Rps) | None => {}
        }
        overrides
    }
}
