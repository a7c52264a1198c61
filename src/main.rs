//! Pocket Arcade - terminal front end.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use pocket_arcade::{ArcadeConfig, Cli, Command, GameKind, LogConfig, Screen, run_tui};
use std::fs::File;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = ArcadeConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?
        .with_overrides(cli.overrides())
        .context("Invalid command-line override")?;

    init_logging(config.log())?;
    info!(config = ?cli.config, command = ?cli.command, "Starting Pocket Arcade");

    let screen = match cli.command {
        None | Some(Command::Menu) => Screen::Menu,
        Some(Command::Tictactoe { .. }) => Screen::Game(GameKind::TicTacToe),
        Some(Command::Snake { .. }) => Screen::Game(GameKind::Snake),
        Some(Command::Rps) => Screen::Game(GameKind::Rps),
    };

    run_tui(&config, screen).await
}

/// Logs go to a file so they do not tear the TUI.
fn init_logging(log: &LogConfig) -> Result<()> {
    let log_file = File::create(log.file())
        .with_context(|| format!("Failed to create log file {}", log.file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
