//! Pocket Arcade library - small turn-based games in the terminal
//!
//! The game engines live in their own crates and know nothing about the
//! terminal. This crate wires them together.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Session**: explicit state for every game, one seeded RNG
//! - **TUI**: ratatui front end with a menu and one screen per game
//!
//! # Example
//!
//! ```
//! use pocket_arcade::{ArcadeConfig, ArcadeSession, Overrides};
//! use pocket_tictactoe::Position;
//!
//! let config = ArcadeConfig::default()
//!     .with_overrides(Overrides { seed: Some(7), ..Default::default() })
//!     .unwrap();
//! let mut session = ArcadeSession::new(&config);
//!
//! assert!(session.play_square(Position::TopLeft));
//! assert_eq!(session.computer_turn(), Some(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod rng;
pub mod session;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ArcadeConfig, ConfigError, LogConfig, Overrides, SnakeConfig, TicTacToeConfig};
pub use rng::GameRng;
pub use session::ArcadeSession;
pub use tui::{App, Control, GameKind, Screen, run_tui};
