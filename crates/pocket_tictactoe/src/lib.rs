//! Pure tic-tac-toe game logic.
//!
//! - **Board**: [`Board`], [`Square`], [`Position`]
//! - **Rules**: [`check_winner`], [`is_full`], [`is_draw`]
//! - **Typestate game**: [`GameSetup`] → [`GameInProgress`] → [`GameFinished`]
//! - **Opponent**: [`best_move`], a one-ply heuristic
//! - **Table**: [`Table`], the session state with mode and scoreboard
//!
//! # Example
//!
//! ```
//! use pocket_tictactoe::{Board, Player, Position, check_winner};
//!
//! let board: Board = "XXX/_O_/__O".parse().unwrap();
//! let win = check_winner(&board).unwrap();
//! assert_eq!(win.player, Player::X);
//! assert_eq!(win.line, [Position::TopLeft, Position::TopCenter, Position::TopRight]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod invariants;
mod opponent;
mod phases;
mod position;
pub mod rules;
mod table;
mod types;
mod typestate;

pub use action::{Move, MoveError};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MarksBoundedInvariant, TicTacToeInvariants,
};
pub use opponent::{best_move, completing_move};
pub use phases::Outcome;
pub use position::Position;
pub use rules::{LINES, Win, check_winner, is_draw, is_full};
pub use table::{GameMode, Phase, Scoreboard, Table};
pub use types::{Board, BoardParseError, Player, Square};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
