//! Invariants for tic-tac-toe.
//!
//! Logical properties that must hold after every move. The typestate game
//! checks them in debug builds; tests check them directly.

use super::typestate::GameInProgress;
use super::{Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: at most nine marks, and X leads O by zero or one.
pub struct MarksBoundedInvariant;

impl Invariant<GameInProgress> for MarksBoundedInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let board = game.board();
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x + o <= 9 && (x == o || x == o + 1)
    }

    fn description() -> &'static str {
        "Board holds at most 9 marks and X leads O by at most one"
    }
}

/// Invariant: every move in history is on the board, and nothing else is.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let board = game.board();
        game.history()
            .iter()
            .all(|mv| board.get(mv.position) == Square::Occupied(mv.player))
            && board.mark_count() == game.history().len()
    }

    fn description() -> &'static str {
        "Board matches the move history"
    }
}

/// Invariant: players alternate turns, starting with X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();
        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.player == if i % 2 == 0 { Player::X } else { Player::O });

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        alternates && game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    MarksBoundedInvariant,
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameInProgress, GameResult, GameSetup, Move, Position};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let game = GameSetup::new().start();
        assert!(TicTacToeInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let moves = [
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopRight),
        ];
        match GameInProgress::replay(&moves) {
            Ok(GameResult::InProgress(game)) => {
                assert!(TicTacToeInvariants::check_all(&game).is_ok());
            }
            other => panic!("Expected in-progress game, got {:?}", other),
        }
    }

    #[test]
    fn test_invariant_set_detects_corruption() {
        let game = GameSetup::new().start();
        let Ok(GameResult::InProgress(mut game)) =
            game.make_move(Move::new(Player::X, Position::Center))
        else {
            panic!("Expected in-progress game");
        };

        game.board.set(Position::TopLeft, Square::Occupied(Player::X));

        let violations = TicTacToeInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
