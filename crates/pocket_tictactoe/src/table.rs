//! A tic-tac-toe table: the state one interactive session owns.
//!
//! Wraps the typestate phases with a game mode and a running scoreboard.
//! Every operation takes `&mut self`; the caller owns the table between
//! interactions.

use super::action::{Move, MoveError};
use super::opponent::best_move;
use super::phases::Outcome;
use super::rules::Win;
use super::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use super::{Board, Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who plays O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the keyboard.
    #[default]
    TwoPlayer,
    /// The human plays X, the computer plays O.
    VsComputer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two Player",
            GameMode::VsComputer => "vs Computer",
        }
    }

    /// Switches to the other mode.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::VsComputer,
            GameMode::VsComputer => GameMode::TwoPlayer,
        }
    }
}

/// Running totals across games at one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Scoreboard {
    /// Counts a finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Current phase of the game at the table.
#[derive(Debug, Clone)]
pub enum Phase {
    /// Moves are being made.
    InProgress(GameInProgress),
    /// The game is over.
    Finished(GameFinished),
}

impl Phase {
    fn new() -> Self {
        Phase::InProgress(GameSetup::new().start())
    }

    /// Returns the board for either phase.
    pub fn board(&self) -> &Board {
        match self {
            Phase::InProgress(game) => game.board(),
            Phase::Finished(game) => game.board(),
        }
    }

    /// Returns the move history for either phase.
    pub fn history(&self) -> &[Move] {
        match self {
            Phase::InProgress(game) => game.history(),
            Phase::Finished(game) => game.history(),
        }
    }

    /// Player to move, while the game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            Phase::InProgress(game) => Some(game.to_move()),
            Phase::Finished(_) => None,
        }
    }

    /// Outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::InProgress(_) => None,
            Phase::Finished(game) => Some(*game.outcome()),
        }
    }

    /// The winning line, once a game is won.
    pub fn win(&self) -> Option<Win> {
        match self {
            Phase::InProgress(_) => None,
            Phase::Finished(game) => game.win().copied(),
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Finished(_))
    }

    /// Applies a move, returning the new phase.
    ///
    /// On error the phase is handed back unchanged alongside the error.
    fn apply(self, action: Move) -> Result<Phase, (Phase, MoveError)> {
        match self {
            Phase::InProgress(game) => match game.clone().make_move(action) {
                Ok(GameResult::InProgress(next)) => Ok(Phase::InProgress(next)),
                Ok(GameResult::Finished(done)) => Ok(Phase::Finished(done)),
                Err(e) => Err((Phase::InProgress(game), e)),
            },
            finished @ Phase::Finished(_) => Err((finished, MoveError::GameOver)),
        }
    }
}

/// Game, mode and scoreboard for one session.
#[derive(Debug, Clone)]
pub struct Table {
    phase: Phase,
    mode: GameMode,
    scores: Scoreboard,
}

impl Table {
    /// Creates a table with an empty board.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            phase: Phase::new(),
            mode,
            scores: Scoreboard::default(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.phase.board()
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Running scores.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// True when the computer owes a move.
    pub fn computer_pending(&self) -> bool {
        self.mode == GameMode::VsComputer && self.phase.to_move() == Some(Player::O)
    }

    /// Places the current player's mark at `pos` on behalf of a human.
    ///
    /// Returns `false` without changing anything if the square is taken,
    /// the game is over, or the computer is due to move.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn play(&mut self, pos: Position) -> bool {
        if self.computer_pending() {
            debug!("Ignoring input while computer is to move");
            return false;
        }
        let Some(player) = self.phase.to_move() else {
            debug!("Ignoring input after game over");
            return false;
        };
        self.apply(Move::new(player, pos))
    }

    /// Lets the computer move if it is due. Returns the square it took.
    #[instrument(skip(self, rng))]
    pub fn computer_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        if !self.computer_pending() {
            return None;
        }
        let pos = best_move(self.board(), Player::O, rng)?;
        self.apply(Move::new(Player::O, pos)).then_some(pos)
    }

    /// Clears the board, keeping the scores.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.phase = Phase::new();
    }

    /// Clears the scores, keeping the board.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores = Scoreboard::default();
    }

    /// Switches mode. The board is cleared when the mode actually changes.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        if mode != self.mode {
            info!(from = %self.mode, to = %mode, "Changing game mode");
            self.mode = mode;
            self.reset_board();
        }
    }

    fn apply(&mut self, action: Move) -> bool {
        let phase = std::mem::replace(&mut self.phase, Phase::new());
        match phase.apply(action) {
            Ok(next) => {
                if let Some(outcome) = next.outcome() {
                    info!(%outcome, "Game over");
                    self.scores.record(outcome);
                }
                self.phase = next;
                true
            }
            Err((unchanged, e)) => {
                debug!(error = %e, "Move rejected");
                self.phase = unchanged;
                false
            }
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_occupied_square_is_noop() {
        let mut table = Table::new(GameMode::TwoPlayer);
        assert!(table.play(Position::Center));
        let before = table.board().clone();
        assert!(!table.play(Position::Center));
        assert_eq!(table.board(), &before);
        assert_eq!(table.phase().to_move(), Some(Player::O));
    }

    #[test]
    fn test_score_recorded_once() {
        let mut table = Table::new(GameMode::TwoPlayer);
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ] {
            assert!(table.play(pos));
        }
        assert!(table.phase().is_over());
        assert!(!table.play(Position::BottomRight));
        assert_eq!(table.scores().x_wins, 1);
        assert_eq!(table.scores().games(), 1);
        assert_eq!(
            table.phase().win().map(|w| w.line),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_human_cannot_move_for_computer() {
        let mut table = Table::new(GameMode::VsComputer);
        assert!(table.play(Position::TopLeft));
        assert!(table.computer_pending());
        assert!(!table.play(Position::TopRight));

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(table.computer_turn(&mut rng), Some(Position::Center));
        assert!(!table.computer_pending());
        assert_eq!(table.computer_turn(&mut rng), None);
    }

    #[test]
    fn test_mode_change_resets_board_but_not_scores() {
        let mut table = Table::new(GameMode::TwoPlayer);
        table.scores.draws = 2;
        table.play(Position::Center);
        table.set_mode(GameMode::VsComputer);
        assert_eq!(table.board().mark_count(), 0);
        assert_eq!(table.scores().draws, 2);
    }
}
