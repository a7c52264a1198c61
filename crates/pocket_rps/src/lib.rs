//! Rock-paper-scissors against a uniformly random computer.
//!
//! [`judge`] decides a round; [`RpsMatch`] keeps the scoreboard, the
//! winning streak and a short history of recent rounds.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Rounds kept in [`RpsMatch::history`].
pub const HISTORY_LIMIT: usize = 10;

/// A hand.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Choice {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

impl Choice {
    /// The hand this one defeats.
    pub fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    /// Maps the keys `r`, `p` and `s` (any case).
    pub fn from_key(key: char) -> Option<Choice> {
        match key.to_ascii_lowercase() {
            'r' => Some(Choice::Rock),
            'p' => Some(Choice::Paper),
            's' => Some(Choice::Scissors),
            _ => None,
        }
    }

    /// A uniformly random hand.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Choice {
        let all: Vec<Choice> = Choice::iter().collect();
        all[rng.gen_range(0..all.len())]
    }
}

/// Result of a round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum RoundResult {
    /// Player won.
    Win,
    /// Computer won.
    Lose,
    /// Same hand.
    Draw,
}

/// Decides a round.
pub fn judge(player: Choice, computer: Choice) -> RoundResult {
    if player == computer {
        RoundResult::Draw
    } else if player.beats() == computer {
        RoundResult::Win
    } else {
        RoundResult::Lose
    }
}

/// One played round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Round number, starting at 1.
    pub number: u32,
    /// Player's hand.
    pub player: Choice,
    /// Computer's hand.
    pub computer: Choice,
    /// Outcome for the player.
    pub result: RoundResult,
}

/// Running totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won by the player.
    pub wins: u32,
    /// Rounds won by the computer.
    pub losses: u32,
    /// Drawn rounds.
    pub draws: u32,
    /// Consecutive wins; draws leave it alone, losses reset it.
    pub streak: u32,
    /// Longest streak so far.
    pub best_streak: u32,
}

impl Scoreboard {
    /// Counts one round.
    pub fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::Win => {
                self.wins += 1;
                self.streak += 1;
                self.best_streak = self.best_streak.max(self.streak);
            }
            RoundResult::Lose => {
                self.losses += 1;
                self.streak = 0;
            }
            RoundResult::Draw => self.draws += 1,
        }
    }

    /// Rounds played.
    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Percentage of rounds won, `0.0` before the first round.
    pub fn win_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.wins) * 100.0 / f64::from(total),
        }
    }
}

/// Scoreboard plus recent rounds for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RpsMatch {
    scores: Scoreboard,
    history: VecDeque<Round>,
}

impl RpsMatch {
    /// An empty match.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plays `choice` against a random computer hand.
    #[instrument(skip(self, rng))]
    pub fn play<R: Rng + ?Sized>(&mut self, choice: Choice, rng: &mut R) -> Round {
        self.play_against(choice, Choice::random(rng))
    }

    /// Plays `choice` against a known computer hand.
    #[instrument(skip(self))]
    pub fn play_against(&mut self, choice: Choice, computer: Choice) -> Round {
        let result = judge(choice, computer);
        self.scores.record(result);
        let round = Round {
            number: self.scores.total(),
            player: choice,
            computer,
            result,
        };
        debug!(?round, streak = self.scores.streak, "Round played");

        self.history.push_back(round);
        if self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
        round
    }

    /// Running totals.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Most recent round.
    pub fn last(&self) -> Option<&Round> {
        self.history.back()
    }

    /// Up to [`HISTORY_LIMIT`] rounds, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &Round> {
        self.history.iter()
    }

    /// Clears scores and history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
