//! Core domain types for the guessing game.

use derive_getters::Getters;
use serde::Serialize;

/// Result of evaluating one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Outcome {
    /// The guess matched the secret.
    Win,
    /// The secret is higher than the guess.
    Higher,
    /// The secret is lower than the guess.
    Lower,
    /// The final try was spent on a wrong guess.
    Loss,
    /// Fallback that integer comparison never produces.
    Unknown,
}

impl Outcome {
    /// Returns true when the outcome closes the round.
    pub fn ends_round(self) -> bool {
        matches!(self, Outcome::Win | Outcome::Loss)
    }
}

/// The secret and the tries spent on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct RoundState {
    /// The number to guess.
    secret: i64,
    /// Guesses evaluated so far this round.
    tries_used: u32,
}

impl RoundState {
    /// Starts a round around the given secret.
    pub fn new(secret: i64) -> Self {
        Self {
            secret,
            tries_used: 0,
        }
    }

    /// Counts one more evaluated guess.
    pub(crate) fn spend_try(&mut self) {
        self.tries_used = self.tries_used.saturating_add(1);
    }
}

/// Wins and losses for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct ScoreRecord {
    /// Rounds won.
    wins: u64,
    /// Rounds lost.
    losses: u64,
}

impl ScoreRecord {
    /// Total rounds played.
    pub fn games(&self) -> u64 {
        self.wins + self.losses
    }

    pub(crate) fn record_win(&mut self) {
        self.wins += 1;
    }

    pub(crate) fn record_loss(&mut self) {
        self.losses += 1;
    }
}
