//! Error types for the guessing game.

use derive_more::{Display, Error};
use tracing::instrument;

/// A guess fell outside the configured range.
///
/// Rejected guesses never consume a try.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum OutOfRange {
    /// The guess is below the configured minimum.
    #[display("Guess {} is below the minimum of {}", guess, minimum)]
    TooLow {
        /// The rejected guess.
        guess: i64,
        /// Configured lower bound.
        minimum: i64,
    },

    /// The guess is above the configured maximum.
    #[display("Guess {} is above the maximum of {}", guess, maximum)]
    TooHigh {
        /// The rejected guess.
        guess: i64,
        /// Configured upper bound.
        maximum: i64,
    },
}

/// Configuration error with location tracking.
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
