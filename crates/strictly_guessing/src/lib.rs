//! Strictly Guessing - pure number-guessing game logic
//!
//! The engine draws a secret integer from a configured inclusive range and
//! scores guesses against it until the round is won or the tries run out.
//!
//! # Architecture
//!
//! - **Configuration**: validated bounds and try budget ([`GameConfiguration`])
//! - **Engine**: round state machine and win/loss record ([`GameEngine`])
//! - **Random source**: injected uniform draws ([`RandomSource`])
//!
//! # Example
//!
//! ```
//! use strictly_guessing::{GameConfiguration, GameEngine, Outcome, StdRandom};
//!
//! # fn example() -> Result<(), strictly_guessing::ConfigError> {
//! let config = GameConfiguration::new(1, 1, 1)?;
//! let mut engine = GameEngine::new(config, StdRandom::seeded(7));
//! assert_eq!(engine.guess(1), Outcome::Win);
//! assert_eq!(engine.score().wins(), &1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod error;
mod rng;
mod types;

pub use config::{DEFAULT_MAX_TRIES, DEFAULT_MAXIMUM, DEFAULT_MINIMUM, GameConfiguration};
pub use engine::{GameEngine, TITLE};
pub use error::{ConfigError, OutOfRange};
pub use rng::{RandomSource, StdRandom};
pub use types::{Outcome, RoundState, ScoreRecord};
