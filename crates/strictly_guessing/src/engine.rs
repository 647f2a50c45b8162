//! Round state machine for the guessing game.
//!
//! A round starts when a secret is drawn and ends on [`Outcome::Win`] or
//! [`Outcome::Loss`], at which point the next round begins immediately.

use crate::config::GameConfiguration;
use crate::error::OutOfRange;
use crate::rng::{RandomSource, StdRandom};
use crate::types::{Outcome, RoundState, ScoreRecord};
use std::cmp::Ordering;
use tracing::{debug, info, instrument};

/// Display name of the game.
pub const TITLE: &str = "Random Number Game";

/// Owns the configuration, the current round and the score record.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRandom> {
    config: GameConfiguration,
    round: RoundState,
    score: ScoreRecord,
    rng: R,
}

impl<R: RandomSource> GameEngine<R> {
    /// Creates an engine and draws the first secret.
    #[instrument(skip(rng))]
    pub fn new(config: GameConfiguration, mut rng: R) -> Self {
        let round = Self::draw_round(&config, &mut rng);
        info!("Game engine ready");
        Self {
            config,
            round,
            score: ScoreRecord::default(),
            rng,
        }
    }

    fn draw_round(config: &GameConfiguration, rng: &mut R) -> RoundState {
        let secret = rng.draw(*config.minimum(), *config.maximum());
        debug!(secret, "Secret drawn");
        RoundState::new(secret)
    }

    /// Draws a fresh secret and resets the try counter.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) {
        self.round = Self::draw_round(&self.config, &mut self.rng);
        info!("New round started");
    }

    /// Evaluates a guess without range validation.
    ///
    /// The try is counted first. A wrong guess on the last try loses the
    /// round before the ordering is reported; a matching guess always wins.
    #[instrument(skip(self), fields(tries_used = self.round.tries_used()))]
    pub fn guess(&mut self, value: i64) -> Outcome {
        self.round.spend_try();
        let secret = *self.round.secret();

        if value != secret && *self.round.tries_used() >= *self.config.max_tries() {
            self.score.record_loss();
            info!(secret, losses = self.score.losses(), "Round lost");
            self.new_round();
            return Outcome::Loss;
        }

        let outcome = match value.cmp(&secret) {
            Ordering::Less => Outcome::Higher,
            Ordering::Greater => Outcome::Lower,
            Ordering::Equal => {
                self.score.record_win();
                info!(secret, wins = self.score.wins(), "Round won");
                self.new_round();
                Outcome::Win
            }
        };
        debug!(%outcome, tries_left = self.tries_left(), "Guess evaluated");
        outcome
    }

    /// Evaluates a guess after checking it against the configured range.
    ///
    /// A rejected guess leaves the round untouched.
    #[instrument(skip(self))]
    pub fn guess_validated(&mut self, value: i64) -> Result<Outcome, OutOfRange> {
        if value < *self.config.minimum() {
            debug!("Guess below range");
            return Err(OutOfRange::TooLow {
                guess: value,
                minimum: *self.config.minimum(),
            });
        }
        if value > *self.config.maximum() {
            debug!("Guess above range");
            return Err(OutOfRange::TooHigh {
                guess: value,
                maximum: *self.config.maximum(),
            });
        }
        Ok(self.guess(value))
    }

    /// Clears the score record and starts a new round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.score = ScoreRecord::default();
        info!("Score record cleared");
        self.new_round();
    }
}

impl<R> GameEngine<R> {
    /// Tries remaining in the current round.
    pub fn tries_left(&self) -> u32 {
        self.config.max_tries().saturating_sub(*self.round.tries_used())
    }

    /// Display name of the game.
    pub fn title(&self) -> &'static str {
        TITLE
    }

    /// The active configuration.
    pub fn config(&self) -> &GameConfiguration {
        &self.config
    }

    /// The current round.
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Wins and losses so far.
    pub fn score(&self) -> &ScoreRecord {
        &self.score
    }

    /// Rounds won.
    pub fn wins(&self) -> u64 {
        *self.score.wins()
    }

    /// Rounds lost.
    pub fn losses(&self) -> u64 {
        *self.score.losses()
    }

    /// Rounds played.
    pub fn games(&self) -> u64 {
        self.score.games()
    }
}
