//! Random number source abstraction.
//!
//! The engine never touches a global generator. Production code injects
//! [`StdRandom`]; tests inject a seeded generator or a scripted source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{instrument, trace};

/// Produces uniformly distributed integers.
pub trait RandomSource {
    /// Draws an integer in `[minimum, maximum]` inclusive.
    ///
    /// Callers guarantee `minimum <= maximum`.
    fn draw(&mut self, minimum: i64, maximum: i64) -> i64;
}

/// [`RandomSource`] backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeds the generator from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeds the generator deterministically.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    fn draw(&mut self, minimum: i64, maximum: i64) -> i64 {
        let value = self.rng.random_range(minimum..=maximum);
        trace!(minimum, maximum, value, "Drew random value");
        value
    }
}
