//! Game configuration: secret range and try budget.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Default lower bound of the secret range.
pub const DEFAULT_MINIMUM: i64 = 1;

/// Default upper bound of the secret range.
pub const DEFAULT_MAXIMUM: i64 = 100;

/// Default number of tries per round.
pub const DEFAULT_MAX_TRIES: u32 = 10;

/// Bounds and try budget for every round of a session.
///
/// Always satisfies `minimum <= maximum` and `max_tries >= 1`, including
/// when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawConfiguration")]
pub struct GameConfiguration {
    /// Smallest possible secret (inclusive).
    minimum: i64,
    /// Largest possible secret (inclusive).
    maximum: i64,
    /// Guesses allowed before the round is lost.
    max_tries: u32,
}

impl GameConfiguration {
    /// Creates a validated configuration.
    #[instrument]
    pub fn new(minimum: i64, maximum: i64, max_tries: i64) -> Result<Self, ConfigError> {
        if minimum > maximum {
            warn!(minimum, maximum, "Rejected inverted range");
            return Err(ConfigError::new(format!(
                "minimum {} is greater than maximum {}",
                minimum, maximum
            )));
        }

        let max_tries = u32::try_from(max_tries)
            .ok()
            .filter(|tries| *tries >= 1)
            .ok_or_else(|| {
                warn!(max_tries, "Rejected try budget");
                ConfigError::new(format!(
                    "tries must be between 1 and {}, got {}",
                    u32::MAX,
                    max_tries
                ))
            })?;

        debug!(minimum, maximum, max_tries, "Configuration accepted");
        Ok(Self {
            minimum,
            maximum,
            max_tries,
        })
    }

    /// Returns true when `value` lies within `[minimum, maximum]`.
    pub fn contains(&self, value: i64) -> bool {
        (self.minimum..=self.maximum).contains(&value)
    }
}

impl Default for GameConfiguration {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM,
            maximum: DEFAULT_MAXIMUM,
            max_tries: DEFAULT_MAX_TRIES,
        }
    }
}

/// Unvalidated wire form of [`GameConfiguration`].
#[derive(Debug, Deserialize)]
struct RawConfiguration {
    minimum: i64,
    maximum: i64,
    max_tries: i64,
}

impl TryFrom<RawConfiguration> for GameConfiguration {
    type Error = ConfigError;

    fn try_from(raw: RawConfiguration) -> Result<Self, Self::Error> {
        Self::new(raw.minimum, raw.maximum, raw.max_tries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = GameConfiguration::default();
        assert_eq!(*config.minimum(), 1);
        assert_eq!(*config.maximum(), 100);
        assert_eq!(*config.max_tries(), 10);
    }

    #[test]
    fn test_single_value_range_is_valid() {
        assert!(GameConfiguration::new(5, 5, 1).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let config: GameConfiguration =
            serde_json::from_str(r#"{"minimum": 5, "maximum": 50, "max_tries": 3}"#)
                .expect("valid configuration");
        assert_eq!(config, GameConfiguration::new(5, 50, 3).expect("valid configuration"));

        let inverted = serde_json::from_str::<GameConfiguration>(
            r#"{"minimum": 10, "maximum": 5, "max_tries": 3}"#,
        );
        assert!(inverted.is_err());

        let no_tries = serde_json::from_str::<GameConfiguration>(
            r#"{"minimum": 1, "maximum": 5, "max_tries": 0}"#,
        );
        assert!(no_tries.is_err());
    }

    #[test]
    fn test_serialize_round_trips_through_validation() {
        let config = GameConfiguration::default();
        let json = serde_json::to_string(&config).expect("serializes");
        let back: GameConfiguration = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, config);
    }

    #[test]
    fn test_tries_beyond_u32_rejected() {
        assert!(GameConfiguration::new(1, 2, i64::from(u32::MAX) + 1).is_err());
    }
}
