//! Launch settings derived from command-line flags.

use std::collections::HashSet;

use derive_getters::Getters;
use strictly_guessing::{
    ConfigError, DEFAULT_MAX_TRIES, DEFAULT_MAXIMUM, DEFAULT_MINIMUM, GameConfiguration,
};
use tracing::{debug, info, instrument};

use crate::flags::{self, FlagMap};

/// Flags that take a value or must not be split into letters.
pub const WORD_FLAGS: [&str; 5] = ["min", "max", "tries", "help", "-help"];

/// What the binary should do once arguments are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct LaunchSettings {
    /// Bounds and try budget, or `None` when only help is shown.
    configuration: Option<GameConfiguration>,
}

impl LaunchSettings {
    /// Parses process arguments (without the program name).
    #[instrument(skip_all)]
    pub fn from_args<S: AsRef<str>>(arguments: &[S]) -> Result<Self, ConfigError> {
        let word_flags: HashSet<&str> = WORD_FLAGS.into_iter().collect();
        Self::from_flags(&flags::associate(arguments, &word_flags))
    }

    /// Builds settings from associated flags.
    ///
    /// Missing or non-integer values fall back to the defaults. The
    /// configuration is only validated when the game will actually run.
    #[instrument(skip_all)]
    pub fn from_flags(flags: &FlagMap) -> Result<Self, ConfigError> {
        if flags.contains("help") || flags.contains("-help") {
            info!("Help requested");
            return Ok(Self { configuration: None });
        }

        let minimum = flags.parse("min").unwrap_or(DEFAULT_MINIMUM);
        let maximum = flags.parse("max").unwrap_or(DEFAULT_MAXIMUM);
        let tries = flags.parse("tries").unwrap_or(i64::from(DEFAULT_MAX_TRIES));
        debug!(minimum, maximum, tries, "Flags resolved");

        Ok(Self {
            configuration: Some(GameConfiguration::new(minimum, maximum, tries)?),
        })
    }

    /// Print usage and exit without playing.
    pub fn show_help(&self) -> bool {
        self.configuration.is_none()
    }
}
