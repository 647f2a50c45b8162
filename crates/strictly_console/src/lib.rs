//! Strictly Console - interactive front end for the guessing game
//!
//! # Architecture
//!
//! - **Flags**: ad-hoc `-flag value` association ([`flags::associate`])
//! - **Settings**: game configuration and help switch from flags ([`LaunchSettings`])
//! - **Commands**: meta-command vocabulary typed instead of a guess ([`Command`])
//! - **Formatting**: rules, record, help and decorations ([`TextFormatter`])
//! - **Session**: the prompt loop over one engine ([`Session`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
pub mod flags;
mod format;
mod session;
mod settings;

use std::io::{BufRead, Write};

use strictly_guessing::{GameEngine, RandomSource};
use tracing::{info, instrument};

pub use command::Command;
pub use flags::FlagMap;
pub use format::{DEFAULT_RULE_WIDTH, TextFormatter};
pub use session::Session;
pub use settings::{LaunchSettings, WORD_FLAGS};

/// Parses `arguments`, then shows help or plays a session.
///
/// `arguments` excludes the program name.
#[instrument(skip_all, fields(arguments = arguments.len()))]
pub fn run<S, I, O, R>(arguments: &[S], input: I, mut output: O, rng: R) -> anyhow::Result<()>
where
    S: AsRef<str>,
    I: BufRead,
    O: Write,
    R: RandomSource,
{
    let settings = LaunchSettings::from_args(arguments)?;
    let formatter = TextFormatter::default();

    let Some(configuration) = *settings.configuration() else {
        info!("Showing help");
        writeln!(output, "{}", formatter.help())?;
        return Ok(());
    };

    let engine = GameEngine::new(configuration, rng);
    Session::new(engine, input, output)
        .with_formatter(formatter)
        .run()
}
