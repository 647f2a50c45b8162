//! Meta-command vocabulary.
//!
//! Non-numeric input is matched case-sensitively against the aliases of
//! each command. Unmatched input is ignored.

use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{instrument, trace};

/// A command the player can type instead of a guess.
///
/// Declaration order is the order shown by the `help` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    /// End the session.
    Exit,
    /// Clear the record and start over from the header.
    Reset,
    /// List the commands.
    Help,
    /// Show the rules.
    Rules,
    /// Show wins, losses and games.
    Record,
    /// Show the game title.
    Game,
}

impl Command {
    /// Every spelling that selects this command.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Exit => &["exit", ":exit"],
            Self::Reset => &["reset", "restart"],
            Self::Help => &["help", "commands"],
            Self::Rules => &["rules", "directions", "how to play", "instructions"],
            Self::Record => &["record", "games", "wins", "losses"],
            Self::Game => &["game", "title", "name"],
        }
    }

    /// Resolves raw input to a command.
    #[instrument]
    pub fn parse(input: &str) -> Option<Self> {
        let command = Self::iter().find(|command| command.aliases().contains(&input));
        trace!(?command, "Resolved input");
        command
    }

    /// Returns true for the exit aliases.
    pub fn is_exit(input: &str) -> bool {
        Self::Exit.aliases().contains(&input)
    }

    /// Returns true for the reset aliases.
    pub fn is_restart(input: &str) -> bool {
        Self::Reset.aliases().contains(&input)
    }
}
