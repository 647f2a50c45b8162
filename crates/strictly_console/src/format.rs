//! Text blocks printed by the console session.

use strictly_guessing::{GameConfiguration, ScoreRecord};
use strum::IntoEnumIterator;

use crate::command::Command;

/// Default horizontal rule width in characters.
pub const DEFAULT_RULE_WIDTH: usize = 50;

/// Builds the fixed text blocks of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormatter {
    width: usize,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_RULE_WIDTH)
    }
}

impl TextFormatter {
    /// Creates a formatter whose rules span `width` characters.
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// A rule of `-` characters.
    pub fn horizontal_rule(&self) -> String {
        self.horizontal_rule_with("-")
    }

    /// A rule made of whole repetitions of `base`.
    ///
    /// The repetition count is `width / len(base)`, so a multi-character base
    /// may fall short of the width. An empty base yields an empty rule.
    pub fn horizontal_rule_with(&self, base: &str) -> String {
        let len = base.chars().count();
        if len == 0 {
            return String::new();
        }
        base.repeat(self.width / len)
    }

    /// Rules of play for a configuration.
    pub fn rules(&self, config: &GameConfiguration) -> String {
        format!(
            "Guess a random number between {} and {}!\nYou have {} tries. Good luck!",
            config.minimum(),
            config.maximum(),
            config.max_tries()
        )
    }

    /// Rules framed by horizontal rules, as shown by the `rules` command.
    pub fn rules_block(&self, config: &GameConfiguration) -> String {
        let rule = self.horizontal_rule();
        format!("{rule}\n{}\n{rule}\n", self.rules(config))
    }

    /// Session header: title, rules and decorations.
    pub fn header(&self, title: &str, config: &GameConfiguration) -> String {
        let double = self.horizontal_rule_with("=");
        format!(
            "\n{double}\n{title}\n{double}\n{}\n{}\n\n\n",
            self.rules(config),
            self.horizontal_rule()
        )
    }

    /// Wins, losses and games framed by horizontal rules.
    pub fn record(&self, score: &ScoreRecord) -> String {
        let rule = self.horizontal_rule();
        format!(
            "{rule}\nWins: {}\nLosses: {}\nGames: {}\n{rule}",
            score.wins(),
            score.losses(),
            score.games()
        )
    }

    /// Command-line usage.
    pub fn help(&self) -> String {
        concat!(
            "Usage: RandomNumberGame [options...]\nOptions:",
            " -min MIN Minimum Random Number\n",
            " -max MAX Maximum Random Number\n",
            " -tries TRIES Amount of tries to guess\n",
        )
        .to_string()
    }

    /// The base command vocabulary.
    pub fn commands(&self) -> String {
        let mut text = String::from("Commands:\n");
        for command in Command::iter() {
            text.push_str(&format!(" {command}\n"));
        }
        text.push_str("(+ aliases)\n");
        text
    }
}
