//! Interactive read-evaluate-print loop.
//!
//! The session is a small state machine: the header is printed, guesses are
//! read until a round ends, then the player is asked to play again. Reset
//! returns to the header with a cleared record. End of input finishes the
//! session like `exit`.

use std::io::{BufRead, Write};

use anyhow::Result;
use strictly_guessing::{GameEngine, OutOfRange, Outcome, RandomSource, StdRandom};
use tracing::{debug, info, instrument};

use crate::command::Command;
use crate::format::TextFormatter;

const GUESS_PROMPT: &str = "Enter a guess. ";
const PLAY_AGAIN_PROMPT: &str = "[Play Again?] [Y/N] ";

/// Where the loop goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Header,
    Guessing,
    PlayAgain,
    Finished,
}

/// Drives one console session against a single engine.
#[derive(Debug)]
pub struct Session<I, O, R = StdRandom> {
    engine: GameEngine<R>,
    formatter: TextFormatter,
    input: I,
    output: O,
}

impl<I, O, R> Session<I, O, R>
where
    I: BufRead,
    O: Write,
    R: RandomSource,
{
    /// Creates a session reading from `input` and printing to `output`.
    pub fn new(engine: GameEngine<R>, input: I, output: O) -> Self {
        Self {
            engine,
            formatter: TextFormatter::default(),
            input,
            output,
        }
    }

    /// Replaces the text formatter.
    pub fn with_formatter(mut self, formatter: TextFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Runs until the player exits or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        let mut phase = Phase::Header;
        loop {
            phase = match phase {
                Phase::Header => {
                    let header = self
                        .formatter
                        .header(self.engine.title(), self.engine.config());
                    self.print(&header)?;
                    Phase::Guessing
                }
                Phase::Guessing => self.ask_for_guess()?,
                Phase::PlayAgain => self.prompt_to_play_again()?,
                Phase::Finished => break,
            };
        }
        info!(
            wins = self.engine.wins(),
            losses = self.engine.losses(),
            "Session finished"
        );
        Ok(())
    }

    fn ask_for_guess(&mut self) -> Result<Phase> {
        let Some(input) = self.prompt(GUESS_PROMPT)? else {
            return Ok(Phase::Finished);
        };

        let Ok(value) = input.parse::<i64>() else {
            if Command::is_restart(&input) {
                return Ok(self.restart());
            }
            if Command::is_exit(&input) {
                return Ok(Phase::Finished);
            }
            self.display_command_output(&input)?;
            return Ok(Phase::Guessing);
        };

        match self.submit_guess(value)? {
            Some(outcome) if outcome.ends_round() => Ok(Phase::PlayAgain),
            _ => Ok(Phase::Guessing),
        }
    }

    fn prompt_to_play_again(&mut self) -> Result<Phase> {
        let Some(input) = self.prompt(PLAY_AGAIN_PROMPT)? else {
            return Ok(Phase::Finished);
        };

        if Command::is_restart(&input) {
            return Ok(self.restart());
        }
        if input == "N" || input == "n" || Command::is_exit(&input) {
            return Ok(Phase::Finished);
        }
        if input == "Y" || input == "y" {
            return Ok(Phase::Guessing);
        }
        self.display_command_output(&input)?;
        Ok(Phase::PlayAgain)
    }

    /// Evaluates a guess and prints the feedback.
    ///
    /// Returns `None` when the guess was out of range.
    #[instrument(skip(self))]
    fn submit_guess(&mut self, value: i64) -> Result<Option<Outcome>> {
        match self.engine.guess_validated(value) {
            Ok(outcome) => {
                self.display_result(outcome)?;
                Ok(Some(outcome))
            }
            Err(err) => {
                debug!(%err, "Guess rejected");
                let message = match err {
                    OutOfRange::TooLow { .. } => "[Below minimum value! Try again.]",
                    OutOfRange::TooHigh { .. } => "[Above maximum value! Try again.]",
                };
                self.print(message)?;
                Ok(None)
            }
        }
    }

    fn display_result(&mut self, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Higher => {
                let line = format!(" [Higher] [Tries Left: {}]", self.engine.tries_left());
                self.print(&line)
            }
            Outcome::Lower => {
                let line = format!(" [Lower] [Tries Left: {}]", self.engine.tries_left());
                self.print(&line)
            }
            Outcome::Win => {
                self.print("\nYou won!")?;
                self.print(&self.formatter.record(self.engine.score()))
            }
            Outcome::Loss => {
                self.print("\nYou lost!")?;
                self.print(&self.formatter.record(self.engine.score()))
            }
            Outcome::Unknown => Ok(()),
        }
    }

    /// Text for a meta-command, or `None` when the input matches nothing.
    ///
    /// Exit and reset are control flow, not output, and resolve to `None`.
    pub fn command_output(&self, input: &str) -> Option<String> {
        let config = self.engine.config();
        match Command::parse(input)? {
            Command::Help => Some(self.formatter.commands()),
            Command::Rules => Some(self.formatter.rules_block(config)),
            Command::Record => Some(self.formatter.record(self.engine.score())),
            Command::Game => Some(self.engine.title().to_string()),
            Command::Exit | Command::Reset => None,
        }
    }

    fn display_command_output(&mut self, input: &str) -> Result<()> {
        match self.command_output(input) {
            Some(text) => self.print(&text),
            None => {
                debug!(input, "Ignored unrecognized input");
                Ok(())
            }
        }
    }

    fn restart(&mut self) -> Phase {
        info!("Session restarted");
        self.engine.reset();
        Phase::Header
    }

    /// Prints `text` followed by a newline.
    fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints a prompt and reads one line, or `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            info!("End of input");
            return Ok(None);
        }
        // Invalid UTF-8 is replaced, so the line resolves as an unknown command.
        let line = String::from_utf8_lossy(&bytes);
        let trimmed = line
            .strip_suffix('\n')
            .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
            .unwrap_or(&line);
        Ok(Some(trimmed.to_string()))
    }
}

impl<I, O, R> Session<I, O, R> {
    /// The engine driven by this session.
    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    /// The output sink.
    pub fn output(&self) -> &O {
        &self.output
    }
}
