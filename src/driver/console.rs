//! Line-based console loop.
//!
//! The driver reads guesses, checks that each is a single letter, and hands
//! it to the engine. It prints whatever the engine reports and never
//! decides anything about the game itself.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::core::GuessLetterAction;
use crate::rules::{GameResult, HangmanEngine};

use super::error::DriverError;

/// Parse a line of input as a guess.
///
/// Accepts exactly one alphabetic character, ignoring surrounding
/// whitespace.
#[must_use]
pub fn parse_guess(line: &str) -> Option<GuessLetterAction> {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_alphabetic() => Some(GuessLetterAction::new(letter)),
        _ => None,
    }
}

/// Interactive front end over any reader and writer.
///
/// ```
/// use std::io::Cursor;
/// use rust_hangman::driver::ConsoleDriver;
/// use rust_hangman::rules::{GameResult, HangmanEngine};
///
/// let mut engine = HangmanEngine::new("hi");
/// let mut driver = ConsoleDriver::new(Cursor::new("h\ni\n"), Vec::new());
///
/// assert_eq!(driver.run(&mut engine).unwrap(), GameResult::Won);
/// ```
#[derive(Debug)]
pub struct ConsoleDriver<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleDriver<R, W> {
    /// Create a driver reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompt for the secret word.
    ///
    /// Returns the trimmed line, which may be empty.
    ///
    /// ## Errors
    ///
    /// [`DriverError::InputClosed`] if input ends before a line is read.
    pub fn read_secret(&mut self) -> Result<String, DriverError> {
        write!(self.output, "Enter the word to guess: ")?;
        self.output.flush()?;
        let line = self.read_line()?;
        Ok(line.trim().to_string())
    }

    /// Play `engine` until the game finishes.
    ///
    /// ## Errors
    ///
    /// - [`DriverError::InputClosed`] if input ends first
    /// - [`DriverError::Io`] on any read or write failure
    pub fn run(&mut self, engine: &mut HangmanEngine) -> Result<GameResult, DriverError> {
        let result = loop {
            if let Some(result) = engine.result() {
                break result;
            }

            writeln!(self.output, "{}", engine.player_view())?;
            writeln!(self.output, "Attempts left: {}", engine.remaining_attempts())?;
            write!(self.output, "Guess a letter: ")?;
            self.output.flush()?;

            let line = self.read_line()?;
            let Some(action) = parse_guess(&line) else {
                debug!(input = line.trim(), "rejected malformed guess");
                writeln!(self.output, "Please enter a single letter.")?;
                writeln!(self.output)?;
                continue;
            };

            match engine.apply_action(action) {
                Ok(outcome) if outcome.correct => {
                    writeln!(self.output, "'{}' is in the word.", outcome.letter)?;
                }
                Ok(outcome) => {
                    writeln!(self.output, "'{}' is not in the word.", outcome.letter)?;
                }
                Err(err) => {
                    debug!(%err, "guess refused");
                    writeln!(self.output, "{err}")?;
                }
            }
            writeln!(self.output)?;
        };

        let state = engine.state();
        writeln!(self.output, "{state}")?;
        writeln!(self.output)?;
        match result {
            GameResult::Won => writeln!(self.output, "Congratulations, you won!")?,
            GameResult::Lost => writeln!(
                self.output,
                "Game over, you lost. The word was: {}",
                state.word_to_guess
            )?,
        }
        self.output.flush()?;

        Ok(result)
    }

    fn read_line(&mut self) -> Result<String, DriverError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(DriverError::InputClosed);
        }
        Ok(line)
    }
}
