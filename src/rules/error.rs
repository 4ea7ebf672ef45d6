//! Errors reported by the rules engine.

use thiserror::Error;

/// A guess the engine refused. The game state is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The letter is already in the list of guesses.
    #[error("Letter '{letter}' has already been guessed.")]
    AlreadyGuessed {
        /// The normalized letter.
        letter: char,
    },

    /// The game has already finished.
    #[error("The game is already finished.")]
    GameFinished,
}
