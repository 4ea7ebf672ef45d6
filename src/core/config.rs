//! Rule parameters for a hangman game.
//!
//! The defaults are the standard rules: eight incorrect guesses end the
//! game, and unrevealed letters are shown as `_`.

use serde::{Deserialize, Serialize};

/// Number of incorrect guesses that ends the game in a loss.
pub const DEFAULT_MAX_INCORRECT_GUESSES: usize = 8;

/// Character shown in place of an unrevealed letter.
pub const DEFAULT_MASK_PLACEHOLDER: char = '_';

/// Configuration for a [`HangmanEngine`](crate::rules::HangmanEngine).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HangmanConfig {
    /// Incorrect guesses allowed before the game is lost (inclusive).
    pub max_incorrect_guesses: usize,

    /// Placeholder used by the masked player view.
    pub mask_placeholder: char,
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            max_incorrect_guesses: DEFAULT_MAX_INCORRECT_GUESSES,
            mask_placeholder: DEFAULT_MASK_PLACEHOLDER,
        }
    }
}

impl HangmanConfig {
    /// Create a config with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the incorrect-guess limit.
    #[must_use]
    pub fn with_max_incorrect_guesses(mut self, max: usize) -> Self {
        self.max_incorrect_guesses = max;
        self
    }

    /// Set the mask placeholder.
    #[must_use]
    pub fn with_mask_placeholder(mut self, placeholder: char) -> Self {
        self.mask_placeholder = placeholder;
        self
    }
}
