//! Game state for a single hangman game.
//!
//! `GameState` is a plain record. It does not enforce its own invariants;
//! the engine is the only thing that mutates it, and the engine keeps:
//!
//! - `guesses` free of duplicates
//! - `incorrect_guesses` an order-preserving subsequence of `guesses`
//! - `phase` moving `Running -> Finished` once and never back
//!
//! Characters of the word that are not alphabetic are never guessable and
//! always count as revealed.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Guessed letters. One entry per alphabet letter at most.
pub type Guesses = SmallVec<[char; 26]>;

/// Incorrect letters. Bounded by the loss limit under standard rules.
pub type IncorrectGuesses = SmallVec<[char; 8]>;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Guesses are being accepted.
    #[default]
    Running,
    /// The word was revealed or the incorrect-guess limit was reached.
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Running => write!(f, "running"),
            Phase::Finished => write!(f, "finished"),
        }
    }
}

/// Full state of a game, including the unmasked word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The secret word, uppercase.
    pub word_to_guess: String,

    /// Every guessed letter, in guess order.
    pub guesses: Guesses,

    /// Guessed letters absent from the word, in guess order.
    pub incorrect_guesses: IncorrectGuesses,

    /// Current phase.
    pub phase: Phase,
}

impl GameState {
    /// Start a game for `word`. The word is uppercased and not validated.
    #[must_use]
    pub fn new(word: &str) -> Self {
        Self {
            word_to_guess: word.to_uppercase(),
            guesses: Guesses::new(),
            incorrect_guesses: IncorrectGuesses::new(),
            phase: Phase::Running,
        }
    }

    /// Check if `letter` has been guessed.
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guesses.contains(&letter)
    }

    /// Check if a character of the word is visible to the player.
    #[must_use]
    pub fn is_revealed(&self, ch: char) -> bool {
        !ch.is_alphabetic() || self.has_guessed(ch)
    }

    /// Check if every character of the word is visible.
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.word_to_guess.chars().all(|ch| self.is_revealed(ch))
    }

    /// Check if the player has won.
    ///
    /// A player wins exactly when the word is fully revealed; this holds
    /// regardless of phase.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.is_fully_revealed()
    }

    /// Check if the game has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// The word with every unrevealed character replaced by `placeholder`.
    #[must_use]
    pub fn masked_word(&self, placeholder: char) -> String {
        self.word_to_guess
            .chars()
            .map(|ch| if self.is_revealed(ch) { ch } else { placeholder })
            .collect()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Word to guess: {}", self.word_to_guess)?;
        writeln!(f, "Guesses: {}", join_letters(&self.guesses))?;
        writeln!(f, "Incorrect guesses: {}", join_letters(&self.incorrect_guesses))?;
        write!(f, "Phase: {}", self.phase)
    }
}

fn join_letters(letters: &[char]) -> String {
    let mut out = String::with_capacity(letters.len() * 2);
    for (i, letter) in letters.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(*letter);
    }
    out
}
