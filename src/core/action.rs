//! Guess actions and the enumeration of legal guesses.
//!
//! A guess is a single letter. The engine normalizes it to uppercase but
//! does not otherwise validate it; front ends reject anything that is not a
//! single alphabetic character before building an action.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// The letters offered by [`AvailableActions`], in order.
pub const ALPHABET: RangeInclusive<char> = 'A'..='Z';

/// Uppercase a single letter.
///
/// Letters whose uppercase form is more than one character (e.g. `ß`)
/// are returned unchanged.
#[must_use]
pub fn normalize_letter(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

/// Guess a single letter of the hidden word.
///
/// ```
/// use rust_hangman::core::GuessLetterAction;
///
/// let guess = GuessLetterAction::new('e');
/// assert_eq!(guess.letter(), 'e');
/// assert_eq!(guess.normalized(), 'E');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessLetterAction {
    /// The guessed letter as supplied by the caller.
    pub letter: char,
}

impl GuessLetterAction {
    /// Create a guess for `letter`.
    #[must_use]
    pub const fn new(letter: char) -> Self {
        Self { letter }
    }

    /// The letter as supplied.
    #[must_use]
    pub const fn letter(self) -> char {
        self.letter
    }

    /// The letter in the form it is recorded in the game state.
    #[must_use]
    pub fn normalized(self) -> char {
        normalize_letter(self.letter)
    }
}

impl fmt::Display for GuessLetterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guess({})", self.letter)
    }
}

/// Lazy iterator over the letters of [`ALPHABET`] not yet guessed.
///
/// A clone continues independently from the same position. A fresh call to
/// [`HangmanEngine::available_actions`](crate::rules::HangmanEngine::available_actions)
/// starts again from `A`.
#[derive(Clone, Debug)]
pub struct AvailableActions<'a> {
    letters: RangeInclusive<char>,
    guesses: &'a [char],
}

impl<'a> AvailableActions<'a> {
    /// Enumerate the alphabet, skipping anything in `guesses`.
    #[must_use]
    pub fn new(guesses: &'a [char]) -> Self {
        Self {
            letters: ALPHABET,
            guesses,
        }
    }
}

impl Iterator for AvailableActions<'_> {
    type Item = GuessLetterAction;

    fn next(&mut self) -> Option<Self::Item> {
        let guesses = self.guesses;
        self.letters
            .by_ref()
            .find(|letter| !guesses.contains(letter))
            .map(GuessLetterAction::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.letters.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_letter() {
        assert_eq!(normalize_letter('a'), 'A');
        assert_eq!(normalize_letter('Z'), 'Z');
        assert_eq!(normalize_letter('ä'), 'Ä');
        assert_eq!(normalize_letter('!'), '!');
        // Multi-character uppercase forms stay as they are
        assert_eq!(normalize_letter('ß'), 'ß');
    }

    #[test]
    fn test_action_normalized() {
        let action = GuessLetterAction::new('q');
        assert_eq!(action.letter(), 'q');
        assert_eq!(action.normalized(), 'Q');
        assert_eq!(format!("{}", action), "Guess(q)");
    }

    #[test]
    fn test_available_actions_full_alphabet() {
        let letters: String = AvailableActions::new(&[]).map(|a| a.letter).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn test_available_actions_skips_guesses() {
        let guesses = ['C', 'A', '!', 'Z'];
        let letters: String = AvailableActions::new(&guesses).map(|a| a.letter).collect();
        assert_eq!(letters, "BDEFGHIJKLMNOPQRSTUVWXY");
    }

    #[test]
    fn test_available_actions_clone_is_independent() {
        let mut actions = AvailableActions::new(&['A']);
        assert_eq!(actions.next(), Some(GuessLetterAction::new('B')));

        let mut copy = actions.clone();
        assert_eq!(copy.next(), Some(GuessLetterAction::new('C')));
        assert_eq!(actions.next(), Some(GuessLetterAction::new('C')));
    }

    #[test]
    fn test_action_serialization() {
        let action = GuessLetterAction::new('K');
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: GuessLetterAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
