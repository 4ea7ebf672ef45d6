//! Rules of hangman.
//!
//! `HangmanEngine` defines:
//! - Which guesses are legal
//! - How a guess modifies state
//! - When the game is won or lost
//!
//! Front ends call into the engine but never apply game rules themselves.

pub mod engine;
pub mod error;

pub use engine::{GameResult, GuessOutcome, HangmanEngine, RulesEngine};
pub use error::GuessError;
