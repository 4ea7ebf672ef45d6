//! # rust-hangman
//!
//! A rules engine for hangman: a hidden word is revealed as the player
//! guesses letters, and eight incorrect guesses end the game in a loss.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the state**: `HangmanEngine` holds the only `GameState`
//!    and is the only thing that mutates it.
//!
//! 2. **Front ends hold no rules**: the console driver and the random player
//!    act through the engine's public operations only.
//!
//! 3. **Illegal states are unrepresentable where cheap**: the phase is an
//!    enum, guesses after the end are refused.
//!
//! ## Modules
//!
//! - `core`: state, actions, configuration, RNG
//! - `rules`: the engine, its trait and its errors
//! - `players`: automated players
//! - `driver`: the interactive console loop

pub mod core;
pub mod driver;
pub mod players;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    AvailableActions, GameRng, GameState, GuessLetterAction, HangmanConfig, Phase,
};

pub use crate::rules::{GameResult, GuessError, GuessOutcome, HangmanEngine, RulesEngine};

pub use crate::players::RandomPlayer;

pub use crate::driver::{ConsoleDriver, DriverError};
