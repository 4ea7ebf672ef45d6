//! Core game types: state, actions, configuration, RNG.
//!
//! These are plain values. All rule enforcement lives in [`crate::rules`].

pub mod action;
pub mod config;
pub mod rng;
pub mod state;

pub use action::{AvailableActions, GuessLetterAction};
pub use config::HangmanConfig;
pub use rng::GameRng;
pub use state::{GameState, Phase};
