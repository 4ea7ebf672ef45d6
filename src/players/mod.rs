//! Automated players.
//!
//! Players are written against [`RulesEngine`](crate::rules::RulesEngine)
//! and act only through the engine's legal actions.

pub mod random;

pub use random::RandomPlayer;
