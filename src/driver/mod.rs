//! Console front end.
//!
//! Depends only on the engine's public operations, so it can be replaced by
//! any other front end without touching the rules.

pub mod console;
pub mod error;

pub use console::{parse_guess, ConsoleDriver};
pub use error::DriverError;
