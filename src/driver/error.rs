//! Errors from the console front end.

use thiserror::Error;

/// Why the console loop stopped before the game finished.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Reading input or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before the game was over.
    #[error("input closed before the game finished")]
    InputClosed,
}
