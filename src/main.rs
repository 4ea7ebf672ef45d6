//! Interactive hangman on the terminal.
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`).

use std::io;

use anyhow::{Context, Result};
use rust_hangman::driver::ConsoleDriver;
use rust_hangman::rules::HangmanEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut driver = ConsoleDriver::new(stdin.lock(), io::stdout());

    let secret = driver.read_secret().context("failed to read the secret word")?;
    let mut engine = HangmanEngine::new(&secret);
    let result = driver.run(&mut engine).context("game aborted")?;
    info!(?result, "game over");

    Ok(())
}
