//! The hangman rules engine.
//!
//! `HangmanEngine` owns the single authoritative [`GameState`] and is the
//! only thing that mutates it. Front ends drive a game through:
//!
//! - `available_actions`: letters not yet guessed, A to Z
//! - `apply_action`: the state transition
//! - `player_view`: the state with unrevealed letters masked
//! - `state` / `load_state`: read or replace the whole state
//!
//! The [`RulesEngine`] trait exposes the same loop generically so players
//! such as [`RandomPlayer`](crate::players::RandomPlayer) need not know
//! which game they are playing.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::action::{AvailableActions, GuessLetterAction};
use crate::core::config::HangmanConfig;
use crate::core::state::{GameState, Phase};

use super::error::GuessError;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Every letter of the word was revealed.
    Won,
    /// The incorrect-guess limit was reached first.
    Lost,
}

impl GameResult {
    /// Check if the game was won.
    #[must_use]
    pub fn is_win(self) -> bool {
        self == GameResult::Won
    }
}

/// What a successful guess did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The letter as recorded (uppercase).
    pub letter: char,
    /// Whether the letter occurs in the word.
    pub correct: bool,
    /// Phase after the guess.
    pub phase: Phase,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty once the game is over
/// - `apply_action`: must leave state untouched when it returns an error
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Input to a state transition.
    type Action: Clone;

    /// Why an action was refused.
    type Error;

    /// Enumerate all legal actions.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Apply an action to the owned state.
    fn apply_action(&mut self, action: &Self::Action) -> Result<(), Self::Error>;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;
}

/// Hangman engine.
#[derive(Clone, Debug)]
pub struct HangmanEngine {
    config: HangmanConfig,
    state: GameState,
}

impl HangmanEngine {
    /// Start a game for `secret_word` under the standard rules.
    ///
    /// The word is uppercased and otherwise accepted as is. A word with no
    /// alphabetic characters is already fully revealed.
    #[must_use]
    pub fn new(secret_word: &str) -> Self {
        Self::with_config(secret_word, HangmanConfig::default())
    }

    /// Start a game with explicit rules.
    #[must_use]
    pub fn with_config(secret_word: &str, config: HangmanConfig) -> Self {
        let state = GameState::new(secret_word);
        info!(
            letters = state.word_to_guess.chars().count(),
            max_incorrect = config.max_incorrect_guesses,
            "new game"
        );
        Self { config, state }
    }

    /// The rules in force.
    #[must_use]
    pub fn config(&self) -> &HangmanConfig {
        &self.config
    }

    /// Replace the current state wholesale.
    ///
    /// No validation is performed; the previous state is discarded.
    pub fn load_state(&mut self, state: GameState) {
        debug!(phase = %state.phase, guesses = state.guesses.len(), "state loaded");
        self.state = state;
    }

    /// The full current state, unmasked word included.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consume the engine, returning its state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Letters not yet guessed, in alphabetical order.
    ///
    /// The iterator borrows the engine; call again to restart.
    pub fn available_actions(&self) -> AvailableActions<'_> {
        AvailableActions::new(&self.state.guesses)
    }

    /// Apply a guess.
    ///
    /// ## Errors
    ///
    /// - [`GuessError::GameFinished`] if the game is already over
    /// - [`GuessError::AlreadyGuessed`] if the letter was guessed before
    ///
    /// Either way the state is left unchanged.
    pub fn apply_action(&mut self, action: GuessLetterAction) -> Result<GuessOutcome, GuessError> {
        let letter = action.normalized();

        if self.state.is_finished() {
            return Err(GuessError::GameFinished);
        }
        if self.state.has_guessed(letter) {
            return Err(GuessError::AlreadyGuessed { letter });
        }

        self.state.guesses.push(letter);

        let correct = self.state.word_to_guess.contains(letter);
        if !correct {
            self.state.incorrect_guesses.push(letter);
        }

        if self.state.is_fully_revealed()
            || self.state.incorrect_guesses.len() >= self.config.max_incorrect_guesses
        {
            self.state.phase = Phase::Finished;
        }

        debug!(
            %letter,
            correct,
            incorrect = self.state.incorrect_guesses.len(),
            phase = %self.state.phase,
            "guess applied"
        );

        if let Some(result) = self.result() {
            info!(?result, guesses = self.state.guesses.len(), "game finished");
        }

        Ok(GuessOutcome {
            letter,
            correct,
            phase: self.state.phase,
        })
    }

    /// A copy of the state safe to show the player.
    ///
    /// The word has every unrevealed letter replaced by the configured
    /// placeholder. Everything else is copied verbatim.
    #[must_use]
    pub fn player_view(&self) -> GameState {
        GameState {
            word_to_guess: self.state.masked_word(self.config.mask_placeholder),
            guesses: self.state.guesses.clone(),
            incorrect_guesses: self.state.incorrect_guesses.clone(),
            phase: self.state.phase,
        }
    }

    /// The outcome, once the game has finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.state.phase {
            Phase::Running => None,
            Phase::Finished if self.state.is_won() => Some(GameResult::Won),
            Phase::Finished => Some(GameResult::Lost),
        }
    }

    /// Incorrect guesses left before the game is lost.
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.config
            .max_incorrect_guesses
            .saturating_sub(self.state.incorrect_guesses.len())
    }
}

impl RulesEngine for HangmanEngine {
    type Action = GuessLetterAction;
    type Error = GuessError;

    fn legal_actions(&self) -> Vec<GuessLetterAction> {
        if self.state.is_finished() {
            return vec![];
        }
        self.available_actions().collect()
    }

    fn apply_action(&mut self, action: &GuessLetterAction) -> Result<(), GuessError> {
        HangmanEngine::apply_action(self, *action).map(|_| ())
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.result()
    }
}
