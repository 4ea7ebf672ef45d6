//! Uniform random player.

use tracing::debug;

use crate::core::GameRng;
use crate::rules::{GameResult, RulesEngine};

/// Plays by choosing uniformly among the legal actions.
///
/// Deterministic for a given seed, which makes it usable as a scripted
/// front end in tests.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a player with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Pick a legal action, or `None` if there is none.
    pub fn choose<E: RulesEngine>(&mut self, engine: &E) -> Option<E::Action> {
        let actions = engine.legal_actions();
        self.rng.choose(&actions).cloned()
    }

    /// Play the game to the end.
    ///
    /// Returns `Ok(None)` if the game stalls with no legal action left
    /// before reaching a result.
    ///
    /// ## Errors
    ///
    /// Propagates the first error the engine reports.
    pub fn play_out<E: RulesEngine>(&mut self, engine: &mut E) -> Result<Option<GameResult>, E::Error> {
        let mut moves = 0usize;

        loop {
            if let Some(result) = engine.is_terminal() {
                debug!(?result, moves, "random playout finished");
                return Ok(Some(result));
            }

            let Some(action) = self.choose(engine) else {
                debug!(moves, "random playout stalled");
                return Ok(None);
            };

            engine.apply_action(&action)?;
            moves += 1;
        }
    }
}
