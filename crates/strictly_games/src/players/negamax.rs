//! Search-driven player.

use super::Player;
use anyhow::Result;
use strictly_negamax::{GameState, Negamax, SearchConfig};
use tracing::{debug, instrument};

/// Player that picks moves with a [`Negamax`] search.
pub struct NegamaxPlayer<G: GameState> {
    name: String,
    engine: Negamax<G>,
}

impl<G: GameState> NegamaxPlayer<G> {
    /// Creates a search player with the given configuration.
    pub fn new(name: impl Into<String>, config: SearchConfig) -> Self {
        Self {
            name: name.into(),
            engine: Negamax::new(config),
        }
    }
}

impl<G: GameState + Clone> Player<G> for NegamaxPlayer<G> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn next_move(&mut self, state: &G) -> Result<G::Move> {
        // The search explores by apply/undo on its own copy.
        let mut scratch = state.clone();
        let result = self.engine.search(&mut scratch)?;
        debug!(
            best_move = %result.best_move(),
            score = result.score(),
            nodes = result.stats().nodes(),
            "Engine chose move"
        );
        Ok(*result.best_move())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
