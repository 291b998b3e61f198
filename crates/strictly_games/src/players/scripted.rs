//! Player replaying a fixed list of moves.

use super::Player;
use anyhow::Result;
use std::collections::VecDeque;
use strictly_negamax::GameState;
use tracing::debug;

/// Plays the given moves in order, then fails.
///
/// Useful for replaying a recorded game or scripting an opponent in tests.
pub struct ScriptedPlayer<G: GameState> {
    name: String,
    moves: VecDeque<G::Move>,
}

impl<G: GameState> ScriptedPlayer<G> {
    /// Creates a player that will play `moves` in order.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = G::Move>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }
}

impl<G: GameState> Player<G> for ScriptedPlayer<G> {
    fn next_move(&mut self, _state: &G) -> Result<G::Move> {
        let mv = self
            .moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("{} has no scripted moves left", self.name))?;
        debug!(player = %self.name, %mv, "Scripted move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
