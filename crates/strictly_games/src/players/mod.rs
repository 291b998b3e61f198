//! Player trait and implementations.

mod human;
mod negamax;
mod scripted;

pub use human::HumanPlayer;
pub use negamax::NegamaxPlayer;
pub use scripted::ScriptedPlayer;

use anyhow::Result;
use strictly_negamax::GameState;

/// Trait for players that can make moves.
pub trait Player<G: GameState> {
    /// Gets a move from this player.
    ///
    /// Only the orchestrator applies moves; players see the state read-only.
    fn next_move(&mut self, state: &G) -> Result<G::Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
