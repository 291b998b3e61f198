use crate::MoveError;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Signed evaluation from the perspective of the player to move.
pub type Score = i32;

/// Score of a position whose mover has already lost.
pub const LOSS_SCORE: Score = -100;

/// A two-player, zero-sum, perfect-information game searchable by
/// [`Negamax`](crate::Negamax).
///
/// The state is mutated in place: the engine explores by calling
/// [`apply_move`](Self::apply_move) and then [`undo_move`](Self::undo_move)
/// with the same move, always in LIFO order.
pub trait GameState {
    /// A move, meaningful only to the state that listed it as legal.
    type Move: Copy + Eq + Hash + Debug + Display;

    /// Transposition key identifying a position and its player to move.
    type Key: Clone + Eq + Hash + Debug;

    /// Returns all moves available to the player to move.
    ///
    /// The order is used as the tie-break when several moves score equally.
    /// An empty list means no moves remain.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays `mv` for the player to move and passes the turn.
    ///
    /// # Errors
    /// Returns [`MoveError::Illegal`] if `mv` is not in
    /// [`legal_moves`](Self::legal_moves). The state is unchanged on error.
    fn apply_move(&mut self, mv: Self::Move) -> Result<(), MoveError>;

    /// Reverts the most recent [`apply_move`](Self::apply_move), restoring
    /// the position and the player to move.
    ///
    /// # Errors
    /// Returns [`MoveError::NothingToUndo`] or [`MoveError::UndoMismatch`]
    /// when `mv` is not the last applied move.
    fn undo_move(&mut self, mv: Self::Move) -> Result<(), MoveError>;

    /// True iff the opponent of the player to move has already won.
    fn is_lost_for_mover(&self) -> bool;

    /// True iff no legal move remains or the mover has lost.
    fn is_terminal(&self) -> bool {
        self.is_lost_for_mover() || self.legal_moves().is_empty()
    }

    /// Evaluation of a terminal or cut-off position for the player to move.
    ///
    /// Defaults to [`LOSS_SCORE`] for a lost position and zero otherwise.
    fn heuristic_score(&self) -> Score {
        if self.is_lost_for_mover() {
            LOSS_SCORE
        } else {
            0
        }
    }

    /// Key under which the position is cached in the transposition table.
    ///
    /// Rule-equivalent positions with the same player to move must produce
    /// equal keys.
    fn canonical_key(&self) -> Self::Key;
}
