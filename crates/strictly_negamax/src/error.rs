//! Error types for move application and search.

use derive_more::Display;

/// Error raised by a [`GameState`](crate::GameState) when a move cannot be
/// applied or undone.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The move is not among the legal moves of the position.
    #[display("Move {} is not legal in this position", _0)]
    Illegal(String),

    /// The move to undo is not the most recently applied one.
    #[display("Cannot undo {}: last applied move was {}", requested, last)]
    UndoMismatch {
        /// Move the caller asked to undo.
        requested: String,
        /// Move actually on top of the history.
        last: String,
    },

    /// No move has been applied yet.
    #[display("No move to undo")]
    NothingToUndo,
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Creates an [`MoveError::Illegal`] for any displayable move.
    pub fn illegal(mv: impl std::fmt::Display) -> Self {
        Self::Illegal(mv.to_string())
    }
}

/// Error returned by [`Negamax::choose_move`](crate::Negamax::choose_move).
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SearchError {
    /// The position is already decided; there is no move to choose.
    #[display("Cannot search a terminal position")]
    TerminalPosition,

    /// A search must look at least one ply ahead.
    #[display("Search depth must be at least 1")]
    ZeroDepth,

    /// The game rejected a move during search.
    #[display("Game rejected a move during search: {}", _0)]
    Move(MoveError),
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Move(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for SearchError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}
