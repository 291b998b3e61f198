//! Parse errors for positions, boards and players.

use derive_more::Display;

/// Error raised when text cannot be read as a tic-tac-toe value.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    /// The input is not an integer.
    #[display("'{}' is not a move number", _0)]
    NotANumber(String),

    /// The move number is outside 1-9.
    #[display("Move number {} is outside 1-9", _0)]
    OutOfRange(i64),

    /// A board needs exactly 9 cells.
    #[display("Board must have 9 cells, found {}", _0)]
    BoardLength(usize),

    /// A board cell is not `X`, `O` or `.`.
    #[display("Invalid cell '{}' (expected X, O or .)", _0)]
    InvalidCell(char),

    /// The input names no player.
    #[display("Unknown player '{}' (expected X or O)", _0)]
    UnknownPlayer(String),
}

impl std::error::Error for ParseError {}
