//! Board positions, numbered 1-9 row-major.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Positions are numbered 1 to 9 in row-major order:
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (1)
    TopLeft,
    /// Top-center (2)
    TopCenter,
    /// Top-right (3)
    TopRight,
    /// Middle-left (4)
    MiddleLeft,
    /// Center (5)
    Center,
    /// Middle-right (6)
    MiddleRight,
    /// Bottom-left (7)
    BottomLeft,
    /// Bottom-center (8)
    BottomCenter,
    /// Bottom-right (9)
    BottomRight,
}

impl Position {
    /// All 9 positions in move order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for messages.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Zero-based board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Move number (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Creates a position from a zero-based board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from its move number.
    ///
    /// # Errors
    /// Returns [`ParseError::OutOfRange`] unless `number` is in 1-9.
    #[instrument]
    pub fn from_number(number: u8) -> Result<Self, ParseError> {
        usize::from(number)
            .checked_sub(1)
            .and_then(Self::from_index)
            .ok_or(ParseError::OutOfRange(number.into()))
    }

    /// Iterates over the positions in move order.
    pub fn iter_all() -> impl Iterator<Item = Position> {
        <Position as IntoEnumIterator>::iter()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number: i64 = trimmed
            .parse()
            .map_err(|_| ParseError::NotANumber(trimmed.to_string()))?;
        u8::try_from(number)
            .map_err(|_| ParseError::OutOfRange(number))
            .and_then(Self::from_number)
    }
}
