//! Strictly Tic-Tac-Toe - pure game logic
//!
//! The 3x3 game as a [`GameState`](strictly_negamax::GameState): moves are
//! the positions 1-9, row-major, and a position is lost for the player to
//! move once the opponent owns a complete line.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
pub mod rules;
pub mod symmetry;
mod types;

pub use error::ParseError;
pub use game::{BoardKey, TicTacToe};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
