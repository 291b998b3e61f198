//! Tic-tac-toe as a searchable [`GameState`].

use crate::rules::{check_winner, has_line, is_draw};
use crate::symmetry::canonical_encoding;
use crate::{Board, GameStatus, Player, Position, Square};
use serde::{Deserialize, Serialize};
use strictly_negamax::{GameState, MoveError};
use tracing::{instrument, warn};

/// Transposition key: symmetry-reduced board plus the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardKey {
    /// Smallest base-3 board encoding over the 8 board symmetries.
    pub encoding: u32,
    /// Player to move.
    pub to_move: Player,
}

/// A tic-tac-toe game in progress.
///
/// Moves are applied in place; every applied move is recorded so that
/// [`undo_move`](GameState::undo_move) can only revert the latest one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToe {
    board: Board,
    to_move: Player,
    history: Vec<Position>,
}

impl TicTacToe {
    /// Creates an empty board with `first_player` to move.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first_player,
            history: Vec::new(),
        }
    }

    /// Starts from an arbitrary board with `to_move` to play.
    ///
    /// The mark counts are not checked, so test positions need not be
    /// reachable from the empty board. The history starts empty.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the moves applied since construction.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Player owning a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(&self.board)
    }

    /// Whether the game is won, drawn, or still going.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if is_draw(&self.board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

impl std::fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl GameState for TicTacToe {
    type Move = Position;
    type Key = BoardKey;

    fn legal_moves(&self) -> Vec<Position> {
        self.board.empty_positions()
    }

    fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if !self.board.is_empty(pos) {
            warn!(%pos, "Square is already occupied");
            return Err(MoveError::illegal(pos));
        }
        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    fn undo_move(&mut self, pos: Position) -> Result<(), MoveError> {
        match self.history.last() {
            None => Err(MoveError::NothingToUndo),
            Some(last) if *last != pos => Err(MoveError::UndoMismatch {
                requested: pos.to_string(),
                last: last.to_string(),
            }),
            Some(_) => {
                self.history.pop();
                self.board.set(pos, Square::Empty);
                self.to_move = self.to_move.opponent();
                Ok(())
            }
        }
    }

    fn is_lost_for_mover(&self) -> bool {
        has_line(&self.board, self.to_move.opponent())
    }

    fn canonical_key(&self) -> BoardKey {
        BoardKey {
            encoding: canonical_encoding(&self.board),
            to_move: self.to_move,
        }
    }
}
