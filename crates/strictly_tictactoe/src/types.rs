//! Core domain types for tic-tac-toe.

use crate::{ParseError, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (crosses).
    X,
    /// Player O (circles).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Glyph drawn for this player's marks.
    pub fn glyph(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(ParseError::UnknownPlayer(other.to_string())),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Glyph drawn for this square.
    pub fn glyph(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.glyph(),
        }
    }

    /// Reads a square from its glyph.
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '.' | ' ' | '-' => Some(Square::Empty),
            'x' | 'X' => Some(Square::Occupied(Player::X)),
            'o' | 'O' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in move order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter_all()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board with empty squares shown by their move number,
    /// for prompting a human.
    pub fn numbered(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => char::from(b'1' + pos as u8),
                    Square::Occupied(player) => player.glyph(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders three rows of glyphs separated by spaces.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = cells.iter().map(|s| s.glyph().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Parses nine glyphs (`X`, `O`, `.`) in row-major order; whitespace and
/// `|` separators are ignored.
impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if cells.len() != 9 {
            return Err(ParseError::BoardLength(cells.len()));
        }
        let mut board = Board::new();
        for (pos, c) in Position::iter_all().zip(cells) {
            let square = Square::from_glyph(c).ok_or(ParseError::InvalidCell(c))?;
            board.set(pos, square);
        }
        Ok(board)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "XO. .X. ..O".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::O));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::O));
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
    }

    #[test]
    fn test_parse_board_errors() {
        assert_eq!("XO".parse::<Board>(), Err(ParseError::BoardLength(2)));
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(ParseError::InvalidCell('Z'))
        );
        // Zero is not a mark.
        assert_eq!(
            "XX0000000".parse::<Board>(),
            Err(ParseError::InvalidCell('0'))
        );
    }

    #[test]
    fn test_display_glyphs() {
        let board: Board = "X.O|...|..X".parse().unwrap();
        assert_eq!(board.to_string(), "X . O\n. . .\n. . X");
    }

    #[test]
    fn test_numbered_display() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.numbered(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_empty_positions_in_order() {
        let board: Board = "XO.X.O...".parse().unwrap();
        let numbers: Vec<u8> = board.empty_positions().iter().map(|p| p.number()).collect();
        assert_eq!(numbers, vec![3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_player_parse() {
        assert_eq!("x".parse::<Player>(), Ok(Player::X));
        assert_eq!(" O ".parse::<Player>(), Ok(Player::O));
        assert!("z".parse::<Player>().is_err());
        assert_eq!(Player::X.opponent(), Player::O);
    }
}
