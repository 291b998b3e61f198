//! D4 symmetry reduction for transposition keys.

use crate::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// A symmetry of the square: reflect (optional) then rotate clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Quarter turns clockwise (0-3).
    pub quarter_turns: u8,
    /// Mirror across the vertical axis before rotating.
    pub reflection: bool,
}

impl D4Transform {
    /// All 8 elements of the group, identity first.
    pub fn all() -> [D4Transform; 8] {
        let mut transforms = [D4Transform {
            quarter_turns: 0,
            reflection: false,
        }; 8];
        for (i, t) in transforms.iter_mut().enumerate() {
            t.quarter_turns = (i / 2) as u8;
            t.reflection = i % 2 == 1;
        }
        transforms
    }

    /// Maps a board index (0-8) to its image under the transform.
    pub fn transform_index(self, index: usize) -> usize {
        let (mut row, mut col) = (index / 3, index % 3);
        if self.reflection {
            col = 2 - col;
        }
        for _ in 0..self.quarter_turns {
            (row, col) = (col, 2 - row);
        }
        row * 3 + col
    }

    /// Applies the transform to a board.
    pub fn apply(self, board: &Board) -> [Square; 9] {
        let mut cells = [Square::Empty; 9];
        for (index, square) in board.squares().iter().enumerate() {
            cells[self.transform_index(index)] = *square;
        }
        cells
    }
}

/// Base-3 encoding of nine cells, first cell most significant.
fn encode(cells: &[Square; 9]) -> u32 {
    cells.iter().fold(0, |acc, square| {
        let digit = match square {
            Square::Empty => 0,
            Square::Occupied(Player::X) => 1,
            Square::Occupied(Player::O) => 2,
        };
        acc * 3 + digit
    })
}

/// Smallest encoding of `board` over all 8 symmetries.
pub fn canonical_encoding(board: &Board) -> u32 {
    D4Transform::all()
        .iter()
        .map(|t| encode(&t.apply(board)))
        .min()
        .unwrap_or_else(|| encode(board.squares()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_transforms_are_permutations() {
        for t in D4Transform::all() {
            let images: HashSet<usize> = (0..9).map(|i| t.transform_index(i)).collect();
            assert_eq!(images.len(), 9, "{t:?}");
            assert_eq!(t.transform_index(4), 4, "center is fixed");
        }
    }

    #[test]
    fn test_all_transforms_distinct() {
        let images: HashSet<Vec<usize>> = D4Transform::all()
            .iter()
            .map(|t| (0..9).map(|i| t.transform_index(i)).collect())
            .collect();
        assert_eq!(images.len(), 8);
    }

    #[test]
    fn test_corners_share_encoding() {
        let corners = ["X........", "..X......", "......X..", "........X"];
        let encodings: HashSet<u32> = corners
            .iter()
            .map(|s| canonical_encoding(&s.parse().unwrap()))
            .collect();
        assert_eq!(encodings.len(), 1);
    }

    #[test]
    fn test_corner_and_edge_differ() {
        let corner: Board = "X........".parse().unwrap();
        let edge: Board = ".X.......".parse().unwrap();
        assert_ne!(canonical_encoding(&corner), canonical_encoding(&edge));
    }
}
