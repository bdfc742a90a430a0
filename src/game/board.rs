//! Board representation and basic operations
//!
//! A board is the ordered sequence of tiles placed so far, read left to right
//! and top to bottom on the 4x4 grid. Boards are immutable values: extending a
//! board produces a new one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on the 4x4 board, and therefore the maximum board length.
pub const BOARD_CELLS: usize = 16;

/// Cells are laid out in rows of this width.
pub const BOARD_WIDTH: usize = 4;

/// A tile in the game. `O` is the neutral tile; `F` and `X` are the two
/// extremes that flank it to spell the forbidden word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    F,
    O,
    X,
}

impl Tile {
    /// All tiles in draw order.
    pub const ALL: [Tile; 3] = [Tile::F, Tile::O, Tile::X];

    pub fn to_char(self) -> char {
        match self {
            Tile::F => 'F',
            Tile::O => 'O',
            Tile::X => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<Tile> {
        match c {
            'F' | 'f' => Some(Tile::F),
            'O' | 'o' | '0' => Some(Tile::O),
            'X' | 'x' => Some(Tile::X),
            _ => None,
        }
    }

    /// Stable index into per-tile count arrays.
    pub fn index(self) -> usize {
        match self {
            Tile::F => 0,
            Tile::O => 1,
            Tile::X => 2,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// An ordered, partial or complete sequence of placed tiles (0 to 16).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board { tiles: Vec::new() }
    }

    /// Parse a board from a string such as `"FOOXXO"`.
    ///
    /// Whitespace is filtered out. Lowercase characters are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTileCharacter`] for any character that is
    /// not an `F`, `O` or `X`, and [`crate::Error::BoardTooLong`] for more than
    /// 16 tiles.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let mut tiles = Vec::new();
        for (position, c) in s.chars().filter(|c| !c.is_whitespace()).enumerate() {
            let tile =
                Tile::from_char(c).ok_or_else(|| crate::Error::InvalidTileCharacter {
                    character: c,
                    position,
                    context: s.to_string(),
                })?;
            tiles.push(tile);
        }
        if tiles.len() > BOARD_CELLS {
            return Err(crate::Error::BoardTooLong {
                got: tiles.len(),
                max: BOARD_CELLS,
                context: s.to_string(),
            });
        }
        Ok(Board { tiles })
    }

    /// Build a board directly from tiles. Panics in debug builds if more than
    /// 16 tiles are supplied; callers own that invariant.
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        debug_assert!(tiles.len() <= BOARD_CELLS);
        Board { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tiles.len() == BOARD_CELLS
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// A new board with `tile` appended. The receiver is left untouched.
    pub fn extended(&self, tile: Tile) -> Board {
        debug_assert!(self.tiles.len() < BOARD_CELLS);
        let mut tiles = Vec::with_capacity(self.tiles.len() + 1);
        tiles.extend_from_slice(&self.tiles);
        tiles.push(tile);
        Board { tiles }
    }

    /// Per-tile counts, indexed by [`Tile::index`].
    pub fn tile_counts(&self) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for tile in &self.tiles {
            counts[tile.index()] += 1;
        }
        counts
    }

    /// The board as a compact string, e.g. `"FOOXXO"`.
    pub fn encode(&self) -> String {
        self.tiles.iter().map(|t| t.to_char()).collect()
    }

    /// The first `len` tiles as a new board.
    pub fn prefix(&self, len: usize) -> Board {
        Board {
            tiles: self.tiles[..len.min(self.tiles.len())].to_vec(),
        }
    }
}

impl fmt::Display for Board {
    /// Renders the board as up to four rows of four tiles, with a partial
    /// final row for incomplete boards.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.tiles.chunks(BOARD_WIDTH).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for tile in chunk {
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let board = Board::from_string("FOOXXO").unwrap();
        assert_eq!(board.len(), 6);
        assert_eq!(board.encode(), "FOOXXO");
    }

    #[test]
    fn test_parse_accepts_lowercase_and_whitespace() {
        let board = Board::from_string(" fo x ").unwrap();
        assert_eq!(board.encode(), "FOX");
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let err = Board::from_string("FOZ").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidTileCharacter { character: 'Z', position: 2, .. }
        ));
    }

    #[test]
    fn test_parse_rejects_over_length() {
        let err = Board::from_string(&"O".repeat(17)).unwrap_err();
        assert!(matches!(err, crate::Error::BoardTooLong { got: 17, .. }));
    }

    #[test]
    fn test_extended_leaves_original_untouched() {
        let board = Board::from_string("FO").unwrap();
        let longer = board.extended(Tile::X);
        assert_eq!(board.encode(), "FO");
        assert_eq!(longer.encode(), "FOX");
    }

    #[test]
    fn test_tile_counts() {
        let board = Board::from_string("FOOXXO").unwrap();
        assert_eq!(board.tile_counts(), [1, 3, 2]);
    }

    #[test]
    fn test_display_renders_partial_rows() {
        let board = Board::from_string("FOXOFX").unwrap();
        assert_eq!(board.to_string(), "FOXO\nFX");
    }
}
