//! Tile supply accounting
//!
//! The supply fixes how many of each tile exist for one full game. Legal
//! placements never push a board past its per-tile maxima, and the supply also
//! determines how many distinct arrangements of the remaining tiles exist.

use serde::{Deserialize, Serialize};

use super::board::{BOARD_CELLS, Board, Tile};
use crate::utils::multinomial;

/// Total count of each tile available across a full game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSupply {
    counts: [usize; 3],
}

impl TileSupply {
    /// The shipped game: 5 `F`, 6 `O`, 5 `X` over 16 cells.
    pub fn standard() -> Self {
        TileSupply { counts: [5, 6, 5] }
    }

    /// Create a supply with explicit per-tile counts (indexed as `F`, `O`, `X`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidSupply`] if the counts do not sum to the
    /// number of board cells.
    pub fn new(counts: [usize; 3]) -> Result<Self, crate::Error> {
        let total: usize = counts.iter().sum();
        if total != BOARD_CELLS {
            return Err(crate::Error::InvalidSupply {
                message: format!("tile counts sum to {total}, expected {BOARD_CELLS}"),
            });
        }
        Ok(TileSupply { counts })
    }

    /// Maximum count of a single tile.
    pub fn count_of(&self, tile: Tile) -> usize {
        self.counts[tile.index()]
    }

    /// True iff appending `tile` to `board` keeps every tile within its supply.
    pub fn fits(&self, board: &Board, tile: Tile) -> bool {
        board.tile_counts()[tile.index()] < self.counts[tile.index()]
    }

    /// Counts of each tile still undrawn after `board`, indexed by [`Tile::index`].
    pub fn remaining(&self, board: &Board) -> [usize; 3] {
        let placed = board.tile_counts();
        let mut left = [0usize; 3];
        for i in 0..3 {
            left[i] = self.counts[i].saturating_sub(placed[i]);
        }
        left
    }

    /// Number of distinct arrangements of the tiles remaining after `board`:
    /// the multinomial coefficient of the remaining per-tile counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use foxfinder::game::{Board, TileSupply};
    ///
    /// let supply = TileSupply::standard();
    /// assert_eq!(supply.arrangements_of_remaining(&Board::new()), 2_018_016);
    /// ```
    pub fn arrangements_of_remaining(&self, board: &Board) -> u64 {
        multinomial(&self.remaining(board))
    }

    /// The full multiset of tiles as a concrete token list, in `F` `O` `X`
    /// order. Shuffling this list gives an unbiased random game.
    pub fn token_list(&self) -> Vec<Tile> {
        let mut tokens = Vec::with_capacity(BOARD_CELLS);
        for tile in Tile::ALL {
            for _ in 0..self.counts[tile.index()] {
                tokens.push(tile);
            }
        }
        tokens
    }
}
