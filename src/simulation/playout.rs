//! Single random playouts
//!
//! A playout shuffles the full tile bag and places tiles one at a time. The
//! game is lost at the first prefix that contains a fox, and won if all 16
//! tiles go down fox-free.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::game::{BOARD_CELLS, Board, FoxScanner, Tile, TileSupply};

/// Outcome of one random playout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutResult {
    /// True when all 16 tiles were placed without a fox.
    pub won: bool,
    /// Tiles placed when the game ended: 16 on a win, the losing prefix
    /// length otherwise. Always in 1..=16.
    pub tiles_placed: usize,
    /// The final board: the full board on a win, the losing prefix on a loss.
    pub board: Board,
}

/// Shuffle the full tile bag into a random placement order.
///
/// Shuffles the concrete 16-token list with Fisher-Yates, so every ordering
/// of the multiset is equally likely.
pub fn deal(rng: &mut impl Rng, supply: &TileSupply) -> Vec<Tile> {
    let mut tokens = supply.token_list();
    tokens.shuffle(rng);
    tokens
}

/// Walk the prefixes of a dealt tile sequence until a fox appears or the
/// sequence is exhausted.
pub fn walk(sequence: &[Tile]) -> PlayoutResult {
    debug_assert_eq!(sequence.len(), BOARD_CELLS);
    for placed in 1..=sequence.len() {
        if FoxScanner::has_fox(&sequence[..placed]) {
            return PlayoutResult {
                won: false,
                tiles_placed: placed,
                board: Board::from_tiles(sequence[..placed].to_vec()),
            };
        }
    }
    PlayoutResult {
        won: true,
        tiles_placed: sequence.len(),
        board: Board::from_tiles(sequence.to_vec()),
    }
}

/// Play one full random game.
pub fn play_once(rng: &mut impl Rng, supply: &TileSupply) -> PlayoutResult {
    walk(&deal(rng, supply))
}
