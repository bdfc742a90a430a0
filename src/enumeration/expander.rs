//! Layered expansion of the valid-board state space
//!
//! Enumeration proceeds one generation at a time: every board of length `n`
//! is extended by every tile the supply still allows, and any extension that
//! completes a fox is pruned. Only the current generation is ever held in
//! memory; earlier generations are discarded as soon as the next is built.

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::game::{Board, FoxScanner, Tile, TileSupply};

/// A set of valid boards, all of the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    boards: Vec<Board>,
}

impl Generation {
    /// The empty generation that bootstraps enumeration from nothing.
    pub fn empty() -> Self {
        Generation { boards: Vec::new() }
    }

    /// A generation holding a single starting board.
    pub fn single(board: Board) -> Self {
        Generation {
            boards: vec![board],
        }
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Number of valid boards in this generation.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Length of the boards in this generation, if any.
    pub fn board_len(&self) -> Option<usize> {
        self.boards.first().map(Board::len)
    }

    /// Draw `count` boards uniformly at random, with replacement. Returns an
    /// empty vector when the generation is empty.
    pub fn sample<'a>(&'a self, rng: &mut impl rand::Rng, count: usize) -> Vec<&'a Board> {
        (0..count)
            .filter_map(|_| self.boards.choose(rng))
            .collect()
    }
}

/// Result of expanding a generation by one tile.
#[derive(Debug, Clone)]
pub struct Expansion {
    /// Every valid extension of the input generation.
    pub next: Generation,
    /// How many extensions were discarded for completing a fox.
    pub pruned: usize,
    /// True when no valid extension exists at all.
    pub dead_end: bool,
}

/// Extend every board in `generation` by every legal tile, pruning fox
/// completions.
///
/// The empty generation bootstraps to one singleton board per tile the supply
/// allows. Output order is deterministic: tile draw order first, then the
/// input board order.
pub fn expand(generation: &Generation, supply: &TileSupply) -> Expansion {
    let mut next = Vec::new();
    let mut pruned = 0usize;

    if generation.is_empty() {
        for tile in Tile::ALL {
            if supply.count_of(tile) > 0 {
                next.push(Board::new().extended(tile));
            }
        }
    } else {
        for tile in Tile::ALL {
            for board in generation.boards() {
                if !supply.fits(board, tile) {
                    continue;
                }
                let candidate = board.extended(tile);
                if FoxScanner::has_fox(candidate.tiles()) {
                    pruned += 1;
                } else {
                    next.push(candidate);
                }
            }
        }
    }

    let dead_end = next.is_empty();
    Expansion {
        next: Generation { boards: next },
        pruned,
        dead_end,
    }
}
