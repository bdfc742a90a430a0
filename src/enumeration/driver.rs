//! Enumeration driver
//!
//! Walks the expansion generation by generation from a starting state up to a
//! target length, either by running the loop or by serving a precomputed
//! entry for the well-known shallow starts. Both paths report the same
//! statistics; the cache is purely a shortcut.

use serde::Serialize;

use super::cache::{self, CachedStats};
use super::expander::{Generation, expand};
use crate::game::{BOARD_CELLS, Board, FoxScanner, TileSupply};

/// Outcome of a full expansion run.
#[derive(Debug, Clone)]
pub struct EnumerationResult {
    /// All surviving boards at the target length. Empty on a dead end.
    pub final_generation: Generation,
    /// Extensions pruned across every step.
    pub total_pruned: u64,
    /// Board length at which every extension foxed, if enumeration died out.
    pub dead_end_at: Option<usize>,
    /// Arrangements of the remaining tile bag; computed for full-board runs.
    pub total_arrangements: Option<u64>,
    /// Tiles the run was asked to place beyond the starting state.
    pub tiles_remaining: usize,
}

/// Either a fully expanded result or a cached shallow-start entry.
///
/// The two variants are the strategy branch for shallow starts: a cached
/// entry carries the same statistics a full run would produce.
#[derive(Debug, Clone)]
pub enum EnumerationOutcome {
    Expanded(EnumerationResult),
    Cached(CachedStats),
}

/// The four headline statistics of a full-length enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub total_arrangements: u64,
    pub tiles_remaining: usize,
    pub valid: u64,
    pub pruned: u64,
}

impl EnumerationOutcome {
    /// True when enumeration hit a depth with no valid extension.
    pub fn dead_end(&self) -> bool {
        match self {
            EnumerationOutcome::Expanded(result) => result.dead_end_at.is_some(),
            EnumerationOutcome::Cached(_) => false,
        }
    }

    /// Headline statistics, available for full-board runs and every cached
    /// entry. `None` for partial-depth runs and dead ends, where the
    /// theoretical arrangement total is not meaningful.
    pub fn summary(&self) -> Option<StatsSummary> {
        match self {
            EnumerationOutcome::Expanded(result) => {
                result.total_arrangements.map(|total_arrangements| StatsSummary {
                    total_arrangements,
                    tiles_remaining: result.tiles_remaining,
                    valid: result.final_generation.len() as u64,
                    pruned: result.total_pruned,
                })
            }
            EnumerationOutcome::Cached(stats) => Some(StatsSummary {
                total_arrangements: stats.total_arrangements,
                tiles_remaining: stats.tiles_remaining,
                valid: stats.valid,
                pruned: stats.pruned,
            }),
        }
    }

    /// The surviving boards, when the run actually expanded.
    pub fn final_generation(&self) -> Option<&Generation> {
        match self {
            EnumerationOutcome::Expanded(result) => Some(&result.final_generation),
            EnumerationOutcome::Cached(_) => None,
        }
    }
}

/// Enumerate every valid board of `target_len` tiles reachable from `start`.
///
/// With `use_cache`, empty, one-tile and two-tile starts of the standard
/// 16-tile game are served from the precomputed table instead of running the
/// loop. The counts are identical either way.
///
/// # Errors
///
/// Fails before any expansion begins when `target_len` exceeds the board, the
/// starting state is longer than the target, or the starting state already
/// contains a fox.
pub fn enumerate(
    start: Option<&Board>,
    target_len: usize,
    supply: &TileSupply,
    use_cache: bool,
) -> Result<EnumerationOutcome, crate::Error> {
    if target_len > BOARD_CELLS {
        return Err(crate::Error::TargetLengthOutOfRange {
            requested: target_len,
            max: BOARD_CELLS,
        });
    }

    let start_len = start.map_or(0, Board::len);
    if start_len > target_len {
        return Err(crate::Error::StartExceedsTarget {
            start_len,
            target_len,
        });
    }

    if let Some(board) = start
        && FoxScanner::has_fox(board.tiles())
    {
        return Err(crate::Error::StartAlreadyFoxed {
            board: board.encode(),
        });
    }

    // The cached entries describe full games of the standard bag only.
    if use_cache
        && target_len == BOARD_CELLS
        && *supply == TileSupply::standard()
        && start_len <= 2
    {
        let key = start.cloned().unwrap_or_default();
        if let Some(stats) = cache::lookup(&key) {
            return Ok(EnumerationOutcome::Cached(stats));
        }
    }

    let mut generation = match start {
        Some(board) => Generation::single(board.clone()),
        None => Generation::empty(),
    };
    let mut total_pruned = 0u64;
    let mut dead_end_at = None;
    let mut length = start_len;

    while length < target_len {
        let expansion = expand(&generation, supply);
        total_pruned += expansion.pruned as u64;
        length += 1;
        if expansion.dead_end {
            dead_end_at = Some(length);
            generation = Generation::empty();
            break;
        }
        generation = expansion.next;
    }

    let total_arrangements = (target_len == BOARD_CELLS && dead_end_at.is_none()).then(|| {
        match start {
            Some(board) => supply.arrangements_of_remaining(board),
            None => supply.arrangements_of_remaining(&Board::new()),
        }
    });

    Ok(EnumerationOutcome::Expanded(EnumerationResult {
        final_generation: generation,
        total_pruned,
        dead_end_at,
        total_arrangements,
        tiles_remaining: target_len - start_len,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_target_out_of_range_rejected() {
        let err = enumerate(None, 17, &TileSupply::standard(), true).unwrap_err();
        assert!(matches!(err, crate::Error::TargetLengthOutOfRange { requested: 17, .. }));
    }

    #[test]
    fn test_start_longer_than_target_rejected() {
        let start = board("FOOF");
        let err = enumerate(Some(&start), 3, &TileSupply::standard(), true).unwrap_err();
        assert!(matches!(err, crate::Error::StartExceedsTarget { start_len: 4, target_len: 3 }));
    }

    #[test]
    fn test_foxed_start_rejected() {
        let start = board("XOF");
        let err = enumerate(Some(&start), 16, &TileSupply::standard(), true).unwrap_err();
        assert!(matches!(err, crate::Error::StartAlreadyFoxed { .. }));
    }

    #[test]
    fn test_shallow_starts_hit_the_cache() {
        let outcome = enumerate(None, 16, &TileSupply::standard(), true).unwrap();
        assert!(matches!(outcome, EnumerationOutcome::Cached(_)));
        let summary = outcome.summary().unwrap();
        assert_eq!(summary.total_arrangements, 2_018_016);
        assert_eq!(summary.valid, 255_304);
        assert_eq!(summary.pruned, 302_116);
    }

    #[test]
    fn test_one_tile_cache_entries() {
        let f = enumerate(Some(&board("F")), 16, &TileSupply::standard(), true).unwrap();
        let summary = f.summary().unwrap();
        assert_eq!(summary.total_arrangements, 630_630);
        assert_eq!(summary.valid, 65_364);
        assert_eq!(summary.pruned, 82_456);

        let o = enumerate(Some(&board("O")), 16, &TileSupply::standard(), true).unwrap();
        let summary = o.summary().unwrap();
        assert_eq!(summary.valid, 124_576);
        assert_eq!(summary.pruned, 137_204);
    }

    #[test]
    fn test_partial_depth_target_skips_cache() {
        let outcome = enumerate(Some(&board("FF")), 4, &TileSupply::standard(), true).unwrap();
        // Partial-depth targets never hit the cache.
        assert!(matches!(outcome, EnumerationOutcome::Expanded(_)));
    }

    #[test]
    fn test_expansion_to_short_target() {
        let outcome = enumerate(None, 3, &TileSupply::standard(), false).unwrap();
        let EnumerationOutcome::Expanded(result) = outcome else {
            panic!("expected expanded outcome");
        };
        // 27 three-tile sequences minus FOX and XOF.
        assert_eq!(result.final_generation.len(), 25);
        assert_eq!(result.total_pruned, 2);
        assert_eq!(result.dead_end_at, None);
        assert!(result.total_arrangements.is_none());
    }

    #[test]
    fn test_enumeration_is_idempotent() {
        let start = board("FOO");
        let first = enumerate(Some(&start), 8, &TileSupply::standard(), false).unwrap();
        let second = enumerate(Some(&start), 8, &TileSupply::standard(), false).unwrap();
        let (EnumerationOutcome::Expanded(a), EnumerationOutcome::Expanded(b)) = (first, second)
        else {
            panic!("expected expanded outcomes");
        };
        assert_eq!(a.final_generation, b.final_generation);
        assert_eq!(a.total_pruned, b.total_pruned);
    }

    #[test]
    fn test_zero_target_from_empty_start() {
        let outcome = enumerate(None, 0, &TileSupply::standard(), false).unwrap();
        let EnumerationOutcome::Expanded(result) = outcome else {
            panic!("expected expanded outcome");
        };
        assert!(result.final_generation.is_empty());
        assert_eq!(result.total_pruned, 0);
    }
}
