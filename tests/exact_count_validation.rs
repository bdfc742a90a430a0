//! Validates the precomputed shallow-start table against the full expansion.
//!
//! The cached entries are fixed literals; these tests reproduce every one of
//! them bit-exactly by running the enumeration loop with caching disabled.

use foxfinder::enumeration::{EnumerationOutcome, StatsSummary, enumerate};
use foxfinder::game::{Board, TileSupply};

fn board(s: &str) -> Option<Board> {
    if s.is_empty() {
        None
    } else {
        Some(Board::from_string(s).expect("valid board string"))
    }
}

/// Run the full expansion to 16 tiles and return its headline statistics.
fn expand_full(start: &str) -> StatsSummary {
    let supply = TileSupply::standard();
    let start = board(start);
    let outcome = enumerate(start.as_ref(), 16, &supply, false).expect("valid start");
    assert!(
        matches!(outcome, EnumerationOutcome::Expanded(_)),
        "caching disabled, expected a full expansion"
    );
    outcome.summary().expect("full-board runs carry a summary")
}

/// Fetch the cached statistics for the same start.
fn cached(start: &str) -> StatsSummary {
    let supply = TileSupply::standard();
    let start = board(start);
    let outcome = enumerate(start.as_ref(), 16, &supply, true).expect("valid start");
    assert!(
        matches!(outcome, EnumerationOutcome::Cached(_)),
        "shallow starts must be served from the table"
    );
    outcome.summary().expect("cached entries always carry a summary")
}

#[test]
fn empty_start_expansion_matches_table() {
    let expanded = expand_full("");
    assert_eq!(expanded.total_arrangements, 2_018_016);
    assert_eq!(expanded.tiles_remaining, 16);
    assert_eq!(expanded.valid, 255_304);
    assert_eq!(expanded.pruned, 302_116);
    assert_eq!(expanded, cached(""));
}

#[test]
fn one_tile_start_expansions_match_table() {
    for start in ["F", "O", "X"] {
        assert_eq!(expand_full(start), cached(start), "mismatch for start '{start}'");
    }

    let f = cached("F");
    assert_eq!((f.total_arrangements, f.valid, f.pruned), (630_630, 65_364, 82_456));
    let o = cached("O");
    assert_eq!((o.valid, o.pruned), (124_576, 137_204));
}

#[test]
fn two_tile_start_expansions_match_table() {
    for start in ["FF", "FO", "FX", "OF", "OO", "OX", "XF", "XO", "XX"] {
        assert_eq!(expand_full(start), cached(start), "mismatch for start '{start}'");
    }
}

#[test]
fn table_entries_sum_across_depths() {
    // The empty-start counts are exactly the sums over the three first tiles,
    // and each one-tile count is the sum over its three continuations.
    let empty = cached("");
    let first: Vec<StatsSummary> = ["F", "O", "X"].iter().map(|s| cached(s)).collect();
    assert_eq!(empty.valid, first.iter().map(|s| s.valid).sum::<u64>());
    assert_eq!(empty.pruned, first.iter().map(|s| s.pruned).sum::<u64>());
    assert_eq!(
        empty.total_arrangements,
        first.iter().map(|s| s.total_arrangements).sum::<u64>()
    );

    for (start, continuations) in [("F", ["FF", "FO", "FX"]), ("O", ["OF", "OO", "OX"])] {
        let parent = cached(start);
        let children: Vec<StatsSummary> = continuations.iter().map(|s| cached(s)).collect();
        assert_eq!(parent.valid, children.iter().map(|s| s.valid).sum::<u64>());
        assert_eq!(parent.pruned, children.iter().map(|s| s.pruned).sum::<u64>());
    }
}

#[test]
fn dead_end_reported_when_every_extension_foxes() {
    // All six O tiles are down; the only tiles that fit at cell 10 are F,
    // which completes [8, 9, 10] around the O at 9, and X, which completes
    // [2, 6, 10] around the O at 6.
    let supply = TileSupply::standard();
    let start = Board::from_string("OOFOOFOFXO").unwrap();
    let outcome = enumerate(Some(&start), 16, &supply, true).unwrap();
    let EnumerationOutcome::Expanded(result) = outcome else {
        panic!("ten-tile starts never hit the cache");
    };
    assert_eq!(result.dead_end_at, Some(11));
    assert!(result.final_generation.is_empty());
    assert_eq!(result.total_pruned, 2);
    assert!(result.total_arrangements.is_none());
}
