//! Fox pattern detection
//!
//! A fox is any row, column or diagonal triple on the 4x4 grid that spells
//! "FOX" in either direction: the middle cell holds the neutral `O` and the
//! flanks hold `F` and `X` in either order.

use super::board::Tile;

/// Index triples `[a, m, b]` over board positions, where `m` is the middle
/// cell. Covers every 3-in-a-line on the 4x4 grid: both windows of each row
/// and column, plus all diagonals of length 3 and 4 in both directions.
pub const FOX_PATTERNS: [[usize; 3]; 24] = [
    // rows
    [0, 1, 2],
    [1, 2, 3],
    [4, 5, 6],
    [5, 6, 7],
    [8, 9, 10],
    [9, 10, 11],
    [12, 13, 14],
    [13, 14, 15],
    // columns
    [0, 4, 8],
    [4, 8, 12],
    [1, 5, 9],
    [5, 9, 13],
    [2, 6, 10],
    [6, 10, 14],
    [3, 7, 11],
    [7, 11, 15],
    // down-right diagonals
    [0, 5, 10],
    [1, 6, 11],
    [4, 9, 14],
    [5, 10, 15],
    // down-left diagonals
    [2, 5, 8],
    [3, 6, 9],
    [6, 9, 12],
    [7, 10, 13],
];

/// Utility for scanning boards for completed fox patterns
pub struct FoxScanner;

impl FoxScanner {
    /// Check whether any fox pattern is satisfied on the given tiles.
    ///
    /// Patterns whose highest index falls beyond the board are skipped, so the
    /// scan is safe on any partial board including the empty one. Returns on
    /// the first satisfied pattern.
    pub fn has_fox(tiles: &[Tile]) -> bool {
        FOX_PATTERNS
            .iter()
            .any(|pattern| Self::pattern_satisfied(tiles, pattern))
    }

    fn pattern_satisfied(tiles: &[Tile], pattern: &[usize; 3]) -> bool {
        let [a, m, b] = *pattern;
        if tiles.len() <= a.max(m).max(b) {
            return false;
        }
        tiles[m] == Tile::O
            && ((tiles[a] == Tile::F && tiles[b] == Tile::X)
                || (tiles[a] == Tile::X && tiles[b] == Tile::F))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;

    fn foxed(s: &str) -> bool {
        FoxScanner::has_fox(Board::from_string(s).unwrap().tiles())
    }

    #[test]
    fn test_empty_board_has_no_fox() {
        assert!(!FoxScanner::has_fox(&[]));
    }

    #[test]
    fn test_short_boards_never_activate_patterns() {
        // No pattern fits inside the first two cells.
        assert!(!foxed("F"));
        assert!(!foxed("FO"));
        assert!(!foxed("XO"));
    }

    #[test]
    fn test_top_row_fox_both_directions() {
        assert!(foxed("FOX"));
        assert!(foxed("XOF"));
    }

    #[test]
    fn test_neutral_middle_required() {
        assert!(!foxed("FFX"));
        assert!(!foxed("FXO"));
        assert!(!foxed("OFX"));
    }

    #[test]
    fn test_column_fox() {
        // Column 0 window [0, 4, 8]: F at 0, O at 4, X at 8.
        assert!(foxed("FXXXOXXXX"));
    }

    #[test]
    fn test_diagonal_fox() {
        // Main diagonal window [0, 5, 10].
        assert!(foxed("FXXXXOXXXXX"));
        // Anti-diagonal window [2, 5, 8].
        assert!(foxed("XXFXXOXXX"));
    }

    #[test]
    fn test_second_row_window() {
        // Row window [5, 6, 7] only activates once cell 7 is placed.
        assert!(!foxed("XXXXXFO"));
        assert!(foxed("XXXXXFOX"));
    }

    #[test]
    fn test_fox_free_full_board() {
        assert!(!foxed("FFOOFFOO"));
    }
}
