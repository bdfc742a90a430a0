//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::enumeration::StatsSummary;
use crate::game::Board;
use crate::utils::truncated_percent;

/// Create a progress bar for a profiling run
pub fn create_game_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a board as a 4x4 grid, with a partial final row for short boards
pub fn print_board(board: &Board) {
    if board.is_empty() {
        println!("(empty board)");
    } else {
        println!("{board}");
    }
    println!();
}

/// Print the headline statistics of a full-length enumeration
pub fn print_stats(summary: &StatsSummary) {
    let valid = summary.valid + summary.pruned;
    let win_percent = truncated_percent(summary.valid as f64 / valid as f64);
    let loss_percent = truncated_percent(summary.pruned as f64 / valid as f64);
    println!(
        "There are {} possible arrangements of the remaining {} fox tiles:",
        format_number(summary.total_arrangements),
        summary.tiles_remaining
    );
    println!("  {} of them are valid game states, and of those:", format_number(valid));
    println!(
        "    {} ({win_percent}%) end with 16 tiles fox-free",
        format_number(summary.valid)
    );
    println!(
        "    {} ({loss_percent}%) end early due to foxes",
        format_number(summary.pruned)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(2_018_016), "2,018,016");
    }
}
