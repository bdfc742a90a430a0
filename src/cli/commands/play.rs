//! Play one random game, narrating the shrinking possibility space

use anyhow::Result;
use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::output::{print_board, print_section, print_stats};
use crate::enumeration::enumerate;
use crate::game::{BOARD_CELLS, Board, FoxScanner, TileSupply};
use crate::simulation::deal;

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Random seed for the tile shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the per-tile possibility statistics
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let supply = TileSupply::standard();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    };

    let sequence = deal(&mut rng, &supply);

    for placed in 1..=sequence.len() {
        let prefix = Board::from_tiles(sequence[..placed].to_vec());
        if FoxScanner::has_fox(prefix.tiles()) {
            print_section("Oh no, you've found the fox! Better luck next time");
            print_board(&prefix);
            println!("The fox appeared on tile {placed} of 16");
            return Ok(());
        }
        if !args.quiet {
            print_section(&format!("Tile {placed} of 16"));
            print_board(&prefix);
            // Live statistics for the current prefix; purely informational.
            let outcome = enumerate(Some(&prefix), BOARD_CELLS, &supply, true)?;
            if let Some(summary) = outcome.summary() {
                print_stats(&summary);
            } else if outcome.dead_end() {
                println!("No remaining arrangement stays fox-free from here");
            }
        }
    }

    print_section("Congratulations, you have not found the fox!");
    print_board(&Board::from_tiles(sequence));
    Ok(())
}
