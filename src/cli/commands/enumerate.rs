//! Enumerate every valid board reachable from a starting state

use anyhow::Result;
use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use crate::cli::output::{format_number, print_board, print_section, print_stats};
use crate::enumeration::{EnumerationOutcome, enumerate};
use crate::game::{BOARD_CELLS, Board, TileSupply};

#[derive(Debug, Args)]
pub struct EnumerateArgs {
    /// Starting board as a string of F, O and X tiles, e.g. "FOOXXO"
    #[arg(long, default_value = "")]
    pub start: String,

    /// Board length to enumerate to (0-16)
    #[arg(long, default_value_t = BOARD_CELLS)]
    pub tiles: usize,

    /// Print this many random surviving boards at the end
    #[arg(long, default_value_t = 0)]
    pub samples: usize,

    /// Run the full expansion even for cached shallow starts
    #[arg(long)]
    pub no_cache: bool,

    /// Random seed for board sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit the summary as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: EnumerateArgs) -> Result<()> {
    let supply = TileSupply::standard();
    let start = Board::from_string(&args.start)?;
    let start_arg = (!start.is_empty()).then_some(&start);

    let outcome = enumerate(start_arg, args.tiles, &supply, !args.no_cache)?;

    if args.json {
        let summary = outcome.summary();
        let payload = json!({
            "start": start.encode(),
            "tiles": args.tiles,
            "cached": matches!(outcome, EnumerationOutcome::Cached(_)),
            "dead_end": outcome.dead_end(),
            "valid": outcome.final_generation().map(|g| g.len() as u64)
                .or(summary.map(|s| s.valid)),
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print_section("From the starting state of:");
    print_board(&start);

    match &outcome {
        EnumerationOutcome::Cached(_) => {
            let summary = outcome.summary().expect("cached entries always carry stats");
            print_stats(&summary);
        }
        EnumerationOutcome::Expanded(result) => {
            if let Some(length) = result.dead_end_at {
                println!(
                    "Every possible outcome leads to a fox by tile {length}, of which there are {} total",
                    format_number(result.total_pruned)
                );
            } else if let Some(summary) = outcome.summary() {
                print_stats(&summary);
            } else {
                println!(
                    "{} valid boards of length {}, {} extensions pruned along the way",
                    format_number(result.final_generation.len() as u64),
                    args.tiles,
                    format_number(result.total_pruned)
                );
            }
        }
    }

    if args.samples > 0
        && let Some(generation) = outcome.final_generation()
        && !generation.is_empty()
    {
        println!(
            "\nPrinting {} random fox-free boards of length {}:",
            args.samples, args.tiles
        );
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        for board in generation.sample(&mut rng, args.samples) {
            println!();
            print_board(board);
        }
    }

    Ok(())
}
