//! Profile many random games and summarize the outcomes

use anyhow::Result;
use clap::Args;

use crate::cli::output::{create_game_progress, print_board, print_section};
use crate::game::TileSupply;
use crate::simulation::profile;
use crate::utils::truncated_percent;

#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// How many random games to play
    pub games: usize,

    /// Random seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    /// Print every fox-free board at the end
    #[arg(long)]
    pub show_wins: bool,
}

pub fn execute(args: ProfileArgs) -> Result<()> {
    let supply = TileSupply::standard();

    let progress = (!args.quiet).then(|| create_game_progress(args.games as u64));
    let report = profile(args.games, args.seed, &supply, |_| {
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    })?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    print_section(&format!(
        "Ran {} games in {:.3} seconds",
        args.games,
        report.elapsed.as_secs_f64()
    ));
    println!(
        "There were {} wins and {} losses ({}% fox-free)",
        report.wins.len(),
        report.losses.len(),
        report.win_percent()
    );

    match report.loss_summary() {
        Some(summary) => {
            println!(
                "The average fox happened after {} tiles were placed",
                truncated_percent(summary.average / 100.0)
            );
            println!("  The earliest fox happened after {} tiles", summary.shortest);
            println!("  The latest fox happened after {} tiles", summary.longest);
        }
        None => println!("Somehow, no foxes were found"),
    }

    if args.show_wins && !report.wins.is_empty() {
        println!("\nPrinting all fox-free games:");
        for board in &report.wins {
            println!();
            print_board(board);
        }
    }

    Ok(())
}
