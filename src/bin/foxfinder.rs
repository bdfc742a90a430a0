//! foxfinder CLI - state-space statistics for Do Not Find The Fox
//!
//! This CLI provides a unified interface for:
//! - Enumerating every valid board reachable from a starting state
//! - Playing single random games with live possibility statistics
//! - Profiling many random games and summarizing the outcomes

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "foxfinder")]
#[command(version, about = "State-space statistics for Do Not Find The Fox", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate all valid boards reachable from a starting state
    Enumerate(foxfinder::cli::commands::enumerate::EnumerateArgs),

    /// Play one random game of Do Not Find The Fox
    Play(foxfinder::cli::commands::play::PlayArgs),

    /// Play many random games and aggregate win/loss statistics
    Profile(foxfinder::cli::commands::profile::ProfileArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Enumerate(args) => foxfinder::cli::commands::enumerate::execute(args),
        Commands::Play(args) => foxfinder::cli::commands::play::execute(args),
        Commands::Profile(args) => foxfinder::cli::commands::profile::execute(args),
    }
}
