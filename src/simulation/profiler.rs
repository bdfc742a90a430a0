//! Batch profiling of random games
//!
//! Plays many independent playouts and aggregates win/loss counts plus the
//! distribution of losing prefix lengths.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game::{Board, TileSupply};
use crate::utils::truncated_percent;

use super::playout::play_once;

/// Aggregated results of a profiling run.
#[derive(Debug, Clone)]
pub struct ProfileReport {
    /// Final boards of all fox-free games.
    pub wins: Vec<Board>,
    /// Losing prefixes of all games that found a fox.
    pub losses: Vec<Board>,
    /// Wall-clock time for the whole run.
    pub elapsed: Duration,
}

/// Loss-length statistics over the losing games of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossSummary {
    /// Mean number of tiles placed before the fox appeared.
    pub average: f64,
    pub shortest: usize,
    pub longest: usize,
}

impl ProfileReport {
    /// Number of games played.
    pub fn games(&self) -> usize {
        self.wins.len() + self.losses.len()
    }

    /// Fraction of games won, truncated to a two-decimal percentage.
    pub fn win_percent(&self) -> f64 {
        if self.games() == 0 {
            return 0.0;
        }
        truncated_percent(self.wins.len() as f64 / self.games() as f64)
    }

    /// Loss-length statistics, or `None` when no game lost. Callers report
    /// the no-loss case explicitly instead of dividing by zero.
    pub fn loss_summary(&self) -> Option<LossSummary> {
        if self.losses.is_empty() {
            return None;
        }
        let lengths = self.losses.iter().map(Board::len);
        let total: usize = lengths.clone().sum();
        Some(LossSummary {
            average: total as f64 / self.losses.len() as f64,
            shortest: lengths.clone().min().unwrap_or(0),
            longest: lengths.max().unwrap_or(0),
        })
    }
}

/// Play `games` independent random games and aggregate the outcomes.
///
/// A seed makes the whole run reproducible; without one the RNG is seeded
/// from entropy. `on_game` is invoked after each game with its 1-based index,
/// so callers can drive progress reporting.
///
/// # Errors
///
/// Returns [`crate::Error::NoGamesRequested`] when `games` is zero.
pub fn profile(
    games: usize,
    seed: Option<u64>,
    supply: &TileSupply,
    mut on_game: impl FnMut(usize),
) -> Result<ProfileReport, crate::Error> {
    if games == 0 {
        return Err(crate::Error::NoGamesRequested);
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    };

    let start = Instant::now();
    let mut wins = Vec::new();
    let mut losses = Vec::new();

    for game in 1..=games {
        let result = play_once(&mut rng, supply);
        if result.won {
            wins.push(result.board);
        } else {
            losses.push(result.board);
        }
        on_game(game);
    }

    Ok(ProfileReport {
        wins,
        losses,
        elapsed: start.elapsed(),
    })
}
