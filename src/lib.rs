//! Exhaustive state-space statistics for "Do Not Find The Fox"
//!
//! This crate provides:
//! - Fox pattern detection on partial and complete 4x4 boards
//! - Layered breadth-first enumeration of all valid tile placements with
//!   fox pruning and per-depth statistics
//! - A precomputed statistic table for shallow starting states
//! - Random playout simulation and batch profiling of many games

pub mod cli;
pub mod enumeration;
pub mod error;
pub mod game;
pub mod simulation;
pub mod utils;

pub use enumeration::{
    CachedStats, EnumerationOutcome, EnumerationResult, Expansion, Generation, StatsSummary,
    enumerate, expand,
};
pub use error::{Error, Result};
pub use game::{BOARD_CELLS, BOARD_WIDTH, Board, FOX_PATTERNS, FoxScanner, Tile, TileSupply};
pub use simulation::{LossSummary, PlayoutResult, ProfileReport, play_once, profile};
