//! Random game simulation and batch profiling

pub mod playout;
pub mod profiler;

pub use playout::{PlayoutResult, deal, play_once, walk};
pub use profiler::{LossSummary, ProfileReport, profile};
