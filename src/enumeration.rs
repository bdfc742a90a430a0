//! State-space enumeration engine

pub mod cache;
pub mod driver;
pub mod expander;

pub use cache::CachedStats;
pub use driver::{EnumerationOutcome, EnumerationResult, StatsSummary, enumerate};
pub use expander::{Expansion, Generation, expand};
