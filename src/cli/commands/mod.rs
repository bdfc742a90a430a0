//! CLI command implementations

pub mod enumerate;
pub mod play;
pub mod profile;
