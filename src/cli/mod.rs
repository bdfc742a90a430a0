//! CLI infrastructure for the foxfinder toolkit
//!
//! This module provides the command-line interface for enumerating board
//! states, playing random games, and profiling batches of games.

pub mod commands;
pub mod output;
