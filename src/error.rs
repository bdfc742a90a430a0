//! Error types for the foxfinder crate

use thiserror::Error;

/// Main error type for the foxfinder crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidTileCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("board '{context}' has {got} tiles but the game only has {max} cells")]
    BoardTooLong {
        got: usize,
        max: usize,
        context: String,
    },

    #[error("target length {requested} is out of range (must be 0-{max})")]
    TargetLengthOutOfRange { requested: usize, max: usize },

    #[error("starting state has {start_len} tiles but only {target_len} were requested")]
    StartExceedsTarget { start_len: usize, target_len: usize },

    #[error("starting state '{board}' already contains a fox")]
    StartAlreadyFoxed { board: String },

    #[error("invalid supply configuration: {message}")]
    InvalidSupply { message: String },

    #[error("at least one game must be requested")]
    NoGamesRequested,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
