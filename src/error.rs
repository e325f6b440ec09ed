//! Error types for the ttt-bot crate

use thiserror::Error;

/// Main error type for the ttt-bot crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("not an integer: '{input}'")]
    NotAnInteger { input: String },

    #[error("invalid tile {tile}: expected a free cell in 0-8")]
    InvalidTile { tile: i64 },

    #[error("bad board string: expected exactly {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
