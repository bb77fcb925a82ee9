//! Error types for the wild tic-tac-toe crate

use thiserror::Error;

/// Main error type for the wild tic-tac-toe crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move at position {position}: {reason}")]
    IllegalMove { position: usize, reason: String },

    #[error("episode already finished; call reset() before taking further steps")]
    EpisodeFinished,

    #[error("invalid engine state: {message}")]
    InvalidState { message: String },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board has {got} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid cell symbol '{symbol}' at position {position} (expected ' ', 'X' or 'O')")]
    InvalidCellSymbol { symbol: String, position: usize },

    #[error("invalid counter '{counter}' (expected 'X' or 'O')")]
    InvalidCounter { counter: String },

    #[error("invalid team name '{name}': {reason}")]
    InvalidTeamName { name: String, reason: String },

    #[error("value function for team '{team}' not found at {path}")]
    ValueFunctionNotFound { team: String, path: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },
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

impl Error {
    pub(crate) fn illegal_move(position: usize, reason: impl Into<String>) -> Self {
        Error::IllegalMove {
            position,
            reason: reason.into(),
        }
    }
}
