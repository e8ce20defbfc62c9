//! Error types for the NBA stats CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Failed to fetch data from the NBA stats service: {0}")]
    FetchFailed(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    #[error("Invalid season '{season}': expected a value like 2024-25")]
    InvalidSeason { season: String },

    #[error("Malformed stats response: {message}")]
    MalformedBundle { message: String },

    #[error("Result set is missing column {column}")]
    MissingColumn { column: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Failed to set up logging: {message}")]
    LogSetup { message: String },
}

impl StatsError {
    pub fn malformed(message: impl Into<String>) -> Self {
        StatsError::MalformedBundle {
            message: message.into(),
        }
    }

    /// Errors the interactive session reports and recovers from instead of exiting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StatsError::FetchFailed(_)
                | StatsError::Json(_)
                | StatsError::MalformedBundle { .. }
                | StatsError::MissingColumn { .. }
                | StatsError::PlayerNotFound { .. }
        )
    }
}
