//! Error types for the habitual planner.

use thiserror::Error;

/// Errors that can occur in planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid time '{0}'. Expected HH:MM AM|PM in 15 minute steps")]
    InvalidTime(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDayKey(String),

    #[error("Duration must be between 1 and 1440 minutes, got {0}")]
    InvalidDuration(u32),

    #[error("Note cannot be blank")]
    BlankNote,
}

/// Result type alias for planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;
