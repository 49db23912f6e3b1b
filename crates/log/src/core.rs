//! Error types

use thiserror::Error;

/// Logger setup errors
#[derive(Debug, Error)]
pub enum LogError {
    /// Level directive could not be parsed
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Result type for logger setup
pub type LogResult<T> = Result<T, LogError>;
