//! Error types for the gamify calendar engine.

use thiserror::Error;

/// Errors that can occur at the boundary of the calendar engine.
#[derive(Error, Debug)]
pub enum GamifyError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Month step must be -1 or +1, got {0}")]
    InvalidMonthStep(i32),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Event parse error: {0}")]
    EventParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gamify operations.
pub type GamifyResult<T> = Result<T, GamifyError>;
