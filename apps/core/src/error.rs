use std::io;
use thiserror::Error;

/// Errors raised at the edges of the crate: configuration, stored results and I/O.
///
/// The interpretation pipeline itself is total and never produces one of these.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., unparsable stored JSON).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., a bad environment variable).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

/// Convenience alias used by the boundary modules.
pub type Result<T> = std::result::Result<T, AppError>;
