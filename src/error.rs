//! Error types for the form coaching library.
//!
//! Evaluators never fail: insufficient keypoints degrade to an orange
//! feedback result. These errors cover configuration, recordings and
//! user-supplied lookups only.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Exercise name did not match the catalog
    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),

    /// Routine key or name did not match any template
    #[error("Unknown routine: {0}")]
    UnknownRoutine(String),

    /// Session operation not valid in the current state
    #[error("Session error: {0}")]
    SessionError(String),

    /// Recording could not be read or parsed
    #[error("Recording error: {0}")]
    RecordingError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Application-specific error type (alias for main Error type)
pub type AppError = Error;

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
