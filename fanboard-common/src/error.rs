//! Common error types for Fanboard

use thiserror::Error;

/// Common result type for Fanboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy shared by the service and its library code
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No valid identity on the request
    #[error("Unauthorized")]
    Unauthorized,

    /// State conflict: duplicate like, or unlike of a non-liked artist.
    /// The message is surfaced to the client verbatim.
    #[error("{0}")]
    Conflict(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
