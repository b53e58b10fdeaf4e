//! Error types for the store module.

use ledgerkit_core::CoreError;
use thiserror::Error;

/// Errors reported by a world-state backend, propagated verbatim.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A namespace or key component the backend cannot accept.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Key or envelope codec failure.
    #[error(transparent)]
    Codec(#[from] CoreError),

    /// Backend failure, passed through unchanged.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The backend holds no value for the requested key.
    #[error("no state found for key \"{0}\"")]
    NotFound(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
