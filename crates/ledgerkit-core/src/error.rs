//! Error types for ledgerkit core.

use thiserror::Error;

/// Core errors that can occur while encoding keys or envelopes.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A key component could not be encoded.
    #[error("key component {index} could not be encoded: {source}")]
    Encoding {
        /// Zero-based position of the offending component.
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Persisted bytes are not a well-formed envelope.
    #[error("invalid envelope: {0}")]
    InvalidEnvelope(String),

    /// The envelope's type tag has no entry in the active registry.
    #[error("type \"{0}\" is not registered in this context")]
    TypeNotRegistered(String),
}
