//! Error types for the commercial-paper contract.

use ledgerkit_core::CoreError;
use ledgerkit_store::StoreError;
use thiserror::Error;

use crate::paper::PaperState;

/// Errors surfaced by the contract operations.
///
/// Store-layer failures (not found, unregistered type, backend errors) pass
/// through the `Store` variant untranslated.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Persistence-layer failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The stored paper is not owned by the claimed owner.
    #[error("paper {paper} is not owned by {claimed}")]
    OwnershipMismatch {
        /// Issuer + paper number of the paper in question.
        paper: String,
        /// Owner the caller claimed.
        claimed: String,
    },

    /// The paper cannot be traded in its current state.
    #[error("paper {paper} is not trading, current state {state}")]
    InvalidStateTransition {
        paper: String,
        state: PaperState,
    },

    /// The paper was already redeemed.
    #[error("paper {paper} is already redeemed")]
    AlreadyRedeemed { paper: String },
}

impl From<CoreError> for ContractError {
    fn from(e: CoreError) -> Self {
        Self::Store(StoreError::from(e))
    }
}
