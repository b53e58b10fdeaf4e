//! Paper-scoped wrapper around the generic transaction context.

use std::sync::Arc;

use ledgerkit_core::CoreError;
use ledgerkit_store::{ClientIdentity, StoreError, TransactionContext, WorldState};

use crate::paper::CommercialPaper;

/// Namespace (world-state list) holding all commercial papers.
pub const PAPER_NAMESPACE: &str = "org.papernet.commercialpaperlist";

/// Transaction context for commercial papers.
///
/// Binds the generic context to [`PAPER_NAMESPACE`] and registers the paper
/// type once at construction, so every read in this context can decode
/// paper envelopes.
pub struct PaperContext {
    inner: TransactionContext,
}

impl PaperContext {
    /// Create a paper context over a world-state backend.
    pub fn new(world: Arc<dyn WorldState>) -> Self {
        let mut inner = TransactionContext::new(world, PAPER_NAMESPACE);
        inner.use_type::<CommercialPaper>();
        Self { inner }
    }

    /// Attach the resolved caller identity.
    pub fn with_identity(mut self, identity: ClientIdentity) -> Self {
        self.inner = self.inner.with_identity(identity);
        self
    }

    /// The underlying generic context.
    pub fn inner(&self) -> &TransactionContext {
        &self.inner
    }

    /// Write a new paper into the world state.
    pub fn add_paper(&self, paper: &CommercialPaper) -> Result<(), StoreError> {
        self.inner.add_state(paper)
    }

    /// Load the paper stored under an un-namespaced key.
    pub fn get_paper(&self, key: &str) -> Result<CommercialPaper, StoreError> {
        let state = self.inner.get_state(key)?;
        let paper = state.downcast::<CommercialPaper>().ok_or_else(|| {
            CoreError::InvalidEnvelope(format!(
                "state under \"{key}\" is not a commercial paper"
            ))
        })?;
        Ok(*paper)
    }

    /// Write back a mutated paper.
    pub fn update_paper(&self, paper: &CommercialPaper) -> Result<(), StoreError> {
        self.inner.update_state(paper)
    }
}
