//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a shared in-memory world state
//! and context constructors mirroring how the hosting platform builds a
//! fresh context per submitted transaction.

use std::sync::Arc;

use ledgerkit_papernet::{CommercialPaper, CommercialPaperContract, PaperContext};
use ledgerkit_store::{MemoryWorldState, TransactionContext, WorldState};

/// The well-known tutorial paper: MagnetoCorp paper 1.
pub fn sample_paper() -> CommercialPaper {
    CommercialPaper::new("MagnetoCorp", 1, "2020-05-31", "2020-11-30", 5_000_000)
        .expect("sample components always encode")
}

/// A test fixture with a shared in-memory world state.
pub struct TestFixture {
    pub world: Arc<MemoryWorldState>,
    pub contract: CommercialPaperContract,
}

impl TestFixture {
    /// Create a new fixture over an empty world state.
    pub fn new() -> Self {
        Self {
            world: Arc::new(MemoryWorldState::new()),
            contract: CommercialPaperContract,
        }
    }

    /// A fresh generic context bound to the given namespace.
    pub fn context(&self, namespace: &str) -> TransactionContext {
        TransactionContext::new(Arc::clone(&self.world) as Arc<dyn WorldState>, namespace)
    }

    /// A fresh paper context over the shared world state.
    pub fn paper_context(&self) -> PaperContext {
        PaperContext::new(Arc::clone(&self.world) as Arc<dyn WorldState>)
    }

    /// Issue the sample paper and return it.
    pub fn issue_sample_paper(&self) -> CommercialPaper {
        self.contract
            .issue(
                &self.paper_context(),
                "MagnetoCorp",
                1,
                "2020-05-31",
                "2020-11-30",
                5_000_000,
            )
            .expect("sample issue succeeds on an empty world state")
    }

    /// Issue the sample paper and move it to TRADING under a new owner.
    pub fn trading_sample_paper(&self, new_owner: &str) -> CommercialPaper {
        self.issue_sample_paper();
        self.contract
            .buy(
                &self.paper_context(),
                "MagnetoCorp",
                1,
                "MagnetoCorp",
                new_owner,
                4_900_000,
                "2020-06-05",
            )
            .expect("sample buy succeeds after issue")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use ledgerkit_core::state::State;
    use ledgerkit_papernet::PaperState;

    use super::*;

    #[test]
    fn test_fixture_issues_sample_paper() {
        let fixture = TestFixture::new();
        let paper = fixture.issue_sample_paper();

        assert_eq!(paper.owner, "MagnetoCorp");
        assert!(paper.is_issued());
    }

    #[test]
    fn test_fixture_trading_paper() {
        let fixture = TestFixture::new();
        let paper = fixture.trading_sample_paper("DigiBank");

        assert_eq!(paper.owner, "DigiBank");
        assert_eq!(paper.current_state, PaperState::Trading);
    }

    #[test]
    fn test_contexts_share_one_world_state() {
        let fixture = TestFixture::new();
        let paper = fixture.issue_sample_paper();

        // A second, independently built context sees the same state.
        let loaded = fixture.paper_context().get_paper(paper.key()).unwrap();
        assert_eq!(loaded, paper);
    }
}
