//! End-to-end commercial-paper scenarios over the in-memory world state.

use std::sync::Arc;

use ledgerkit_core::state::State;
use ledgerkit_papernet::{
    paper_key, CommercialPaperContract, ContractError, PaperContext, PaperState,
};
use ledgerkit_store::{MemoryWorldState, StoreError, WorldState};

struct Scenario {
    world: Arc<MemoryWorldState>,
    contract: CommercialPaperContract,
}

impl Scenario {
    fn new() -> Self {
        Self {
            world: Arc::new(MemoryWorldState::new()),
            contract: CommercialPaperContract,
        }
    }

    /// Fresh context per invocation, the way the hosting platform would
    /// build one for each submitted transaction.
    fn ctx(&self) -> PaperContext {
        PaperContext::new(Arc::clone(&self.world) as Arc<dyn WorldState>)
    }

    fn issue_magnetocorp_paper(&self) {
        self.contract
            .issue(
                &self.ctx(),
                "MagnetoCorp",
                1,
                "2020-05-31",
                "2020-11-30",
                5_000_000,
            )
            .unwrap();
    }
}

#[test]
fn issue_creates_issuer_owned_paper() {
    let scenario = Scenario::new();

    let paper = scenario
        .contract
        .issue(
            &scenario.ctx(),
            "MagnetoCorp",
            1,
            "2020-05-31",
            "2020-11-30",
            5_000_000,
        )
        .unwrap();

    assert_eq!(paper.owner, "MagnetoCorp");
    assert_eq!(paper.current_state, PaperState::Issued);
    assert_eq!(paper.key(), paper_key("MagnetoCorp", 1).unwrap().as_str());

    let stored = scenario.ctx().get_paper(paper.key()).unwrap();
    assert_eq!(stored, paper);
}

#[test]
fn buy_transfers_ownership_and_starts_trading() {
    let scenario = Scenario::new();
    scenario.issue_magnetocorp_paper();

    let paper = scenario
        .contract
        .buy(
            &scenario.ctx(),
            "MagnetoCorp",
            1,
            "MagnetoCorp",
            "DigiBank",
            4_900_000,
            "2020-06-05",
        )
        .unwrap();

    assert_eq!(paper.owner, "DigiBank");
    assert_eq!(paper.current_state, PaperState::Trading);

    let stored = scenario
        .ctx()
        .get_paper(&paper_key("MagnetoCorp", 1).unwrap())
        .unwrap();
    assert_eq!(stored.owner, "DigiBank");
    assert_eq!(stored.current_state, PaperState::Trading);
}

#[test]
fn buy_with_wrong_owner_fails_and_leaves_state_untouched() {
    let scenario = Scenario::new();
    scenario.issue_magnetocorp_paper();

    scenario
        .contract
        .buy(
            &scenario.ctx(),
            "MagnetoCorp",
            1,
            "MagnetoCorp",
            "DigiBank",
            4_900_000,
            "2020-06-05",
        )
        .unwrap();

    // MagnetoCorp no longer owns the paper.
    let err = scenario
        .contract
        .buy(
            &scenario.ctx(),
            "MagnetoCorp",
            1,
            "MagnetoCorp",
            "HedgeMatic",
            4_800_000,
            "2020-06-10",
        )
        .unwrap_err();

    assert!(matches!(
        err,
        ContractError::OwnershipMismatch { ref claimed, .. } if claimed == "MagnetoCorp"
    ));

    let stored = scenario
        .ctx()
        .get_paper(&paper_key("MagnetoCorp", 1).unwrap())
        .unwrap();
    assert_eq!(stored.owner, "DigiBank");
    assert_eq!(stored.current_state, PaperState::Trading);
}

#[test]
fn buy_redeemed_paper_is_an_invalid_transition() {
    let scenario = Scenario::new();
    scenario.issue_magnetocorp_paper();

    // Force the paper into REDEEMED directly; `redeem` never sets it.
    let ctx = scenario.ctx();
    let mut paper = ctx.get_paper(&paper_key("MagnetoCorp", 1).unwrap()).unwrap();
    paper.set_redeemed();
    ctx.update_paper(&paper).unwrap();

    let err = scenario
        .contract
        .buy(
            &scenario.ctx(),
            "MagnetoCorp",
            1,
            "MagnetoCorp",
            "DigiBank",
            4_900_000,
            "2020-06-05",
        )
        .unwrap_err();

    assert!(matches!(
        err,
        ContractError::InvalidStateTransition {
            state: PaperState::Redeemed,
            ..
        }
    ));
}

#[test]
fn redeem_trading_paper_succeeds_but_state_stays_trading() {
    let scenario = Scenario::new();
    scenario.issue_magnetocorp_paper();
    scenario
        .contract
        .buy(
            &scenario.ctx(),
            "MagnetoCorp",
            1,
            "MagnetoCorp",
            "DigiBank",
            4_900_000,
            "2020-06-05",
        )
        .unwrap();

    let paper = scenario
        .contract
        .redeem(&scenario.ctx(), "MagnetoCorp", 1, "DigiBank", "2020-11-30")
        .unwrap();

    // Documented current behavior: redemption does not advance the state.
    assert_eq!(paper.current_state, PaperState::Trading);

    let stored = scenario
        .ctx()
        .get_paper(&paper_key("MagnetoCorp", 1).unwrap())
        .unwrap();
    assert_eq!(stored.current_state, PaperState::Trading);
}

#[test]
fn redeem_with_wrong_owner_fails() {
    let scenario = Scenario::new();
    scenario.issue_magnetocorp_paper();

    let err = scenario
        .contract
        .redeem(&scenario.ctx(), "MagnetoCorp", 1, "DigiBank", "2020-11-30")
        .unwrap_err();

    assert!(matches!(
        err,
        ContractError::OwnershipMismatch { ref claimed, .. } if claimed == "DigiBank"
    ));
}

#[test]
fn redeem_already_redeemed_paper_fails() {
    let scenario = Scenario::new();
    scenario.issue_magnetocorp_paper();

    let ctx = scenario.ctx();
    let mut paper = ctx.get_paper(&paper_key("MagnetoCorp", 1).unwrap()).unwrap();
    paper.set_redeemed();
    ctx.update_paper(&paper).unwrap();

    let err = scenario
        .contract
        .redeem(&scenario.ctx(), "MagnetoCorp", 1, "MagnetoCorp", "2020-11-30")
        .unwrap_err();

    assert!(matches!(err, ContractError::AlreadyRedeemed { .. }));
}

#[test]
fn operations_on_unknown_papers_fail_not_found() {
    let scenario = Scenario::new();

    let err = scenario
        .contract
        .buy(
            &scenario.ctx(),
            "MagnetoCorp",
            99,
            "MagnetoCorp",
            "DigiBank",
            1,
            "2020-06-05",
        )
        .unwrap_err();

    assert!(matches!(
        err,
        ContractError::Store(StoreError::NotFound(_))
    ));
}

#[test]
fn reissue_silently_overwrites() {
    let scenario = Scenario::new();
    scenario.issue_magnetocorp_paper();
    scenario
        .contract
        .buy(
            &scenario.ctx(),
            "MagnetoCorp",
            1,
            "MagnetoCorp",
            "DigiBank",
            4_900_000,
            "2020-06-05",
        )
        .unwrap();

    // No duplicate-issue guard: the trading history is wiped.
    scenario.issue_magnetocorp_paper();

    let stored = scenario
        .ctx()
        .get_paper(&paper_key("MagnetoCorp", 1).unwrap())
        .unwrap();
    assert_eq!(stored.owner, "MagnetoCorp");
    assert_eq!(stored.current_state, PaperState::Issued);
}
