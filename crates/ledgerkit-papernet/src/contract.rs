//! The commercial-paper contract operations.
//!
//! Each operation is a self-contained state transition: load (or build) the
//! paper through the context, apply the business rules, write it back. The
//! first failure is returned to the caller; there are no retries here.

use crate::context::PaperContext;
use crate::error::ContractError;
use crate::paper::{paper_key, CommercialPaper};

/// Business logic for handling commercial paper.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommercialPaperContract;

impl CommercialPaperContract {
    /// Issue a commercial paper.
    ///
    /// The new paper is owned by its issuer and starts in `ISSUED`. Upsert
    /// semantics apply: issuing an existing `(issuer, paper_number)` pair
    /// silently overwrites the stored paper.
    pub fn issue(
        &self,
        ctx: &PaperContext,
        issuer: &str,
        paper_number: u64,
        issue_date_time: &str,
        maturity_date_time: &str,
        face_value: u64,
    ) -> Result<CommercialPaper, ContractError> {
        let paper = CommercialPaper::new(
            issuer,
            paper_number,
            issue_date_time,
            maturity_date_time,
            face_value,
        )?;

        ctx.add_paper(&paper)?;
        Ok(paper)
    }

    /// Buy a commercial paper, transferring ownership.
    ///
    /// An `ISSUED` paper moves to `TRADING` on its first purchase; a
    /// `REDEEMED` paper cannot be bought.
    pub fn buy(
        &self,
        ctx: &PaperContext,
        issuer: &str,
        paper_number: u64,
        current_owner: &str,
        new_owner: &str,
        _price: u64,
        _purchase_date_time: &str,
    ) -> Result<CommercialPaper, ContractError> {
        let key = paper_key(issuer, paper_number)?;
        let mut paper = ctx.get_paper(&key)?;

        if paper.owner != current_owner {
            return Err(ContractError::OwnershipMismatch {
                paper: format!("{issuer}{paper_number}"),
                claimed: current_owner.to_owned(),
            });
        }

        if paper.is_issued() {
            paper.set_trading();
        }

        if !paper.is_trading() {
            return Err(ContractError::InvalidStateTransition {
                paper: format!("{issuer}{paper_number}"),
                state: paper.current_state,
            });
        }

        paper.owner = new_owner.to_owned();
        ctx.update_paper(&paper)?;
        Ok(paper)
    }

    /// Redeem a commercial paper.
    ///
    /// The paper is written back with its state field untouched; only a
    /// repeat redemption is rejected.
    pub fn redeem(
        &self,
        ctx: &PaperContext,
        issuer: &str,
        paper_number: u64,
        redeeming_owner: &str,
        _redeem_date_time: &str,
    ) -> Result<CommercialPaper, ContractError> {
        let key = paper_key(issuer, paper_number)?;
        let paper = ctx.get_paper(&key)?;

        if paper.owner != redeeming_owner {
            return Err(ContractError::OwnershipMismatch {
                paper: format!("{issuer}{paper_number}"),
                claimed: redeeming_owner.to_owned(),
            });
        }

        if paper.is_redeemed() {
            return Err(ContractError::AlreadyRedeemed {
                paper: format!("{issuer}{paper_number}"),
            });
        }

        ctx.update_paper(&paper)?;
        Ok(paper)
    }
}
