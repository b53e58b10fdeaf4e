//! # Ledgerkit Papernet
//!
//! The illustrative business contract: commercial paper issue/buy/redeem,
//! expressed as state transitions over one entity kind and consuming the
//! generic persistence layer.
//!
//! ## Lifecycle
//!
//! A paper moves `ISSUED -> TRADING -> REDEEMED` (terminal). Its key is the
//! `(issuer, paper_number)` tuple.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use ledgerkit_papernet::{CommercialPaperContract, PaperContext};
//! use ledgerkit_store::MemoryWorldState;
//!
//! let world = Arc::new(MemoryWorldState::new());
//! let ctx = PaperContext::new(world);
//! let contract = CommercialPaperContract;
//!
//! contract
//!     .issue(&ctx, "MagnetoCorp", 1, "2020-05-31", "2020-11-30", 5_000_000)
//!     .unwrap();
//! contract
//!     .buy(&ctx, "MagnetoCorp", 1, "MagnetoCorp", "DigiBank", 4_900_000, "2020-06-05")
//!     .unwrap();
//! ```

pub mod context;
pub mod contract;
pub mod error;
pub mod paper;

pub use context::{PaperContext, PAPER_NAMESPACE};
pub use contract::CommercialPaperContract;
pub use error::ContractError;
pub use paper::{paper_key, CommercialPaper, PaperState};
