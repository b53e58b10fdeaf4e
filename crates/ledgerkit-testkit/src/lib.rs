//! # Ledgerkit Testkit
//!
//! Testing utilities for ledgerkit.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Generators**: Proptest strategies for key components and commercial
//!   papers
//! - **Fixtures**: Helper structs for setting up store and contract test
//!   scenarios
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use ledgerkit_core::make_key;
//! use ledgerkit_testkit::generators::key_components;
//!
//! proptest! {
//!     #[test]
//!     fn keys_are_deterministic(parts in key_components()) {
//!         prop_assert_eq!(make_key(&parts).unwrap(), make_key(&parts).unwrap());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up a world state with a ready-made paper:
//!
//! ```rust
//! use ledgerkit_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let paper = fixture.issue_sample_paper();
//! assert!(paper.is_issued());
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{sample_paper, TestFixture};
pub use generators::{key_component, key_components, paper};
