//! # Ledgerkit Core
//!
//! Pure primitives for ledgerkit: composite keys, typed envelopes, and the
//! per-context type registry.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over entity values and their persisted byte form.
//!
//! ## Key Types
//!
//! - [`State`] - The capability contract every persistable entity implements
//! - [`StateType`] - Compile-time type tag for registrable entity kinds
//! - [`TypeRegistry`] - Per-context mapping from type tag to decode factory
//!
//! ## Composite Keys
//!
//! Entity keys are built from ordered component tuples, each component
//! JSON-encoded independently and joined with an escaped separator. See the
//! [`key`] module.
//!
//! ## Envelopes
//!
//! Entities persist as JSON objects carrying an injected `type` field equal
//! to their declared tag, so reads can recover the concrete type through a
//! registry without the caller naming it. See the [`envelope`] module.

pub mod envelope;
pub mod error;
pub mod key;
pub mod registry;
pub mod state;

pub use envelope::{deserialize, deserialize_to_type, serialize, TYPE_FIELD};
pub use error::CoreError;
pub use key::{make_key, split_key, SEPARATOR};
pub use registry::{DecodeFn, TypeRegistry};
pub use state::{State, StateType};
