//! # Ledgerkit Store
//!
//! World-state abstraction for ledgerkit. Provides a trait-based interface
//! over an external ordered key-value backend, with in-memory and SQLite
//! implementations, and the transaction context that composes the backend
//! with the envelope codec and type registry.
//!
//! ## Overview
//!
//! The store module abstracts the world state behind the [`WorldState`]
//! trait, keeping the persistence layer backend-agnostic. Durable storage is
//! [`SqliteWorldState`]; [`MemoryWorldState`] covers tests and ephemeral use.
//!
//! ## Key Types
//!
//! - [`WorldState`] - Put/Get/composite-key contract the backend implements
//! - [`TransactionContext`] - Namespace-bound store exposing Add/Get/Update
//! - [`ClientIdentity`] - Opaque caller identity carried by the context
//! - [`MemoryWorldState`] / [`SqliteWorldState`] - Bundled backends
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use ledgerkit_store::{MemoryWorldState, TransactionContext};
//!
//! let world = Arc::new(MemoryWorldState::new());
//! let ctx = TransactionContext::new(world, "org.example.widgetlist");
//! assert_eq!(ctx.namespace(), "org.example.widgetlist");
//! // ctx.use_type::<Widget>() before reading widget envelopes back.
//! ```
//!
//! ## Design Notes
//!
//! - **Upsert writes**: `add_state` and `update_state` share one write path;
//!   no existence check, last write wins.
//! - **Registry gating**: reads decode through the context's own registry;
//!   writes only need the entity's tag value.
//! - **No internal serialization of races**: conflicting concurrent writes
//!   to one key are resolved by the hosting commit-validation platform.

pub mod context;
pub mod error;
pub mod memory;
pub mod sqlite;
pub mod traits;

pub use context::{ClientIdentity, TransactionContext};
pub use error::{BackendError, Result, StoreError};
pub use memory::MemoryWorldState;
pub use sqlite::SqliteWorldState;
pub use traits::{composite_key, WorldState};
