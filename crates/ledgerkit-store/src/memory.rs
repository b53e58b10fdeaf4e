//! In-memory implementation of the WorldState trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite but
//! keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::BackendError;
use crate::traits::WorldState;

/// In-memory world state.
///
/// All data is lost when the value is dropped. Thread-safe via RwLock.
#[derive(Default)]
pub struct MemoryWorldState {
    inner: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryWorldState {
    /// Create a new empty in-memory world state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Whether the world state is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().is_empty()
    }
}

impl WorldState for MemoryWorldState {
    fn put(&self, key: &str, value: &[u8]) -> Result<(), BackendError> {
        let mut inner = self.inner.write().unwrap();
        inner.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        let inner = self.inner.read().unwrap();
        Ok(inner.get(key).cloned())
    }
}
