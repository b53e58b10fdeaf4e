//! Per-context mapping from type tag to decode factory.
//!
//! A registry is built fresh for each transaction context; there is no
//! global type knowledge. A context must register every entity kind it
//! intends to read before decoding envelopes of that kind.

use std::collections::HashMap;
use std::fmt;

use crate::envelope;
use crate::error::CoreError;
use crate::state::{State, StateType};

/// Factory decoding envelope bytes into a boxed concrete entity.
pub type DecodeFn = Box<dyn Fn(&[u8]) -> Result<Box<dyn State>, CoreError> + Send + Sync>;

/// Tag-to-factory map scoped to one transaction context.
#[derive(Default)]
pub struct TypeRegistry {
    entries: HashMap<String, DecodeFn>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity kind under its declared tag.
    ///
    /// Idempotent upsert: registering the same tag again overwrites the
    /// previous factory.
    pub fn register<T: StateType>(&mut self) {
        self.entries.insert(
            T::TAG.to_owned(),
            Box::new(|bytes| {
                let state: T = envelope::deserialize_to_type(bytes)?;
                Ok(Box::new(state) as Box<dyn State>)
            }),
        );
    }

    /// Look up the decode factory for a tag.
    ///
    /// # Errors
    ///
    /// [`CoreError::TypeNotRegistered`] if the tag is absent.
    pub fn resolve(&self, tag: &str) -> Result<&DecodeFn, CoreError> {
        self.entries
            .get(tag)
            .ok_or_else(|| CoreError::TypeNotRegistered(tag.to_owned()))
    }

    /// Whether a tag is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the registered tags.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
