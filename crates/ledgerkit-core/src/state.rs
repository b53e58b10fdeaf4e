//! The capability contract persistable entities implement.
//!
//! The store manipulates entities only through [`State`]: a type tag, a key,
//! and the key's component tokens. Entities hold their key by composition (a
//! plain string field, skipped during serialization) rather than through any
//! shared base type, and the concrete type is recovered after a read via
//! [`dyn State`](State) downcasts.

use std::any::Any;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::key::split_key;

/// Capability contract for entities held in the world state.
///
/// Implementors are mutable value objects owned by the calling business
/// logic; the store never keeps them beyond a single operation.
pub trait State: Any + Send {
    /// The string tag identifying this entity's concrete schema.
    fn type_tag(&self) -> &str;

    /// The entity's composite key in its flat, un-namespaced form.
    fn key(&self) -> &str;

    /// Replace the entity's key.
    ///
    /// The store calls this after a read so the caller sees the same
    /// un-namespaced key it asked for.
    fn set_key(&mut self, key: String);

    /// The key split into its encoded component tokens.
    fn key_parts(&self) -> Vec<String> {
        split_key(self.key())
    }

    /// Upcast for downcasting support.
    fn as_any(&self) -> &dyn Any;

    /// Consuming upcast for downcasting support.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl dyn State {
    /// Borrow the entity as its concrete type, if it is one.
    pub fn downcast_ref<T: State>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Take ownership of the entity as its concrete type, if it is one.
    pub fn downcast<T: State>(self: Box<Self>) -> Option<Box<T>> {
        self.into_any().downcast().ok()
    }
}

/// A registrable entity kind: a [`State`] with a compile-time tag and a
/// serde representation.
///
/// The associated tag is what [`TypeRegistry::register`] keys the decode
/// factory under, and what implementors should return from
/// [`State::type_tag`].
///
/// [`TypeRegistry::register`]: crate::registry::TypeRegistry::register
pub trait StateType: State + Serialize + DeserializeOwned {
    /// The type tag written into this kind's envelopes.
    const TAG: &'static str;
}
