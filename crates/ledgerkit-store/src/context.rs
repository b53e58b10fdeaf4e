//! The transaction context: a namespace-bound store over the world state.
//!
//! A context bundles the injected backend handle, the namespace it is
//! scoped to, an optional caller identity, and its own [`TypeRegistry`].
//! Everything is passed in at construction; there are no ambient handles.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use ledgerkit_core::{envelope, split_key, State, StateType, TypeRegistry};

use crate::error::{Result, StoreError};
use crate::traits::WorldState;

/// Opaque caller identity resolved by the hosting platform.
///
/// Available to contract code through the context; the bundled contract's
/// decision logic never consults it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    id: String,
    msp_id: String,
}

impl ClientIdentity {
    /// Create an identity from its resolved id and membership org id.
    pub fn new(id: impl Into<String>, msp_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            msp_id: msp_id.into(),
        }
    }

    /// The caller's unique id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The caller's membership organization id.
    pub fn msp_id(&self) -> &str {
        &self.msp_id
    }
}

/// Transaction-scoped store composing key codec, envelope codec, and type
/// registry over an injected world-state backend.
///
/// Bound to one namespace for its whole lifetime. Reads require the target
/// type to have been registered with [`use_type`](Self::use_type); writes
/// only need the entity's own tag value.
pub struct TransactionContext {
    world: Arc<dyn WorldState>,
    namespace: String,
    registry: TypeRegistry,
    identity: Option<ClientIdentity>,
}

impl TransactionContext {
    /// Create a context over a backend, scoped to a namespace.
    pub fn new(world: Arc<dyn WorldState>, namespace: impl Into<String>) -> Self {
        Self {
            world,
            namespace: namespace.into(),
            registry: TypeRegistry::new(),
            identity: None,
        }
    }

    /// Attach the resolved caller identity.
    pub fn with_identity(mut self, identity: ClientIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// The namespace this context is bound to.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The caller identity, if one was attached.
    pub fn identity(&self) -> Option<&ClientIdentity> {
        self.identity.as_ref()
    }

    /// The context's type registry.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Register an entity kind for reads in this context.
    ///
    /// Must be called before [`get_state`](Self::get_state) can decode
    /// envelopes of this kind; a fresh context starts with no types.
    pub fn use_type<T: StateType>(&mut self) {
        self.registry.register::<T>();
    }

    /// Write an entity into the world state under its derived key.
    ///
    /// Upsert semantics: no existence check, re-adding a key silently
    /// overwrites the previous value.
    pub fn add_state<S>(&self, state: &S) -> Result<()>
    where
        S: State + Serialize,
    {
        self.put_state(state)
    }

    /// Write back a (possibly mutated) entity. Same path as
    /// [`add_state`](Self::add_state): last write wins, no concurrency
    /// check.
    pub fn update_state<S>(&self, state: &S) -> Result<()>
    where
        S: State + Serialize,
    {
        self.put_state(state)
    }

    /// Load the entity stored under an un-namespaced key.
    ///
    /// The envelope is decoded through this context's registry, and the key
    /// passed in is re-attached to the result so the caller round-trips the
    /// same key form it supplied, not the backend's namespaced one.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the backend holds no value.
    /// - [`CoreError::TypeNotRegistered`] (via `Codec`) if the stored tag
    ///   was never registered here.
    ///
    /// [`CoreError::TypeNotRegistered`]: ledgerkit_core::CoreError::TypeNotRegistered
    pub fn get_state(&self, key: &str) -> Result<Box<dyn State>> {
        let parts = split_key(key);
        let backend_key = self.world.make_namespaced_key(&self.namespace, &parts)?;

        let data = self
            .world
            .get(&backend_key)?
            .ok_or_else(|| StoreError::NotFound(key.to_owned()))?;

        debug!(key = %key, bytes = data.len(), "read state");

        let mut state = envelope::deserialize(&data, &self.registry)?;
        state.set_key(key.to_owned());

        Ok(state)
    }

    fn put_state<S>(&self, state: &S) -> Result<()>
    where
        S: State + Serialize,
    {
        let backend_key = self
            .world
            .make_namespaced_key(&self.namespace, &state.key_parts())?;
        let data = envelope::serialize(state)?;

        debug!(key = %state.key(), bytes = data.len(), "writing state");

        self.world.put(&backend_key, &data)?;
        Ok(())
    }
}
