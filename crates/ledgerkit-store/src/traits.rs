//! WorldState trait: the abstract interface over the key-value backend.
//!
//! The hosting platform owns the real world state; this trait is the seam
//! the transaction context talks through. Implementations here are the
//! in-memory backend (tests, ephemeral use) and a SQLite adapter.

use crate::error::BackendError;

/// Delimiter used by the default composite-key derivation.
///
/// U+0000 cannot appear in namespaces or key components, which is what makes
/// the derivation unambiguous.
const DELIMITER: char = '\u{0}';

/// The world-state contract consumed by the transaction context.
///
/// Absent keys are a defined outcome (`Ok(None)`), not an error. Backend
/// failures surface as [`BackendError`] and are propagated to callers
/// unchanged.
pub trait WorldState: Send + Sync {
    /// Write a value under a backend-level key. Unconditional overwrite.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), BackendError>;

    /// Read the value under a backend-level key, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError>;

    /// Derive the backend-level key for a namespace and ordered components.
    ///
    /// The backend owns composite-key derivation; callers only supply the
    /// ordered component list. The default is the NUL-delimited form of
    /// [`composite_key`].
    fn make_namespaced_key(
        &self,
        namespace: &str,
        parts: &[String],
    ) -> Result<String, BackendError> {
        composite_key(namespace, parts)
    }
}

/// Default composite-key derivation: `\0 namespace \0 part \0 part \0 ...`.
///
/// # Errors
///
/// [`BackendError::InvalidKey`] if the namespace or any component contains
/// U+0000.
pub fn composite_key(namespace: &str, parts: &[String]) -> Result<String, BackendError> {
    if namespace.contains(DELIMITER) {
        return Err(BackendError::InvalidKey(
            "namespace contains U+0000".to_owned(),
        ));
    }

    let mut key = String::with_capacity(namespace.len() + 2);
    key.push(DELIMITER);
    key.push_str(namespace);
    key.push(DELIMITER);

    for (index, part) in parts.iter().enumerate() {
        if part.contains(DELIMITER) {
            return Err(BackendError::InvalidKey(format!(
                "key component {index} contains U+0000"
            )));
        }
        key.push_str(part);
        key.push(DELIMITER);
    }

    Ok(key)
}
