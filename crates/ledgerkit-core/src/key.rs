//! Composite key construction and tokenization.
//!
//! A key is an ordered tuple of components, each JSON-encoded independently
//! (so strings stay quoted and numbers stay bare), joined with [`SEPARATOR`].
//! Separator and escape characters occurring *inside* an encoded component
//! are backslash-escaped, which makes the join injective: distinct component
//! tuples always produce distinct keys, and [`split_key`] recovers exactly
//! the original encoded tokens.
//!
//! Tokens are returned in encoded form. Callers that need typed values
//! decode each token themselves (e.g. with `serde_json::from_str`).

use serde_json::Value;

use crate::error::CoreError;

/// Separator joining encoded key components.
pub const SEPARATOR: char = ':';

/// Escape character for separators embedded in encoded components.
const ESCAPE: char = '\\';

/// Build a composite key from ordered components.
///
/// Each component is JSON-encoded on its own, escaped, and the results are
/// joined with [`SEPARATOR`]. Same components in the same order always yield
/// the same key.
///
/// # Errors
///
/// Returns [`CoreError::Encoding`] with the offending component's position
/// if a component cannot be encoded.
pub fn make_key(parts: &[Value]) -> Result<String, CoreError> {
    let mut encoded = Vec::with_capacity(parts.len());

    for (index, part) in parts.iter().enumerate() {
        let token = serde_json::to_string(part)
            .map_err(|source| CoreError::Encoding { index, source })?;
        encoded.push(escape(&token));
    }

    Ok(encoded.join(&SEPARATOR.to_string()))
}

/// Split a composite key back into its encoded component tokens.
///
/// The inverse of the join performed by [`make_key`]: escapes are honored
/// and removed, so each returned token is the component's plain JSON
/// encoding. Tokens are not decoded to typed values.
pub fn split_key(key: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = key.chars();

    while let Some(ch) = chars.next() {
        if ch == ESCAPE {
            // An escape at end-of-string has nothing to protect; drop it.
            if let Some(next) = chars.next() {
                current.push(next);
            }
        } else if ch == SEPARATOR {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }

    tokens.push(current);
    tokens
}

fn escape(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for ch in token.chars() {
        if ch == ESCAPE || ch == SEPARATOR {
            out.push(ESCAPE);
        }
        out.push(ch);
    }
    out
}
