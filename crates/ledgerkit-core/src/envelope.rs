//! The type-tagged envelope: an entity's persisted byte form.
//!
//! An envelope is the entity's own JSON fields plus an injected
//! [`TYPE_FIELD`] equal to its declared tag. Decoding reads the tag first,
//! resolves it through the active [`TypeRegistry`], and only then decodes
//! the full payload into the registered concrete type.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::registry::TypeRegistry;
use crate::state::State;

/// Field name carrying the type tag inside a persisted envelope.
pub const TYPE_FIELD: &str = "type";

/// Encode an entity into its tagged envelope bytes.
///
/// The entity is serialized generically, the [`TYPE_FIELD`] is injected with
/// the entity's declared tag, and the combined object is re-encoded. An
/// entity field already named `type` is silently overwritten; avoiding the
/// collision is the caller's responsibility.
///
/// # Errors
///
/// [`CoreError::InvalidEnvelope`] if the entity does not serialize to a
/// JSON object.
pub fn serialize<S>(state: &S) -> Result<Vec<u8>, CoreError>
where
    S: State + Serialize,
{
    let mut value =
        serde_json::to_value(state).map_err(|e| CoreError::InvalidEnvelope(e.to_string()))?;

    let Value::Object(fields) = &mut value else {
        return Err(CoreError::InvalidEnvelope(
            "entity did not serialize to an object".to_owned(),
        ));
    };
    fields.insert(
        TYPE_FIELD.to_owned(),
        Value::String(state.type_tag().to_owned()),
    );

    serde_json::to_vec(&value).map_err(|e| CoreError::InvalidEnvelope(e.to_string()))
}

/// Decode envelope bytes into whichever concrete type the tag names.
///
/// # Errors
///
/// - [`CoreError::InvalidEnvelope`] if the bytes are not well-formed JSON or
///   carry no string [`TYPE_FIELD`].
/// - [`CoreError::TypeNotRegistered`] if the tag has no entry in `registry`.
pub fn deserialize(bytes: &[u8], registry: &TypeRegistry) -> Result<Box<dyn State>, CoreError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| CoreError::InvalidEnvelope(e.to_string()))?;

    let tag = value
        .get(TYPE_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            CoreError::InvalidEnvelope(format!("missing \"{TYPE_FIELD}\" field"))
        })?;

    let decode = registry.resolve(tag)?;
    decode(bytes)
}

/// Decode envelope bytes directly into a known target type, bypassing the
/// registry.
pub fn deserialize_to_type<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CoreError> {
    serde_json::from_slice(bytes).map_err(|e| CoreError::InvalidEnvelope(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use serde::Deserialize;

    use super::*;
    use crate::state::StateType;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Voucher {
        #[serde(skip)]
        key: String,
        holder: String,
        amount: u64,
    }

    impl State for Voucher {
        fn type_tag(&self) -> &str {
            Self::TAG
        }

        fn key(&self) -> &str {
            &self.key
        }

        fn set_key(&mut self, key: String) {
            self.key = key;
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn into_any(self: Box<Self>) -> Box<dyn Any> {
            self
        }
    }

    impl StateType for Voucher {
        const TAG: &'static str = "test.voucher";
    }

    fn sample() -> Voucher {
        Voucher {
            key: String::new(),
            holder: "DigiBank".to_owned(),
            amount: 250,
        }
    }

    #[test]
    fn test_serialize_injects_type_field() {
        let bytes = serialize(&sample()).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value[TYPE_FIELD], Voucher::TAG);
        assert_eq!(value["holder"], "DigiBank");
        assert_eq!(value["amount"], 250);
    }

    #[test]
    fn test_round_trip_recovers_value_and_type() {
        let mut registry = TypeRegistry::new();
        registry.register::<Voucher>();

        let bytes = serialize(&sample()).unwrap();
        let state = deserialize(&bytes, &registry).unwrap();

        assert_eq!(state.type_tag(), Voucher::TAG);
        let voucher = state.downcast::<Voucher>().unwrap();
        assert_eq!(*voucher, sample());
    }

    #[test]
    fn test_deserialize_to_type_bypasses_registry() {
        let bytes = serialize(&sample()).unwrap();
        let voucher: Voucher = deserialize_to_type(&bytes).unwrap();
        assert_eq!(voucher, sample());
    }

    #[test]
    fn test_malformed_bytes_are_invalid_envelope() {
        let registry = TypeRegistry::new();
        let err = deserialize(b"not json", &registry).err().unwrap();
        assert!(matches!(err, CoreError::InvalidEnvelope(_)));
    }

    #[test]
    fn test_missing_tag_is_invalid_envelope() {
        let registry = TypeRegistry::new();
        let err = deserialize(b"{\"holder\":\"x\"}", &registry).err().unwrap();
        assert!(matches!(err, CoreError::InvalidEnvelope(_)));
    }

    #[test]
    fn test_unregistered_tag_is_reported() {
        let registry = TypeRegistry::new();
        let bytes = serialize(&sample()).unwrap();
        let err = deserialize(&bytes, &registry).err().unwrap();
        assert!(matches!(err, CoreError::TypeNotRegistered(tag) if tag == Voucher::TAG));
    }
}
