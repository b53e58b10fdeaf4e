//! Proptest generators for property-based testing.

use proptest::prelude::*;
use serde_json::Value;

use ledgerkit_papernet::CommercialPaper;

/// Generate one key component: a printable string (separator characters
/// included on purpose), an integer, or a boolean.
pub fn key_component() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[ -~]{0,24}".prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

/// Generate an ordered component tuple of 1 to 5 elements.
pub fn key_components() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(key_component(), 1..6)
}

/// Generate an issuer name.
pub fn issuer() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{2,15}"
}

/// Generate an ISO-date-looking string.
pub fn date_time() -> impl Strategy<Value = String> {
    (2000u32..2100, 1u32..13, 1u32..29)
        .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

/// Generate a freshly issued commercial paper.
pub fn paper() -> impl Strategy<Value = CommercialPaper> {
    (
        issuer(),
        any::<u64>(),
        date_time(),
        date_time(),
        1u64..=100_000_000,
    )
        .prop_map(|(issuer, number, issued, matures, face_value)| {
            CommercialPaper::new(issuer, number, issued, matures, face_value)
                .expect("issuer and number always encode")
        })
}
