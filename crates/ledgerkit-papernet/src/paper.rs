//! The commercial paper entity.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

use ledgerkit_core::{deserialize_to_type, make_key, CoreError, State, StateType};

/// Lifecycle state of a commercial paper.
///
/// `Redeemed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaperState {
    Issued,
    Trading,
    Redeemed,
}

impl fmt::Display for PaperState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaperState::Issued => "ISSUED",
            PaperState::Trading => "TRADING",
            PaperState::Redeemed => "REDEEMED",
        };
        f.write_str(name)
    }
}

/// Derive the un-namespaced key for a paper from its identifying components.
pub fn paper_key(issuer: &str, paper_number: u64) -> Result<String, CoreError> {
    make_key(&[json!(issuer), json!(paper_number)])
}

/// A commercial paper, keyed by `(issuer, paper_number)`.
///
/// The key is held by composition and skipped during serialization; the
/// persisted form is the remaining fields plus the injected type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommercialPaper {
    #[serde(skip)]
    key: String,
    pub issuer: String,
    pub owner: String,
    pub paper_number: u64,
    pub issue_date_time: String,
    pub maturity_date_time: String,
    pub face_value: u64,
    pub current_state: PaperState,
}

impl CommercialPaper {
    /// Construct a freshly issued paper, owned by its issuer.
    pub fn new(
        issuer: impl Into<String>,
        paper_number: u64,
        issue_date_time: impl Into<String>,
        maturity_date_time: impl Into<String>,
        face_value: u64,
    ) -> Result<Self, CoreError> {
        let issuer = issuer.into();
        let key = paper_key(&issuer, paper_number)?;

        Ok(Self {
            key,
            owner: issuer.clone(),
            issuer,
            paper_number,
            issue_date_time: issue_date_time.into(),
            maturity_date_time: maturity_date_time.into(),
            face_value,
            current_state: PaperState::Issued,
        })
    }

    /// Decode a paper directly from envelope bytes, bypassing any registry.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, CoreError> {
        deserialize_to_type(bytes)
    }

    pub fn is_issued(&self) -> bool {
        self.current_state == PaperState::Issued
    }

    pub fn is_trading(&self) -> bool {
        self.current_state == PaperState::Trading
    }

    pub fn is_redeemed(&self) -> bool {
        self.current_state == PaperState::Redeemed
    }

    pub fn set_issued(&mut self) {
        self.current_state = PaperState::Issued;
    }

    pub fn set_trading(&mut self) {
        self.current_state = PaperState::Trading;
    }

    pub fn set_redeemed(&mut self) {
        self.current_state = PaperState::Redeemed;
    }
}

impl State for CommercialPaper {
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

impl StateType for CommercialPaper {
    const TAG: &'static str = "org.papernet.commercialpaper";
}
