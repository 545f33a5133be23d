mod method;
mod payload;
mod transaction;

use std::{collections::BTreeMap, fmt, str::FromStr};

use alloy::primitives::U256;

use crate::error::ConfigError;

pub use method::{MethodKind, MethodSpec, ParamSource, ParamSpec};
pub use payload::{CallKind, CallPayload};
pub use transaction::{SignedTransaction, Transaction, serialize_for_signing};

/// Method parameters by name, ordered to keep payloads deterministic.
pub type Params = BTreeMap<String, serde_json::Value>;

const ADDRESS_BODY_LEN: usize = 40;

/// ICON address: `hx` for accounts, `cx` for contracts (SCOREs).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Wraps a known-valid address literal.
    pub(crate) fn from_static(s: &'static str) -> Self {
        debug_assert!(Self::validate(s).is_ok(), "invalid static address {s}");
        Self(s.to_string())
    }

    /// Account address from the trailing 20 bytes of a public key hash.
    pub(crate) fn account_from_key_hash(hash: &[u8]) -> Self {
        Self(format!("hx{}", alloy::hex::encode(&hash[hash.len() - 20..])))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_contract(&self) -> bool {
        self.0.starts_with("cx")
    }

    fn validate(s: &str) -> Result<(), ConfigError> {
        let body = s
            .strip_prefix("hx")
            .or_else(|| s.strip_prefix("cx"))
            .ok_or_else(|| ConfigError::InvalidAddress(s.to_string()))?;
        if body.len() != ADDRESS_BODY_LEN
            || !body
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        {
            return Err(ConfigError::InvalidAddress(s.to_string()));
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::validate(&s)?;
        Ok(Self(s))
    }
}

impl TryFrom<String> for Address {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.0
    }
}

impl From<&Address> for serde_json::Value {
    fn from(value: &Address) -> Self {
        serde_json::Value::String(value.0.clone())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formats an integer the way ICON expects it on the wire, e.g. `0x1bc16d674ec80000`.
pub fn hex(value: U256) -> String {
    format!("0x{value:x}")
}

/// Hex integer parameter value.
pub fn hex_param(value: U256) -> serde_json::Value {
    serde_json::Value::String(hex(value))
}
