use alloy::primitives::{B256, U256};
use itertools::Itertools;
use serde_json::{Map, Value};
use sha3::{Digest, Sha3_256};

use super::{Address, CallKind, CallPayload, hex};

const TX_VERSION: &str = "0x3";
const SIGNING_PREFIX: &str = "icx_sendTransaction";

/// Unsigned `icx_sendTransaction` request calling a contract method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    from: Address,
    to: Address,
    value: U256,
    step_limit: U256,
    timestamp: u64,
    nid: u32,
    nonce: Option<U256>,
    data: Value,
}

impl Transaction {
    /// Stamps the payload with the sender and network parameters.
    ///
    /// `timestamp` is in microseconds since the Unix epoch.
    pub fn from_payload(
        payload: &CallPayload,
        from: Address,
        nid: u32,
        step_limit: U256,
        timestamp: u64,
    ) -> Self {
        let value = match payload.kind() {
            CallKind::Transaction { value } => value,
            CallKind::Query => U256::ZERO,
        };
        Self {
            from,
            to: payload.to().clone(),
            value,
            step_limit,
            timestamp,
            nid,
            nonce: None,
            data: payload.data(),
        }
    }

    pub fn with_nonce(mut self, nonce: U256) -> Self {
        self.nonce = Some(nonce);
        self
    }

    pub fn from(&self) -> &Address {
        &self.from
    }

    pub fn to(&self) -> &Address {
        &self.to
    }

    pub fn value(&self) -> U256 {
        self.value
    }

    pub fn step_limit(&self) -> U256 {
        self.step_limit
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn nid(&self) -> u32 {
        self.nid
    }

    /// Transaction fields as sent in the request params, without signature.
    pub fn to_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("version".to_string(), Value::from(TX_VERSION));
        params.insert("from".to_string(), Value::from(&self.from));
        params.insert("to".to_string(), Value::from(&self.to));
        if !self.value.is_zero() {
            params.insert("value".to_string(), Value::from(hex(self.value)));
        }
        params.insert("stepLimit".to_string(), Value::from(hex(self.step_limit)));
        params.insert(
            "timestamp".to_string(),
            Value::from(hex(U256::from(self.timestamp))),
        );
        params.insert("nid".to_string(), Value::from(hex(U256::from(self.nid))));
        if let Some(nonce) = self.nonce {
            params.insert("nonce".to_string(), Value::from(hex(nonce)));
        }
        params.insert("dataType".to_string(), Value::from("call"));
        params.insert("data".to_string(), self.data.clone());
        params
    }

    /// Canonical string the signature is computed over.
    pub fn serialize(&self) -> String {
        serialize_for_signing(&self.to_params())
    }

    /// SHA3-256 of [`Self::serialize`], also the transaction hash.
    pub fn hash(&self) -> B256 {
        B256::from_slice(&Sha3_256::digest(self.serialize().as_bytes()))
    }
}

/// Signed transaction ready to be submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedTransaction {
    transaction: Transaction,
    signature: String,
}

impl SignedTransaction {
    pub(crate) fn new(transaction: Transaction, signature: String) -> Self {
        Self {
            transaction,
            signature,
        }
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// Base64 encoded `r || s || recovery id`.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn hash(&self) -> B256 {
        self.transaction.hash()
    }

    pub fn to_params(&self) -> Value {
        let mut params = self.transaction.to_params();
        params.insert("signature".to_string(), Value::from(self.signature.as_str()));
        Value::Object(params)
    }
}

/// Serializes transaction params into ICON's signing format:
/// `icx_sendTransaction.` followed by the sorted `key.value` pairs.
pub fn serialize_for_signing(params: &Map<String, Value>) -> String {
    let body = encode_object(params, |k| k != "signature");
    format!("{SIGNING_PREFIX}.{body}")
}

fn encode_object(map: &Map<String, Value>, include: impl Fn(&str) -> bool) -> String {
    map.iter()
        .filter(|(k, _)| include(k))
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(k, v)| format!("{}.{}", escape(k), encode(v)))
        .join(".")
}

fn encode(value: &Value) -> String {
    match value {
        Value::Null => "\\0".to_string(),
        Value::Bool(b) => if *b { "0x1" } else { "0x0" }.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => escape(s),
        Value::Array(items) => format!("[{}]", items.iter().map(encode).join(".")),
        Value::Object(map) => format!("{{{}}}", encode_object(map, |_| true)),
    }
}

fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '.' | '{' | '}' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::Params;

    #[test]
    fn test_serialize_nested() {
        let params = json!({
            "version": "0x3",
            "from": "hxbe258ceb872e08851f1f59694dac2558708ece11",
            "to": "cxb0776ee37f5b45bfaea8cff1d8232fbb6122ec32",
            "stepLimit": "0x12345",
            "timestamp": "0x563a6cf330136",
            "nid": "0x3f",
            "nonce": "0x1",
            "signature": "ignored",
            "dataType": "call",
            "data": {
                "method": "transfer",
                "params": {
                    "to": "hxab2d8215eab14bc6bdd8bfb2c8151257032ecd8b",
                    "value": "0x1",
                    "array0": ["1", "2.21"],
                    "array1": [{ "hash": "0xabc", "value": "0x123" }, null],
                },
            },
        });
        let Value::Object(params) = params else {
            unreachable!()
        };
        assert_eq!(
            serialize_for_signing(&params),
            "icx_sendTransaction.data.{method.transfer.params.{array0.[1.2\\.21].\
             array1.[{hash.0xabc.value.0x123}.\\0].to.hxab2d8215eab14bc6bdd8bfb2c8151257032ecd8b.\
             value.0x1}}.dataType.call.from.hxbe258ceb872e08851f1f59694dac2558708ece11.nid.0x3f.\
             nonce.0x1.stepLimit.0x12345.timestamp.0x563a6cf330136.\
             to.cxb0776ee37f5b45bfaea8cff1d8232fbb6122ec32.version.0x3"
        );
    }

    #[test]
    fn test_transaction_from_payload() {
        let from: Address = "hxe7af5fcfd8dfc67530a01a0e403882687528dfcb".parse().unwrap();
        let to: Address = "cx43e2eec79eb76293c298f2b17aec06097be606e0".parse().unwrap();
        let mut params = Params::new();
        params.insert("_to".to_string(), Value::from(&from));
        let payload = CallPayload::new(
            to,
            Some(from.clone()),
            "stakeICX",
            params,
            CallKind::Transaction { value: U256::ZERO },
        )
        .with_value(U256::from(10u64.pow(18)));

        let tx = Transaction::from_payload(&payload, from, 1, U256::from(3_000_000), 1_000_000);
        assert_eq!(
            Value::Object(tx.to_params()),
            json!({
                "version": "0x3",
                "from": "hxe7af5fcfd8dfc67530a01a0e403882687528dfcb",
                "to": "cx43e2eec79eb76293c298f2b17aec06097be606e0",
                "value": "0xde0b6b3a7640000",
                "stepLimit": "0x2dc6c0",
                "timestamp": "0xf4240",
                "nid": "0x1",
                "dataType": "call",
                "data": {
                    "method": "stakeICX",
                    "params": { "_to": "hxe7af5fcfd8dfc67530a01a0e403882687528dfcb" },
                },
            })
        );
        assert!(tx.serialize().starts_with("icx_sendTransaction.data.{method.stakeICX."));
        assert_eq!(tx.hash(), tx.clone().hash());
    }
}
