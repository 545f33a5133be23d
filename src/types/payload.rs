use alloy::primitives::U256;
use serde_json::{Map, Value, json};

use super::{Address, Params, hex};

/// How the payload is executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallKind {
    /// Read-only `icx_call`.
    Query,
    /// State-changing `icx_sendTransaction` carrying `value` loop.
    Transaction { value: U256 },
}

/// Structured request to a contract method.
///
/// Built by [`crate::contract::Contract::params_builder`] and consumed by a
/// single [`crate::contract::Contract::call`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallPayload {
    to: Address,
    from: Option<Address>,
    method: &'static str,
    params: Params,
    kind: CallKind,
    height: Option<u64>,
}

impl CallPayload {
    pub(crate) fn new(
        to: Address,
        from: Option<Address>,
        method: &'static str,
        params: Params,
        kind: CallKind,
    ) -> Self {
        Self {
            to,
            from,
            method,
            params,
            kind,
            height: None,
        }
    }

    /// Same query evaluated at the given block height.
    pub fn at_height(mut self, height: u64) -> Self {
        self.height = Some(height);
        self
    }

    pub(crate) fn with_value(mut self, value: U256) -> Self {
        if let CallKind::Transaction { value: v } = &mut self.kind {
            *v = value;
        }
        self
    }

    pub fn to(&self) -> &Address {
        &self.to
    }

    pub fn from(&self) -> Option<&Address> {
        self.from.as_ref()
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn kind(&self) -> CallKind {
        self.kind
    }

    pub fn height(&self) -> Option<u64> {
        self.height
    }

    /// `data` section shared by calls and transactions.
    pub(crate) fn data(&self) -> Value {
        let mut data = Map::new();
        data.insert("method".to_string(), Value::from(self.method));
        if !self.params.is_empty() {
            data.insert(
                "params".to_string(),
                Value::Object(self.params.clone().into_iter().collect()),
            );
        }
        Value::Object(data)
    }

    /// Params object of the `icx_call` request.
    pub fn to_call_params(&self) -> Value {
        let mut params = json!({
            "to": self.to,
            "dataType": "call",
            "data": self.data(),
        });
        if let Some(from) = &self.from {
            params["from"] = Value::from(from);
        }
        if let Some(height) = self.height {
            params["height"] = Value::from(hex(U256::from(height)));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loans() -> Address {
        "cx66d4d90f5f113eba575bf793570135f9b10cece1".parse().unwrap()
    }

    #[test]
    fn test_call_params_without_args() {
        let payload = CallPayload::new(
            loans(),
            None,
            "getAvailableAssets",
            Params::new(),
            CallKind::Query,
        );
        assert_eq!(
            payload.to_call_params(),
            json!({
                "to": "cx66d4d90f5f113eba575bf793570135f9b10cece1",
                "dataType": "call",
                "data": { "method": "getAvailableAssets" },
            })
        );
    }

    #[test]
    fn test_call_params_with_sender_and_height() {
        let owner: Address = "hxe7af5fcfd8dfc67530a01a0e403882687528dfcb".parse().unwrap();
        let mut params = Params::new();
        params.insert("_owner".to_string(), Value::from(&owner));
        let payload = CallPayload::new(
            loans(),
            Some(owner),
            "getAccountPositions",
            params,
            CallKind::Query,
        )
        .at_height(26);
        assert_eq!(
            payload.to_call_params(),
            json!({
                "to": "cx66d4d90f5f113eba575bf793570135f9b10cece1",
                "from": "hxe7af5fcfd8dfc67530a01a0e403882687528dfcb",
                "height": "0x1a",
                "dataType": "call",
                "data": {
                    "method": "getAccountPositions",
                    "params": { "_owner": "hxe7af5fcfd8dfc67530a01a0e403882687528dfcb" },
                },
            })
        );
    }
}
