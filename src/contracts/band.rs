use serde_json::Value;

use crate::{
    addresses::ContractName,
    error::Result,
    provider::Provider,
    types::{MethodSpec, ParamSpec, Params},
};

pub const GET_REFERENCE_DATA: MethodSpec = MethodSpec::readonly(
    "getReferenceData",
    &[ParamSpec::required("_base"), ParamSpec::required("_quote")],
);

pub const METHODS: &[MethodSpec] = &[GET_REFERENCE_DATA];

contract_surface!(
    /// Band protocol price oracle.
    Band,
    ContractName::Band
);

impl<P: Provider> Band<P> {
    /// Reference price of `base` in `quote`, the `rate` field is in loop.
    pub async fn get_reference_data(&self, base: &str, quote: &str) -> Result<Value> {
        let params = Params::from([
            ("_base".to_string(), Value::from(base)),
            ("_quote".to_string(), Value::from(quote)),
        ]);
        self.contract.query(&GET_REFERENCE_DATA, params).await
    }
}
