use serde_json::Value;

use crate::{
    addresses::ContractName,
    error::Result,
    provider::Provider,
    types::{MethodSpec, Params},
};

pub const GET_PRICE_CHANGE_THRESHOLD: MethodSpec =
    MethodSpec::readonly("getPriceChangeThreshold", &[]);

pub const METHODS: &[MethodSpec] = &[GET_PRICE_CHANGE_THRESHOLD];

contract_surface!(Rebalancing, ContractName::Rebalancing);

impl<P: Provider> Rebalancing<P> {
    pub async fn get_price_change_threshold(&self) -> Result<Value> {
        self.contract
            .query(&GET_PRICE_CHANGE_THRESHOLD, Params::new())
            .await
    }
}
