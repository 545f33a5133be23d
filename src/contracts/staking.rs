use alloy::primitives::{B256, U256};
use serde_json::Value;

use crate::{
    addresses::ContractName,
    error::Result,
    provider::Provider,
    types::{MethodSpec, ParamSpec, Params},
};

pub const GET_TODAY_RATE: MethodSpec = MethodSpec::readonly("getTodayRate", &[]);
pub const GET_TOTAL_STAKE: MethodSpec = MethodSpec::readonly("getTotalStake", &[]);
pub const STAKE_ICX: MethodSpec = MethodSpec::payable("stakeICX", &[ParamSpec::account("_to")]);

pub const METHODS: &[MethodSpec] = &[GET_TODAY_RATE, GET_TOTAL_STAKE, STAKE_ICX];

contract_surface!(
    /// ICX liquid staking, issues sICX.
    Staking,
    ContractName::Staking
);

impl<P: Provider> Staking<P> {
    /// sICX/ICX exchange rate in loop.
    pub async fn get_today_rate(&self) -> Result<Value> {
        self.contract.query(&GET_TODAY_RATE, Params::new()).await
    }

    pub async fn get_total_stake(&self) -> Result<Value> {
        self.contract.query(&GET_TOTAL_STAKE, Params::new()).await
    }

    /// Stakes `value` loop of ICX, minted sICX goes to the bound account.
    pub async fn stake_icx(&self, value: U256) -> Result<B256> {
        self.contract.transact(&STAKE_ICX, Params::new(), value).await
    }
}
