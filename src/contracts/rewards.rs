use alloy::primitives::{B256, U256};
use serde_json::Value;

use crate::{
    addresses::ContractName,
    error::Result,
    provider::Provider,
    types::{MethodSpec, ParamSpec, Params},
};

pub const GET_BALN_HOLDING: MethodSpec =
    MethodSpec::readonly("getBalnHolding", &[ParamSpec::account("_holder")]);
pub const GET_RECIPIENTS_SPLIT: MethodSpec = MethodSpec::readonly("getRecipientsSplit", &[]);
pub const CLAIM_REWARDS: MethodSpec = MethodSpec::external("claimRewards", &[]);

pub const METHODS: &[MethodSpec] = &[GET_BALN_HOLDING, GET_RECIPIENTS_SPLIT, CLAIM_REWARDS];

contract_surface!(
    /// BALN emission to borrowers and liquidity providers.
    Rewards,
    ContractName::Rewards
);

impl<P: Provider> Rewards<P> {
    /// BALN rewards accrued by the bound account, in loop.
    pub async fn get_baln_holding(&self) -> Result<Value> {
        self.contract.query(&GET_BALN_HOLDING, Params::new()).await
    }

    pub async fn get_recipients_split(&self) -> Result<Value> {
        self.contract
            .query(&GET_RECIPIENTS_SPLIT, Params::new())
            .await
    }

    pub async fn claim_rewards(&self) -> Result<B256> {
        self.contract
            .transact(&CLAIM_REWARDS, Params::new(), U256::ZERO)
            .await
    }
}
