use alloy::primitives::{B256, U256};
use serde_json::Value;

use crate::{
    addresses::ContractName,
    error::Result,
    provider::Provider,
    types::{MethodSpec, ParamSpec, Params},
};

pub const GET_BALANCES: MethodSpec = MethodSpec::readonly("getBalances", &[]);
pub const GET_DIVIDENDS_PERCENTAGE: MethodSpec =
    MethodSpec::readonly("getDividendsPercentage", &[]);
pub const GET_USER_DIVIDENDS: MethodSpec =
    MethodSpec::readonly("getUserDividends", &[ParamSpec::account("_account")]);
pub const CLAIM: MethodSpec = MethodSpec::external("claim", &[]);

pub const METHODS: &[MethodSpec] = &[
    GET_BALANCES,
    GET_DIVIDENDS_PERCENTAGE,
    GET_USER_DIVIDENDS,
    CLAIM,
];

contract_surface!(Dividends, ContractName::Dividends);

impl<P: Provider> Dividends<P> {
    pub async fn get_balances(&self) -> Result<Value> {
        self.contract.query(&GET_BALANCES, Params::new()).await
    }

    pub async fn get_dividends_percentage(&self) -> Result<Value> {
        self.contract
            .query(&GET_DIVIDENDS_PERCENTAGE, Params::new())
            .await
    }

    /// Unclaimed dividends of the bound account per token.
    pub async fn get_user_dividends(&self) -> Result<Value> {
        self.contract.query(&GET_USER_DIVIDENDS, Params::new()).await
    }

    pub async fn claim(&self) -> Result<B256> {
        self.contract.transact(&CLAIM, Params::new(), U256::ZERO).await
    }
}
