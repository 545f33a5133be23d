use alloy::primitives::{B256, U256};
use serde_json::Value;

use crate::{
    addresses::ContractName,
    error::Result,
    provider::Provider,
    types::{Address, MethodSpec, ParamSpec, Params, hex_param},
};

/// sICX/ICX queue pool.
pub const SICX_ICX_POOL_ID: u64 = 1;
pub const SICX_BNUSD_POOL_ID: u64 = 2;
pub const BALN_BNUSD_POOL_ID: u64 = 3;

pub const GET_PRICE: MethodSpec = MethodSpec::readonly("getPrice", &[ParamSpec::required("_id")]);
pub const GET_POOL_STATS: MethodSpec =
    MethodSpec::readonly("getPoolStats", &[ParamSpec::required("_id")]);
pub const GET_POOL_TOTAL: MethodSpec = MethodSpec::readonly(
    "getPoolTotal",
    &[ParamSpec::required("_id"), ParamSpec::required("_token")],
);
pub const GET_DEPOSIT: MethodSpec = MethodSpec::readonly(
    "getDeposit",
    &[ParamSpec::required("_tokenAddress"), ParamSpec::account("_user")],
);
pub const GET_ICX_BALANCE: MethodSpec =
    MethodSpec::readonly("getICXBalance", &[ParamSpec::account("_address")]);
pub const WITHDRAW: MethodSpec = MethodSpec::external(
    "withdraw",
    &[ParamSpec::required("_token"), ParamSpec::required("_value")],
);
pub const CANCEL_SICX_ICX_ORDER: MethodSpec = MethodSpec::external("cancelSicxicxOrder", &[]);

pub const METHODS: &[MethodSpec] = &[
    GET_PRICE,
    GET_POOL_STATS,
    GET_POOL_TOTAL,
    GET_DEPOSIT,
    GET_ICX_BALANCE,
    WITHDRAW,
    CANCEL_SICX_ICX_ORDER,
];

contract_surface!(
    /// Balanced DEX: liquidity pools and the sICX/ICX queue.
    Dex,
    ContractName::Dex
);

fn pool(id: u64) -> Params {
    Params::from([("_id".to_string(), hex_param(U256::from(id)))])
}

impl<P: Provider> Dex<P> {
    /// Price of the pool's base token in its quote token, in loop.
    pub async fn get_price(&self, pool_id: u64) -> Result<Value> {
        self.contract.query(&GET_PRICE, pool(pool_id)).await
    }

    pub async fn get_pool_stats(&self, pool_id: u64) -> Result<Value> {
        self.contract.query(&GET_POOL_STATS, pool(pool_id)).await
    }

    /// Amount of `token` held by the pool.
    pub async fn get_pool_total(&self, pool_id: u64, token: &Address) -> Result<Value> {
        let mut params = pool(pool_id);
        params.insert("_token".to_string(), Value::from(token));
        self.contract.query(&GET_POOL_TOTAL, params).await
    }

    /// Unused `token` deposit of the bound account.
    pub async fn get_deposit(&self, token: &Address) -> Result<Value> {
        let params = Params::from([("_tokenAddress".to_string(), Value::from(token))]);
        self.contract.query(&GET_DEPOSIT, params).await
    }

    /// ICX the bound account has queued in the sICX/ICX pool.
    pub async fn get_icx_balance(&self) -> Result<Value> {
        self.contract.query(&GET_ICX_BALANCE, Params::new()).await
    }

    pub async fn withdraw(&self, token: &Address, value: U256) -> Result<B256> {
        let params = Params::from([
            ("_token".to_string(), Value::from(token)),
            ("_value".to_string(), hex_param(value)),
        ]);
        self.contract.transact(&WITHDRAW, params, U256::ZERO).await
    }

    pub async fn cancel_sicx_icx_order(&self) -> Result<B256> {
        self.contract
            .transact(&CANCEL_SICX_ICX_ORDER, Params::new(), U256::ZERO)
            .await
    }
}
