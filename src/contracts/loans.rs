use alloy::primitives::{B256, U256};
use serde_json::Value;

use crate::{
    addresses::ContractName,
    error::Result,
    provider::Provider,
    types::{MethodSpec, ParamSpec, Params, hex_param},
};

pub const GET_AVAILABLE_ASSETS: MethodSpec = MethodSpec::readonly("getAvailableAssets", &[]);
pub const GET_ACCOUNT_POSITIONS: MethodSpec =
    MethodSpec::readonly("getAccountPositions", &[ParamSpec::account("_owner")]);
pub const GET_PARAMETERS: MethodSpec = MethodSpec::readonly("getParameters", &[]);
pub const GET_TOTAL_COLLATERAL: MethodSpec = MethodSpec::readonly("getTotalCollateral", &[]);
pub const GET_ASSET_TOKENS: MethodSpec = MethodSpec::readonly("getAssetTokens", &[]);
pub const DEPOSIT_AND_BORROW: MethodSpec = MethodSpec::payable(
    "depositAndBorrow",
    &[ParamSpec::optional("_asset"), ParamSpec::optional("_amount")],
);
pub const WITHDRAW_COLLATERAL: MethodSpec =
    MethodSpec::external("withdrawCollateral", &[ParamSpec::required("_value")]);
pub const RETURN_ASSET: MethodSpec = MethodSpec::external(
    "returnAsset",
    &[ParamSpec::required("_symbol"), ParamSpec::required("_value")],
);

pub const METHODS: &[MethodSpec] = &[
    GET_AVAILABLE_ASSETS,
    GET_ACCOUNT_POSITIONS,
    GET_PARAMETERS,
    GET_TOTAL_COLLATERAL,
    GET_ASSET_TOKENS,
    DEPOSIT_AND_BORROW,
    WITHDRAW_COLLATERAL,
    RETURN_ASSET,
];

contract_surface!(
    /// Collateralized loans: ICX deposited as sICX collateral backing bnUSD debt.
    Loans,
    ContractName::Loans
);

impl<P: Provider> Loans<P> {
    /// Assets that can be borrowed, with their bad debt and price data.
    pub async fn get_available_assets(&self) -> Result<Value> {
        self.contract.query(&GET_AVAILABLE_ASSETS, Params::new()).await
    }

    /// Position of the bound account: collateral and debt per asset symbol.
    pub async fn get_account_positions(&self) -> Result<Value> {
        self.contract.query(&GET_ACCOUNT_POSITIONS, Params::new()).await
    }

    pub async fn get_parameters(&self) -> Result<Value> {
        self.contract.query(&GET_PARAMETERS, Params::new()).await
    }

    pub async fn get_total_collateral(&self) -> Result<Value> {
        self.contract.query(&GET_TOTAL_COLLATERAL, Params::new()).await
    }

    pub async fn get_asset_tokens(&self) -> Result<Value> {
        self.contract.query(&GET_ASSET_TOKENS, Params::new()).await
    }

    /// Deposits `collateral` loop of ICX and optionally borrows `amount` of `asset`.
    pub async fn deposit_and_borrow(
        &self,
        collateral: U256,
        borrow: Option<(&str, U256)>,
    ) -> Result<B256> {
        let mut params = Params::new();
        if let Some((asset, amount)) = borrow {
            params.insert("_asset".to_string(), Value::from(asset));
            params.insert("_amount".to_string(), hex_param(amount));
        }
        self.contract
            .transact(&DEPOSIT_AND_BORROW, params, collateral)
            .await
    }

    /// Withdraws `value` loop of sICX collateral.
    pub async fn withdraw_collateral(&self, value: U256) -> Result<B256> {
        let params = Params::from([("_value".to_string(), hex_param(value))]);
        self.contract
            .transact(&WITHDRAW_COLLATERAL, params, U256::ZERO)
            .await
    }

    /// Repays `value` loop of the `symbol` debt.
    pub async fn return_asset(&self, symbol: &str, value: U256) -> Result<B256> {
        let params = Params::from([
            ("_symbol".to_string(), Value::from(symbol)),
            ("_value".to_string(), hex_param(value)),
        ]);
        self.contract
            .transact(&RETURN_ASSET, params, U256::ZERO)
            .await
    }
}
