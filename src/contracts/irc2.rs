use alloy::primitives::{B256, U256};
use serde_json::Value;

use crate::{
    addresses::ContractName,
    contract::Contract,
    error::{ConfigError, Result},
    provider::Provider,
    settings::{Account, ContractSettings},
    types::{Address, MethodSpec, ParamSpec, Params, hex_param},
};

/// Contracts implementing the IRC-2 token standard.
pub const TOKENS: [ContractName; 7] = [
    ContractName::Sicx,
    ContractName::Bnusd,
    ContractName::Baln,
    ContractName::Omm,
    ContractName::Iusdc,
    ContractName::Usds,
    ContractName::Bwt,
];

pub const BALANCE_OF: MethodSpec =
    MethodSpec::readonly("balanceOf", &[ParamSpec::account("_owner")]);
pub const TOTAL_SUPPLY: MethodSpec = MethodSpec::readonly("totalSupply", &[]);
pub const DECIMALS: MethodSpec = MethodSpec::readonly("decimals", &[]);
pub const SYMBOL: MethodSpec = MethodSpec::readonly("symbol", &[]);
pub const NAME: MethodSpec = MethodSpec::readonly("name", &[]);
pub const TRANSFER: MethodSpec = MethodSpec::external(
    "transfer",
    &[
        ParamSpec::required("_to"),
        ParamSpec::required("_value"),
        ParamSpec::optional("_data"),
    ],
);

pub const METHODS: &[MethodSpec] = &[BALANCE_OF, TOTAL_SUPPLY, DECIMALS, SYMBOL, NAME, TRANSFER];

/// IRC-2 token (sICX, bnUSD, BALN, ...).
#[derive(Clone, Debug)]
pub struct Irc2<P> {
    contract: Contract<P>,
}

impl<P: Provider> Irc2<P> {
    /// Token surface for `name`, which must be one of [`TOKENS`].
    pub fn new(
        settings: ContractSettings<P>,
        name: ContractName,
    ) -> std::result::Result<Self, ConfigError> {
        if !TOKENS.contains(&name) {
            return Err(ConfigError::UnknownContract(format!("{name} is not a token")));
        }
        Ok(Self::token(settings, name))
    }

    pub(crate) fn token(settings: ContractSettings<P>, name: ContractName) -> Self {
        Self {
            contract: Contract::new(settings, name, METHODS),
        }
    }

    pub fn contract(&self) -> &Contract<P> {
        &self.contract
    }

    pub fn eject(&self, account: impl Into<Account>) -> Self {
        Self {
            contract: self.contract.eject(account),
        }
    }

    /// Balance of the bound account in the token's smallest unit.
    pub async fn balance_of(&self) -> Result<Value> {
        self.contract.query(&BALANCE_OF, Params::new()).await
    }

    pub async fn total_supply(&self) -> Result<Value> {
        self.contract.query(&TOTAL_SUPPLY, Params::new()).await
    }

    pub async fn decimals(&self) -> Result<Value> {
        self.contract.query(&DECIMALS, Params::new()).await
    }

    pub async fn symbol(&self) -> Result<Value> {
        self.contract.query(&SYMBOL, Params::new()).await
    }

    pub async fn name(&self) -> Result<Value> {
        self.contract.query(&NAME, Params::new()).await
    }

    /// Transfers `value` to `to`, `data` is passed to the receiving contract's token fallback.
    pub async fn transfer(&self, to: &Address, value: U256, data: Option<&[u8]>) -> Result<B256> {
        let mut params = Params::from([
            ("_to".to_string(), Value::from(to)),
            ("_value".to_string(), hex_param(value)),
        ]);
        if let Some(data) = data {
            params.insert(
                "_data".to_string(),
                Value::from(alloy::hex::encode_prefixed(data)),
            );
        }
        self.contract.transact(&TRANSFER, params, U256::ZERO).await
    }
}
