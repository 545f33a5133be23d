//! Configuration for the Balanced watcher.
//!
//! Configuration comes from two sources:
//! - Environment variables (via .env file or shell): network, endpoint, keys
//! - CLI arguments: the command to run

use std::time::Duration;

use alloy::primitives::U256;
use balanced_sdk::{
    NetworkId,
    addresses::ContractName,
    num,
    settings::{Account, DEFAULT_STEP_LIMIT},
    signer::Wallet,
    types::{Address, Params, hex_param},
};
use clap::{Parser, Subcommand};
use fastnum::{UD256, decimal::Context};
use serde_json::Value;
use url::Url;

const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 10;

/// Environment configuration (network, endpoint, credentials).
#[derive(Debug, Default, serde::Deserialize)]
pub struct EnvConfig {
    /// Network to connect to, `mainnet` unless set
    pub network: Option<NetworkId>,

    /// RPC URL overriding the network's public endpoint
    pub node_rpc_url: Option<String>,

    /// Address to watch, derived from `private_key` when not set
    pub account: Option<String>,

    /// Private key for signing transactions
    pub private_key: Option<String>,

    /// Refresh period of the watcher (default: 10s)
    pub poll_interval_seconds: Option<u64>,

    /// Step limit of submitted transactions
    pub step_limit: Option<u64>,
}

impl EnvConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    pub fn network(&self) -> NetworkId {
        self.network.unwrap_or(NetworkId::Mainnet)
    }

    /// Parse the node URL, falling back to the network's endpoint.
    pub fn node_url(&self) -> Result<Url, url::ParseError> {
        match &self.node_rpc_url {
            Some(url) => Url::parse(url),
            None => Url::parse(self.network().rpc_url()),
        }
    }

    pub fn poll_interval(&self) -> Result<Duration, ConfigError> {
        match self.poll_interval_seconds.unwrap_or(DEFAULT_POLL_INTERVAL_SECONDS) {
            0 => Err(ConfigError::ZeroPollInterval),
            secs => Ok(Duration::from_secs(secs)),
        }
    }

    pub fn step_limit(&self) -> U256 {
        U256::from(self.step_limit.unwrap_or(DEFAULT_STEP_LIMIT))
    }

    /// Account the contracts get bound to, if any.
    ///
    /// A private key gives a signing account; `account`, when also set, must
    /// match the key's address.
    pub fn account(&self) -> Result<Option<Account>, ConfigError> {
        let address = self
            .account
            .as_deref()
            .map(|s| s.parse::<Address>())
            .transpose()?;

        let Some(key) = &self.private_key else {
            return Ok(address.map(Account::watch));
        };
        let wallet = Wallet::from_private_key(key)?;
        if let Some(address) = address
            && &address != wallet.address()
        {
            return Err(ConfigError::AccountMismatch {
                account: address,
                key: wallet.address().clone(),
            });
        }
        Ok(Some(Account::signing(wallet)))
    }
}

/// CLI arguments.
#[derive(Debug, Parser)]
#[command(name = "balanced-watch")]
#[command(about = "Watch Balanced state and call its contracts")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Periodically log prices, and balances and positions of ACCOUNT
    Watch,

    /// Call a contract method once
    Call(CallArgs),
}

#[derive(Debug, clap::Args)]
pub struct CallArgs {
    /// Contract name (e.g. "loans", "sicx")
    pub contract: String,

    /// Remote method name (e.g. "getAccountPositions")
    pub method: String,

    /// Parameters as key=value pairs
    pub params: Vec<String>,

    /// ICX to send with a payable method
    #[arg(long)]
    pub value: Option<String>,
}

/// Validated [`CallArgs`].
#[derive(Debug, PartialEq)]
pub struct CallRequest {
    pub contract: ContractName,
    pub method: String,
    pub params: Params,
    pub value: U256,
}

impl CallArgs {
    pub fn to_call_request(&self) -> Result<CallRequest, ConfigError> {
        let contract = self
            .contract
            .parse()
            .map_err(|_| ConfigError::UnknownContract(self.contract.clone()))?;

        let params = self
            .params
            .iter()
            .map(|pair| parse_param(pair))
            .collect::<Result<Params, _>>()?;

        let value = match &self.value {
            Some(icx) => {
                let icx = UD256::from_str(icx, Context::default())
                    .map_err(|_| ConfigError::InvalidValue(icx.clone()))?;
                num::icx_to_loop(icx)
            }
            None => U256::ZERO,
        };

        Ok(CallRequest {
            contract,
            method: self.method.clone(),
            params,
            value,
        })
    }
}

/// Parses `key=value`, integers are sent hex encoded and JSON objects or
/// arrays as is, anything else as a string.
fn parse_param(pair: &str) -> Result<(String, Value), ConfigError> {
    let (key, raw) = pair
        .split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| ConfigError::InvalidParam(pair.to_string()))?;

    let value = if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        let int = U256::from_str_radix(raw, 10)
            .map_err(|_| ConfigError::InvalidParam(pair.to_string()))?;
        hex_param(int)
    } else if raw.starts_with('{') || raw.starts_with('[') {
        serde_json::from_str(raw).map_err(|_| ConfigError::InvalidParam(pair.to_string()))?
    } else {
        Value::String(raw.to_string())
    };
    Ok((key.to_string(), value))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown contract {0}")]
    UnknownContract(String),

    #[error("Invalid parameter {0}, expected key=value")]
    InvalidParam(String),

    #[error("Invalid ICX value {0}")]
    InvalidValue(String),

    #[error("poll_interval_seconds cannot be zero")]
    ZeroPollInterval,

    #[error("ACCOUNT {account} does not match the private key address {key}")]
    AccountMismatch { account: Address, key: Address },

    #[error(transparent)]
    Sdk(#[from] balanced_sdk::error::ConfigError),
}
