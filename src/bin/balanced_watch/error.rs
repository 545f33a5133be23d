//! Error types for the Balanced watcher.

use balanced_sdk::addresses::ContractName;

use crate::config::ConfigError;

/// Main error type for the Balanced watcher.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Balanced SDK error: {0}")]
    Balanced(#[from] balanced_sdk::error::Error),

    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(#[from] url::ParseError),

    #[error("Contract {0} has no callable methods")]
    NoMethods(ContractName),

    #[error("Failed to listen for shutdown signal: {0}")]
    Signal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
