use std::fmt::Display;

use alloy::transports;

use crate::types::Address;

/// Crate-level error returned by contract proxies.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),

    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Static configuration that can not be resolved.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("unknown contract: {0}")]
    UnknownContract(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
}

/// Request could not be shaped from the provided method parameters.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("method {method} is not declared by {contract}")]
    UnknownMethod {
        contract: &'static str,
        method: String,
    },

    #[error("unknown parameter {param} for method {method}")]
    UnknownParam { method: &'static str, param: String },

    #[error("missing parameter {param} for method {method}")]
    MissingParam {
        method: &'static str,
        param: &'static str,
    },

    #[error("method {0} needs a bound account")]
    AccountRequired(&'static str),

    #[error("method {0} needs a bound account with a wallet")]
    SignerRequired(String),

    #[error("method {0} does not accept value")]
    NotPayable(String),

    #[error("signing failed: {0}")]
    Signing(String),
}

/// Call/transaction revert reason as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevertReason {
    /// SCORE failure code, `0..32` are system failures, user reverts start at `32`.
    pub code: i64,
    pub message: String,
}

impl RevertReason {
    /// User-defined revert code, if any.
    pub fn user_code(&self) -> Option<i64> {
        (self.code >= 32).then(|| self.code - 32)
    }
}

/// Error returned by the RPC provider as a result of call or
/// transaction execution.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("fatal error: {0}")]
    Fatal(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unexpected empty RPC response")]
    NullResp,

    #[error("transaction ran out of step")]
    OutOfStep,

    #[error("call reverted: {0:?}")]
    Reverted(Box<RevertReason>),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("transaction is pending")]
    Pending,

    #[error("unexpected response from {0}: {1}")]
    UnexpectedResponse(Address, String),
}

/// RPC result can not be decoded into the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("expected hex integer, got {0}")]
    NotAnInteger(String),

    #[error("field not found: {0}")]
    MissingField(String),

    #[error("value out of range: {0}")]
    Overflow(String),
}

/// SCORE failure codes are reported as `-30000 - code`.
const SCORE_ERROR_BASE: i64 = -30000;
const SCORE_ERROR_OUT_OF_STEP: i64 = 10;

impl<E: Display> From<transports::RpcError<E>> for ProviderError {
    fn from(value: transports::RpcError<E>) -> Self {
        match value {
            transports::RpcError::ErrorResp(ref resp) => {
                let msg = resp.message.to_string();
                match resp.code {
                    -32602..=-32600 => Self::InvalidRequest(msg),
                    -31007 | -31006 => Self::Timeout,
                    -31003 | -31002 => Self::Pending,
                    code if (SCORE_ERROR_BASE - 999..=SCORE_ERROR_BASE).contains(&code) => {
                        let code = SCORE_ERROR_BASE - code;
                        if code == SCORE_ERROR_OUT_OF_STEP {
                            Self::OutOfStep
                        } else {
                            Self::Reverted(Box::new(RevertReason { code, message: msg }))
                        }
                    }
                    _ => Self::Transport(value.to_string()),
                }
            }
            transports::RpcError::NullResp => Self::NullResp,
            transports::RpcError::DeserError { .. } | transports::RpcError::SerError(_) => {
                Self::Fatal(value.to_string())
            }
            _ => Self::Transport(value.to_string()),
        }
    }
}
