//! Immutable call context shared by contract proxies.

use std::sync::Arc;

use alloy::primitives::U256;

use crate::{NetworkId, signer::Wallet, types::Address};

/// Default step limit attached to transactions.
pub const DEFAULT_STEP_LIMIT: u64 = 3_000_000;

/// Account calls are made on behalf of.
///
/// An account without a wallet can only be used as read context: it fills
/// account-sourced parameters and the `from` field of queries.
#[derive(Clone, Debug)]
pub struct Account {
    address: Address,
    wallet: Option<Arc<Wallet>>,
}

impl Account {
    /// Read-only account context.
    pub fn watch(address: Address) -> Self {
        Self {
            address,
            wallet: None,
        }
    }

    /// Account able to sign transactions.
    pub fn signing(wallet: Wallet) -> Self {
        Self {
            address: wallet.address().clone(),
            wallet: Some(Arc::new(wallet)),
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn wallet(&self) -> Option<&Wallet> {
        self.wallet.as_deref()
    }
}

impl From<Address> for Account {
    fn from(address: Address) -> Self {
        Self::watch(address)
    }
}

impl From<Wallet> for Account {
    fn from(wallet: Wallet) -> Self {
        Self::signing(wallet)
    }
}

/// Network, provider and optional account used by every contract call.
///
/// Rebinding the account produces a new value, in-flight calls keep using
/// the settings they were issued with.
#[derive(Clone, Debug)]
pub struct ContractSettings<P> {
    network: NetworkId,
    provider: P,
    account: Option<Account>,
    step_limit: U256,
}

impl<P: Clone> ContractSettings<P> {
    pub fn new(network: NetworkId, provider: P) -> Self {
        Self {
            network,
            provider,
            account: None,
            step_limit: U256::from(DEFAULT_STEP_LIMIT),
        }
    }

    pub fn with_account(&self, account: impl Into<Account>) -> Self {
        Self {
            account: Some(account.into()),
            ..self.clone()
        }
    }

    pub fn without_account(&self) -> Self {
        Self {
            account: None,
            ..self.clone()
        }
    }

    pub fn with_step_limit(mut self, step_limit: U256) -> Self {
        self.step_limit = step_limit;
        self
    }

    pub fn network(&self) -> NetworkId {
        self.network
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn step_limit(&self) -> U256 {
        self.step_limit
    }
}
