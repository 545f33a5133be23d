//! In-memory testing environment.
//!
//! [`MockProvider`] answers calls from scripted responses keyed by contract address
//! and method name, and records every payload and signed transaction it receives
//! exactly as they were dispatched.
//!

use std::sync::{Arc, Mutex, MutexGuard};

use alloy::primitives::{B256, U256};
use dashmap::DashMap;
use serde_json::Value;

use crate::{
    NetworkId,
    addresses::{self, ContractName},
    error::{ProviderError, RevertReason},
    provider::Provider,
    settings::ContractSettings,
    types::{Address, CallPayload, SignedTransaction},
};

/// Failure code reported for methods without a scripted response.
const METHOD_NOT_FOUND: i64 = 3;

#[derive(Clone, Debug, Default)]
pub struct MockProvider {
    responses: Arc<DashMap<(Address, String), Result<Value, RevertReason>>>,
    balances: Arc<DashMap<Address, U256>>,
    transaction_results: Arc<DashMap<B256, Value>>,
    calls: Arc<Mutex<Vec<CallPayload>>>,
    transactions: Arc<Mutex<Vec<SignedTransaction>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings for the given network backed by this provider.
    pub fn settings(&self, network: NetworkId) -> ContractSettings<Self> {
        ContractSettings::new(network, self.clone())
    }

    /// Scripts the result of `method` on the contract at `address`.
    pub fn respond(&self, address: &Address, method: &str, value: Value) -> &Self {
        self.responses
            .insert((address.clone(), method.to_string()), Ok(value));
        self
    }

    /// Scripts the result of `method` on the named contract of `network`.
    pub fn respond_to(
        &self,
        network: NetworkId,
        name: ContractName,
        method: &str,
        value: Value,
    ) -> &Self {
        self.respond(&addresses::resolve(network, name), method, value)
    }

    /// Scripts a revert of `method` on the contract at `address`.
    pub fn revert(&self, address: &Address, method: &str, reason: RevertReason) -> &Self {
        self.responses
            .insert((address.clone(), method.to_string()), Err(reason));
        self
    }

    pub fn set_balance(&self, address: &Address, balance: U256) -> &Self {
        self.balances.insert(address.clone(), balance);
        self
    }

    pub fn set_transaction_result(&self, hash: B256, result: Value) -> &Self {
        self.transaction_results.insert(hash, result);
        self
    }

    /// Payloads received by [`Provider::call`], in arrival order.
    pub fn calls(&self) -> Vec<CallPayload> {
        lock(&self.calls).clone()
    }

    /// Transactions received by [`Provider::send_transaction`], in arrival order.
    pub fn transactions(&self) -> Vec<SignedTransaction> {
        lock(&self.transactions).clone()
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Provider for MockProvider {
    async fn call(&self, payload: CallPayload) -> Result<Value, ProviderError> {
        let key = (payload.to().clone(), payload.method().to_string());
        lock(&self.calls).push(payload);
        match self.responses.get(&key).map(|r| r.value().clone()) {
            Some(Ok(value)) => Ok(value),
            Some(Err(reason)) => Err(ProviderError::Reverted(Box::new(reason))),
            None => Err(ProviderError::Reverted(Box::new(RevertReason {
                code: METHOD_NOT_FOUND,
                message: format!("MethodNotFound: {}", key.1),
            }))),
        }
    }

    async fn send_transaction(&self, transaction: SignedTransaction) -> Result<B256, ProviderError> {
        let hash = transaction.hash();
        lock(&self.transactions).push(transaction);
        Ok(hash)
    }

    async fn get_balance(&self, address: &Address) -> Result<U256, ProviderError> {
        Ok(self
            .balances
            .get(address)
            .map(|b| *b.value())
            .unwrap_or_default())
    }

    async fn get_transaction_result(&self, hash: B256) -> Result<Value, ProviderError> {
        self.transaction_results
            .get(&hash)
            .map(|r| r.value().clone())
            .ok_or(ProviderError::Pending)
    }
}
