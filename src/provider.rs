//! ICON JSON-RPC v3 provider boundary.

use std::future::Future;

use alloy::{
    primitives::{B256, U256},
    rpc::client::RpcClient,
};
use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use crate::{
    NetworkId,
    error::ProviderError,
    num,
    types::{Address, CallPayload, SignedTransaction},
};

/// Transport used by contract proxies to reach the chain.
///
/// Implementations forward requests unchanged and do not retry.
pub trait Provider: Clone + Send + Sync + 'static {
    /// Executes a read-only call and returns its raw result.
    fn call(&self, payload: CallPayload) -> impl Future<Output = Result<Value, ProviderError>> + Send;

    /// Submits a signed transaction and returns its hash.
    fn send_transaction(
        &self,
        transaction: SignedTransaction,
    ) -> impl Future<Output = Result<B256, ProviderError>> + Send;

    /// Native ICX balance in loop.
    fn get_balance(
        &self,
        address: &Address,
    ) -> impl Future<Output = Result<U256, ProviderError>> + Send;

    /// Result of a processed transaction.
    fn get_transaction_result(
        &self,
        hash: B256,
    ) -> impl Future<Output = Result<Value, ProviderError>> + Send;
}

/// [`Provider`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpProvider {
    client: RpcClient,
    url: Url,
}

impl HttpProvider {
    pub fn new(url: Url) -> Self {
        Self {
            client: RpcClient::new_http(url.clone()),
            url,
        }
    }

    /// Provider for the public endpoint of the network.
    pub fn for_network(network: NetworkId) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(network.rpc_url())?))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Provider for HttpProvider {
    async fn call(&self, payload: CallPayload) -> Result<Value, ProviderError> {
        debug!(to = %payload.to(), method = payload.method(), "icx_call");
        let result: Value = self
            .client
            .request("icx_call", payload.to_call_params())
            .await?;
        Ok(result)
    }

    async fn send_transaction(&self, transaction: SignedTransaction) -> Result<B256, ProviderError> {
        let expected = transaction.hash();
        debug!(
            to = %transaction.transaction().to(),
            hash = %expected,
            "icx_sendTransaction"
        );
        let hash: Value = self
            .client
            .request("icx_sendTransaction", transaction.to_params())
            .await?;
        hash.as_str()
            .and_then(|h| h.parse::<B256>().ok())
            .ok_or_else(|| {
                ProviderError::UnexpectedResponse(
                    transaction.transaction().to().clone(),
                    hash.to_string(),
                )
            })
    }

    async fn get_balance(&self, address: &Address) -> Result<U256, ProviderError> {
        let balance: Value = self
            .client
            .request("icx_getBalance", json!({ "address": address }))
            .await?;
        num::parse_int(&balance)
            .map_err(|e| ProviderError::UnexpectedResponse(address.clone(), e.to_string()))
    }

    async fn get_transaction_result(&self, hash: B256) -> Result<Value, ProviderError> {
        let result: Value = self
            .client
            .request("icx_getTransactionResult", json!({ "txHash": hash }))
            .await?;
        Ok(result)
    }
}
