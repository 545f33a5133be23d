//! Generic contract proxy.

use std::time::{SystemTime, UNIX_EPOCH};

use alloy::primitives::{B256, U256};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    addresses::{self, ContractName},
    error::{PayloadError, ProviderError, Result},
    provider::Provider,
    settings::{Account, ContractSettings},
    types::{Address, CallKind, CallPayload, MethodKind, MethodSpec, ParamSource, Params, Transaction},
};

/// Outcome of [`Contract::call`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallResponse {
    /// Result of a read-only call.
    Value(Value),
    /// Hash of a submitted transaction.
    Submitted(B256),
}

/// Local proxy of a deployed contract.
///
/// Bound to the address of `name` on the settings' network and to the
/// declarative list of methods the contract exposes.
#[derive(Clone, Debug)]
pub struct Contract<P> {
    name: ContractName,
    address: Address,
    methods: &'static [MethodSpec],
    settings: ContractSettings<P>,
}

impl<P: Provider> Contract<P> {
    pub fn new(
        settings: ContractSettings<P>,
        name: ContractName,
        methods: &'static [MethodSpec],
    ) -> Self {
        Self {
            name,
            address: addresses::resolve(settings.network(), name),
            methods,
            settings,
        }
    }

    pub fn name(&self) -> ContractName {
        self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn methods(&self) -> &'static [MethodSpec] {
        self.methods
    }

    pub fn method(&self, name: &str) -> Option<&'static MethodSpec> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn settings(&self) -> &ContractSettings<P> {
        &self.settings
    }

    pub fn account(&self) -> Option<&Account> {
        self.settings.account()
    }

    /// Copy of this proxy bound to `account`, the original is left untouched.
    pub fn eject(&self, account: impl Into<Account>) -> Self {
        Self {
            settings: self.settings.with_account(account),
            ..self.clone()
        }
    }

    /// Builds the payload for `spec` with the given parameters.
    ///
    /// Parameters sourced from the account are filled from the bound account
    /// when omitted. Does not perform any I/O.
    pub fn params_builder(
        &self,
        spec: &'static MethodSpec,
        mut params: Params,
    ) -> std::result::Result<CallPayload, PayloadError> {
        if !self.methods.contains(spec) {
            return Err(PayloadError::UnknownMethod {
                contract: self.name.as_str(),
                method: spec.name.to_string(),
            });
        }
        if let Some(unknown) = params.keys().find(|k| spec.param(k).is_none()) {
            return Err(PayloadError::UnknownParam {
                method: spec.name,
                param: unknown.clone(),
            });
        }

        let account = self.settings.account().map(Account::address);
        for param in spec.params {
            if params.contains_key(param.name) {
                continue;
            }
            match param.source {
                ParamSource::Required => {
                    return Err(PayloadError::MissingParam {
                        method: spec.name,
                        param: param.name,
                    });
                }
                ParamSource::Account => {
                    let account = account.ok_or(PayloadError::AccountRequired(spec.name))?;
                    params.insert(param.name.to_string(), Value::from(account));
                }
                ParamSource::Optional => {}
            }
        }

        let kind = match spec.kind {
            MethodKind::Readonly => CallKind::Query,
            MethodKind::External | MethodKind::Payable => CallKind::Transaction { value: U256::ZERO },
        };
        Ok(CallPayload::new(
            self.address.clone(),
            account.cloned(),
            spec.name,
            params,
            kind,
        ))
    }

    /// Dispatches the payload through the provider.
    ///
    /// Queries are forwarded unchanged, transactions are stamped, signed by the
    /// bound account's wallet and submitted.
    pub async fn call(&self, payload: CallPayload) -> Result<CallResponse> {
        match payload.kind() {
            CallKind::Query => {
                debug!(contract = %self.name, method = payload.method(), "query");
                let value = self.settings.provider().call(payload).await?;
                Ok(CallResponse::Value(value))
            }
            CallKind::Transaction { .. } => {
                let account = self
                    .settings
                    .account()
                    .ok_or_else(|| PayloadError::SignerRequired(payload.method().to_string()))?;
                let wallet = account
                    .wallet()
                    .ok_or_else(|| PayloadError::SignerRequired(payload.method().to_string()))?;

                let transaction = Transaction::from_payload(
                    &payload,
                    account.address().clone(),
                    self.settings.network().nid(),
                    self.settings.step_limit(),
                    now_micros(),
                );
                let signed = wallet.sign(transaction)?;
                let hash = self.settings.provider().send_transaction(signed).await?;
                info!(
                    contract = %self.name,
                    method = payload.method(),
                    %hash,
                    "transaction submitted"
                );
                Ok(CallResponse::Submitted(hash))
            }
        }
    }

    /// Builds and executes a read-only call.
    pub async fn query(&self, spec: &'static MethodSpec, params: Params) -> Result<Value> {
        match self.call(self.params_builder(spec, params)?).await? {
            CallResponse::Value(value) => Ok(value),
            CallResponse::Submitted(hash) => Err(ProviderError::UnexpectedResponse(
                self.address.clone(),
                hash.to_string(),
            )
            .into()),
        }
    }

    /// Builds, signs and submits a transaction, `value` is only allowed for payable methods.
    pub async fn transact(
        &self,
        spec: &'static MethodSpec,
        params: Params,
        value: U256,
    ) -> Result<B256> {
        if !value.is_zero() && spec.kind != MethodKind::Payable {
            return Err(PayloadError::NotPayable(spec.name.to_string()).into());
        }
        let payload = self.params_builder(spec, params)?.with_value(value);
        match self.call(payload).await? {
            CallResponse::Submitted(hash) => Ok(hash),
            CallResponse::Value(value) => Err(ProviderError::UnexpectedResponse(
                self.address.clone(),
                value.to_string(),
            )
            .into()),
        }
    }

    /// Calls a method by its remote name.
    pub async fn invoke(&self, method: &str, params: Params, value: U256) -> Result<CallResponse> {
        let spec = self.method(method).ok_or_else(|| PayloadError::UnknownMethod {
            contract: self.name.as_str(),
            method: method.to_string(),
        })?;
        if spec.is_readonly() {
            if !value.is_zero() {
                return Err(PayloadError::NotPayable(spec.name.to_string()).into());
            }
            return self.query(spec, params).await.map(CallResponse::Value);
        }
        self.transact(spec, params, value)
            .await
            .map(CallResponse::Submitted)
    }
}

fn now_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros() as u64
}
