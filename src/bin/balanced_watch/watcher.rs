//! Commands of the Balanced watcher.

use std::{sync::Arc, time::Duration};

use balanced_sdk::{
    contract::CallResponse,
    contracts::Balanced,
    poll::Poller,
    provider::Provider,
    state::{CollateralInfo, LoanInfo, Prices, WalletBalances},
};
use tracing::info;

use crate::{
    config::CallRequest,
    error::{Error, Result},
};

/// Fetch closure refreshing `$state` from a shared [`Balanced`].
macro_rules! refresh {
    ($balanced:expr, $state:ty) => {{
        let balanced = Arc::clone(&$balanced);
        move || {
            let balanced = Arc::clone(&balanced);
            async move { <$state>::fetch(&*balanced).await }
        }
    }};
}

/// Logs prices every `period`, plus balances and positions when an account is
/// bound, until Ctrl-C.
pub async fn watch<P: Provider>(balanced: Balanced<P>, period: Duration) -> Result<()> {
    let balanced = Arc::new(balanced);
    let mut poller = Poller::new();

    poller.spawn("prices", period, refresh!(balanced, Prices), |p: Prices| {
        info!(
            icx_usd = %p.icx_usd,
            sicx_icx = %p.sicx_icx,
            sicx_bnusd = %p.sicx_bnusd,
            "Prices"
        )
    });

    if let Some(account) = balanced.account() {
        info!(account = %account.address(), "Watching account");
        poller.spawn(
            "balances",
            period,
            refresh!(balanced, WalletBalances),
            |b: WalletBalances| {
                info!(
                    sicx = %b.sicx,
                    baln = %b.baln,
                    bnusd = %b.bnusd,
                    baln_reward = %b.baln_reward,
                    "Wallet balances"
                )
            },
        );
        poller.spawn(
            "collateral",
            period,
            refresh!(balanced, CollateralInfo),
            |c: CollateralInfo| {
                info!(
                    staked_icx = %c.staked_icx,
                    unstaked_icx = %c.unstaked_icx,
                    "Collateral"
                )
            },
        );
        poller.spawn("loans", period, refresh!(balanced, LoanInfo), |l: LoanInfo| {
            info!(
                bnusd_debt = %l.bnusd_debt,
                bnusd_total_supply = %l.bnusd_total_supply,
                bnusd_bad_debt = %l.bnusd_bad_debt,
                "Loans"
            )
        });
    }

    info!(tasks = poller.len(), ?period, "Watcher started");
    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    poller.shutdown().await;
    Ok(())
}

/// Calls a method once and logs the outcome.
pub async fn call<P: Provider>(balanced: &Balanced<P>, request: CallRequest) -> Result<()> {
    let contract = balanced
        .contract(request.contract)
        .ok_or(Error::NoMethods(request.contract))?;

    match contract
        .invoke(&request.method, request.params, request.value)
        .await?
    {
        CallResponse::Value(value) => println!("{value:#}"),
        CallResponse::Submitted(hash) => info!(%hash, "Transaction submitted"),
    }
    Ok(())
}
