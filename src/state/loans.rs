use fastnum::UD256;
use futures::TryFutureExt;

use crate::{
    contracts::Balanced,
    error::{Error, PayloadError, Result},
    num,
    provider::Provider,
};

use super::{field, position_asset};

/// Collateral of the bound account.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollateralInfo {
    /// sICX deposited as loan collateral.
    pub staked_icx: UD256,
    /// ICX held in the wallet.
    pub unstaked_icx: UD256,
}

impl CollateralInfo {
    pub async fn fetch<P: Provider>(balanced: &Balanced<P>) -> Result<Self> {
        let account = balanced
            .account()
            .ok_or(PayloadError::AccountRequired("getAccountPositions"))?;
        let (positions, balance) = futures::try_join!(
            balanced.loans.get_account_positions(),
            balanced
                .provider()
                .get_balance(account.address())
                .map_err(Error::from),
        )?;
        Ok(Self {
            staked_icx: position_asset(&positions, "sICX")?,
            unstaked_icx: num::loop_to_icx(balance)?,
        })
    }
}

/// bnUSD debt of the bound account and system-wide figures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoanInfo {
    pub bnusd_bad_debt: UD256,
    pub bnusd_total_supply: UD256,
    /// Debt of the bound account.
    pub bnusd_debt: UD256,
}

impl LoanInfo {
    pub async fn fetch<P: Provider>(balanced: &Balanced<P>) -> Result<Self> {
        let (assets, total_supply, positions) = futures::try_join!(
            balanced.loans.get_available_assets(),
            balanced.bnusd.total_supply(),
            balanced.loans.get_account_positions(),
        )?;
        Ok(Self {
            bnusd_bad_debt: num::decode_loop(field(&assets, &["bnUSD", "bad_debt"])?)?,
            bnusd_total_supply: num::decode_loop(&total_supply)?,
            bnusd_debt: position_asset(&positions, "bnUSD")?,
        })
    }
}
