use fastnum::UD256;

use crate::{
    contracts::{Balanced, SICX_BNUSD_POOL_ID},
    error::Result,
    num,
    provider::Provider,
};

use super::field;

/// Market prices used across the app.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prices {
    /// ICX in USD from the Band oracle.
    pub icx_usd: UD256,
    /// sICX in ICX from the staking contract.
    pub sicx_icx: UD256,
    /// sICX in bnUSD from the DEX pool.
    pub sicx_bnusd: UD256,
}

impl Prices {
    pub async fn fetch<P: Provider>(balanced: &Balanced<P>) -> Result<Self> {
        let (reference, rate, price) = futures::try_join!(
            balanced.band.get_reference_data("ICX", "USD"),
            balanced.staking.get_today_rate(),
            balanced.dex.get_price(SICX_BNUSD_POOL_ID),
        )?;
        Ok(Self {
            icx_usd: num::decode_loop(field(&reference, &["rate"])?)?,
            sicx_icx: num::decode_loop(&rate)?,
            sicx_bnusd: num::decode_loop(&price)?,
        })
    }
}
