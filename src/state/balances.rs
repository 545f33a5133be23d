use fastnum::UD256;

use crate::{contracts::Balanced, error::Result, num, provider::Provider};

/// Token balances of the bound account.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalletBalances {
    pub sicx: UD256,
    pub baln: UD256,
    pub bnusd: UD256,
    /// Unclaimed BALN rewards.
    pub baln_reward: UD256,
}

impl WalletBalances {
    pub async fn fetch<P: Provider>(balanced: &Balanced<P>) -> Result<Self> {
        let (sicx, baln, bnusd, reward) = futures::try_join!(
            balanced.sicx.balance_of(),
            balanced.baln.balance_of(),
            balanced.bnusd.balance_of(),
            balanced.rewards.get_baln_holding(),
        )?;
        Ok(Self {
            sicx: num::decode_loop(&sicx)?,
            baln: num::decode_loop(&baln)?,
            bnusd: num::decode_loop(&bnusd)?,
            baln_reward: num::decode_loop(&reward)?,
        })
    }
}
