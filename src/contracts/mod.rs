//! Method surfaces of the Balanced contracts.
//!
//! Every surface is a thin typed wrapper over [`Contract`] with a declarative
//! `METHODS` table listing the remote methods it may call. [`Balanced`] groups
//! all of them for one [`ContractSettings`] value.

/// Defines a surface struct over [`Contract`] bound to a fixed contract name
/// and the `METHODS` table of the invoking module.
macro_rules! contract_surface {
    ($(#[$meta:meta])* $ty:ident, $name:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $ty<P> {
            contract: $crate::contract::Contract<P>,
        }

        impl<P: $crate::provider::Provider> $ty<P> {
            pub fn new(settings: $crate::settings::ContractSettings<P>) -> Self {
                Self {
                    contract: $crate::contract::Contract::new(settings, $name, METHODS),
                }
            }

            pub fn contract(&self) -> &$crate::contract::Contract<P> {
                &self.contract
            }

            /// Copy of this surface bound to `account`.
            pub fn eject(&self, account: impl Into<$crate::settings::Account>) -> Self {
                Self {
                    contract: self.contract.eject(account),
                }
            }
        }
    };
}

mod band;
mod dex;
mod dividends;
mod irc2;
mod loans;
mod rebalancing;
mod rewards;
mod staking;

use crate::{
    addresses::ContractName,
    contract::Contract,
    provider::Provider,
    settings::{Account, ContractSettings},
};

pub use band::Band;
pub use dex::{BALN_BNUSD_POOL_ID, Dex, SICX_BNUSD_POOL_ID, SICX_ICX_POOL_ID};
pub use dividends::Dividends;
pub use irc2::{Irc2, TOKENS};
pub use loans::Loans;
pub use rebalancing::Rebalancing;
pub use rewards::Rewards;
pub use staking::Staking;

/// All Balanced contract surfaces sharing one settings value.
#[derive(Clone, Debug)]
pub struct Balanced<P> {
    settings: ContractSettings<P>,
    pub loans: Loans<P>,
    pub staking: Staking<P>,
    pub dividends: Dividends<P>,
    pub rewards: Rewards<P>,
    pub dex: Dex<P>,
    pub band: Band<P>,
    pub rebalancing: Rebalancing<P>,
    pub sicx: Irc2<P>,
    pub bnusd: Irc2<P>,
    pub baln: Irc2<P>,
    pub omm: Irc2<P>,
    pub iusdc: Irc2<P>,
    pub usds: Irc2<P>,
    pub bwt: Irc2<P>,
}

impl<P: Provider> Balanced<P> {
    pub fn new(settings: ContractSettings<P>) -> Self {
        Self {
            loans: Loans::new(settings.clone()),
            staking: Staking::new(settings.clone()),
            dividends: Dividends::new(settings.clone()),
            rewards: Rewards::new(settings.clone()),
            dex: Dex::new(settings.clone()),
            band: Band::new(settings.clone()),
            rebalancing: Rebalancing::new(settings.clone()),
            sicx: Irc2::token(settings.clone(), ContractName::Sicx),
            bnusd: Irc2::token(settings.clone(), ContractName::Bnusd),
            baln: Irc2::token(settings.clone(), ContractName::Baln),
            omm: Irc2::token(settings.clone(), ContractName::Omm),
            iusdc: Irc2::token(settings.clone(), ContractName::Iusdc),
            usds: Irc2::token(settings.clone(), ContractName::Usds),
            bwt: Irc2::token(settings.clone(), ContractName::Bwt),
            settings,
        }
    }

    /// Copy of every surface bound to `account`, `self` keeps its binding.
    pub fn eject(&self, account: impl Into<Account>) -> Self {
        Self::new(self.settings.with_account(account))
    }

    pub fn settings(&self) -> &ContractSettings<P> {
        &self.settings
    }

    pub fn provider(&self) -> &P {
        self.settings.provider()
    }

    pub fn account(&self) -> Option<&Account> {
        self.settings.account()
    }

    /// Proxy of the named contract, `None` for contracts without a method surface.
    pub fn contract(&self, name: ContractName) -> Option<&Contract<P>> {
        match name {
            ContractName::Loans => Some(self.loans.contract()),
            ContractName::Staking => Some(self.staking.contract()),
            ContractName::Dividends => Some(self.dividends.contract()),
            ContractName::Rewards => Some(self.rewards.contract()),
            ContractName::Dex => Some(self.dex.contract()),
            ContractName::Band => Some(self.band.contract()),
            ContractName::Rebalancing => Some(self.rebalancing.contract()),
            ContractName::Sicx => Some(self.sicx.contract()),
            ContractName::Bnusd => Some(self.bnusd.contract()),
            ContractName::Baln => Some(self.baln.contract()),
            ContractName::Omm => Some(self.omm.contract()),
            ContractName::Iusdc => Some(self.iusdc.contract()),
            ContractName::Usds => Some(self.usds.contract()),
            ContractName::Bwt => Some(self.bwt.contract()),
            ContractName::Reserve
            | ContractName::Daofund
            | ContractName::Governance
            | ContractName::Airdrip => None,
        }
    }
}
