//! Balanced protocol SDK for the ICON network.
//!
//! # Overview
//!
//! Typed access to the Balanced smart contracts (loans, staking, DEX, tokens, ...)
//! over ICON JSON-RPC v3.
//!
//! Contract addresses are resolved from a static per-network [`addresses::AddressTable`].
//! [`contract::Contract`] is a generic proxy bound to one of those addresses: it builds
//! [`types::CallPayload`]s from declarative [`types::MethodSpec`] tables and dispatches
//! them through a [`provider::Provider`] carried by an immutable
//! [`settings::ContractSettings`] value.
//!
//! Use [`contracts::Balanced`] to get every contract surface at once, and
//! [`contracts::Balanced::eject`] to obtain a copy bound to a specific account
//! without touching the shared, accountless one.
//!
//! [`state`] decodes the commonly used reads (prices, wallet balances, collateral and
//! debt) and [`poll::Poller`] keeps them refreshed with cancellable periodic tasks.
//!
//! # Limitations/follow-ups
//!
//! * No retries or fallbacks: provider errors and contract reverts are returned as is.
//!
//! * Step limit is static per settings value, `debug_estimateStep` is not used.
//!
//! # Testing
//!
//! [`testing`] module provides a scripted in-memory provider that records
//! every dispatched payload and transaction.

pub mod addresses;
pub mod contract;
pub mod contracts;
pub mod error;
pub mod num;
pub mod poll;
pub mod provider;
pub mod settings;
pub mod signer;
pub mod state;
pub mod testing;
pub mod types;

use std::{fmt, str::FromStr};

use error::ConfigError;

/// ICON network the Balanced contracts are deployed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    Mainnet,
    Yeouido,
}

impl NetworkId {
    pub const ALL: [NetworkId; 2] = [NetworkId::Mainnet, NetworkId::Yeouido];

    /// Network ID as used in the `nid` field of transactions.
    pub fn nid(&self) -> u32 {
        match self {
            NetworkId::Mainnet => 1,
            NetworkId::Yeouido => 3,
        }
    }

    /// Public JSON-RPC v3 endpoint.
    pub fn rpc_url(&self) -> &'static str {
        match self {
            NetworkId::Mainnet => "https://ctz.solidwallet.io/api/v3",
            NetworkId::Yeouido => "https://bicon.net.solidwallet.io/api/v3",
        }
    }

    pub fn tracker_url(&self) -> &'static str {
        match self {
            NetworkId::Mainnet => "https://tracker.icon.foundation",
            NetworkId::Yeouido => "https://bicon.tracker.solidwallet.io",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkId::Mainnet => "mainnet",
            NetworkId::Yeouido => "yeouido",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkId::ALL
            .into_iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownNetwork(s.to_string()))
    }
}

impl TryFrom<u32> for NetworkId {
    type Error = ConfigError;

    fn try_from(nid: u32) -> Result<Self, Self::Error> {
        NetworkId::ALL
            .into_iter()
            .find(|n| n.nid() == nid)
            .ok_or_else(|| ConfigError::UnknownNetwork(format!("nid {nid}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_id_lookup() {
        assert_eq!("mainnet".parse::<NetworkId>().unwrap(), NetworkId::Mainnet);
        assert_eq!("Yeouido".parse::<NetworkId>().unwrap(), NetworkId::Yeouido);
        assert_eq!(NetworkId::try_from(3).unwrap(), NetworkId::Yeouido);
        assert!(matches!(
            NetworkId::try_from(2),
            Err(ConfigError::UnknownNetwork(_))
        ));
        assert!(matches!(
            "lisbon".parse::<NetworkId>(),
            Err(ConfigError::UnknownNetwork(_))
        ));
    }
}
