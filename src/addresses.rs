//! Balanced contract addresses per network.

use std::{fmt, str::FromStr};

use crate::{NetworkId, error::ConfigError, types::Address};

/// Name of a Balanced contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContractName {
    Loans,
    Staking,
    Dividends,
    Reserve,
    Daofund,
    Rewards,
    Dex,
    Governance,
    Band,
    Sicx,
    Bnusd,
    Baln,
    Omm,
    Iusdc,
    Usds,
    Bwt,
    Airdrip,
    Rebalancing,
}

impl ContractName {
    pub const ALL: [ContractName; 18] = [
        ContractName::Loans,
        ContractName::Staking,
        ContractName::Dividends,
        ContractName::Reserve,
        ContractName::Daofund,
        ContractName::Rewards,
        ContractName::Dex,
        ContractName::Governance,
        ContractName::Band,
        ContractName::Sicx,
        ContractName::Bnusd,
        ContractName::Baln,
        ContractName::Omm,
        ContractName::Iusdc,
        ContractName::Usds,
        ContractName::Bwt,
        ContractName::Airdrip,
        ContractName::Rebalancing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractName::Loans => "loans",
            ContractName::Staking => "staking",
            ContractName::Dividends => "dividends",
            ContractName::Reserve => "reserve",
            ContractName::Daofund => "daofund",
            ContractName::Rewards => "rewards",
            ContractName::Dex => "dex",
            ContractName::Governance => "governance",
            ContractName::Band => "band",
            ContractName::Sicx => "sicx",
            ContractName::Bnusd => "bnusd",
            ContractName::Baln => "baln",
            ContractName::Omm => "omm",
            ContractName::Iusdc => "iusdc",
            ContractName::Usds => "usds",
            ContractName::Bwt => "bwt",
            ContractName::Airdrip => "airdrip",
            ContractName::Rebalancing => "rebalancing",
        }
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractName::ALL
            .into_iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownContract(s.to_string()))
    }
}

/// Addresses of every Balanced contract within one network.
#[derive(Clone, Copy, Debug)]
pub struct AddressTable {
    pub loans: &'static str,
    pub staking: &'static str,
    pub dividends: &'static str,
    pub reserve: &'static str,
    pub daofund: &'static str,
    pub rewards: &'static str,
    pub dex: &'static str,
    pub governance: &'static str,
    pub band: &'static str,
    pub sicx: &'static str,
    pub bnusd: &'static str,
    pub baln: &'static str,
    pub omm: &'static str,
    pub iusdc: &'static str,
    pub usds: &'static str,
    pub bwt: &'static str,
    pub airdrip: &'static str,
    pub rebalancing: &'static str,
}

pub const MAINNET: AddressTable = AddressTable {
    loans: "cx66d4d90f5f113eba575bf793570135f9b10cece1",
    staking: "cx43e2eec79eb76293c298f2b17aec06097be606e0",
    dividends: "cx203d9cd2a669be67177e997b8948ce2c35caffae",
    reserve: "cxf58b9a1898998a31be7f1d99276204a3333ac9b3",
    daofund: "cx835b300dcfe01f0bdb794e134a0c5628384f4367",
    rewards: "cx10d59e8103ab44635190bd4139dbfd682fa2d07e",
    dex: "cxa0af3165c08318e988cb30993b3048335b94af6c",
    governance: "cx44250a12074799e26fdeee75648ae47e2cc84219",
    band: "cxe647e0af68a4661566f5e9861ad4ac854de808a2",
    sicx: "cx2609b924e33ef00b648a409245c7ea394c467824",
    bnusd: "cx88fd7df7ddff82f7cc735c871dc519838cb235bb",
    baln: "cxf61cd5a45dc9f91c15aa65831a30a90d59a09619",
    omm: "cx1a29259a59f463a67bb2ef84398b30ca56b5830a",
    iusdc: "cxae3034235540b924dfcc1b45836c293dcc82bfb7",
    usds: "cxbb2871f468a3008f80b08fdde5b8b951583acf06",
    bwt: "cxcfe9d1f83fa871e903008471cca786662437e58d",
    airdrip: "cxaf244cf3c7164fe6f996f398a9d99c4d4a85cf15",
    rebalancing: "cx40d59439571299bca40362db2a7d8cae5b0b30b0",
};

pub const YEOUIDO: AddressTable = AddressTable {
    loans: "cx3259f3ff9a51ca3bf170d4ff9104cf4af126ca1c",
    staking: "cx9d829396d887f9292d8af488fab78ad24ab6b99a",
    dividends: "cx5b996d251009340f7c312b9df5c44f0f39a20a91",
    reserve: "cx1754666c6779dc5e495a462144dd15e4a68fe776",
    daofund: "cx430955c5a5e2a6e48c1f2aaa7258dc4c84222247",
    rewards: "cx893fccdd0881d8e2bd2625f711b38e06848ecb89",
    dex: "cx399dea56cf199b1c9e43bead0f6a284bdecfbf62",
    governance: "cx483630769b61b76387d6ed90c911c16da546784f",
    band: "cx61a36e5d10412e03c907a507d1e8c6c3856d9964",
    sicx: "cxae6334850f13dfd8b50f8544d5acb126bb8ef82d",
    bnusd: "cxc48c9c81ceef04445c961c5cc8ff056d733dfe3a",
    baln: "cx36169736b39f59bf19e8950f6c8fa4bfa18b710a",
    omm: "cx05515d126a47a98c682fa86992329e6c2ec70503",
    iusdc: "cx65f639254090820361da483df233f6d0e69af9b7",
    usds: "cxc0666df567a6e0b49342648e98ccbe5362b264ea",
    bwt: "cx5d886977b7d24b9f73a460c9ca2d43847997c285",
    airdrip: "cx8ed4fbee9d6497f91ea90933db288ff4b43e54ba",
    rebalancing: "cx2e3398dfce78a3c83de8a41d7c5f4aa40d3a4f30",
};

impl AddressTable {
    pub fn for_network(network: NetworkId) -> &'static AddressTable {
        match network {
            NetworkId::Mainnet => &MAINNET,
            NetworkId::Yeouido => &YEOUIDO,
        }
    }

    pub fn get(&self, name: ContractName) -> &'static str {
        match name {
            ContractName::Loans => self.loans,
            ContractName::Staking => self.staking,
            ContractName::Dividends => self.dividends,
            ContractName::Reserve => self.reserve,
            ContractName::Daofund => self.daofund,
            ContractName::Rewards => self.rewards,
            ContractName::Dex => self.dex,
            ContractName::Governance => self.governance,
            ContractName::Band => self.band,
            ContractName::Sicx => self.sicx,
            ContractName::Bnusd => self.bnusd,
            ContractName::Baln => self.baln,
            ContractName::Omm => self.omm,
            ContractName::Iusdc => self.iusdc,
            ContractName::Usds => self.usds,
            ContractName::Bwt => self.bwt,
            ContractName::Airdrip => self.airdrip,
            ContractName::Rebalancing => self.rebalancing,
        }
    }
}

/// Address of the contract on the given network.
pub fn resolve(network: NetworkId, name: ContractName) -> Address {
    Address::from_static(AddressTable::for_network(network).get(name))
}
