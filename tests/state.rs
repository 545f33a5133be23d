use alloy::primitives::U256;
use balanced_sdk::{
    NetworkId,
    addresses::ContractName,
    contracts::Balanced,
    error::{DecodeError, Error, PayloadError},
    signer::Wallet,
    state::{CollateralInfo, LoanInfo, Prices, WalletBalances},
    testing::MockProvider,
    types::Address,
};
use fastnum::{UD256, udec256};
use serde_json::json;

const NETWORK: NetworkId = NetworkId::Mainnet;

fn owner() -> Address {
    Wallet::from_private_key("0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318")
        .unwrap()
        .address()
        .clone()
}

#[tokio::test]
async fn test_prices() {
    let provider = MockProvider::new();
    provider
        .respond_to(
            NETWORK,
            ContractName::Band,
            "getReferenceData",
            // 0.75 ICX/USD
            json!({ "rate": "0xa688906bd8b0000", "last_update_base": "0x5c1a2b3c" }),
        )
        .respond_to(
            NETWORK,
            ContractName::Staking,
            "getTodayRate",
            json!("0xde0b6b3a7640000"),
        )
        .respond_to(
            NETWORK,
            ContractName::Dex,
            "getPrice",
            // 1.5 bnUSD per sICX
            json!("0x14d1120d7b160000"),
        );
    let balanced = Balanced::new(provider.settings(NETWORK));

    let prices = Prices::fetch(&balanced).await.unwrap();
    assert_eq!(
        prices,
        Prices {
            icx_usd: udec256!(0.75),
            sicx_icx: udec256!(1),
            sicx_bnusd: udec256!(1.5),
        }
    );

    let band = provider
        .calls()
        .into_iter()
        .find(|c| c.method() == "getReferenceData")
        .unwrap();
    assert_eq!(band.params()["_base"], json!("ICX"));
    assert_eq!(band.params()["_quote"], json!("USD"));
}

#[tokio::test]
async fn test_prices_with_malformed_rate() {
    let provider = MockProvider::new();
    provider
        .respond_to(NETWORK, ContractName::Band, "getReferenceData", json!({}))
        .respond_to(NETWORK, ContractName::Staking, "getTodayRate", json!("0x1"))
        .respond_to(NETWORK, ContractName::Dex, "getPrice", json!("0x1"));
    let balanced = Balanced::new(provider.settings(NETWORK));

    assert!(matches!(
        Prices::fetch(&balanced).await,
        Err(Error::Decode(DecodeError::MissingField(f))) if f == "rate"
    ));
}

#[tokio::test]
async fn test_loan_info() {
    let provider = MockProvider::new();
    provider
        .respond_to(
            NETWORK,
            ContractName::Loans,
            "getAvailableAssets",
            json!({ "bnUSD": { "bad_debt": "0x0", "symbol": "bnUSD" } }),
        )
        .respond_to(
            NETWORK,
            ContractName::Bnusd,
            "totalSupply",
            // 2000 bnUSD
            json!("0x6c6b935b8bbd400000"),
        )
        .respond_to(
            NETWORK,
            ContractName::Loans,
            "getAccountPositions",
            json!({ "assets": { "sICX": "0xde0b6b3a7640000", "bnUSD": "0x4563918244f40000" } }),
        );
    let balanced = Balanced::new(provider.settings(NETWORK)).eject(owner());

    let info = LoanInfo::fetch(&balanced).await.unwrap();
    assert_eq!(info.bnusd_bad_debt, UD256::ZERO);
    assert_eq!(info.bnusd_total_supply, udec256!(2000));
    assert_eq!(info.bnusd_debt, udec256!(5));
}

#[tokio::test]
async fn test_collateral_info() {
    let provider = MockProvider::new();
    let owner = owner();
    provider
        .respond_to(
            NETWORK,
            ContractName::Loans,
            "getAccountPositions",
            json!({ "assets": { "sICX": "0x1bc16d674ec80000" } }),
        )
        .set_balance(&owner, U256::from(500_000_000_000_000_000u64));
    let unbound = Balanced::new(provider.settings(NETWORK));

    assert!(matches!(
        CollateralInfo::fetch(&unbound).await,
        Err(Error::Payload(PayloadError::AccountRequired(_)))
    ));

    let info = CollateralInfo::fetch(&unbound.eject(owner)).await.unwrap();
    assert_eq!(info.staked_icx, udec256!(2));
    assert_eq!(info.unstaked_icx, udec256!(0.5));
}

#[tokio::test]
async fn test_wallet_balances() {
    let provider = MockProvider::new();
    let owner = owner();
    for (name, method, value) in [
        (ContractName::Sicx, "balanceOf", "0xde0b6b3a7640000"),
        (ContractName::Baln, "balanceOf", "0x0"),
        (ContractName::Bnusd, "balanceOf", "0x29a2241af62c0000"),
        (ContractName::Rewards, "getBalnHolding", "0x6f05b59d3b20000"),
    ] {
        provider.respond_to(NETWORK, name, method, json!(value));
    }
    let balanced = Balanced::new(provider.settings(NETWORK)).eject(owner.clone());

    let balances = WalletBalances::fetch(&balanced).await.unwrap();
    assert_eq!(
        balances,
        WalletBalances {
            sicx: udec256!(1),
            baln: UD256::ZERO,
            bnusd: udec256!(3),
            baln_reward: udec256!(0.5),
        }
    );

    // every balance read names the owner
    for call in provider.calls() {
        let param = if call.method() == "getBalnHolding" { "_holder" } else { "_owner" };
        assert_eq!(call.params()[param], json!(owner.as_str()));
    }
}
