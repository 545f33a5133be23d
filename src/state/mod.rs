//! Decoded snapshots of frequently read Balanced state.
//!
//! Each snapshot issues its contract reads concurrently and decodes the loop
//! amounts into decimals. Reads that depend on an account expect a
//! [`crate::contracts::Balanced`] bound with [`crate::contracts::Balanced::eject`].

mod balances;
mod loans;
mod prices;

use fastnum::UD256;
use serde_json::Value;

use crate::{error::DecodeError, num};

pub use balances::WalletBalances;
pub use loans::{CollateralInfo, LoanInfo};
pub use prices::Prices;

/// Nested field of a JSON result.
fn field<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value, DecodeError> {
    path.iter().try_fold(value, |v, key| {
        v.get(key)
            .ok_or_else(|| DecodeError::MissingField(path.join(".")))
    })
}

/// Loop amount of a position asset, positions without the asset hold zero.
fn position_asset(positions: &Value, symbol: &str) -> Result<UD256, DecodeError> {
    match positions.get("assets").and_then(|assets| assets.get(symbol)) {
        Some(amount) => num::decode_loop(amount),
        None => Ok(UD256::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use fastnum::udec256;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_field() {
        let value = json!({ "bnUSD": { "bad_debt": "0x0" } });
        assert_eq!(field(&value, &["bnUSD", "bad_debt"]).unwrap(), &json!("0x0"));
        assert!(matches!(
            field(&value, &["bnUSD", "price"]),
            Err(DecodeError::MissingField(f)) if f == "bnUSD.price"
        ));
    }

    #[test]
    fn test_position_asset() {
        let positions = json!({ "assets": { "sICX": "0xde0b6b3a7640000" } });
        assert_eq!(position_asset(&positions, "sICX").unwrap(), udec256!(1));
        assert_eq!(position_asset(&positions, "bnUSD").unwrap(), UD256::ZERO);
        assert_eq!(
            position_asset(&json!("That address has no positions."), "sICX").unwrap(),
            UD256::ZERO
        );
    }
}
