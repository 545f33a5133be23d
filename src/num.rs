use alloy::primitives::U256;
use fastnum::{
    UD256, bint,
    decimal::{Context, RoundingMode, UnsignedDecimal},
};
use serde_json::Value;

use crate::error::DecodeError;

/// ICX and Balanced tokens use 18 decimals, the smallest unit is called loop.
pub const LOOP: Converter = Converter::new(18);

/// Fixed-point to decimal converter.
#[derive(Clone, Copy, Debug, Default)]
pub struct Converter {
    decimals: i32,
}

impl Converter {
    pub const fn new(decimals: u8) -> Self {
        Self {
            decimals: decimals as i32,
        }
    }

    pub fn from_unsigned<const N: usize>(
        &self,
        value: U256,
    ) -> Result<UnsignedDecimal<N>, DecodeError> {
        let unscaled = bint::UInt::<N>::from_le_slice(value.as_le_slice())
            .ok_or_else(|| DecodeError::Overflow(value.to_string()))?;
        Ok(UnsignedDecimal::<N>::from_parts(
            unscaled,
            -self.decimals,
            Context::default().with_rounding_mode(RoundingMode::Floor),
        ))
    }

    pub fn to_unsigned<const N: usize>(&self, value: UnsignedDecimal<N>) -> U256 {
        let rescaled = value.rescale(self.decimals as i16);
        U256::from_le_slice(rescaled.digits().to_radix_le(256).as_slice())
    }
}

/// Parses an ICON integer: `0x` prefixed hex string, decimal string or JSON number.
pub fn parse_int(value: &Value) -> Result<U256, DecodeError> {
    match value {
        Value::String(s) => {
            let parsed = match s.strip_prefix("0x") {
                Some(hex) => U256::from_str_radix(hex, 16),
                None => U256::from_str_radix(s, 10),
            };
            parsed.map_err(|_| DecodeError::NotAnInteger(s.clone()))
        }
        Value::Number(n) => n
            .as_u64()
            .map(U256::from)
            .ok_or_else(|| DecodeError::NotAnInteger(n.to_string())),
        other => Err(DecodeError::NotAnInteger(other.to_string())),
    }
}

/// Loop amount to ICX (or any 18-decimals token).
pub fn loop_to_icx(value: U256) -> Result<UD256, DecodeError> {
    LOOP.from_unsigned(value)
}

pub fn icx_to_loop(value: UD256) -> U256 {
    LOOP.to_unsigned(value)
}

/// Parses an ICON integer holding a loop amount.
pub fn decode_loop(value: &Value) -> Result<UD256, DecodeError> {
    loop_to_icx(parse_int(value)?)
}
