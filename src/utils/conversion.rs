//! Type conversion utilities.
//!
//! Functions for converting raw on-chain integer amounts (U256/I256) into
//! human-scale decimal values with exact base-10 arithmetic. Everything here
//! goes through BigDecimal; binary floating point would drift under the
//! repeated accumulation the swap handlers perform.

use alloy::primitives::{hex, I256, U256};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use once_cell::sync::Lazy;

// ============================================
// Hex Encoding
// ============================================

/// Encode bytes as a lowercase hex string with 0x prefix.
///
/// Every entity key in the store is produced by this function so that
/// address comparisons never depend on checksum casing.
pub fn hex_encode(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

// ============================================
// U256 / I256 Conversions
// ============================================

/// Convert alloy U256 to BigDecimal via little-endian bytes (faster than
/// string parsing, and lossless for the full 256-bit range).
pub fn u256_to_bigdecimal(value: U256) -> BigDecimal {
    let bytes: [u8; 32] = value.to_le_bytes();
    let big_int = BigInt::from_bytes_le(num_bigint::Sign::Plus, &bytes);
    BigDecimal::from(big_int)
}

/// Convert alloy I256 to BigDecimal, preserving the sign.
pub fn i256_to_bigdecimal(value: I256) -> BigDecimal {
    let (sign, abs) = value.into_sign_and_abs();
    let magnitude = u256_to_bigdecimal(abs);
    if sign.is_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// Scale a raw unsigned token amount by the token's decimal count.
///
/// A decimal count of zero returns the integer unchanged; otherwise the
/// amount is divided by 10^decimals. Exact for any decimal count a token
/// contract can report (18 is the common case).
///
/// # Example
/// ```ignore
/// let raw = U256::from(1_500_000_000_000_000_000u128); // 1.5e18
/// let adjusted = convert_token_to_decimal(raw, 18); // 1.5
/// ```
pub fn convert_token_to_decimal(amount: U256, decimals: u8) -> BigDecimal {
    let value = u256_to_bigdecimal(amount);
    if decimals == 0 {
        value
    } else {
        value / big_pow10(decimals as u32)
    }
}

/// Scale a raw signed token amount by the token's decimal count.
///
/// Used for concentrated-liquidity swap amounts, where the sign encodes the
/// trade direction and must survive into the stored record.
pub fn convert_signed_to_decimal(amount: I256, decimals: u8) -> BigDecimal {
    let value = i256_to_bigdecimal(amount);
    if decimals == 0 {
        value
    } else {
        value / big_pow10(decimals as u32)
    }
}

// ============================================
// Internal Helpers
// ============================================

static POW10_CACHE: Lazy<[BigDecimal; 25]> =
    Lazy::new(|| std::array::from_fn(|i| BigDecimal::from(BigInt::from(10u32).pow(i as u32))));

/// Compute 10^exp as BigDecimal.
pub fn big_pow10(exp: u32) -> BigDecimal {
    if (exp as usize) < POW10_CACHE.len() {
        POW10_CACHE[exp as usize].clone()
    } else {
        BigDecimal::from(BigInt::from(10u32).pow(exp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn zero_decimals_returns_integer_unchanged() {
        let raw = U256::from(12345u64);
        assert_eq!(convert_token_to_decimal(raw, 0), BigDecimal::from(12345));
    }

    #[test]
    fn eighteen_decimals_is_exact() {
        // 1 wei under 2 tokens: must not round to 2.0
        let raw = U256::from(1_999_999_999_999_999_999u128);
        let expected = BigDecimal::from_str("1.999999999999999999").unwrap();
        assert_eq!(convert_token_to_decimal(raw, 18), expected);
    }

    #[test]
    fn large_reserve_survives_conversion() {
        // 3e26 raw at 18 decimals = 3e8 tokens, beyond f64 integer precision territory
        let raw = U256::from_str("300000000000000000000000001").unwrap();
        let expected = BigDecimal::from_str("300000000.000000000000000001").unwrap();
        assert_eq!(convert_token_to_decimal(raw, 18), expected);
    }

    #[test]
    fn signed_conversion_preserves_sign() {
        let raw = I256::from_str("-5000000000000000000").unwrap();
        let expected = BigDecimal::from(-5);
        assert_eq!(convert_signed_to_decimal(raw, 18), expected);
    }

    #[test]
    fn hex_encode_is_lowercase_prefixed() {
        assert_eq!(hex_encode(&[0xAB, 0xCD]), "0xabcd");
    }
}
