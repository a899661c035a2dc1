//! Price derivation for concentrated-liquidity pools.
//!
//! Converts the Q64.96 fixed-point square-root price emitted by V3 swap
//! events into a decimal-adjusted exchange rate.

use alloy::primitives::U256;
use bigdecimal::BigDecimal;
use std::str::FromStr;

use super::conversion::{big_pow10, u256_to_bigdecimal};

/// Constant: 2^96 (Q64.96 fixed point scaling factor)
const Q96: &str = "79228162514264337593543950336";

/// Convert a sqrtPriceX96 value to the pool's token0 price.
///
/// price = (sqrtPriceX96 / 2^96)^2, then adjusted by 10^(decimals0 - decimals1)
/// so the result is expressed in human-scale units on both sides.
///
/// Returns None for a zero input (uninitialized pool); callers keep the
/// previously stored price in that case rather than writing an invalid one.
pub fn sqrt_price_x96_to_token0_price(
    sqrt_price_x96: U256,
    token0_decimals: u8,
    token1_decimals: u8,
) -> Option<BigDecimal> {
    if sqrt_price_x96.is_zero() {
        return None;
    }

    let sqrt_price = u256_to_bigdecimal(sqrt_price_x96);
    let q96 = BigDecimal::from_str(Q96).expect("Q96 constant is a valid decimal");

    // raw price = (sqrtPriceX96 / Q96)^2
    let ratio = sqrt_price / q96;
    let raw_price = &ratio * &ratio;

    // decimal adjustment: 10^(decimals0 - decimals1)
    let decimal_diff = token0_decimals as i32 - token1_decimals as i32;
    let adjusted = if decimal_diff >= 0 {
        raw_price * big_pow10(decimal_diff as u32)
    } else {
        raw_price / big_pow10((-decimal_diff) as u32)
    };

    Some(adjusted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn unit_sqrt_price_with_equal_decimals_is_one() {
        let sqrt = U256::from_str("79228162514264337593543950336").unwrap();
        let price = sqrt_price_x96_to_token0_price(sqrt, 18, 18).unwrap();
        assert_eq!(price, BigDecimal::one());
    }

    #[test]
    fn decimal_gap_scales_the_price() {
        // sqrt = 2^96 means raw price 1.0; a 6/18 decimal pair scales by 10^-12
        let sqrt = U256::from_str("79228162514264337593543950336").unwrap();
        let price = sqrt_price_x96_to_token0_price(sqrt, 6, 18).unwrap();
        assert_eq!(price, BigDecimal::one() / big_pow10(12));

        let price = sqrt_price_x96_to_token0_price(sqrt, 18, 6).unwrap();
        assert_eq!(price, big_pow10(12));
    }

    #[test]
    fn zero_sqrt_price_yields_none() {
        assert!(sqrt_price_x96_to_token0_price(U256::ZERO, 18, 18).is_none());
    }

    #[test]
    fn doubled_sqrt_price_quadruples_the_rate() {
        let sqrt = U256::from_str("158456325028528675187087900672").unwrap(); // 2^97
        let price = sqrt_price_x96_to_token0_price(sqrt, 18, 18).unwrap();
        assert_eq!(price, BigDecimal::from(4));
    }
}
