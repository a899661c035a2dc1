//! Utility functions for the Griddle accounting core.
//!
//! This module is organized into focused submodules:
//!
//! - [`conversion`] - Exact base-10 decimal conversion and hex encoding
//! - [`price`] - sqrtPriceX96 price derivation for concentrated-liquidity pools

mod conversion;
mod price;

// ============================================
// Re-exports
// ============================================

// Conversion utilities
pub use conversion::{
    big_pow10, convert_signed_to_decimal, convert_token_to_decimal, hex_encode,
    i256_to_bigdecimal, u256_to_bigdecimal,
};

// Price derivation utilities
pub use price::sqrt_price_x96_to_token0_price;
