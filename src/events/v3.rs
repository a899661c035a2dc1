//! Concentrated-liquidity (V3) pool events.

use alloy::primitives::{Address, I256, U256};

/// Emitted by the V3 factory when a new pool contract is deployed.
#[derive(Debug, Clone)]
pub struct PoolCreated {
    pub token0: Address,
    pub token1: Address,
    /// Fee tier in hundredths of a bip (e.g. 2500 = 0.25%).
    pub fee: u32,
    pub pool: Address,
}

/// Emitted by a pool on trade execution. Amounts are signed: positive means
/// the pool received the token, negative means it paid it out. The sqrt
/// price, tick and liquidity reflect pool state after the swap.
#[derive(Debug, Clone)]
pub struct Swap {
    pub sender: Address,
    pub recipient: Address,
    pub amount0: I256,
    pub amount1: I256,
    pub sqrt_price_x96: U256,
    pub liquidity: u128,
    pub tick: i32,
}
