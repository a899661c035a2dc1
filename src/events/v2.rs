//! Constant-product (V2) pair events.

use alloy::primitives::{Address, U256};

/// Emitted by the V2 factory when a new pair contract is deployed.
#[derive(Debug, Clone)]
pub struct PairCreated {
    pub token0: Address,
    pub token1: Address,
    pub pair: Address,
}

/// Emitted by a pair after every mutation; carries the post-event reserves.
#[derive(Debug, Clone)]
pub struct Sync {
    pub reserve0: U256,
    pub reserve1: U256,
}

/// Emitted by a pair on trade execution. At most one of each in/out side is
/// non-zero for a simple trade, but the handler sums gross amounts so
/// flash-swap shapes are accounted for too.
#[derive(Debug, Clone)]
pub struct Swap {
    pub sender: Address,
    pub amount0_in: U256,
    pub amount1_in: U256,
    pub amount0_out: U256,
    pub amount1_out: U256,
    pub to: Address,
}
