use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;

/// Constant-product (V2) pair state and cumulative accounting.
///
/// Primary key: pool address. token0/token1 ordering is fixed by the pair
/// contract and never changes. Price fields are written only by the sync
/// handler; volume fields only by the swap handler, and only additively.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Pair {
    pub address: String,

    // Token pair (ordered, immutable)
    pub token0: String,
    pub token1: String,

    // Current reserves (decimal-adjusted) and spot prices
    pub reserve0: BigDecimal,
    pub reserve1: BigDecimal,
    /// token0 per token1 (reserve0 / reserve1)
    pub token0_price: BigDecimal,
    /// token1 per token0 (reserve1 / reserve0)
    pub token1_price: BigDecimal,
    pub reserve_usd: BigDecimal,

    // Lifetime accounting
    pub volume_token0: BigDecimal,
    pub volume_token1: BigDecimal,
    pub volume_usd: BigDecimal,
    pub tx_count: u64,

    // Sync tracking
    pub sync_count: u64,
    pub last_sync_timestamp: u64,
    pub last_sync_block: u64,

    // Creation metadata
    pub created_at: Option<DateTime<Utc>>,
    pub created_at_block: u64,
}

impl Pair {
    pub fn new(
        address: String,
        token0: String,
        token1: String,
        block_number: u64,
        timestamp: u64,
    ) -> Self {
        Self {
            address: address.to_lowercase(),
            token0,
            token1,
            reserve0: BigDecimal::zero(),
            reserve1: BigDecimal::zero(),
            token0_price: BigDecimal::zero(),
            token1_price: BigDecimal::zero(),
            reserve_usd: BigDecimal::zero(),
            volume_token0: BigDecimal::zero(),
            volume_token1: BigDecimal::zero(),
            volume_usd: BigDecimal::zero(),
            tx_count: 0,
            sync_count: 0,
            last_sync_timestamp: 0,
            last_sync_block: 0,
            created_at: DateTime::from_timestamp(timestamp as i64, 0),
            created_at_block: block_number,
        }
    }
}
