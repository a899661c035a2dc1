use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;

/// Concentrated-liquidity (V3) pool state and cumulative accounting.
///
/// Primary key: pool address. Same ordering/immutability rules as [`Pair`];
/// liquidity, sqrtPriceX96 and tick are copied from each swap event, which
/// carries the post-swap pool state.
///
/// [`Pair`]: super::Pair
#[derive(Debug, Clone, serde::Serialize)]
pub struct PoolV3 {
    pub address: String,

    // Token pair (ordered, immutable)
    pub token0: String,
    pub token1: String,
    /// Fee tier in hundredths of a bip, fixed at creation.
    pub fee_tier: u32,

    // Current pool state
    pub liquidity: u128,
    /// Full-precision decimal string; "0" until the first swap.
    pub sqrt_price_x96: String,
    pub tick: i32,
    pub token0_price: BigDecimal,
    pub token1_price: BigDecimal,

    // Lifetime accounting
    pub volume_token0: BigDecimal,
    pub volume_token1: BigDecimal,
    pub volume_usd: BigDecimal,
    pub tx_count: u64,

    // TVL tracking
    pub total_value_locked_token0: BigDecimal,
    pub total_value_locked_token1: BigDecimal,
    pub total_value_locked_usd: BigDecimal,

    // Creation metadata
    pub created_at: Option<DateTime<Utc>>,
    pub created_at_block: u64,
}

impl PoolV3 {
    pub fn new(
        address: String,
        token0: String,
        token1: String,
        fee_tier: u32,
        block_number: u64,
        timestamp: u64,
    ) -> Self {
        Self {
            address: address.to_lowercase(),
            token0,
            token1,
            fee_tier,
            liquidity: 0,
            sqrt_price_x96: String::from("0"),
            tick: 0,
            token0_price: BigDecimal::zero(),
            token1_price: BigDecimal::zero(),
            volume_token0: BigDecimal::zero(),
            volume_token1: BigDecimal::zero(),
            volume_usd: BigDecimal::zero(),
            tx_count: 0,
            total_value_locked_token0: BigDecimal::zero(),
            total_value_locked_token1: BigDecimal::zero(),
            total_value_locked_usd: BigDecimal::zero(),
            created_at: DateTime::from_timestamp(timestamp as i64, 0),
            created_at_block: block_number,
        }
    }
}
