use bigdecimal::BigDecimal;
use num_traits::Zero;

/// Token metadata and cumulative trade accounting.
///
/// Primary key: lowercase hex address. Decimals are fixed at creation;
/// volumes and the transaction count only ever grow.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Token {
    pub address: String,

    // On-chain metadata (immutable after creation)
    pub symbol: String,
    pub name: String,
    pub decimals: u8,

    // Lifetime accounting
    pub trade_volume: BigDecimal,
    pub trade_volume_usd: BigDecimal,
    pub tx_count: u64,

    // Derived pricing, refreshed opportunistically by pair activity
    pub derived_bnb: BigDecimal,
    pub derived_usd: BigDecimal,
}

impl Token {
    pub fn new(address: String, symbol: String, name: String, decimals: u8) -> Self {
        Self {
            // Always lowercase addresses for consistent comparisons
            address: address.to_lowercase(),
            symbol,
            name,
            decimals,
            trade_volume: BigDecimal::zero(),
            trade_volume_usd: BigDecimal::zero(),
            tx_count: 0,
            derived_bnb: BigDecimal::zero(),
            derived_usd: BigDecimal::zero(),
        }
    }
}
