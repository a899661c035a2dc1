use bigdecimal::BigDecimal;
use num_traits::Zero;

/// V2 factory singleton, keyed by the fixed factory contract address.
///
/// pool_count increments exactly once per creation event; the volume and
/// transaction counters accumulate across every pair the factory deployed.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Factory {
    pub address: String,
    pub pool_count: u64,
    pub total_volume_usd: BigDecimal,
    pub tx_count: u64,
}

impl Factory {
    pub fn new(address: String) -> Self {
        Self {
            address: address.to_lowercase(),
            pool_count: 0,
            total_volume_usd: BigDecimal::zero(),
            tx_count: 0,
        }
    }
}

/// V3 factory singleton. Same contract as [`Factory`] semantically, kept as
/// a separate entity so the two AMM designs aggregate independently.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FactoryV3 {
    pub address: String,
    pub pool_count: u64,
    pub total_volume_usd: BigDecimal,
    pub total_value_locked_usd: BigDecimal,
    pub tx_count: u64,
}

impl FactoryV3 {
    pub fn new(address: String) -> Self {
        Self {
            address: address.to_lowercase(),
            pool_count: 0,
            total_volume_usd: BigDecimal::zero(),
            total_value_locked_usd: BigDecimal::zero(),
            tx_count: 0,
        }
    }
}
