use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;

/// Singleton holding the native asset's current USD rate.
///
/// Created lazily on first reference, written only by the V2 sync handler
/// when a wrapped-native/stablecoin anchor pair syncs. Last writer wins
/// across anchor pairs; there is no liquidity weighting, which is fine at
/// low pool counts but a known correctness risk at scale.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Bundle {
    pub id: String,
    pub bnb_price: BigDecimal,
    pub updated_at: DateTime<Utc>,
}

/// The single bundle row's id.
pub const BUNDLE_ID: &str = "1";

impl Bundle {
    pub fn new() -> Self {
        Self {
            id: BUNDLE_ID.to_string(),
            bnb_price: BigDecimal::zero(),
            updated_at: Utc::now(),
        }
    }
}

impl Default for Bundle {
    fn default() -> Self {
        Self::new()
    }
}
