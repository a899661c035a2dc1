use bigdecimal::BigDecimal;

/// Build the globally unique id for a per-event record.
///
/// Keying by (transactionHash, logIndex) means re-delivery of an identical
/// event overwrites the existing record instead of duplicating it.
pub fn event_id(tx_hash: &str, log_index: u64) -> String {
    format!("{}-{}", tx_hash, log_index)
}

/// One transaction, created on first reference. First occurrence wins;
/// later events in the same transaction reuse the existing record.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Transaction {
    pub id: String,
    pub block_number: u64,
    pub timestamp: u64,
}

/// Immutable record of one V2 trade.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SwapRecord {
    pub id: String,
    pub transaction: String,
    pub timestamp: u64,
    pub pair: String,
    pub sender: String,
    /// Transaction sender, which may differ from the event sender when the
    /// trade was routed through a contract.
    pub from: String,
    pub to: String,
    pub amount0_in: BigDecimal,
    pub amount1_in: BigDecimal,
    pub amount0_out: BigDecimal,
    pub amount1_out: BigDecimal,
    pub amount_usd: BigDecimal,
    pub log_index: u64,
}

/// Immutable record of one V3 trade. Amounts keep the event's sign; the
/// sqrt price and tick are the pool state after the swap.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SwapV3Record {
    pub id: String,
    pub transaction: String,
    pub timestamp: u64,
    pub pool: String,
    pub sender: String,
    pub recipient: String,
    pub amount0: BigDecimal,
    pub amount1: BigDecimal,
    pub amount_usd: BigDecimal,
    pub sqrt_price_x96: String,
    pub tick: i32,
    pub log_index: u64,
}

/// Immutable record of one V2 reserve synchronization, carrying the
/// post-event reserves.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SyncRecord {
    pub id: String,
    pub pair: String,
    pub reserve0: BigDecimal,
    pub reserve1: BigDecimal,
    pub timestamp: u64,
    pub block_number: u64,
}
