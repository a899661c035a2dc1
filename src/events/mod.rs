//! Inbound event types.
//!
//! Events arrive already decoded and in canonical order (block number, then
//! log index) from the upstream routing layer; this module only defines the
//! shapes the handlers consume. ABI decoding lives outside the core.

pub mod v2;
pub mod v3;

/// Metadata common to every delivered log.
#[derive(Debug, Clone)]
pub struct EventMeta {
    pub block_number: u64,
    /// Block timestamp in unix seconds.
    pub timestamp: u64,
    pub tx_hash: String,
    /// Transaction sender (`tx.from`), distinct from the event's own sender.
    pub tx_from: String,
    pub log_index: u64,
    /// Emitting contract, lowercase hex. The pair/pool address for sync and
    /// swap events, the factory address for creation events.
    pub address: String,
}

/// A decoded event plus its delivery metadata.
#[derive(Debug, Clone)]
pub struct DexEvent {
    pub meta: EventMeta,
    pub payload: Payload,
}

/// The decoded payloads the core reacts to.
#[derive(Debug, Clone)]
pub enum Payload {
    V2PairCreated(v2::PairCreated),
    V2Sync(v2::Sync),
    V2Swap(v2::Swap),
    V3PoolCreated(v3::PoolCreated),
    V3Swap(v3::Swap),
}
