//! Event handlers: the incremental state-mutation and USD-derivation engine.
//!
//! One [`Indexer`] instance processes a strictly ordered event stream
//! (block number, then log index) against an [`EntityStore`]. All mutation
//! for one event is written back before the next event is applied; nothing
//! here blocks except the synchronous token-metadata lookup, whose failure
//! is absorbed with fallback values.
//!
//! Handlers are split per concern:
//!
//! - [`tokens`] - token registry (load-or-create with metadata fallback)
//! - [`factory`] - pair/pool creation for both AMM designs
//! - [`pair`] - V2 reserve sync, spot pricing, USD tiering, V2 swaps
//! - [`pool_v3`] - V3 sqrt-price derivation and swap accounting

pub mod factory;
pub mod pair;
pub mod pool_v3;
pub mod tokens;

pub use tokens::{StaticMetadata, TokenMetadata, TokenMetadataSource};

use crate::config::ChainTokens;
use crate::events::{DexEvent, EventMeta, Payload};
use crate::store::{EntityStore, Transaction};

/// The processing engine. Owns the entity store, the external metadata
/// source, the fixed chain constants, and the queue of addresses the
/// routing layer should start watching.
pub struct Indexer<S, M> {
    pub(crate) store: S,
    pub(crate) metadata: M,
    pub(crate) chain: ChainTokens,
    pub(crate) watch_requests: Vec<String>,
}

impl<S: EntityStore, M: TokenMetadataSource> Indexer<S, M> {
    pub fn new(store: S, metadata: M, chain: ChainTokens) -> Self {
        Self {
            store,
            metadata,
            chain,
            watch_requests: Vec::new(),
        }
    }

    /// Apply one event. Every failure path inside degrades to "no update";
    /// nothing an event can carry is fatal to the caller's loop.
    pub fn apply(&mut self, event: &DexEvent) {
        match &event.payload {
            Payload::V2PairCreated(e) => self.handle_v2_pair_created(&event.meta, e),
            Payload::V2Sync(e) => self.handle_v2_sync(&event.meta, e),
            Payload::V2Swap(e) => self.handle_v2_swap(&event.meta, e),
            Payload::V3PoolCreated(e) => self.handle_v3_pool_created(&event.meta, e),
            Payload::V3Swap(e) => self.handle_v3_swap(&event.meta, e),
        }
    }

    /// Drain the pool addresses that should start receiving events.
    ///
    /// The core never calls into the event source; it only requests
    /// filtering, and the routing layer owns delivery.
    pub fn take_watch_requests(&mut self) -> Vec<String> {
        std::mem::take(&mut self.watch_requests)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn chain(&self) -> &ChainTokens {
        &self.chain
    }

    /// Create the Transaction record on first reference; later events in
    /// the same transaction keep the original block/timestamp.
    pub(crate) fn record_transaction(&mut self, meta: &EventMeta) {
        if self.store.load_transaction(&meta.tx_hash).is_none() {
            self.store.save_transaction(Transaction {
                id: meta.tx_hash.clone(),
                block_number: meta.block_number,
                timestamp: meta.timestamp,
            });
        }
    }
}
