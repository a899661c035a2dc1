//! Entity store interface.
//!
//! The persistent store is an external collaborator; the core only needs a
//! load/save primitive per entity kind. Loads return owned copies — the
//! handlers mutate locally and write back explicitly, so a half-processed
//! event never leaks partial state through shared references.

pub mod memory;
pub mod models;

pub use memory::MemoryStore;
pub use models::{
    event_id, Bundle, Factory, FactoryV3, Pair, PoolV3, SwapRecord, SwapV3Record, SyncRecord,
    Token, Transaction,
};

/// Load/save primitive over the derived entities.
///
/// Ids are lowercase hex addresses except for per-event records, which use
/// the `"{txHash}-{logIndex}"` key from [`event_id`]. Saving under an
/// existing id overwrites; that is what makes record replay idempotent.
pub trait EntityStore {
    fn load_token(&self, id: &str) -> Option<Token>;
    fn save_token(&mut self, token: Token);

    fn load_pair(&self, id: &str) -> Option<Pair>;
    fn save_pair(&mut self, pair: Pair);

    fn load_pool(&self, id: &str) -> Option<PoolV3>;
    fn save_pool(&mut self, pool: PoolV3);

    fn load_bundle(&self) -> Option<Bundle>;
    fn save_bundle(&mut self, bundle: Bundle);

    fn load_factory(&self, id: &str) -> Option<Factory>;
    fn save_factory(&mut self, factory: Factory);

    fn load_factory_v3(&self, id: &str) -> Option<FactoryV3>;
    fn save_factory_v3(&mut self, factory: FactoryV3);

    fn load_transaction(&self, id: &str) -> Option<Transaction>;
    fn save_transaction(&mut self, transaction: Transaction);

    fn load_swap(&self, id: &str) -> Option<SwapRecord>;
    fn save_swap(&mut self, swap: SwapRecord);

    fn load_swap_v3(&self, id: &str) -> Option<SwapV3Record>;
    fn save_swap_v3(&mut self, swap: SwapV3Record);

    fn load_sync(&self, id: &str) -> Option<SyncRecord>;
    fn save_sync(&mut self, sync: SyncRecord);
}
