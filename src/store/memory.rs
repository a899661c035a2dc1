use rustc_hash::FxHashMap;

use super::models::{
    Bundle, Factory, FactoryV3, Pair, PoolV3, SwapRecord, SwapV3Record, SyncRecord, Token,
    Transaction,
};
use super::EntityStore;

/// FxHashMap-backed store, used by tests and as a reference implementation
/// of the [`EntityStore`] contract.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tokens: FxHashMap<String, Token>,
    pairs: FxHashMap<String, Pair>,
    pools: FxHashMap<String, PoolV3>,
    bundle: Option<Bundle>,
    factories: FxHashMap<String, Factory>,
    factories_v3: FxHashMap<String, FactoryV3>,
    transactions: FxHashMap<String, Transaction>,
    swaps: FxHashMap<String, SwapRecord>,
    swaps_v3: FxHashMap<String, SwapV3Record>,
    syncs: FxHashMap<String, SyncRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn swap_count(&self) -> usize {
        self.swaps.len()
    }

    pub fn swap_v3_count(&self) -> usize {
        self.swaps_v3.len()
    }

    pub fn sync_count(&self) -> usize {
        self.syncs.len()
    }
}

impl EntityStore for MemoryStore {
    fn load_token(&self, id: &str) -> Option<Token> {
        self.tokens.get(id).cloned()
    }

    fn save_token(&mut self, token: Token) {
        self.tokens.insert(token.address.clone(), token);
    }

    fn load_pair(&self, id: &str) -> Option<Pair> {
        self.pairs.get(id).cloned()
    }

    fn save_pair(&mut self, pair: Pair) {
        self.pairs.insert(pair.address.clone(), pair);
    }

    fn load_pool(&self, id: &str) -> Option<PoolV3> {
        self.pools.get(id).cloned()
    }

    fn save_pool(&mut self, pool: PoolV3) {
        self.pools.insert(pool.address.clone(), pool);
    }

    fn load_bundle(&self) -> Option<Bundle> {
        self.bundle.clone()
    }

    fn save_bundle(&mut self, bundle: Bundle) {
        self.bundle = Some(bundle);
    }

    fn load_factory(&self, id: &str) -> Option<Factory> {
        self.factories.get(id).cloned()
    }

    fn save_factory(&mut self, factory: Factory) {
        self.factories.insert(factory.address.clone(), factory);
    }

    fn load_factory_v3(&self, id: &str) -> Option<FactoryV3> {
        self.factories_v3.get(id).cloned()
    }

    fn save_factory_v3(&mut self, factory: FactoryV3) {
        self.factories_v3.insert(factory.address.clone(), factory);
    }

    fn load_transaction(&self, id: &str) -> Option<Transaction> {
        self.transactions.get(id).cloned()
    }

    fn save_transaction(&mut self, transaction: Transaction) {
        self.transactions.insert(transaction.id.clone(), transaction);
    }

    fn load_swap(&self, id: &str) -> Option<SwapRecord> {
        self.swaps.get(id).cloned()
    }

    fn save_swap(&mut self, swap: SwapRecord) {
        self.swaps.insert(swap.id.clone(), swap);
    }

    fn load_swap_v3(&self, id: &str) -> Option<SwapV3Record> {
        self.swaps_v3.get(id).cloned()
    }

    fn save_swap_v3(&mut self, swap: SwapV3Record) {
        self.swaps_v3.insert(swap.id.clone(), swap);
    }

    fn load_sync(&self, id: &str) -> Option<SyncRecord> {
        self.syncs.get(id).cloned()
    }

    fn save_sync(&mut self, sync: SyncRecord) {
        self.syncs.insert(sync.id.clone(), sync);
    }
}
