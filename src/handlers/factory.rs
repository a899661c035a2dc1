//! Creation-event handling for both AMM designs.
//!
//! Registers the factory singleton, resolves both tokens through the
//! registry, creates the zero-initialized pool record and queues a watch
//! request for the new address. A duplicate creation event for a known pool
//! address is a caller error and is not defended against here.

use log::info;

use super::{Indexer, TokenMetadataSource};
use crate::events::{v2, v3, EventMeta};
use crate::store::{EntityStore, Factory, FactoryV3, Pair, PoolV3};
use crate::utils::hex_encode;

impl<S: EntityStore, M: TokenMetadataSource> Indexer<S, M> {
    pub(crate) fn handle_v2_pair_created(&mut self, meta: &EventMeta, event: &v2::PairCreated) {
        let mut factory = self
            .store
            .load_factory(&self.chain.factory_v2)
            .unwrap_or_else(|| Factory::new(self.chain.factory_v2.clone()));
        factory.pool_count += 1;
        self.store.save_factory(factory);

        let token0 = self.get_or_create_token(&event.token0);
        let token1 = self.get_or_create_token(&event.token1);

        let address = hex_encode(event.pair.as_slice());
        let pair = Pair::new(
            address.clone(),
            token0.address,
            token1.address,
            meta.block_number,
            meta.timestamp,
        );

        info!(
            "New V2 pair created: {} (token0: {}, token1: {})",
            address, token0.symbol, token1.symbol
        );

        self.store.save_pair(pair);
        self.watch_requests.push(address);
    }

    pub(crate) fn handle_v3_pool_created(&mut self, meta: &EventMeta, event: &v3::PoolCreated) {
        let mut factory = self
            .store
            .load_factory_v3(&self.chain.factory_v3)
            .unwrap_or_else(|| FactoryV3::new(self.chain.factory_v3.clone()));
        factory.pool_count += 1;
        self.store.save_factory_v3(factory);

        let token0 = self.get_or_create_token(&event.token0);
        let token1 = self.get_or_create_token(&event.token1);

        let address = hex_encode(event.pool.as_slice());
        let pool = PoolV3::new(
            address.clone(),
            token0.address,
            token1.address,
            event.fee,
            meta.block_number,
            meta.timestamp,
        );

        info!(
            "New V3 pool created: {} (token0: {}, token1: {}, fee: {})",
            address, token0.symbol, token1.symbol, event.fee
        );

        self.store.save_pool(pool);
        self.watch_requests.push(address);
    }
}

#[cfg(test)]
mod tests {
    use num_traits::Zero;

    use super::super::testutil::*;
    use crate::store::EntityStore;

    #[test]
    fn v2_pair_is_zero_initialized_and_counted() {
        let mut ix = bsc_indexer();
        let factory_v2 = ix.chain.factory_v2.clone();
        ix.apply(&pair_created(&factory_v2, PAIR_A_WBNB, TOK_A, WBNB, 100));

        let pair = ix.store.load_pair(PAIR_A_WBNB).unwrap();
        assert_eq!(pair.token0, TOK_A);
        assert_eq!(pair.token1, WBNB);
        assert!(pair.reserve0.is_zero());
        assert!(pair.volume_usd.is_zero());
        assert_eq!(pair.tx_count, 0);
        assert_eq!(pair.created_at_block, 100);

        let factory = ix.store.load_factory(&factory_v2).unwrap();
        assert_eq!(factory.pool_count, 1);
        assert!(factory.total_volume_usd.is_zero());
    }

    #[test]
    fn v3_pool_carries_the_event_fee_tier() {
        let mut ix = bsc_indexer();
        let factory_v3 = ix.chain.factory_v3.clone();
        ix.apply(&pool_created(&factory_v3, POOL_A_B, TOK_A, TOK_B, 2500, 100));

        let pool = ix.store.load_pool(POOL_A_B).unwrap();
        assert_eq!(pool.fee_tier, 2500);
        assert_eq!(pool.liquidity, 0);
        assert_eq!(pool.sqrt_price_x96, "0");
        assert!(pool.volume_token0.is_zero());
        assert!(pool.total_value_locked_usd.is_zero());

        let factory = ix.store.load_factory_v3(&factory_v3).unwrap();
        assert_eq!(factory.pool_count, 1);
    }

    #[test]
    fn pool_count_increments_once_per_creation() {
        let mut ix = bsc_indexer();
        let factory_v2 = ix.chain.factory_v2.clone();
        ix.apply(&pair_created(&factory_v2, PAIR_A_WBNB, TOK_A, WBNB, 100));
        ix.apply(&pair_created(&factory_v2, PAIR_WBNB_USDT, WBNB, USDT, 101));
        assert_eq!(ix.store.load_factory(&factory_v2).unwrap().pool_count, 2);
    }

    #[test]
    fn creation_queues_a_watch_request() {
        let mut ix = bsc_indexer();
        let factory_v2 = ix.chain.factory_v2.clone();
        let factory_v3 = ix.chain.factory_v3.clone();
        ix.apply(&pair_created(&factory_v2, PAIR_A_WBNB, TOK_A, WBNB, 100));
        ix.apply(&pool_created(&factory_v3, POOL_A_B, TOK_A, TOK_B, 500, 101));

        let watches = ix.take_watch_requests();
        assert_eq!(watches, vec![PAIR_A_WBNB.to_string(), POOL_A_B.to_string()]);
        assert!(ix.take_watch_requests().is_empty());
    }

    #[test]
    fn creation_registers_both_tokens() {
        let mut ix = bsc_indexer();
        let factory_v2 = ix.chain.factory_v2.clone();
        ix.apply(&pair_created(&factory_v2, PAIR_A_WBNB, TOK_A, WBNB, 100));
        assert_eq!(ix.store.load_token(TOK_A).unwrap().symbol, "AAA");
        assert_eq!(ix.store.load_token(WBNB).unwrap().symbol, "WBNB");
    }
}
