//! V3 pool handling: sqrt-price derivation and swap accounting.
//!
//! V3 swaps carry the post-trade price in the event itself, so pricing and
//! volume accounting happen in a single handler. Valuation here has no
//! wrapped-native bridge tiers: a V3 pool whose only priced leg is the
//! native token contributes zero USD volume until one of its tokens gains a
//! `derived_usd` from elsewhere.

use bigdecimal::{BigDecimal, One};
use log::warn;
use num_bigint::Sign;
use num_traits::Zero;

use super::{Indexer, TokenMetadataSource};
use crate::events::{v3, EventMeta};
use crate::store::{event_id, EntityStore, FactoryV3, SwapV3Record};
use crate::utils::{convert_signed_to_decimal, hex_encode, sqrt_price_x96_to_token0_price};

impl<S: EntityStore, M: TokenMetadataSource> Indexer<S, M> {
    pub(crate) fn handle_v3_swap(&mut self, meta: &EventMeta, event: &v3::Swap) {
        let Some(mut pool) = self.store.load_pool(&meta.address) else {
            warn!("V3 swap for unknown pool {}, skipping", meta.address);
            return;
        };
        let (Some(mut token0), Some(mut token1)) = (
            self.store.load_token(&pool.token0),
            self.store.load_token(&pool.token1),
        ) else {
            warn!("V3 swap for pool {} with missing token records, skipping", meta.address);
            return;
        };

        pool.sqrt_price_x96 = event.sqrt_price_x96.to_string();
        pool.tick = event.tick;
        pool.liquidity = event.liquidity;

        // A zero sqrt price keeps the prior spot prices standing.
        if let Some(price0) = sqrt_price_x96_to_token0_price(
            event.sqrt_price_x96,
            token0.decimals,
            token1.decimals,
        ) {
            if price0.sign() == Sign::Plus {
                pool.token1_price = BigDecimal::one() / &price0;
            }
            pool.token0_price = price0;
        }

        // Pool-relative deltas are signed; volume is accounted gross.
        let amount0 = convert_signed_to_decimal(event.amount0, token0.decimals);
        let amount1 = convert_signed_to_decimal(event.amount1, token1.decimals);
        let amount0_abs = amount0.abs();
        let amount1_abs = amount1.abs();

        let amount_usd = if self.chain.is_stable(&pool.token0) {
            amount0_abs.clone()
        } else if self.chain.is_stable(&pool.token1) {
            amount1_abs.clone()
        } else if token0.derived_usd.sign() == Sign::Plus {
            &amount0_abs * &token0.derived_usd
        } else if token1.derived_usd.sign() == Sign::Plus {
            &amount1_abs * &token1.derived_usd
        } else {
            BigDecimal::zero()
        };

        pool.volume_token0 = &pool.volume_token0 + &amount0_abs;
        pool.volume_token1 = &pool.volume_token1 + &amount1_abs;
        pool.volume_usd = &pool.volume_usd + &amount_usd;
        pool.tx_count += 1;

        // Signed deltas move locked balances in place.
        let previous_tvl_usd = pool.total_value_locked_usd.clone();
        pool.total_value_locked_token0 = &pool.total_value_locked_token0 + &amount0;
        pool.total_value_locked_token1 = &pool.total_value_locked_token1 + &amount1;
        pool.total_value_locked_usd = &pool.total_value_locked_token0 * &token0.derived_usd
            + &pool.total_value_locked_token1 * &token1.derived_usd;

        token0.trade_volume = &token0.trade_volume + &amount0_abs;
        token0.trade_volume_usd = &token0.trade_volume_usd + &amount_usd;
        token0.tx_count += 1;

        token1.trade_volume = &token1.trade_volume + &amount1_abs;
        token1.trade_volume_usd = &token1.trade_volume_usd + &amount_usd;
        token1.tx_count += 1;

        let mut factory = self
            .store
            .load_factory_v3(&self.chain.factory_v3)
            .unwrap_or_else(|| FactoryV3::new(self.chain.factory_v3.clone()));
        factory.total_volume_usd = &factory.total_volume_usd + &amount_usd;
        // Aggregate TVL moves by this pool's delta, not a full recomputation.
        factory.total_value_locked_usd =
            &factory.total_value_locked_usd - &previous_tvl_usd + &pool.total_value_locked_usd;
        factory.tx_count += 1;

        self.record_transaction(meta);

        let record = SwapV3Record {
            id: event_id(&meta.tx_hash, meta.log_index),
            transaction: meta.tx_hash.clone(),
            timestamp: meta.timestamp,
            pool: pool.address.clone(),
            sender: hex_encode(event.sender.as_slice()),
            recipient: hex_encode(event.recipient.as_slice()),
            amount0,
            amount1,
            amount_usd,
            sqrt_price_x96: pool.sqrt_price_x96.clone(),
            tick: event.tick,
            log_index: meta.log_index,
        };

        self.store.save_pool(pool);
        self.store.save_token(token0);
        self.store.save_token(token1);
        self.store.save_factory_v3(factory);
        self.store.save_swap_v3(record);
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;
    use bigdecimal::BigDecimal;
    use num_traits::Zero;

    use super::super::testutil::*;
    use crate::store::EntityStore;

    fn q96() -> U256 {
        U256::from(1u8) << 96
    }

    fn ix_with_pool(
        pool: &str,
        token0: &str,
        token1: &str,
    ) -> crate::Indexer<crate::MemoryStore, crate::StaticMetadata> {
        let mut ix = bsc_indexer();
        let factory_v3 = ix.chain.factory_v3.clone();
        ix.apply(&pool_created(&factory_v3, pool, token0, token1, 2500, 100));
        ix
    }

    #[test]
    fn unit_sqrt_price_gives_unit_spot_prices() {
        let mut ix = ix_with_pool(POOL_USDT_A, USDT, TOK_A);
        ix.apply(&swap_v3(
            POOL_USDT_A,
            signed_units(0, 18),
            signed_units(0, 18),
            q96(),
            1_000,
            0,
            101,
            "0xv1",
            0,
        ));

        let pool = ix.store.load_pool(POOL_USDT_A).unwrap();
        assert_eq!(pool.token0_price, BigDecimal::from(1));
        assert_eq!(pool.token1_price, BigDecimal::from(1));
        assert_eq!(pool.sqrt_price_x96, q96().to_string());
        assert_eq!(pool.liquidity, 1_000);
    }

    #[test]
    fn zero_sqrt_price_keeps_the_prior_price() {
        let mut ix = ix_with_pool(POOL_USDT_A, USDT, TOK_A);
        ix.apply(&swap_v3(
            POOL_USDT_A,
            signed_units(0, 18),
            signed_units(0, 18),
            q96() * U256::from(2u8),
            0,
            0,
            101,
            "0xv1",
            0,
        ));
        ix.apply(&swap_v3(
            POOL_USDT_A,
            signed_units(0, 18),
            signed_units(0, 18),
            U256::ZERO,
            0,
            0,
            102,
            "0xv2",
            0,
        ));

        let pool = ix.store.load_pool(POOL_USDT_A).unwrap();
        assert_eq!(pool.token0_price, BigDecimal::from(4));
        // Raw fields still mirror the last event
        assert_eq!(pool.sqrt_price_x96, "0");
    }

    #[test]
    fn signed_deltas_account_gross_volume_and_keep_sign_in_the_record() {
        let mut ix = ix_with_pool(POOL_USDT_A, USDT, TOK_A);
        // 100 USDT into the pool, 5 AAA out to the recipient
        ix.apply(&swap_v3(
            POOL_USDT_A,
            signed_units(100, 18),
            signed_units(-5, 18),
            q96(),
            0,
            0,
            101,
            "0xv1",
            2,
        ));

        let pool = ix.store.load_pool(POOL_USDT_A).unwrap();
        assert_eq!(pool.volume_token0, BigDecimal::from(100));
        assert_eq!(pool.volume_token1, BigDecimal::from(5));
        // token0 is a stablecoin: notional from its gross leg
        assert_eq!(pool.volume_usd, BigDecimal::from(100));
        assert_eq!(pool.total_value_locked_token0, BigDecimal::from(100));
        assert_eq!(pool.total_value_locked_token1, BigDecimal::from(-5));

        let record = ix.store.load_swap_v3("0xv1-2").unwrap();
        assert_eq!(record.amount0, BigDecimal::from(100));
        assert_eq!(record.amount1, BigDecimal::from(-5));
        assert_eq!(record.amount_usd, BigDecimal::from(100));
        assert_eq!(record.tick, 0);
    }

    #[test]
    fn native_leg_without_derived_price_is_not_bridged() {
        let mut ix = bsc_indexer();
        let factory_v2 = ix.chain.factory_v2.clone();
        let factory_v3 = ix.chain.factory_v3.clone();
        ix.apply(&pair_created(&factory_v2, PAIR_WBNB_USDT, WBNB, USDT, 100));
        ix.apply(&pool_created(&factory_v3, POOL_A_WBNB, TOK_A, WBNB, 500, 100));

        // The bridge price is live, but WBNB has no derived_usd yet: the
        // V3 valuation has no bridge tier, so this trade stays unpriced.
        let mut store_only_bundle = crate::store::Bundle::new();
        store_only_bundle.bnb_price = BigDecimal::from(300);
        ix.store.save_bundle(store_only_bundle);

        ix.apply(&swap_v3(
            POOL_A_WBNB,
            signed_units(600, 18),
            signed_units(-2, 18),
            q96(),
            0,
            0,
            101,
            "0xv1",
            0,
        ));

        let pool = ix.store.load_pool(POOL_A_WBNB).unwrap();
        assert!(pool.volume_usd.is_zero());
        assert_eq!(pool.volume_token1, BigDecimal::from(2));
    }

    #[test]
    fn derived_usd_from_a_v2_anchor_prices_v3_volume() {
        let mut ix = bsc_indexer();
        let factory_v2 = ix.chain.factory_v2.clone();
        let factory_v3 = ix.chain.factory_v3.clone();
        ix.apply(&pair_created(&factory_v2, PAIR_WBNB_USDT, WBNB, USDT, 100));
        ix.apply(&pool_created(&factory_v3, POOL_A_WBNB, TOK_A, WBNB, 500, 100));

        // Anchor sync sets WBNB derived_usd = 300 via the stable tier
        ix.apply(&sync(
            PAIR_WBNB_USDT,
            units(1000, 18),
            units(300_000, 18),
            101,
            "0xs1",
            1,
        ));
        ix.apply(&swap_v3(
            POOL_A_WBNB,
            signed_units(600, 18),
            signed_units(-2, 18),
            q96(),
            0,
            0,
            102,
            "0xv1",
            0,
        ));

        let record = ix.store.load_swap_v3("0xv1-0").unwrap();
        assert_eq!(record.amount_usd, BigDecimal::from(600));

        let factory = ix.store.load_factory_v3(&factory_v3).unwrap();
        assert_eq!(factory.total_volume_usd, BigDecimal::from(600));
        assert_eq!(factory.tx_count, 1);
        // Single pool: aggregate TVL mirrors the pool's own
        let pool = ix.store.load_pool(POOL_A_WBNB).unwrap();
        assert_eq!(factory.total_value_locked_usd, pool.total_value_locked_usd);
    }

    #[test]
    fn v3_swap_for_unknown_pool_mutates_nothing() {
        let mut ix = bsc_indexer();
        ix.apply(&swap_v3(
            POOL_A_B,
            signed_units(1, 18),
            signed_units(-1, 6),
            q96(),
            0,
            0,
            101,
            "0xv1",
            0,
        ));
        assert_eq!(ix.store.swap_v3_count(), 0);
        assert!(ix.store.load_factory_v3(&ix.chain.factory_v3.clone()).is_none());
    }

    #[test]
    fn v3_replay_overwrites_record_and_double_counts_volume() {
        let mut ix = ix_with_pool(POOL_USDT_A, USDT, TOK_A);
        let event = swap_v3(
            POOL_USDT_A,
            signed_units(50, 18),
            signed_units(-1, 18),
            q96(),
            0,
            0,
            101,
            "0xv1",
            3,
        );
        ix.apply(&event);
        ix.apply(&event);

        assert_eq!(ix.store.swap_v3_count(), 1);
        assert!(ix.store.load_swap_v3("0xv1-3").is_some());
        let pool = ix.store.load_pool(POOL_USDT_A).unwrap();
        assert_eq!(pool.volume_usd, BigDecimal::from(100));
        assert_eq!(pool.tx_count, 2);
    }
}
