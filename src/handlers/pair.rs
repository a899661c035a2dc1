//! V2 pair handling: reserve synchronization, spot pricing, USD valuation
//! tiering, bridge-price refresh, and swap accounting.

use bigdecimal::BigDecimal;
use chrono::Utc;
use log::warn;
use num_bigint::Sign;
use num_traits::Zero;

use super::{Indexer, TokenMetadataSource};
use crate::events::{v2, EventMeta};
use crate::store::{event_id, EntityStore, Factory, SwapRecord, SyncRecord};
use crate::utils::{convert_token_to_decimal, hex_encode};

impl<S: EntityStore, M: TokenMetadataSource> Indexer<S, M> {
    /// Handle a reserve-synchronization event.
    ///
    /// Recomputes spot prices from the new reserves, applies the USD
    /// valuation tiers against the current bridge price, and — when this
    /// pair is a wrapped-native/stablecoin anchor — overwrites the bridge
    /// price with the stablecoin leg's fresh spot price.
    pub(crate) fn handle_v2_sync(&mut self, meta: &EventMeta, event: &v2::Sync) {
        let Some(mut pair) = self.store.load_pair(&meta.address) else {
            warn!("Sync for unknown pair {}, skipping", meta.address);
            return;
        };
        let (Some(mut token0), Some(mut token1)) = (
            self.store.load_token(&pair.token0),
            self.store.load_token(&pair.token1),
        ) else {
            warn!("Sync for pair {} with missing token records, skipping", meta.address);
            return;
        };

        pair.reserve0 = convert_token_to_decimal(event.reserve0, token0.decimals);
        pair.reserve1 = convert_token_to_decimal(event.reserve1, token1.decimals);

        // A zero divisor leaves the prior price standing; an error value is
        // never written.
        if !pair.reserve1.is_zero() {
            pair.token0_price = &pair.reserve0 / &pair.reserve1;
        }
        if !pair.reserve0.is_zero() {
            pair.token1_price = &pair.reserve1 / &pair.reserve0;
        }

        pair.sync_count += 1;
        pair.last_sync_timestamp = meta.timestamp;
        pair.last_sync_block = meta.block_number;

        // Bundle is created lazily on first reference and lives forever.
        let mut bundle = self.store.load_bundle().unwrap_or_default();
        let bnb_price = bundle.bnb_price.clone();
        let two = BigDecimal::from(2);

        // USD valuation tiers, strict priority order. Tiers 3 and 4 read
        // the bridge price as of before this event's own anchor refresh.
        if self.chain.is_stable(&pair.token0) {
            pair.reserve_usd = &pair.reserve0 * &two;
            token1.derived_usd = pair.token0_price.clone();
        } else if self.chain.is_stable(&pair.token1) {
            pair.reserve_usd = &pair.reserve1 * &two;
            token0.derived_usd = pair.token1_price.clone();
        } else if self.chain.is_wrapped_native(&pair.token0) && bnb_price.sign() == Sign::Plus {
            pair.reserve_usd = &pair.reserve0 * &bnb_price * &two;
            token1.derived_bnb = pair.token1_price.clone();
            token1.derived_usd = &token1.derived_bnb * &bnb_price;
        } else if self.chain.is_wrapped_native(&pair.token1) && bnb_price.sign() == Sign::Plus {
            pair.reserve_usd = &pair.reserve1 * &bnb_price * &two;
            token0.derived_bnb = pair.token0_price.clone();
            token0.derived_usd = &token0.derived_bnb * &bnb_price;
        }
        // No tier applies: valuation gap, prior USD values stand.

        // Anchor refresh: the stablecoin leg's spot price becomes the new
        // bridge price. Last writer among anchor pairs wins, unweighted.
        if self.chain.is_anchor_pair(&pair.token0, &pair.token1) {
            bundle.bnb_price = if self.chain.is_wrapped_native(&pair.token0) {
                pair.token1_price.clone()
            } else {
                pair.token0_price.clone()
            };
            bundle.updated_at = Utc::now();
        }

        self.store.save_bundle(bundle);
        self.store.save_token(token0);
        self.store.save_token(token1);

        let record = SyncRecord {
            id: event_id(&meta.tx_hash, meta.log_index),
            pair: pair.address.clone(),
            reserve0: pair.reserve0.clone(),
            reserve1: pair.reserve1.clone(),
            timestamp: meta.timestamp,
            block_number: meta.block_number,
        };
        self.store.save_pair(pair);
        self.store.save_sync(record);
    }

    /// Handle a V2 trade-execution event.
    ///
    /// Converts the four gross amounts, values the trade in USD via the
    /// stablecoin/derived tiers, and accumulates volumes and transaction
    /// counts on the pair, both tokens, and the factory.
    pub(crate) fn handle_v2_swap(&mut self, meta: &EventMeta, event: &v2::Swap) {
        let Some(mut pair) = self.store.load_pair(&meta.address) else {
            warn!("Swap for unknown pair {}, skipping", meta.address);
            return;
        };
        let (Some(mut token0), Some(mut token1)) = (
            self.store.load_token(&pair.token0),
            self.store.load_token(&pair.token1),
        ) else {
            warn!("Swap for pair {} with missing token records, skipping", meta.address);
            return;
        };

        let amount0_in = convert_token_to_decimal(event.amount0_in, token0.decimals);
        let amount1_in = convert_token_to_decimal(event.amount1_in, token1.decimals);
        let amount0_out = convert_token_to_decimal(event.amount0_out, token0.decimals);
        let amount1_out = convert_token_to_decimal(event.amount1_out, token1.decimals);

        let amount0_total = &amount0_in + &amount0_out;
        let amount1_total = &amount1_in + &amount1_out;

        // Trade notional, strict priority: stablecoin legs first, then
        // already-derived token prices, else an untracked (zero) notional.
        let amount_usd = if self.chain.is_stable(&pair.token0) {
            amount0_total.clone()
        } else if self.chain.is_stable(&pair.token1) {
            amount1_total.clone()
        } else if token0.derived_usd.sign() == Sign::Plus {
            &amount0_total * &token0.derived_usd
        } else if token1.derived_usd.sign() == Sign::Plus {
            &amount1_total * &token1.derived_usd
        } else {
            BigDecimal::zero()
        };

        pair.volume_token0 = &pair.volume_token0 + &amount0_total;
        pair.volume_token1 = &pair.volume_token1 + &amount1_total;
        pair.volume_usd = &pair.volume_usd + &amount_usd;
        pair.tx_count += 1;

        token0.trade_volume = &token0.trade_volume + &amount0_total;
        token0.trade_volume_usd = &token0.trade_volume_usd + &amount_usd;
        token0.tx_count += 1;

        token1.trade_volume = &token1.trade_volume + &amount1_total;
        token1.trade_volume_usd = &token1.trade_volume_usd + &amount_usd;
        token1.tx_count += 1;

        let mut factory = self
            .store
            .load_factory(&self.chain.factory_v2)
            .unwrap_or_else(|| Factory::new(self.chain.factory_v2.clone()));
        factory.total_volume_usd = &factory.total_volume_usd + &amount_usd;
        factory.tx_count += 1;

        self.record_transaction(meta);

        let record = SwapRecord {
            id: event_id(&meta.tx_hash, meta.log_index),
            transaction: meta.tx_hash.clone(),
            timestamp: meta.timestamp,
            pair: pair.address.clone(),
            sender: hex_encode(event.sender.as_slice()),
            from: meta.tx_from.clone(),
            to: hex_encode(event.to.as_slice()),
            amount0_in,
            amount1_in,
            amount0_out,
            amount1_out,
            amount_usd,
            log_index: meta.log_index,
        };

        self.store.save_pair(pair);
        self.store.save_token(token0);
        self.store.save_token(token1);
        self.store.save_factory(factory);
        self.store.save_swap(record);
    }
}
