//! Token registry: load-or-create with metadata fallback.

use alloy::primitives::Address;
use anyhow::Result;
use log::warn;
use rustc_hash::FxHashMap;

use super::Indexer;
use crate::store::{EntityStore, Token};
use crate::utils::hex_encode;

/// Fallback metadata substituted when the external lookup reverts.
const FALLBACK_SYMBOL: &str = "UNKNOWN";
const FALLBACK_NAME: &str = "Unknown Token";
const FALLBACK_DECIMALS: u8 = 18;

/// Metadata reported by a token contract.
#[derive(Debug, Clone)]
pub struct TokenMetadata {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
}

/// Synchronous external metadata lookup.
///
/// An `Err` means the contract call reverted (non-standard or hostile
/// token); the registry substitutes fallback values and continues, so a bad
/// token can never abort processing of the event that referenced it.
pub trait TokenMetadataSource {
    fn token_metadata(&self, address: &str) -> Result<TokenMetadata>;
}

/// Map-backed metadata source for fixtures and tests. Lookups for
/// unregistered addresses fail, exercising the fallback path.
#[derive(Debug, Default)]
pub struct StaticMetadata {
    entries: FxHashMap<String, TokenMetadata>,
}

impl StaticMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: &str, symbol: &str, name: &str, decimals: u8) {
        self.entries.insert(
            address.to_lowercase(),
            TokenMetadata {
                symbol: symbol.to_string(),
                name: name.to_string(),
                decimals,
            },
        );
    }
}

impl TokenMetadataSource for StaticMetadata {
    fn token_metadata(&self, address: &str) -> Result<TokenMetadata> {
        self.entries
            .get(&address.to_lowercase())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no metadata registered for {}", address))
    }
}

impl<S: EntityStore, M: TokenMetadataSource> Indexer<S, M> {
    /// Load a token by address, creating it on first reference.
    ///
    /// Repeated calls for an existing token return the stored record
    /// unmodified; metadata is only ever fetched once per address.
    pub(crate) fn get_or_create_token(&mut self, address: &Address) -> Token {
        let id = hex_encode(address.as_slice());

        if let Some(token) = self.store.load_token(&id) {
            return token;
        }

        let token = match self.metadata.token_metadata(&id) {
            Ok(meta) => Token::new(id, meta.symbol, meta.name, meta.decimals),
            Err(e) => {
                warn!("Token metadata lookup failed for {}: {:#}", id, e);
                Token::new(
                    id,
                    FALLBACK_SYMBOL.to_string(),
                    FALLBACK_NAME.to_string(),
                    FALLBACK_DECIMALS,
                )
            },
        };

        self.store.save_token(token.clone());
        token
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{addr, bsc_indexer, TOK_B, USDT};
    use crate::store::EntityStore;

    #[test]
    fn creates_token_with_registered_metadata() {
        let mut ix = bsc_indexer();
        let token = ix.get_or_create_token(&addr(TOK_B));
        assert_eq!(token.symbol, "BBB");
        assert_eq!(token.decimals, 6);
        assert_eq!(token.tx_count, 0);
        assert!(ix.store.load_token(TOK_B).is_some());
    }

    #[test]
    fn substitutes_fallback_metadata_on_lookup_failure() {
        let mut ix = bsc_indexer();
        let unknown = "0x9999999999999999999999999999999999999999";
        let token = ix.get_or_create_token(&addr(unknown));
        assert_eq!(token.symbol, "UNKNOWN");
        assert_eq!(token.name, "Unknown Token");
        assert_eq!(token.decimals, 18);
    }

    #[test]
    fn existing_token_is_returned_unmodified() {
        let mut ix = bsc_indexer();
        let mut token = ix.get_or_create_token(&addr(USDT));
        token.tx_count = 7;
        ix.store.save_token(token);

        let again = ix.get_or_create_token(&addr(USDT));
        assert_eq!(again.tx_count, 7);
        assert_eq!(again.symbol, "USDT");
    }
}
