use super::config::ChainSettings;

/// Token and factory classification for one chain, used synchronously by
/// every handler to drive the USD valuation tiers.
///
/// Addresses are stored lowercase; membership checks are case-insensitive
/// on the caller side by construction (all entity keys come from
/// `hex_encode`, which is lowercase).
#[derive(Debug, Clone)]
pub struct ChainTokens {
    pub wrapped_native_token: String,
    pub stablecoins: Vec<String>,
    pub factory_v2: String,
    pub factory_v3: String,
}

impl ChainTokens {
    pub fn new(
        wrapped_native_token: String,
        stablecoins: Vec<String>,
        factory_v2: String,
        factory_v3: String,
    ) -> Self {
        Self {
            wrapped_native_token: wrapped_native_token.to_lowercase(),
            stablecoins: stablecoins.into_iter().map(|s| s.to_lowercase()).collect(),
            factory_v2: factory_v2.to_lowercase(),
            factory_v3: factory_v3.to_lowercase(),
        }
    }

    pub fn from_settings(settings: &ChainSettings) -> Self {
        Self::new(
            settings.wrapped_native_token.clone(),
            settings.stablecoins.clone(),
            settings.factory_v2.clone(),
            settings.factory_v3.clone(),
        )
    }

    /// BNB Smart Chain mainnet constants.
    pub fn bsc() -> Self {
        Self::new(
            // WBNB
            "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c".to_string(),
            vec![
                // USDT
                "0x55d398326f99059ff775485246999027b3197955".to_string(),
                // BUSD
                "0xe9e7cea3dedca5984780bafc599bd69add087d56".to_string(),
                // USDC
                "0x8ac76a51cc950d9822d68b83fe1ad97b32cd580d".to_string(),
                // USD1
                "0x8d0d000ee44948fc98c9b98a4fa4921476f08b0d".to_string(),
                // USDS
                "0xce24439f2d9c6a2289f741120fe202248b666666".to_string(),
            ],
            "0xca143ce32fe78f1f7019d7d551a6402fc5350c73".to_string(),
            "0x0bfbcf9fa4f9c56b0f40a671ad40e0805a091865".to_string(),
        )
    }

    pub fn is_wrapped_native(&self, token: &str) -> bool {
        self.wrapped_native_token == token.to_lowercase()
    }

    pub fn is_stable(&self, token: &str) -> bool {
        let token_lower = token.to_lowercase();

        // The wrapped native token is never a stablecoin, even if misconfigured.
        if self.is_wrapped_native(&token_lower) {
            return false;
        }

        self.stablecoins.iter().any(|s| *s == token_lower)
    }

    /// True when the two tokens form a wrapped-native/stablecoin anchor pair,
    /// the only pair kind allowed to write the bridge price.
    pub fn is_anchor_pair(&self, token0: &str, token1: &str) -> bool {
        (self.is_wrapped_native(token0) && self.is_stable(token1))
            || (self.is_wrapped_native(token1) && self.is_stable(token0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_native_is_never_stable() {
        let mut tokens = ChainTokens::bsc();
        let wbnb = tokens.wrapped_native_token.clone();
        tokens.stablecoins.push(wbnb.clone());
        assert!(!tokens.is_stable(&wbnb));
    }

    #[test]
    fn membership_checks_ignore_case() {
        let tokens = ChainTokens::bsc();
        assert!(tokens.is_stable("0x55D398326F99059fF775485246999027B3197955"));
        assert!(tokens.is_wrapped_native("0xBB4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"));
    }

    #[test]
    fn anchor_pair_requires_native_and_stable() {
        let tokens = ChainTokens::bsc();
        let wbnb = &tokens.wrapped_native_token;
        let usdt = "0x55d398326f99059ff775485246999027b3197955";
        let other = "0x000000000000000000000000000000000000dead";
        assert!(tokens.is_anchor_pair(wbnb, usdt));
        assert!(tokens.is_anchor_pair(usdt, wbnb));
        assert!(!tokens.is_anchor_pair(wbnb, other));
        assert!(!tokens.is_anchor_pair(usdt, usdt));
    }
}
