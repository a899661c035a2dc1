use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Fixed deployment constants for one chain.
///
/// These are data, not logic: the recognized stablecoin addresses, the
/// wrapped-native-asset address, and the two factory contract addresses.
/// All addresses are normalized to lowercase on load.
#[derive(Debug, Deserialize, Clone)]
pub struct ChainSettings {
    pub wrapped_native_token: String,
    pub stablecoins: Vec<String>,
    pub factory_v2: String,
    pub factory_v3: String,
}

/// Root application configuration.
///
/// Loaded from `config.yaml` at startup by the embedding process.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub chain: ChainSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name("config"))
            .build()?;

        let settings: Settings = s.try_deserialize()?;

        Ok(settings)
    }
}
