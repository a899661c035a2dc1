pub mod chain;
pub mod config;

pub use chain::ChainTokens;
pub use config::{ChainSettings, Settings};
