pub mod config;
pub mod events;
pub mod handlers;
pub mod store;
pub mod utils;

pub use config::{ChainTokens, Settings};
pub use events::DexEvent;
pub use handlers::{Indexer, StaticMetadata, TokenMetadataSource};
pub use store::{EntityStore, MemoryStore};
