pub mod bundle;
pub mod factory;
pub mod pair;
pub mod pool;
pub mod records;
pub mod token;

pub use bundle::Bundle;
pub use factory::{Factory, FactoryV3};
pub use pair::Pair;
pub use pool::PoolV3;
pub use records::{event_id, SwapRecord, SwapV3Record, SyncRecord, Transaction};
pub use token::Token;
