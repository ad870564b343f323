pub mod core;
pub mod exchanges;
pub mod utils;

pub use crate::core::config::ExchangeConfig;
pub use crate::core::errors::ExchangeError;
pub use crate::core::traits::{AccountInfo, ExchangeConnector, OrderPlacer};
pub use crate::core::types::*;
pub use crate::exchanges::huobi::HuobiConnector;
pub use crate::exchanges::okex::OkexConnector;
