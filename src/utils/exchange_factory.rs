use crate::core::config::{ConfigError, ExchangeConfig};
use crate::core::errors::ExchangeError;
use crate::core::traits::ExchangeConnector;
use crate::exchanges::{huobi::HuobiBuilder, okex::OkexBuilder};
use std::fmt;
use std::str::FromStr;

/// Supported exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExchangeType {
    Huobi,
    Okex,
}

impl fmt::Display for ExchangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Huobi => write!(f, "huobi"),
            Self::Okex => write!(f, "okex"),
        }
    }
}

impl FromStr for ExchangeType {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "huobi" => Ok(Self::Huobi),
            "okex" => Ok(Self::Okex),
            other => Err(ConfigError::InvalidConfiguration(format!(
                "unknown exchange: {}",
                other
            ))
            .into()),
        }
    }
}

/// Factory for creating exchange connectors from credentials.
pub struct ExchangeFactory;

impl ExchangeFactory {
    /// Create a boxed connector for the given exchange.
    ///
    /// Async because Huobi construction resolves the spot trading account
    /// over the network; OKEX construction performs no I/O.
    pub async fn create_connector(
        exchange_type: ExchangeType,
        config: ExchangeConfig,
    ) -> Result<Box<dyn ExchangeConnector>, ExchangeError> {
        match exchange_type {
            ExchangeType::Huobi => {
                let connector = HuobiBuilder::new().with_config(config).connect().await?;
                Ok(Box::new(connector))
            }
            ExchangeType::Okex => {
                let connector = OkexBuilder::new().with_config(config).build()?;
                Ok(Box::new(connector))
            }
        }
    }
}
