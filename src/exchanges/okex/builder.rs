use crate::core::config::{ConfigError, ExchangeConfig};
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use crate::exchanges::okex::{connector::OkexConnector, signer::OkexSigner};
use std::sync::Arc;

const DEFAULT_BASE_URL: &str = "https://www.okex.com/api/v1";

/// Builder for OKEX connectors. Building is synchronous and performs no
/// I/O; the first real failure surfaces on the first call.
#[derive(Default)]
pub struct OkexBuilder {
    config: ExchangeConfig,
    rest_timeout: Option<u64>,
}

impl OkexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ExchangeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_credentials(mut self, access_key: String, secret_key: String) -> Self {
        let base_url = self.config.base_url.clone();
        self.config = ExchangeConfig::new(access_key, secret_key);
        self.config.base_url = base_url;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.config.base_url = Some(base_url);
        self
    }

    pub fn with_rest_timeout(mut self, timeout_seconds: u64) -> Self {
        self.rest_timeout = Some(timeout_seconds);
        self
    }

    pub fn build(self) -> Result<OkexConnector<ReqwestRest>, ExchangeError> {
        if !self.config.has_credentials() {
            return Err(ConfigError::InvalidConfiguration(
                "okex requires an api key and a secret key".to_string(),
            )
            .into());
        }

        let base_url = self
            .config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut rest_config = RestClientConfig::new(base_url, "okex".to_string());
        if let Some(timeout) = self.rest_timeout {
            rest_config = rest_config.with_timeout(timeout);
        }

        let signer = Arc::new(OkexSigner::new(
            self.config.access_key().to_string(),
            self.config.secret_key().to_string(),
        ));
        let rest = RestClientBuilder::new(rest_config)
            .with_signer(signer)
            .build()?;

        Ok(OkexConnector::new(rest))
    }
}
