use crate::core::config::{ConfigError, ExchangeConfig};
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use crate::exchanges::huobi::{connector::HuobiConnector, signer::HuobiSigner};
use std::sync::Arc;

const DEFAULT_BASE_URL: &str = "https://api.huobi.pro";

/// Builder for Huobi connectors.
///
/// Unlike the OKEX builder, finishing is async: Huobi construction performs
/// the account-list call that validates credentials and resolves the spot
/// account.
#[derive(Default)]
pub struct HuobiBuilder {
    config: ExchangeConfig,
    rest_timeout: Option<u64>,
}

impl HuobiBuilder {
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

    /// Build the transport and resolve the spot account.
    pub async fn connect(self) -> Result<HuobiConnector<ReqwestRest>, ExchangeError> {
        if !self.config.has_credentials() {
            return Err(ConfigError::InvalidConfiguration(
                "huobi requires an access key and a secret key".to_string(),
            )
            .into());
        }

        let base_url = self
            .config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // The signing payload includes the bare host name.
        let host = url::Url::parse(&base_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .ok_or_else(|| {
                ConfigError::InvalidConfiguration(format!("invalid base URL: {}", base_url))
            })?;

        let mut rest_config = RestClientConfig::new(base_url, "huobi".to_string());
        if let Some(timeout) = self.rest_timeout {
            rest_config = rest_config.with_timeout(timeout);
        }

        let signer = Arc::new(HuobiSigner::new(
            self.config.access_key().to_string(),
            self.config.secret_key().to_string(),
            host,
        ));
        let rest = RestClientBuilder::new(rest_config)
            .with_signer(signer)
            .build()?;

        HuobiConnector::connect(rest).await
    }
}
