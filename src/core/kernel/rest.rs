use crate::core::errors::ExchangeError;
use crate::core::kernel::signer::{NoopSigner, RequestBody, Signer};
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::sync::Arc;
use tracing::{instrument, trace};

/// Minimal HTTP contract consumed by the exchange connectors.
///
/// Every call is authenticated through the configured [`Signer`]; failures
/// always surface as errors, never as silently empty responses. Connectors
/// are generic over this trait so tests can substitute a stub transport.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Issue a GET request with the given business parameters.
    async fn get(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, ExchangeError>;

    /// Issue a POST request with the given business parameters.
    async fn post(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, ExchangeError>;
}

#[async_trait]
impl<R: RestClient + ?Sized> RestClient for Arc<R> {
    async fn get(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, ExchangeError> {
        (**self).get(endpoint, params).await
    }

    async fn post(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, ExchangeError> {
        (**self).post(endpoint, params).await
    }
}

/// Configuration for the REST client.
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API.
    pub base_url: String,
    /// Exchange name for logging and tracing.
    pub exchange_name: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// User agent string to include in requests.
    pub user_agent: String,
}

impl RestClientConfig {
    pub fn new(base_url: String, exchange_name: String) -> Self {
        Self {
            base_url,
            exchange_name,
            timeout_seconds: 30,
            user_agent: "unicex/0.1".to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances.
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
        }
    }

    /// Set the signer for authenticated requests.
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn build(self) -> Result<ReqwestRest, ExchangeError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| {
                ExchangeError::NetworkError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
            signer: self.signer.unwrap_or_else(|| Arc::new(NoopSigner)),
        })
    }
}

/// Implementation of [`RestClient`] using reqwest.
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    signer: Arc<dyn Signer>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }

    /// Handle the response and extract JSON.
    #[instrument(skip(self, response), fields(exchange = %self.config.exchange_name, status = %response.status()))]
    async fn handle_response(&self, response: Response) -> Result<Value, ExchangeError> {
        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            ExchangeError::NetworkError(format!("Failed to read response body: {}", e))
        })?;

        trace!("Response body: {}", response_text);

        if status.is_success() {
            serde_json::from_str(&response_text).map_err(|e| {
                ExchangeError::DeserializationError(format!("Failed to parse JSON response: {}", e))
            })
        } else {
            Err(ExchangeError::NetworkError(format!(
                "HTTP {}: {}",
                status, response_text
            )))
        }
    }

    #[instrument(skip(self, params), fields(exchange = %self.config.exchange_name, method = %method, endpoint = %endpoint))]
    async fn make_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, ExchangeError> {
        let signed = self
            .signer
            .sign_request(method.as_str(), endpoint, params)?;

        let url = self.build_url(endpoint);
        let mut request = self.client.request(method, &url);

        for (key, value) in &signed.headers {
            request = request.header(key, value);
        }

        if !signed.query.is_empty() {
            request = request.query(&signed.query);
        }

        match signed.body {
            RequestBody::Empty => {}
            RequestBody::Json(value) => {
                request = request.json(&value);
            }
            RequestBody::Form(fields) => {
                request = request.form(&fields);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| ExchangeError::NetworkError(format!("Request failed: {}", e)))?;

        self.handle_response(response).await
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    async fn get(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, ExchangeError> {
        self.make_request(Method::GET, endpoint, params).await
    }

    async fn post(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, ExchangeError> {
        self.make_request(Method::POST, endpoint, params).await
    }
}
