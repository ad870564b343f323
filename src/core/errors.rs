use thiserror::Error;

/// Error taxonomy shared by all exchange connectors.
///
/// Transport failures, credential rejections and vendor-reported logical
/// failures are kept apart so callers can react without inspecting vendor
/// codes. Codes the adapters cannot classify surface as [`Self::ApiError`]
/// with the raw vendor code and message preserved for diagnostics.
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("failed to decode response: {0}")]
    DeserializationError(String),

    #[error("failed to encode request: {0}")]
    SerializationError(String),

    #[error("authentication error: {0}")]
    AuthError(String),

    #[error("rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("insufficient balance: {0}")]
    InsufficientBalance(String),

    #[error("invalid order: {0}")]
    InvalidOrder(String),

    #[error("order not found: {0}")]
    OrderNotFound(String),

    #[error("exchange API error {code}: {message}")]
    ApiError { code: String, message: String },

    #[error("data integrity error: {0}")]
    DataIntegrityError(String),

    #[error("configuration error: {0}")]
    ConfigurationError(#[from] crate::core::config::ConfigError),
}
