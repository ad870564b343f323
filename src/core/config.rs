use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

/// API credentials plus an optional base-URL override for one exchange.
///
/// Keys are wrapped in [`Secret`] and are never logged or serialized;
/// the configuration is immutable once a connector has been built from it.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub access_key: Secret<String>,
    pub secret_key: Secret<String>,
    pub base_url: Option<String>,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for ExchangeConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ExchangeConfig", 3)?;
        state.serialize_field("access_key", "[REDACTED]")?;
        state.serialize_field("secret_key", "[REDACTED]")?;
        state.serialize_field("base_url", &self.base_url)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ExchangeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ExchangeConfigHelper {
            access_key: String,
            secret_key: String,
            base_url: Option<String>,
        }

        let helper = ExchangeConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            access_key: Secret::new(helper.access_key),
            secret_key: Secret::new(helper.secret_key),
            base_url: helper.base_url,
        })
    }
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

impl ExchangeConfig {
    /// Create a new configuration with API credentials.
    #[must_use]
    pub fn new(access_key: String, secret_key: String) -> Self {
        Self {
            access_key: Secret::new(access_key),
            secret_key: Secret::new(secret_key),
            base_url: None,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Expected environment variables:
    /// - `{EXCHANGE}_ACCESS_KEY` (e.g., `HUOBI_ACCESS_KEY`)
    /// - `{EXCHANGE}_SECRET_KEY` (e.g., `HUOBI_SECRET_KEY`)
    /// - `{EXCHANGE}_BASE_URL` (optional)
    pub fn from_env(exchange_prefix: &str) -> Result<Self, ConfigError> {
        let access_key_var = format!("{}_ACCESS_KEY", exchange_prefix.to_uppercase());
        let secret_key_var = format!("{}_SECRET_KEY", exchange_prefix.to_uppercase());
        let base_url_var = format!("{}_BASE_URL", exchange_prefix.to_uppercase());

        let access_key = env::var(&access_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(access_key_var))?;

        let secret_key = env::var(&secret_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(secret_key_var))?;

        let base_url = env::var(&base_url_var).ok();

        Ok(Self {
            access_key: Secret::new(access_key),
            secret_key: Secret::new(secret_key),
            base_url,
        })
    }

    /// Create configuration from a .env file and environment variables.
    ///
    /// Loads `.env` from the working directory if present, then reads the
    /// standard environment variable names. A missing file is not an error.
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(exchange_prefix: &str) -> Result<Self, ConfigError> {
        match dotenv::dotenv() {
            Ok(_) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file: {}",
                    e
                )));
            }
        }

        Self::from_env(exchange_prefix)
    }

    /// Check whether both credentials are present.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.access_key.expose_secret().is_empty() && !self.secret_key.expose_secret().is_empty()
    }

    /// Set a custom base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Get the access key (use carefully - exposes the secret).
    pub fn access_key(&self) -> &str {
        self.access_key.expose_secret()
    }

    /// Get the secret key (use carefully - exposes the secret).
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_credentials_requires_both_keys() {
        assert!(ExchangeConfig::new("ak".to_string(), "sk".to_string()).has_credentials());
        assert!(!ExchangeConfig::new("ak".to_string(), String::new()).has_credentials());
        assert!(!ExchangeConfig::default().has_credentials());
    }

    #[test]
    fn serialization_redacts_secrets() {
        let config = ExchangeConfig::new("ak".to_string(), "sk".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("ak"));
        assert!(!json.contains("sk"));
        assert!(json.contains("[REDACTED]"));
    }
}
