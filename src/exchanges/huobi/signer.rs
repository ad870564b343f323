use crate::core::errors::ExchangeError;
use crate::core::kernel::signer::{RequestBody, SignatureResult, SignedRequest, Signer};
use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde_json::{Map, Value};
use sha2::Sha256;
use std::collections::HashMap;
use url::form_urlencoded;

type HmacSha256 = Hmac<Sha256>;

/// Signature-version-2 signer for Huobi's v1 REST API.
///
/// Auth parameters (`AccessKeyId`, `SignatureMethod`, `SignatureVersion`,
/// `Timestamp`) always travel in the query string. GET requests additionally
/// sign the business parameters there; POST requests sign the auth
/// parameters only and ship the business parameters as a JSON body, which is
/// what the vendor expects for order placement.
pub struct HuobiSigner {
    access_key: String,
    secret_key: String,
    host: String,
}

impl HuobiSigner {
    pub fn new(access_key: String, secret_key: String, host: String) -> Self {
        Self {
            access_key,
            secret_key,
            host,
        }
    }

    fn auth_params(&self, timestamp: &str) -> Vec<(String, String)> {
        vec![
            ("AccessKeyId".to_string(), self.access_key.clone()),
            ("SignatureMethod".to_string(), "HmacSHA256".to_string()),
            ("SignatureVersion".to_string(), "2".to_string()),
            ("Timestamp".to_string(), timestamp.to_string()),
        ]
    }

    /// Sorted, percent-encoded query string as Huobi canonicalizes it.
    fn encode_query(params: &[(String, String)]) -> String {
        let mut sorted = params.to_vec();
        sorted.sort();
        sorted
            .iter()
            .map(|(k, v)| {
                let encoded: String = form_urlencoded::byte_serialize(v.as_bytes()).collect();
                format!("{}={}", k, encoded)
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Base64 HMAC-SHA256 over `"{METHOD}\n{host}\n{path}\n{query}"`.
    fn sign_payload(&self, method: &str, path: &str, query: &str) -> Result<String, ExchangeError> {
        let payload = format!("{}\n{}\n{}\n{}", method, self.host, path, query);

        let mut mac = HmacSha256::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| ExchangeError::AuthError(format!("invalid secret key: {}", e)))?;
        mac.update(payload.as_bytes());

        Ok(general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
    }
}

impl Signer for HuobiSigner {
    fn sign_request(
        &self,
        method: &str,
        endpoint: &str,
        params: &[(String, String)],
    ) -> SignatureResult {
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        let mut query = self.auth_params(&timestamp);

        let body = if method == "GET" {
            query.extend(params.iter().cloned());
            RequestBody::Empty
        } else {
            let mut map = Map::new();
            for (key, value) in params {
                map.insert(key.clone(), Value::String(value.clone()));
            }
            RequestBody::Json(Value::Object(map))
        };

        let encoded = Self::encode_query(&query);
        let signature = self.sign_payload(method, endpoint, &encoded)?;
        query.push(("Signature".to_string(), signature));

        Ok(SignedRequest {
            headers: HashMap::new(),
            query,
            body,
        })
    }
}
