use crate::core::errors::ExchangeError;
use serde_json::Value;
use std::collections::HashMap;

/// Body shape a signer selects for an outbound request.
///
/// Vendors disagree on where business parameters travel: Huobi POSTs carry
/// them as a JSON document while the signed auth parameters stay in the
/// query, OKEX sends everything (signature included) as a form body.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Form(Vec<(String, String)>),
}

/// A fully signed request, ready for transport.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub headers: HashMap<String, String>,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

/// Result type for signing operations.
pub type SignatureResult = Result<SignedRequest, ExchangeError>;

/// Pluggable request authentication.
///
/// Implementations receive the method, endpoint path and business
/// parameters and decide how to distribute them between query string, body
/// and headers alongside the vendor's signature fields.
pub trait Signer: Send + Sync {
    fn sign_request(
        &self,
        method: &str,
        endpoint: &str,
        params: &[(String, String)],
    ) -> SignatureResult;
}

/// Pass-through signer: parameters go to the query string unchanged.
pub struct NoopSigner;

impl Signer for NoopSigner {
    fn sign_request(
        &self,
        _method: &str,
        _endpoint: &str,
        params: &[(String, String)],
    ) -> SignatureResult {
        Ok(SignedRequest {
            headers: HashMap::new(),
            query: params.to_vec(),
            body: RequestBody::Empty,
        })
    }
}
