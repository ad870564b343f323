use crate::core::kernel::signer::{RequestBody, SignatureResult, SignedRequest, Signer};
use std::collections::HashMap;

/// MD5 signer for OKEX's legacy v1 (`*.do`) API.
///
/// The signature is the uppercase hex MD5 of the sorted
/// `key=value&...&secret_key={secret}` string; every private call is a
/// form-encoded POST carrying `api_key` and `sign` alongside the business
/// parameters.
pub struct OkexSigner {
    api_key: String,
    secret_key: String,
}

impl OkexSigner {
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key,
            secret_key,
        }
    }

    fn sign(&self, params: &[(String, String)]) -> String {
        let mut sorted = params.to_vec();
        sorted.sort();

        let mut payload = sorted
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        payload.push_str("&secret_key=");
        payload.push_str(&self.secret_key);

        format!("{:x}", md5::compute(payload.as_bytes())).to_uppercase()
    }
}

impl Signer for OkexSigner {
    fn sign_request(
        &self,
        _method: &str,
        _endpoint: &str,
        params: &[(String, String)],
    ) -> SignatureResult {
        let mut form = params.to_vec();
        form.push(("api_key".to_string(), self.api_key.clone()));

        let sign = self.sign(&form);
        form.sort();
        form.push(("sign".to_string(), sign));

        Ok(SignedRequest {
            headers: HashMap::new(),
            query: Vec::new(),
            body: RequestBody::Form(form),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> OkexSigner {
        OkexSigner::new("test_key".to_string(), "test_secret".to_string())
    }

    #[test]
    fn signature_matches_documented_md5_scheme() {
        let params = vec![
            ("symbol".to_string(), "btc_usdt".to_string()),
            ("type".to_string(), "buy".to_string()),
            ("price".to_string(), "0.05".to_string()),
            ("amount".to_string(), "2".to_string()),
            ("api_key".to_string(), "test_key".to_string()),
        ];
        assert_eq!(signer().sign(&params), "1994765B4F24BEFF5CCC4CA24506BE33");
    }

    #[test]
    fn signature_with_no_business_params() {
        let params = vec![("api_key".to_string(), "test_key".to_string())];
        assert_eq!(signer().sign(&params), "2440DB0A133E6DECB0E287C54C0CDB46");
    }

    #[test]
    fn everything_travels_in_the_form_body() {
        let signed = signer()
            .sign_request("POST", "/userinfo.do", &[])
            .unwrap();

        assert!(signed.query.is_empty());
        match signed.body {
            RequestBody::Form(fields) => {
                assert!(fields.iter().any(|(k, _)| k == "api_key"));
                assert_eq!(fields.last().unwrap().0, "sign");
            }
            other => panic!("expected form body, got {:?}", other),
        }
    }
}
