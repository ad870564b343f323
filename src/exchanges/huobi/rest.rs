use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::huobi::conversions;
use crate::exchanges::huobi::types::{HuobiAccount, HuobiAccountBalance, HuobiOrder, HuobiResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Thin wrapper over the Huobi v1 private endpoints.
///
/// Unwraps the vendor envelope and maps `err-code` values into the domain
/// taxonomy; callers above this layer never see the envelope.
#[derive(Debug)]
pub struct HuobiRest<R: RestClient> {
    rest: R,
}

impl<R: RestClient> HuobiRest<R> {
    pub fn new(rest: R) -> Self {
        Self { rest }
    }

    fn unwrap_envelope<T: DeserializeOwned>(value: Value) -> Result<T, ExchangeError> {
        let envelope: HuobiResponse<T> = serde_json::from_value(value).map_err(|e| {
            ExchangeError::DeserializationError(format!("huobi envelope: {}", e))
        })?;

        if envelope.status != "ok" {
            let code = envelope.err_code.unwrap_or_default();
            let message = envelope.err_msg.unwrap_or_default();
            return Err(conversions::map_error(&code, &message));
        }

        envelope.data.ok_or_else(|| {
            ExchangeError::DeserializationError("huobi envelope missing data".to_string())
        })
    }

    /// `GET /v1/account/accounts` - all accounts for the credential owner.
    pub async fn get_accounts(&self) -> Result<Vec<HuobiAccount>, ExchangeError> {
        let value = self.rest.get("/v1/account/accounts", &[]).await?;
        Self::unwrap_envelope(value)
    }

    /// `GET /v1/account/accounts/{id}/balance`.
    pub async fn get_balance(&self, account_id: i64) -> Result<HuobiAccountBalance, ExchangeError> {
        let endpoint = format!("/v1/account/accounts/{}/balance", account_id);
        let value = self.rest.get(&endpoint, &[]).await?;
        Self::unwrap_envelope(value)
    }

    /// `POST /v1/order/orders/place` - returns the new order ID.
    pub async fn place_order(
        &self,
        params: &[(String, String)],
    ) -> Result<String, ExchangeError> {
        let value = self.rest.post("/v1/order/orders/place", params).await?;
        Self::unwrap_envelope(value)
    }

    /// `POST /v1/order/orders/{id}/submitcancel` - returns the canceled
    /// order's ID.
    pub async fn submit_cancel(&self, order_id: &str) -> Result<String, ExchangeError> {
        let endpoint = format!("/v1/order/orders/{}/submitcancel", order_id);
        let value = self.rest.post(&endpoint, &[]).await?;
        Self::unwrap_envelope(value)
    }

    /// `GET /v1/order/orders/{id}`.
    pub async fn get_order(&self, order_id: &str) -> Result<HuobiOrder, ExchangeError> {
        let endpoint = format!("/v1/order/orders/{}", order_id);
        let value = self.rest.get(&endpoint, &[]).await?;
        Self::unwrap_envelope(value)
    }
}
