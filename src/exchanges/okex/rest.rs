use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::okex::conversions;
use crate::exchanges::okex::types::{
    OkexBalanceReturn, OkexCancelReturn, OkexOrderInfoReturn, OkexPlaceReturn,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Thin wrapper over the OKEX v1 private endpoints.
///
/// Every private call is a form-encoded POST. A non-zero `error_code` is
/// mapped through the code table before the payload is decoded, so callers
/// above this layer never see vendor codes.
#[derive(Debug)]
pub struct OkexRest<R: RestClient> {
    rest: R,
}

impl<R: RestClient> OkexRest<R> {
    pub fn new(rest: R) -> Self {
        Self { rest }
    }

    fn check_error_code(value: &Value) -> Result<(), ExchangeError> {
        if let Some(code) = value.get("error_code").and_then(Value::as_i64) {
            if code != 0 {
                return Err(conversions::map_error_code(code));
            }
        }
        Ok(())
    }

    fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ExchangeError> {
        serde_json::from_value(value)
            .map_err(|e| ExchangeError::DeserializationError(format!("okex response: {}", e)))
    }

    async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<T, ExchangeError> {
        let value = self.rest.post(endpoint, params).await?;
        Self::check_error_code(&value)?;
        Self::decode(value)
    }

    /// `POST /userinfo.do` - account funds.
    pub async fn userinfo(&self) -> Result<OkexBalanceReturn, ExchangeError> {
        self.post("/userinfo.do", &[]).await
    }

    /// `POST /trade.do` - place an order.
    pub async fn trade(
        &self,
        params: &[(String, String)],
    ) -> Result<OkexPlaceReturn, ExchangeError> {
        self.post("/trade.do", params).await
    }

    /// `POST /cancel_order.do`.
    pub async fn cancel_order(
        &self,
        params: &[(String, String)],
    ) -> Result<OkexCancelReturn, ExchangeError> {
        self.post("/cancel_order.do", params).await
    }

    /// `POST /order_info.do`.
    pub async fn order_info(
        &self,
        params: &[(String, String)],
    ) -> Result<OkexOrderInfoReturn, ExchangeError> {
        self.post("/order_info.do", params).await
    }
}
