use crate::core::errors::ExchangeError;
use crate::core::types::{
    AccountBalance, OrderCancelParams, OrderInfo, OrderPlaceParams, OrderPlaceReturn,
    OrderQueryParams,
};
use async_trait::async_trait;

/// Account-level queries.
#[async_trait]
pub trait AccountInfo {
    /// Fetch all non-zero balances for the authenticated account.
    async fn get_account_balance(&self) -> Result<Vec<AccountBalance>, ExchangeError>;
}

/// Order placement, cancellation and status lookup.
///
/// Every operation issues exactly one outbound request and returns the
/// vendor's answer translated into the common protocol. A cancel the vendor
/// reports as logically unsuccessful is an error even when its error code
/// is zero.
#[async_trait]
pub trait OrderPlacer {
    async fn place_order(
        &self,
        params: &OrderPlaceParams,
    ) -> Result<OrderPlaceReturn, ExchangeError>;

    async fn cancel_order(&self, params: &OrderCancelParams) -> Result<(), ExchangeError>;

    async fn get_order_info(&self, params: &OrderQueryParams)
        -> Result<OrderInfo, ExchangeError>;
}

/// Composite capability set implemented by every exchange connector.
pub trait ExchangeConnector: AccountInfo + OrderPlacer + Send + Sync + std::fmt::Debug {
    /// Stable identifier for the exchange. Pure: no I/O, no failure.
    fn exchange_name(&self) -> &'static str;
}
