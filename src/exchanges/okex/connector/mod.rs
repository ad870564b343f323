use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::{AccountInfo, ExchangeConnector, OrderPlacer};
use crate::core::types::{
    AccountBalance, OrderCancelParams, OrderInfo, OrderPlaceParams, OrderPlaceReturn,
    OrderQueryParams,
};
use async_trait::async_trait;

pub mod account;
pub mod trading;

pub use account::Account;
pub use trading::Trading;

/// OKEX connector composing the account and trading implementations.
///
/// Construction is side-effect-free: there is no account-resolution step on
/// this vendor, so bad credentials surface on the first call. The connector
/// holds no mutable state at all.
#[derive(Debug)]
pub struct OkexConnector<R: RestClient> {
    pub account: Account<R>,
    pub trading: Trading<R>,
}

impl<R: RestClient + Clone + Send + Sync> OkexConnector<R> {
    pub fn new(rest: R) -> Self {
        Self {
            account: Account::new(&rest),
            trading: Trading::new(&rest),
        }
    }
}

#[async_trait]
impl<R: RestClient + Send + Sync> AccountInfo for OkexConnector<R> {
    async fn get_account_balance(&self) -> Result<Vec<AccountBalance>, ExchangeError> {
        self.account.get_account_balance().await
    }
}

#[async_trait]
impl<R: RestClient + Send + Sync> OrderPlacer for OkexConnector<R> {
    async fn place_order(
        &self,
        params: &OrderPlaceParams,
    ) -> Result<OrderPlaceReturn, ExchangeError> {
        self.trading.place_order(params).await
    }

    async fn cancel_order(&self, params: &OrderCancelParams) -> Result<(), ExchangeError> {
        self.trading.cancel_order(params).await
    }

    async fn get_order_info(
        &self,
        params: &OrderQueryParams,
    ) -> Result<OrderInfo, ExchangeError> {
        self.trading.get_order_info(params).await
    }
}

impl<R: RestClient + Send + Sync + std::fmt::Debug> ExchangeConnector for OkexConnector<R> {
    fn exchange_name(&self) -> &'static str {
        "okex"
    }
}
