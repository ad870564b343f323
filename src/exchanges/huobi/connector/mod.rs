use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::{AccountInfo, ExchangeConnector, OrderPlacer};
use crate::core::types::{
    AccountBalance, OrderCancelParams, OrderInfo, OrderPlaceParams, OrderPlaceReturn,
    OrderQueryParams,
};
use crate::exchanges::huobi::rest::HuobiRest;
use crate::exchanges::huobi::types::HuobiAccount;
use async_trait::async_trait;
use tracing::debug;

pub mod account;
pub mod trading;

pub use account::Account;
pub use trading::Trading;

/// Huobi connector composing the account and trading implementations.
///
/// Construction resolves and binds the credential owner's spot account; the
/// bound fields are fixed afterwards, so one connector instance is safe for
/// concurrent read-only use.
#[derive(Debug)]
pub struct HuobiConnector<R: RestClient> {
    pub account: Account<R>,
    pub trading: Trading<R>,
    trade_account: HuobiAccount,
}

impl<R: RestClient + Clone + Send + Sync> HuobiConnector<R> {
    /// Validate credentials and bind the spot trading account.
    ///
    /// Issues one account-list request: a vendor rejection surfaces
    /// immediately (fail-fast on bad credentials), and the absence of a
    /// `spot`-type account is a data-integrity failure - no connector is
    /// returned in either case.
    pub async fn connect(rest: R) -> Result<Self, ExchangeError> {
        let api = HuobiRest::new(rest.clone());
        let accounts = api.get_accounts().await?;

        let trade_account = accounts
            .into_iter()
            .find(|account| account.account_type == "spot")
            .ok_or_else(|| {
                ExchangeError::DataIntegrityError(
                    "no spot account among huobi accounts".to_string(),
                )
            })?;

        debug!(account_id = trade_account.id, "resolved huobi spot account");

        Ok(Self {
            account: Account::new(&rest, trade_account.id),
            trading: Trading::new(&rest, trade_account.id),
            trade_account,
        })
    }

    /// The spot account bound at construction.
    pub fn trade_account(&self) -> &HuobiAccount {
        &self.trade_account
    }
}

#[async_trait]
impl<R: RestClient + Send + Sync> AccountInfo for HuobiConnector<R> {
    async fn get_account_balance(&self) -> Result<Vec<AccountBalance>, ExchangeError> {
        self.account.get_account_balance().await
    }
}

#[async_trait]
impl<R: RestClient + Send + Sync> OrderPlacer for HuobiConnector<R> {
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

impl<R: RestClient + Send + Sync + std::fmt::Debug> ExchangeConnector for HuobiConnector<R> {
    fn exchange_name(&self) -> &'static str {
        "huobi"
    }
}
