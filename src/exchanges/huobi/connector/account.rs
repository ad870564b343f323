use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::AccountInfo;
use crate::core::types::{AccountBalance, BalanceKind};
use crate::exchanges::huobi::rest::HuobiRest;
use async_trait::async_trait;

/// Huobi account queries, bound to the spot account resolved at
/// construction.
#[derive(Debug)]
pub struct Account<R: RestClient> {
    rest: HuobiRest<R>,
    account_id: i64,
}

impl<R: RestClient + Clone> Account<R> {
    pub fn new(rest: &R, account_id: i64) -> Self {
        Self {
            rest: HuobiRest::new(rest.clone()),
            account_id,
        }
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for Account<R> {
    async fn get_account_balance(&self) -> Result<Vec<AccountBalance>, ExchangeError> {
        let balance = self.rest.get_balance(self.account_id).await?;

        let mut result = Vec::new();
        for entry in balance.list {
            if entry.balance == "0" {
                continue;
            }
            let kind = match entry.kind.as_str() {
                "trade" => BalanceKind::Trade,
                "frozen" => BalanceKind::Frozen,
                other => {
                    return Err(ExchangeError::DeserializationError(format!(
                        "unknown huobi balance bucket: {}",
                        other
                    )))
                }
            };
            result.push(AccountBalance {
                currency: entry.currency,
                balance: entry.balance,
                kind,
            });
        }

        Ok(result)
    }
}
