use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::AccountInfo;
use crate::core::types::{AccountBalance, BalanceKind};
use crate::exchanges::okex::rest::OkexRest;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// OKEX account queries.
#[derive(Debug)]
pub struct Account<R: RestClient> {
    rest: OkexRest<R>,
}

impl<R: RestClient + Clone> Account<R> {
    pub fn new(rest: &R) -> Self {
        Self {
            rest: OkexRest::new(rest.clone()),
        }
    }
}

fn collect_bucket(
    funds: BTreeMap<String, String>,
    kind: BalanceKind,
    out: &mut Vec<AccountBalance>,
) {
    for (currency, balance) in funds {
        if balance == "0" {
            continue;
        }
        out.push(AccountBalance {
            currency,
            balance,
            kind,
        });
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for Account<R> {
    async fn get_account_balance(&self) -> Result<Vec<AccountBalance>, ExchangeError> {
        let ret = self.rest.userinfo().await?;

        if !ret.result {
            return Err(ExchangeError::ApiError {
                code: "0".to_string(),
                message: "userinfo request rejected by okex".to_string(),
            });
        }

        let funds = ret
            .info
            .ok_or_else(|| {
                ExchangeError::DeserializationError(
                    "okex userinfo response missing info".to_string(),
                )
            })?
            .funds;

        let mut result = Vec::new();
        collect_bucket(funds.free, BalanceKind::Trade, &mut result);
        collect_bucket(funds.freezed, BalanceKind::Frozen, &mut result);
        Ok(result)
    }
}
