use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::OrderPlacer;
use crate::core::types::{
    OrderCancelParams, OrderInfo, OrderPlaceParams, OrderPlaceReturn, OrderQueryParams,
};
use crate::exchanges::okex::{conversions, rest::OkexRest};
use async_trait::async_trait;

/// OKEX order operations.
///
/// The vendor limits order placement to 20 requests per 2 seconds per
/// account; this connector never self-throttles, pacing is the caller's
/// responsibility.
#[derive(Debug)]
pub struct Trading<R: RestClient> {
    rest: OkexRest<R>,
}

impl<R: RestClient + Clone> Trading<R> {
    pub fn new(rest: &R) -> Self {
        Self {
            rest: OkexRest::new(rest.clone()),
        }
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for Trading<R> {
    async fn place_order(
        &self,
        params: &OrderPlaceParams,
    ) -> Result<OrderPlaceReturn, ExchangeError> {
        let fields = vec![
            (
                "symbol".to_string(),
                conversions::format_symbol(&params.base_currency, &params.quote_currency),
            ),
            (
                "type".to_string(),
                conversions::order_type_to_okex(params.order_type).to_string(),
            ),
            ("price".to_string(), conversions::format_decimal(params.price)),
            ("amount".to_string(), conversions::format_decimal(params.amount)),
        ];

        let ret = self.rest.trade(&fields).await?;
        if !ret.result {
            return Err(ExchangeError::ApiError {
                code: "0".to_string(),
                message: "order placement rejected by okex".to_string(),
            });
        }

        Ok(OrderPlaceReturn {
            order_id: ret.order_id.to_string(),
        })
    }

    async fn cancel_order(&self, params: &OrderCancelParams) -> Result<(), ExchangeError> {
        let fields = vec![
            ("order_id".to_string(), params.order_id.clone()),
            (
                "symbol".to_string(),
                conversions::format_symbol(&params.base_currency, &params.quote_currency),
            ),
        ];

        let ret = self.rest.cancel_order(&fields).await?;
        // The vendor can report a failed cancel with error code 0; that is
        // still an error for the caller.
        if !ret.result {
            return Err(ExchangeError::ApiError {
                code: "0".to_string(),
                message: "cancel rejected by okex".to_string(),
            });
        }

        Ok(())
    }

    async fn get_order_info(
        &self,
        params: &OrderQueryParams,
    ) -> Result<OrderInfo, ExchangeError> {
        let fields = vec![
            ("order_id".to_string(), params.order_id.clone()),
            (
                "symbol".to_string(),
                conversions::format_symbol(&params.base_currency, &params.quote_currency),
            ),
        ];

        let ret = self.rest.order_info(&fields).await?;
        if !ret.result {
            return Err(ExchangeError::ApiError {
                code: "0".to_string(),
                message: "order lookup rejected by okex".to_string(),
            });
        }

        let order = ret.orders.into_iter().next().ok_or_else(|| {
            ExchangeError::OrderNotFound(params.order_id.clone())
        })?;

        Ok(OrderInfo {
            order_id: order.order_id.to_string(),
            symbol: order.symbol,
            price: conversions::format_decimal(order.price),
            amount: conversions::format_decimal(order.amount),
            filled_amount: conversions::format_decimal(order.deal_amount),
            state: conversions::order_state_from_okex(order.status)?,
        })
    }
}
