use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::OrderPlacer;
use crate::core::types::{
    OrderCancelParams, OrderInfo, OrderPlaceParams, OrderPlaceReturn, OrderQueryParams,
};
use crate::exchanges::huobi::{conversions, rest::HuobiRest};
use async_trait::async_trait;

/// Huobi order operations. Order placement implicitly targets the spot
/// account bound at construction; the caller never passes an account ID.
#[derive(Debug)]
pub struct Trading<R: RestClient> {
    rest: HuobiRest<R>,
    account_id: i64,
}

impl<R: RestClient + Clone> Trading<R> {
    pub fn new(rest: &R, account_id: i64) -> Self {
        Self {
            rest: HuobiRest::new(rest.clone()),
            account_id,
        }
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for Trading<R> {
    async fn place_order(
        &self,
        params: &OrderPlaceParams,
    ) -> Result<OrderPlaceReturn, ExchangeError> {
        let symbol = conversions::format_symbol(&params.base_currency, &params.quote_currency);
        let order_type = conversions::order_type_to_huobi(params.order_type);

        let mut fields = vec![
            ("account-id".to_string(), self.account_id.to_string()),
            ("amount".to_string(), conversions::format_decimal(params.amount)),
            ("source".to_string(), "api".to_string()),
            ("symbol".to_string(), symbol),
            ("type".to_string(), order_type.to_string()),
        ];
        // Market orders carry no price; the vendor rejects the field.
        if !params.order_type.is_market() {
            fields.push(("price".to_string(), conversions::format_decimal(params.price)));
        }

        let order_id = self.rest.place_order(&fields).await?;
        Ok(OrderPlaceReturn { order_id })
    }

    async fn cancel_order(&self, params: &OrderCancelParams) -> Result<(), ExchangeError> {
        // Huobi keys cancels by order ID alone; the pair in `params` is
        // only meaningful to vendors that require a symbol.
        self.rest.submit_cancel(&params.order_id).await?;
        Ok(())
    }

    async fn get_order_info(
        &self,
        params: &OrderQueryParams,
    ) -> Result<OrderInfo, ExchangeError> {
        let order = self.rest.get_order(&params.order_id).await?;

        Ok(OrderInfo {
            order_id: order.id.to_string(),
            symbol: order.symbol,
            price: order.price,
            amount: order.amount,
            filled_amount: order.filled_amount,
            state: conversions::order_state_from_huobi(&order.state)?,
        })
    }
}
