mod common;

use common::{param, StubRest};
use serde_json::json;
use std::sync::Arc;
use unicex::core::errors::ExchangeError;
use unicex::core::traits::{AccountInfo, ExchangeConnector, OrderPlacer};
use unicex::core::types::{
    BalanceKind, OrderCancelParams, OrderPlaceParams, OrderQueryParams, OrderState, OrderType,
};
use unicex::exchanges::okex::OkexConnector;

fn connector(responses: Vec<serde_json::Value>) -> (OkexConnector<Arc<StubRest>>, Arc<StubRest>) {
    let rest = Arc::new(StubRest::new(responses));
    (OkexConnector::new(Arc::clone(&rest)), rest)
}

#[tokio::test]
async fn balances_flatten_free_and_freezed_buckets() {
    let (connector, rest) = connector(vec![json!({
        "result": true,
        "info": {
            "funds": {
                "free": {"btc": "1.5", "usdt": "0"},
                "freezed": {"btc": "0.5"}
            }
        }
    })]);

    let balances = connector.get_account_balance().await.unwrap();
    assert_eq!(balances.len(), 2);
    assert_eq!(balances[0].currency, "btc");
    assert_eq!(balances[0].balance, "1.5");
    assert_eq!(balances[0].kind, BalanceKind::Trade);
    assert_eq!(balances[1].currency, "btc");
    assert_eq!(balances[1].balance, "0.5");
    assert_eq!(balances[1].kind, BalanceKind::Frozen);

    let calls = rest.calls();
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].endpoint, "/userinfo.do");
    assert_eq!(connector.exchange_name(), "okex");
}

#[tokio::test]
async fn balance_rejection_is_an_error_even_without_a_code() {
    let (connector, _rest) = connector(vec![json!({"result": false})]);

    let err = connector.get_account_balance().await.unwrap_err();
    assert!(matches!(err, ExchangeError::ApiError { .. }));
}

#[tokio::test]
async fn place_order_sends_vendor_fields_and_normalizes_id() {
    let (connector, rest) = connector(vec![json!({"result": true, "order_id": 123456789})]);

    let ret = connector
        .place_order(&OrderPlaceParams {
            base_currency: "eth".to_string(),
            quote_currency: "btc".to_string(),
            order_type: OrderType::BuyLimit,
            price: 0.05,
            amount: 2.0,
        })
        .await
        .unwrap();
    assert_eq!(ret.order_id, "123456789");

    let calls = rest.calls();
    assert_eq!(calls[0].endpoint, "/trade.do");
    assert_eq!(param(&calls[0], "symbol"), Some("eth_btc"));
    assert_eq!(param(&calls[0], "type"), Some("buy"));
    assert_eq!(param(&calls[0], "price"), Some("0.05"));
    assert_eq!(param(&calls[0], "amount"), Some("2"));
}

#[tokio::test]
async fn symbol_derivation_is_case_insensitive() {
    let (connector, rest) = connector(vec![json!({"result": true, "order_id": 1})]);

    connector
        .place_order(&OrderPlaceParams {
            base_currency: "BTC".to_string(),
            quote_currency: "USDT".to_string(),
            order_type: OrderType::SellLimit,
            price: 30000.0,
            amount: 0.25,
        })
        .await
        .unwrap();

    assert_eq!(param(&rest.calls()[0], "symbol"), Some("btc_usdt"));
    assert_eq!(param(&rest.calls()[0], "type"), Some("sell"));
}

#[tokio::test]
async fn order_id_survives_up_to_i64_max() {
    let (connector, _rest) =
        connector(vec![json!({"result": true, "order_id": 9223372036854775807_i64})]);

    let ret = connector
        .place_order(&OrderPlaceParams {
            base_currency: "btc".to_string(),
            quote_currency: "usdt".to_string(),
            order_type: OrderType::BuyLimit,
            price: 30000.0,
            amount: 0.001,
        })
        .await
        .unwrap();
    assert_eq!(ret.order_id, "9223372036854775807");
}

#[tokio::test]
async fn vendor_error_codes_map_to_domain_errors() {
    let (connector, _rest) = connector(vec![json!({"result": false, "error_code": 10010})]);

    let err = connector
        .place_order(&OrderPlaceParams {
            base_currency: "eth".to_string(),
            quote_currency: "btc".to_string(),
            order_type: OrderType::BuyLimit,
            price: 0.05,
            amount: 1000.0,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ExchangeError::InsufficientBalance(_)));
}

#[tokio::test]
async fn cancel_failure_with_zero_code_is_still_an_error() {
    let (connector, _rest) = connector(vec![json!({"result": false, "error_code": 0})]);

    let err = connector
        .cancel_order(&OrderCancelParams {
            order_id: "42".to_string(),
            base_currency: "eth".to_string(),
            quote_currency: "btc".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ExchangeError::ApiError { .. }));
}

#[tokio::test]
async fn cancel_sends_order_id_and_symbol() {
    let (connector, rest) = connector(vec![json!({"result": true, "order_id": "42"})]);

    connector
        .cancel_order(&OrderCancelParams {
            order_id: "42".to_string(),
            base_currency: "ETH".to_string(),
            quote_currency: "BTC".to_string(),
        })
        .await
        .unwrap();

    let calls = rest.calls();
    assert_eq!(calls[0].endpoint, "/cancel_order.do");
    assert_eq!(param(&calls[0], "order_id"), Some("42"));
    assert_eq!(param(&calls[0], "symbol"), Some("eth_btc"));
}

#[tokio::test]
async fn order_info_maps_status_codes() {
    let (connector, rest) = connector(vec![json!({
        "result": true,
        "orders": [{
            "order_id": 42,
            "symbol": "eth_btc",
            "price": 0.05,
            "amount": 2.0,
            "deal_amount": 1.0,
            "status": 1,
            "type": "buy"
        }]
    })]);

    let info = connector
        .get_order_info(&OrderQueryParams {
            order_id: "42".to_string(),
            base_currency: "eth".to_string(),
            quote_currency: "btc".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(info.order_id, "42");
    assert_eq!(info.price, "0.05");
    assert_eq!(info.amount, "2");
    assert_eq!(info.filled_amount, "1");
    assert_eq!(info.state, OrderState::PartialFilled);
    assert_eq!(rest.calls()[0].endpoint, "/order_info.do");
}

#[tokio::test]
async fn order_info_with_empty_orders_is_not_found() {
    let (connector, _rest) = connector(vec![json!({"result": true, "orders": []})]);

    let err = connector
        .get_order_info(&OrderQueryParams {
            order_id: "42".to_string(),
            base_currency: "eth".to_string(),
            quote_currency: "btc".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ExchangeError::OrderNotFound(_)));
}
