use serde::Deserialize;
use std::collections::BTreeMap;

/// OKEX v1 envelopes report success as `result: true`; failures replace the
/// payload with a numeric `error_code`. Both fields are absent on the
/// opposite path, hence the defaults. These shapes never leak past this
/// module.
#[derive(Debug, Deserialize)]
pub struct OkexBalanceReturn {
    #[serde(default)]
    pub result: bool,
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub info: Option<OkexBalanceInfo>,
}

#[derive(Debug, Deserialize)]
pub struct OkexBalanceInfo {
    pub funds: OkexFunds,
}

/// Currency -> balance-string maps. `BTreeMap` keeps flattening order
/// deterministic.
#[derive(Debug, Deserialize)]
pub struct OkexFunds {
    #[serde(default)]
    pub free: BTreeMap<String, String>,
    #[serde(default)]
    pub freezed: BTreeMap<String, String>,
}

/// Response of `trade.do`. The order ID is a 64-bit integer on the wire.
#[derive(Debug, Deserialize)]
pub struct OkexPlaceReturn {
    #[serde(default)]
    pub result: bool,
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub order_id: i64,
}

/// Response of `cancel_order.do`.
#[derive(Debug, Deserialize)]
pub struct OkexCancelReturn {
    #[serde(default)]
    pub result: bool,
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub order_id: Option<String>,
}

/// Response of `order_info.do`.
#[derive(Debug, Deserialize)]
pub struct OkexOrderInfoReturn {
    #[serde(default)]
    pub result: bool,
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub orders: Vec<OkexOrder>,
}

/// One order inside an `order_info.do` response. Numeric fields arrive as
/// JSON numbers on this legacy API.
#[derive(Debug, Clone, Deserialize)]
pub struct OkexOrder {
    pub order_id: i64,
    pub symbol: String,
    pub price: f64,
    pub amount: f64,
    #[serde(default)]
    pub deal_amount: f64,
    pub status: i64,
    #[serde(rename = "type")]
    pub order_type: String,
}
