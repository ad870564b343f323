use serde::Deserialize;

/// Huobi v1 envelope: `status` is `"ok"` or `"error"`; on error the payload
/// is replaced by `err-code`/`err-msg`. Never leaks past this module.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct HuobiResponse<T> {
    pub status: String,
    #[serde(rename = "err-code", default)]
    pub err_code: Option<String>,
    #[serde(rename = "err-msg", default)]
    pub err_msg: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// One entry of `GET /v1/account/accounts`.
#[derive(Debug, Clone, Deserialize)]
pub struct HuobiAccount {
    pub id: i64,
    #[serde(rename = "type")]
    pub account_type: String,
    pub state: String,
    #[serde(rename = "user-id", default)]
    pub user_id: i64,
}

/// Payload of `GET /v1/account/accounts/{id}/balance`.
#[derive(Debug, Deserialize)]
pub struct HuobiAccountBalance {
    pub id: i64,
    #[serde(rename = "type")]
    pub account_type: String,
    pub state: String,
    pub list: Vec<HuobiBalanceEntry>,
}

/// One currency/bucket pair inside a balance payload. `kind` is `"trade"`
/// or `"frozen"`.
#[derive(Debug, Clone, Deserialize)]
pub struct HuobiBalanceEntry {
    pub currency: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub balance: String,
}

/// Payload of `GET /v1/order/orders/{id}`. Huobi reports the filled amount
/// under the historical field name `field-amount`.
#[derive(Debug, Deserialize)]
pub struct HuobiOrder {
    pub id: i64,
    pub symbol: String,
    pub price: String,
    pub amount: String,
    #[serde(rename = "field-amount", default)]
    pub filled_amount: String,
    pub state: String,
    #[serde(rename = "type")]
    pub order_type: String,
}
