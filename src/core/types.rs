use serde::{Deserialize, Serialize};
use std::fmt;

/// Which bucket a balance entry was reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceKind {
    /// Freely tradable funds.
    Trade,
    /// Funds locked by open orders or withdrawals.
    Frozen,
}

/// One currency balance in one bucket.
///
/// Balances stay decimal-as-string exactly as the exchange reported them;
/// connectors never emit entries whose balance is `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub currency: String,
    pub balance: String,
    pub kind: BalanceKind,
}

/// Exchange-agnostic order type. Each connector owns the translation table
/// to its vendor's wire strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    BuyLimit,
    SellLimit,
    BuyMarket,
    SellMarket,
}

impl OrderType {
    pub const fn is_market(self) -> bool {
        matches!(self, Self::BuyMarket | Self::SellMarket)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::BuyLimit => "buy-limit",
            Self::SellLimit => "sell-limit",
            Self::BuyMarket => "buy-market",
            Self::SellMarket => "sell-market",
        };
        write!(f, "{}", s)
    }
}

/// Parameters for placing an order, independent of the target exchange.
///
/// The trading pair is carried as separate base/quote currency identifiers;
/// connectors derive the vendor symbol from them (casing and separator are
/// vendor conventions, not the caller's concern).
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPlaceParams {
    pub base_currency: String,
    pub quote_currency: String,
    pub order_type: OrderType,
    pub price: f64,
    pub amount: f64,
}

/// Result of a successful order placement.
///
/// The order ID is always a string: some vendors return 64-bit integers and
/// normalizing here avoids precision loss and unifies with vendors that
/// return strings natively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPlaceReturn {
    pub order_id: String,
}

/// Parameters for cancelling an order. The pair is required because some
/// vendors key cancels by symbol as well as order ID; connectors that only
/// need the ID ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCancelParams {
    pub order_id: String,
    pub base_currency: String,
    pub quote_currency: String,
}

/// Parameters for an order-status lookup. Shaped like
/// [`OrderCancelParams`] for the same reason: OKEX requires the symbol,
/// Huobi ignores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQueryParams {
    pub order_id: String,
    pub base_currency: String,
    pub quote_currency: String,
}

/// Lifecycle state of an order, mapped from vendor-specific strings/codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderState {
    Submitted,
    PartialFilled,
    Filled,
    Canceled,
    PartialCanceled,
}

/// Current state of an order as reported by the exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderInfo {
    pub order_id: String,
    pub symbol: String,
    pub price: String,
    pub amount: String,
    pub filled_amount: String,
    pub state: OrderState,
}
