use crate::core::errors::ExchangeError;
use crate::core::types::{OrderState, OrderType};

/// OKEX v1 symbols are the underscore-joined lower-case pair, e.g.
/// `btc_usdt`.
pub fn format_symbol(base: &str, quote: &str) -> String {
    format!("{}_{}", base.to_lowercase(), quote.to_lowercase())
}

/// Translate the common order type to OKEX's wire strings.
pub const fn order_type_to_okex(order_type: OrderType) -> &'static str {
    match order_type {
        OrderType::BuyLimit => "buy",
        OrderType::SellLimit => "sell",
        OrderType::BuyMarket => "buy_market",
        OrderType::SellMarket => "sell_market",
    }
}

/// Shortest exact decimal rendering of an `f64`: no trailing zeros, no
/// scientific notation. This is what the vendor expects for `price` and
/// `amount`.
pub fn format_decimal(value: f64) -> String {
    format!("{}", value)
}

/// Map OKEX order-status codes into the common lifecycle.
///
/// `-1` is cancelled, `0` unfilled, `1` partially filled, `2` fully filled,
/// `4` cancel request in process (already treated as cancelled here).
pub fn order_state_from_okex(status: i64) -> Result<OrderState, ExchangeError> {
    match status {
        -1 | 4 => Ok(OrderState::Canceled),
        0 => Ok(OrderState::Submitted),
        1 => Ok(OrderState::PartialFilled),
        2 => Ok(OrderState::Filled),
        other => Err(ExchangeError::DeserializationError(format!(
            "unknown okex order status: {}",
            other
        ))),
    }
}

/// Human-readable reason for a vendor error code. The vendor sends codes
/// only, so the reason text lives here.
const fn describe_error_code(code: i64) -> &'static str {
    match code {
        10000 => "required parameter is empty",
        10001 => "request frequency too high",
        10002 => "system error",
        10004 => "request blocked",
        10005 => "secret key does not exist",
        10006 => "api key does not exist",
        10007 => "signature mismatch",
        10008 => "illegal parameter",
        10009 => "order does not exist",
        10010 => "insufficient funds",
        10011 => "order amount too low",
        10012 => "unsupported symbol",
        10016 => "insufficient coins",
        10024 => "balance not sufficient",
        _ => "unmapped vendor error",
    }
}

/// Map OKEX numeric error codes into the domain taxonomy.
///
/// Kept as one match per group so the mapping stays auditable; unknown codes
/// fall through as a generic API error carrying the raw code.
pub fn map_error_code(code: i64) -> ExchangeError {
    let reason = describe_error_code(code);
    match code {
        10005 | 10006 | 10007 => ExchangeError::AuthError(format!("{}: {}", code, reason)),
        10001 => ExchangeError::RateLimitExceeded(format!("{}: {}", code, reason)),
        10010 | 10016 | 10024 => {
            ExchangeError::InsufficientBalance(format!("{}: {}", code, reason))
        }
        10000 | 10008 | 10011 | 10012 => {
            ExchangeError::InvalidOrder(format!("{}: {}", code, reason))
        }
        10009 => ExchangeError::OrderNotFound(format!("{}: {}", code, reason)),
        _ => ExchangeError::ApiError {
            code: code.to_string(),
            message: reason.to_string(),
        },
    }
}
