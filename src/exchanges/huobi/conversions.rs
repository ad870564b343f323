use crate::core::errors::ExchangeError;
use crate::core::types::{OrderState, OrderType};

/// Huobi spot symbols are the concatenated lower-case pair, e.g. `ethbtc`.
pub fn format_symbol(base: &str, quote: &str) -> String {
    format!("{}{}", base.to_lowercase(), quote.to_lowercase())
}

/// Translate the common order type to Huobi's wire strings.
pub const fn order_type_to_huobi(order_type: OrderType) -> &'static str {
    match order_type {
        OrderType::BuyLimit => "buy-limit",
        OrderType::SellLimit => "sell-limit",
        OrderType::BuyMarket => "buy-market",
        OrderType::SellMarket => "sell-market",
    }
}

/// Shortest exact decimal rendering of an `f64`: no trailing zeros, no
/// scientific notation.
pub fn format_decimal(value: f64) -> String {
    format!("{}", value)
}

/// Map Huobi order states into the common lifecycle.
pub fn order_state_from_huobi(state: &str) -> Result<OrderState, ExchangeError> {
    match state {
        "created" | "submitted" | "submitting" => Ok(OrderState::Submitted),
        "partial-filled" => Ok(OrderState::PartialFilled),
        "filled" => Ok(OrderState::Filled),
        "canceled" => Ok(OrderState::Canceled),
        "partial-canceled" => Ok(OrderState::PartialCanceled),
        other => Err(ExchangeError::DeserializationError(format!(
            "unknown huobi order state: {}",
            other
        ))),
    }
}

/// Map Huobi `err-code` strings into the domain taxonomy.
///
/// The table is intentionally a single match so the mapping stays auditable;
/// unknown codes fall through as a generic API error carrying the raw
/// code and message.
pub fn map_error(code: &str, message: &str) -> ExchangeError {
    match code {
        "api-signature-not-valid" | "api-key-expired" | "invalid-access-key" => {
            ExchangeError::AuthError(format!("{}: {}", code, message))
        }
        "api-access-frequency-exceeded" => {
            ExchangeError::RateLimitExceeded(format!("{}: {}", code, message))
        }
        "account-frozen-balance-insufficient-error"
        | "account-transfer-balance-insufficient-error" => {
            ExchangeError::InsufficientBalance(format!("{}: {}", code, message))
        }
        "order-limitorder-price-error"
        | "order-limitorder-amount-error"
        | "order-value-min-error"
        | "order-orderstate-error" => {
            ExchangeError::InvalidOrder(format!("{}: {}", code, message))
        }
        "base-record-invalid" | "order-queryorder-invalid" => {
            ExchangeError::OrderNotFound(format!("{}: {}", code, message))
        }
        _ => ExchangeError::ApiError {
            code: code.to_string(),
            message: message.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_is_lowercase_concatenation() {
        assert_eq!(format_symbol("ETH", "BTC"), "ethbtc");
        assert_eq!(format_symbol("eth", "Btc"), "ethbtc");
    }

    #[test]
    fn order_type_translation_table() {
        assert_eq!(order_type_to_huobi(OrderType::BuyLimit), "buy-limit");
        assert_eq!(order_type_to_huobi(OrderType::SellLimit), "sell-limit");
        assert_eq!(order_type_to_huobi(OrderType::BuyMarket), "buy-market");
        assert_eq!(order_type_to_huobi(OrderType::SellMarket), "sell-market");
    }

    #[test]
    fn decimal_formatting_has_no_trailing_zeros() {
        assert_eq!(format_decimal(0.1), "0.1");
        assert_eq!(format_decimal(123.0), "123");
        assert_eq!(format_decimal(2.0), "2");
    }

    #[test]
    fn order_states_map_into_common_lifecycle() {
        assert_eq!(
            order_state_from_huobi("partial-filled").unwrap(),
            OrderState::PartialFilled
        );
        assert_eq!(order_state_from_huobi("filled").unwrap(), OrderState::Filled);
        assert!(order_state_from_huobi("weird").is_err());
    }

    #[test]
    fn signature_codes_map_to_auth_errors() {
        assert!(matches!(
            map_error("api-signature-not-valid", "bad sign"),
            ExchangeError::AuthError(_)
        ));
        assert!(matches!(
            map_error("account-frozen-balance-insufficient-error", ""),
            ExchangeError::InsufficientBalance(_)
        ));
        assert!(matches!(
            map_error("something-new", "msg"),
            ExchangeError::ApiError { .. }
        ));
    }
}
