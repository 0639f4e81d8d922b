//! Decimal amount parsing and formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Parse an amount from a form value.
///
/// Forms deliver prices as strings, JSON clients as numbers; both count.
/// Anything else (or a non-numeric string) is `None`.
#[must_use]
pub fn parse_amount(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Format an amount with exactly two decimal places for customer-facing text.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_numbers_and_numeric_strings() {
        assert_eq!(parse_amount(&json!(25)), Some(Decimal::from(25)));
        assert_eq!(parse_amount(&json!("35.50")), "35.50".parse().ok());
        assert_eq!(parse_amount(&json!(" 10 ")), Some(Decimal::from(10)));
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert_eq!(parse_amount(&json!("")), None);
        assert_eq!(parse_amount(&json!("gratis")), None);
        assert_eq!(parse_amount(&json!(null)), None);
        assert_eq!(parse_amount(&json!([25])), None);
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_amount(Decimal::from(85)), "85.00");
        assert_eq!(format_amount("12.5".parse().unwrap()), "12.50");
        assert_eq!(format_amount("0.125".parse().unwrap()), "0.13");
    }
}
