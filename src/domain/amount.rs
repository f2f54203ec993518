use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a user- or service-supplied number.
///
/// Accepts plain decimals (`"12.50"`, `"-3"`) and scientific notation
/// (`"1.1E2"`, which some backends emit for large doubles). No sign or range
/// check is applied.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PaymentError::InvalidAmount("empty value".to_string()));
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| PaymentError::InvalidAmount(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_decimal() {
        assert_eq!(parse_amount("100").unwrap(), dec!(100));
        assert_eq!(parse_amount(" 12.50 ").unwrap(), dec!(12.50));
        assert_eq!(parse_amount("-3").unwrap(), dec!(-3));
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(parse_amount("1.1E2").unwrap(), dec!(110));
        assert_eq!(parse_amount("2.5e-1").unwrap(), dec!(0.25));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        for raw in ["", "   ", "abc", "NaN", "Infinity", "1,5"] {
            assert!(
                matches!(parse_amount(raw), Err(PaymentError::InvalidAmount(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
