//! Error types for the numeric newtypes
//!
//! Order admission errors live with the matching engine; this module only
//! covers parse and range validation of `Price` and `Quantity`.

use rust_decimal::Decimal;
use thiserror::Error;

/// Parse/validation errors for the numeric newtypes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("not a decimal number: {0}")]
    Unparseable(String),

    #[error("price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    #[error("quantity must not be negative, got {0}")]
    NegativeQuantity(Decimal),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_error_display() {
        let err = NumericError::Unparseable("12,5".to_string());
        assert!(err.to_string().contains("12,5"));

        let err = NumericError::NonPositivePrice(Decimal::ZERO);
        assert_eq!(err.to_string(), "price must be positive, got 0");
    }
}
