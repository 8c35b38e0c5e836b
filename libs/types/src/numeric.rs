//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! `Price` is strictly positive; `Quantity` admits zero because it also
//! represents the remaining open amount of a partially filled order.

use crate::errors::NumericError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A strictly positive limit price
///
/// Ordering is total and exact, so `Price` can key a sorted level map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price, returning None unless the value is > 0
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a price from an integer tick value
    ///
    /// # Panics
    /// Panics if the value is zero
    pub fn from_u64(value: u64) -> Self {
        assert!(value > 0, "Price must be positive");
        Self(Decimal::from(value))
    }

    /// Parse a price from a decimal string
    pub fn from_str(s: &str) -> Result<Self, NumericError> {
        let value: Decimal = s
            .parse()
            .map_err(|_| NumericError::Unparseable(s.to_string()))?;
        Self::try_new(value).ok_or(NumericError::NonPositivePrice(value))
    }

    /// Get the underlying decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative order quantity
///
/// Order admission requires a strictly positive quantity; zero only arises
/// as the remainder of a fully matched order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a quantity, returning None if the value is negative
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value >= Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a quantity from an integer unit count
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Parse a quantity from a decimal string
    pub fn from_str(s: &str) -> Result<Self, NumericError> {
        let value: Decimal = s
            .parse()
            .map_err(|_| NumericError::Unparseable(s.to_string()))?;
        Self::try_new(value).ok_or(NumericError::NegativeQuantity(value))
    }

    /// The zero quantity
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Check whether this quantity is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Subtract another quantity, returning None if the result would be negative
    pub fn checked_sub(&self, other: Quantity) -> Option<Self> {
        Self::try_new(self.0 - other.0)
    }

    /// Get the underlying decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 + rhs.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_price_rejects_non_positive() {
        assert!(Price::try_new(Decimal::ZERO).is_none());
        assert!(Price::try_new(Decimal::from(-5)).is_none());
        assert!(Price::try_new(Decimal::from(100)).is_some());
    }

    #[test]
    fn test_price_from_str() {
        let price = Price::from_str("3000.50").unwrap();
        assert_eq!(price.as_decimal(), Decimal::new(300050, 2));

        assert!(matches!(
            Price::from_str("-1"),
            Err(NumericError::NonPositivePrice(_))
        ));
        assert!(matches!(
            Price::from_str("abc"),
            Err(NumericError::Unparseable(_))
        ));
    }

    #[test]
    fn test_price_ordering() {
        assert!(Price::from_u64(95) < Price::from_u64(100));
        assert!(Price::from_u64(105) > Price::from_u64(100));
    }

    #[test]
    #[should_panic(expected = "Price must be positive")]
    fn test_price_from_u64_zero_panics() {
        Price::from_u64(0);
    }

    #[test]
    fn test_quantity_rejects_negative() {
        assert!(Quantity::try_new(Decimal::from(-1)).is_none());
        assert_eq!(
            Quantity::try_new(Decimal::ZERO),
            Some(Quantity::zero())
        );
    }

    #[test]
    fn test_quantity_checked_sub() {
        let a = Quantity::from_u64(10);
        let b = Quantity::from_u64(4);

        assert_eq!(a.checked_sub(b), Some(Quantity::from_u64(6)));
        assert_eq!(a.checked_sub(a), Some(Quantity::zero()));
        assert_eq!(b.checked_sub(a), None);
    }

    #[test]
    fn test_quantity_add() {
        let total = Quantity::from_str("1.5").unwrap() + Quantity::from_str("2.5").unwrap();
        assert_eq!(total, Quantity::from_u64(4));
    }

    #[test]
    fn test_price_serialization() {
        let price = Price::from_str("1499.99").unwrap();
        let json = serde_json::to_string(&price).unwrap();
        let deserialized: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(price, deserialized);
    }

    proptest! {
        #[test]
        fn prop_price_ordering_matches_decimal(a in 1u64..1_000_000, b in 1u64..1_000_000) {
            let pa = Price::from_u64(a);
            let pb = Price::from_u64(b);
            prop_assert_eq!(pa.cmp(&pb), a.cmp(&b));
        }

        #[test]
        fn prop_quantity_sub_then_add_round_trips(a in 0u64..1_000_000, b in 0u64..1_000_000) {
            let (hi, lo) = (a.max(b), a.min(b));
            let qa = Quantity::from_u64(hi);
            let qb = Quantity::from_u64(lo);
            let diff = qa.checked_sub(qb).unwrap();
            prop_assert_eq!(diff + qb, qa);
        }
    }
}
