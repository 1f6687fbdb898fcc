//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative monetary amount.
///
/// Amounts are held in the currency's standard unit (e.g. 1200, not
/// 120000 cents) and use decimal arithmetic throughout, so line totals and
/// subtotals are exact. The wire representation is a plain JSON number;
/// deserialization rejects negative values.
///
/// ## Examples
///
/// ```
/// use bazaar_core::Price;
///
/// let unit = Price::from_cents(150_00);
/// assert_eq!(format!("{unit}"), "150.00");
/// assert_eq!(unit * 3, Price::from_cents(450_00));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price(Decimal);

impl Price {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// Create a price from an amount in the smallest currency unit
    /// (e.g. cents), which cannot be negative by construction.
    #[must_use]
    pub fn from_cents(cents: u64) -> Self {
        Self(Decimal::from(cents) / Decimal::ONE_HUNDRED)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

// The persisted slot and the products endpoint both carry `price` as a JSON
// number, so (de)serialization goes through the float representation rather
// than rust_decimal's default string form.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        let result = Price::new(Decimal::from(-1));
        assert!(matches!(result, Err(PriceError::Negative)));
    }

    #[test]
    fn test_new_accepts_zero() {
        assert_eq!(Price::new(Decimal::ZERO).unwrap(), Price::ZERO);
    }

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(1200_00);
        assert_eq!(price.amount(), Decimal::from(1200));
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(format!("{}", Price::from_cents(150_00)), "150.00");
        assert_eq!(format!("{}", Price::from_cents(99)), "0.99");
    }

    #[test]
    fn test_mul_by_quantity() {
        let price = Price::from_cents(10_00) * 2;
        assert_eq!(price, Price::from_cents(20_00));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from_cents(10_00), Price::from_cents(5_50)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(15_50));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_value(Price::from_cents(800_00)).unwrap();
        assert_eq!(json.as_f64(), Some(800.0));
    }

    #[test]
    fn test_deserialize_from_integer_number() {
        let price: Price = serde_json::from_str("1200").unwrap();
        assert_eq!(price.amount(), Decimal::from(1200));
    }

    #[test]
    fn test_deserialize_from_fractional_number() {
        let price: Price = serde_json::from_str("19.99").unwrap();
        assert_eq!(format!("{price}"), "19.99");
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let result: Result<Price, _> = serde_json::from_str("-5");
        assert!(result.is_err());
    }
}
