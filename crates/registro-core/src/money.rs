//! # Money Module
//!
//! Integer-cent money for catalog prices and cart totals.
//!
//! ## Where Money Comes From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Remote JSON            Product.price            Cart                   │
//! │  ───────────            ─────────────            ────                   │
//! │  "price": 44.5   ──►    Money(4450)      ──►     line = price × qty     │
//! │                         (converted once)         total = Σ lines        │
//! │                                                                         │
//! │  Displayed as "Q 44.50" (quetzales)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The API sends prices as JSON numbers. They are rounded to cents exactly
//! once, by [`Money::from_price`], while deserializing a product; every
//! later calculation is integer arithmetic.
//!
//! Prices are untrusted, so `+` and `× qty` saturate at the `i64` bounds
//! instead of overflowing.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

/// Currency symbol used for display.
pub const CURRENCY_SYMBOL: &str = "Q";

/// A monetary value in cents (centavos).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use registro_core::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "Q 10.99");
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal price from the remote API into cents.
    ///
    /// Rounds half away from zero. Non-finite input becomes zero.
    ///
    /// ```rust
    /// use registro_core::Money;
    ///
    /// assert_eq!(Money::from_price(44.5).cents(), 4450);
    /// assert_eq!(Money::from_price(0.125).cents(), 13);
    /// ```
    pub fn from_price(price: f64) -> Self {
        if !price.is_finite() {
            return Money::zero();
        }
        Money((price * 100.0).round() as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit part, truncated toward zero.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents part (0-99), always positive.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the amount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Deserializes a JSON number price straight into cents.
    pub fn deserialize_price<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Money::from_price)
    }
}

/// Renders as `Q 12.34`, matching the catalog's price tags.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{} {}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            self.units().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(4400).to_string(), "Q 44.00");
        assert_eq!(Money::from_cents(5).to_string(), "Q 0.05");
        assert_eq!(Money::from_cents(-150).to_string(), "-Q 1.50");
        assert_eq!(Money::zero().to_string(), "Q 0.00");
    }

    #[test]
    fn test_from_price_rounding() {
        assert_eq!(Money::from_price(10.0).cents(), 1000);
        assert_eq!(Money::from_price(19.99).cents(), 1999);
        assert_eq!(Money::from_price(0.005).cents(), 1);
        assert_eq!(Money::from_price(f64::NAN), Money::zero());
        assert_eq!(Money::from_price(f64::INFINITY), Money::zero());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);
        assert_eq!((a + b).cents(), 1250);
        assert_eq!((b * 3).cents(), 750);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1250);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 1500);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_price(1e17);
        assert_eq!(huge.cents(), i64::MAX);

        assert_eq!((huge * 2).cents(), i64::MAX);
        assert_eq!((huge + Money::from_cents(1)).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) * 2).cents(), i64::MIN);

        let mut total = huge;
        total += huge;
        assert_eq!(total.cents(), i64::MAX);

        let total: Money = vec![huge, huge, huge].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
        assert!(!total.to_string().starts_with('-'));
    }

    #[test]
    fn test_deserialize_price() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "Money::deserialize_price")]
            price: Money,
        }

        let row: Row = serde_json::from_str(r#"{"price": 44}"#).unwrap();
        assert_eq!(row.price.cents(), 4400);

        let row: Row = serde_json::from_str(r#"{"price": 12.5}"#).unwrap();
        assert_eq!(row.price.cents(), 1250);

        assert!(serde_json::from_str::<Row>(r#"{"price": "12"}"#).is_err());
    }
}
