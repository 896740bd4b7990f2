//! # Money Module
//!
//! Provides the `Money` type for cart prices and totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart total built with reduce((t, i) => t + i.price * i.amount)      │
//! │  inherits every one of those errors, and NaN if a price is missing.    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (cents / paisa)                      │
//! │    Rs.12.50 is stored as 1250. Totals are exact.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ecogrow_core::money::Money;
//!
//! let price = Money::from_cents(1250); // 12.50
//! let line = price * 3;                // 37.50
//! assert_eq!(line.to_string(), "37.50");
//! assert_eq!(line.format_with_symbol("Rs."), "Rs.37.50");
//! ```
//!
//! ## Wire Format
//! The app sends prices as decimal major units (`"price": 12.5`). `Money`
//! reads and writes that shape but keeps minor units internally:
//! ```text
//! 12.5 ──► Money(1250)      10 ──► Money(1000)
//! 12.345, -1, "10"  ──► rejected (more than 2 decimals, negative, not a number)
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic stays closed; validation rejects negative
///   prices at the cart boundary instead of the type
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serializes as decimal major units**: `Money(1250)` is `12.5` on the
///   wire, `Money(1000)` is `10`
///
/// ## Where Money is Used
/// ```text
/// CartCandidate.price ──► LineItem.price ──► line_total ──► cart_total
///                                                                │
///                                          OrderDraft.total_price ◄┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use ecogrow_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole major units, or `None` if it
    /// does not fit.
    #[inline]
    pub fn checked_from_major(major: i64) -> Option<Self> {
        major.checked_mul(100).map(Money)
    }

    /// Parses a decimal major-unit price as the app sends it.
    ///
    /// ## Example
    /// ```rust
    /// use ecogrow_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_decimal(12.5).unwrap().cents(), 1250);
    /// assert_eq!(Money::from_major_decimal(19.99).unwrap().cents(), 1999);
    /// assert!(Money::from_major_decimal(12.345).is_err());
    /// assert!(Money::from_major_decimal(-1.0).is_err());
    /// ```
    pub fn from_major_decimal(value: f64) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        if !value.is_finite() {
            return Err(invalid("must be a finite number"));
        }
        if value < 0.0 {
            return Err(ValidationError::Negative {
                field: "price".to_string(),
            });
        }

        // 19.99 * 100.0 is 1998.9999999999998; allow a few ulps of drift.
        let scaled = value * 100.0;
        let cents = scaled.round();
        let tolerance = (scaled.abs() * f64::EPSILON * 8.0).max(1e-9);
        if (scaled - cents).abs() > tolerance {
            return Err(invalid("must have at most 2 decimal places"));
        }
        if cents >= i64::MAX as f64 {
            return Err(invalid("is too large"));
        }

        Ok(Money(cents as i64))
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// Saturates instead of overflowing; a cart line can never
    /// wrap around into a negative total.
    ///
    /// ## Example
    /// ```rust
    /// use ecogrow_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Checked multiplication by a quantity; `None` on overflow.
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Checked addition; `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Formats the value with a currency prefix, e.g. `Rs.12.50` or `$12.50`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, symbol, self.abs_display())
    }

    fn abs_display(&self) -> String {
        format!("{}.{:02}", self.major().abs(), self.minor())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering without a currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}", sign, self.abs_display())
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
        *self = *self + other;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Serde (decimal major units)
// =============================================================================

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.0 as f64 / 100.0)
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MajorUnitsVisitor)
    }
}

struct MajorUnitsVisitor;

impl<'de> Visitor<'de> for MajorUnitsVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative amount with at most 2 decimal places")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .ok()
            .and_then(Money::checked_from_major)
            .ok_or_else(|| E::custom("price is too large"))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        if v < 0 {
            return Err(E::custom("price must not be negative"));
        }
        Money::checked_from_major(v).ok_or_else(|| E::custom("price is too large"))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_major_decimal(v).map_err(E::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
