//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Minor Units                                  │
//! │    "2.50" parses to 250; 250 × 3 = 750 = "7.50", exactly           │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lenient Parsing
//! Prices and discounts arrive as user-typed text from the invoice form.
//! Half-typed or garbage input must never abort a recomputation pass, so
//! [`Money::parse_lenient`] maps anything unparseable to zero instead of
//! returning an error. Validation at the submission boundary is where bad
//! input becomes a hard error.
//!
//! ## Usage
//! ```rust
//! use fatura_core::money::Money;
//!
//! let price = Money::parse_lenient("2.50");
//! assert_eq!(price.minor(), 250);
//! assert_eq!(price.multiply_quantity(3).to_string(), "7.50");
//!
//! // Garbage never panics, it is just zero
//! assert_eq!(Money::parse_lenient("abc"), Money::zero());
//! ```

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (kuruş for TRY, cents
/// for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate results (subtotal − discount) may dip
///   below zero before the grand-total floor is applied
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Wire format**: decimal string (`"2.50"`), matching what the invoice
///   form and the persistence boundary exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
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

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Parses a user-typed decimal string, mapping anything unparseable
    /// to zero.
    ///
    /// ## Accepted Shape
    /// Optional leading `-`, integer digits, optionally a `.` and fraction
    /// digits. Fraction digits beyond two are truncated (`"1.999"` →
    /// `1.99`). Surrounding whitespace is ignored.
    ///
    /// ## Example
    /// ```rust
    /// use fatura_core::money::Money;
    ///
    /// assert_eq!(Money::parse_lenient("10").minor(), 1000);
    /// assert_eq!(Money::parse_lenient("2.5").minor(), 250);
    /// assert_eq!(Money::parse_lenient("-3.25").minor(), -325);
    /// assert_eq!(Money::parse_lenient(""), Money::zero());
    /// assert_eq!(Money::parse_lenient("12,50"), Money::zero());
    /// ```
    pub fn parse_lenient(input: &str) -> Self {
        let input = input.trim();

        let (negative, digits) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        if digits.is_empty() {
            return Money::zero();
        }

        let (whole, fraction) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        // "." alone or ".5" with no whole part are allowed; "5." as well.
        if whole.is_empty() && fraction.is_empty() {
            return Money::zero();
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Money::zero();
        }

        let whole_minor: i64 = match whole.parse::<i64>() {
            Ok(v) => v.saturating_mul(100),
            Err(_) if whole.is_empty() => 0,
            Err(_) => return Money::zero(), // overflow
        };

        let fraction_minor: i64 = {
            let mut frac = fraction.chars().take(2);
            let tens = frac.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as i64;
            let units = frac.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as i64;
            tens * 10 + units
        };

        let minor = whole_minor.saturating_add(fraction_minor);
        Money(if negative { -minor } else { minor })
    }

    /// Multiplies money by a quantity, treating non-positive quantities
    /// as zero.
    ///
    /// This is the line-total rule: a row whose quantity has been typed
    /// down to 0 or a negative number contributes nothing to the invoice.
    ///
    /// ## Example
    /// ```rust
    /// use fatura_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(299);
    /// assert_eq!(unit_price.multiply_quantity(3).minor(), 897);
    /// assert_eq!(unit_price.multiply_quantity(-2), Money::zero());
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty.max(0)))
    }

    /// Subtracts `other`, flooring the result at zero.
    ///
    /// Used for the grand total: a discount larger than the subtotal
    /// yields zero, never a negative invoice.
    ///
    /// ## Example
    /// ```rust
    /// use fatura_core::money::Money;
    ///
    /// let subtotal = Money::from_minor(2500);
    /// let discount = Money::from_minor(10000);
    /// assert_eq!(subtotal.sub_floor_zero(discount), Money::zero());
    /// ```
    #[inline]
    pub fn sub_floor_zero(&self, other: Money) -> Self {
        Money(self.0.saturating_sub(other.0).max(0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the canonical decimal string: `"2.50"`, `"0.00"`, `"-3.25"`.
///
/// This is also the wire format used by serde.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

/// Serialized as the decimal string, matching the form/boundary shape.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Deserialized leniently from a decimal string (garbage becomes zero),
/// mirroring how typed input is treated everywhere else.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl<'de> de::Visitor<'de> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a decimal string like \"2.50\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Money, E> {
                Ok(Money::parse_lenient(value))
            }
        }

        deserializer.deserialize_str(MoneyVisitor)
    }
}

/// Addition of two Money values. Saturates at the i64 bounds, matching
/// the parse and multiply paths.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Subtraction of two Money values. Saturates like Add.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by i64 (signed, saturating).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

/// Sum of an iterator of Money values (subtotal computation).
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
