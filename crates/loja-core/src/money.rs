//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    2000 cents × 2 = 4000 cents → "40.00€", exactly                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use loja_core::money::Money;
//!
//! let price = Money::from_cents(2000);          // 20.00€
//! let line = price.checked_mul_quantity(2);     // Some(40.00€)
//! assert_eq!(line.unwrap().to_string(), "40.00€");
//!
//! let balance: Money = "500.00".parse().unwrap();
//! assert_eq!(balance.cents(), 50_000);
//! ```

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::CURRENCY_SYMBOL;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: a difference of two amounts can go negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde**: serializes as the bare cent count
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► pricing::line_total ──► pricing::cart_total
///                                                  │
///                        Session.balance ◄── checkout (balance - total)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use loja_core::money::Money;
    ///
    /// let price = Money::from_cents(1599); // 15.99€
    /// assert_eq!(price.cents(), 1599);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole euros portion.
    ///
    /// ## Example
    /// ```rust
    /// use loja_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).euros(), 10);
    /// assert_eq!(Money::from_cents(-550).euros(), -5);
    /// ```
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts `other`, `None` on overflow.
    #[inline]
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Multiplies a unit price by a quantity, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use loja_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1500); // 15.00€
    /// assert_eq!(unit_price.checked_mul_quantity(3), Some(Money::from_cents(4500)));
    /// assert_eq!(unit_price.checked_mul_quantity(i64::MAX), None);
    /// ```
    #[inline]
    pub fn checked_mul_quantity(self, qty: i64) -> Option<Money> {
        self.0.checked_mul(qty).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two-decimal fixed point with a trailing currency symbol: `20.00€`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}{}",
            sign,
            self.euros().abs(),
            self.cents_part(),
            CURRENCY_SYMBOL
        )
    }
}

/// Parses decimal text such as `500`, `500.5`, `19,99` or `500.00€`.
///
/// ## Rules
/// - optional leading `-`
/// - `.` or `,` as the decimal separator
/// - at most two fractional digits
/// - optional trailing `€`
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidAmount {
            input: s.to_string(),
        };

        let text = s.trim();
        let text = text.strip_suffix(CURRENCY_SYMBOL).unwrap_or(text).trim_end();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (whole, frac) = match text.split_once(|c: char| c == '.' || c == ',') {
            Some((whole, frac)) => (whole, frac),
            None => (text, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || frac.len() > 2 || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let euros: i64 = whole.parse().map_err(|_| invalid())?;
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let total = euros
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Money(if negative { -total } else { total }))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
