//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    2.99 + 2.99 + 3.49 = 9.469999999999999  ❌ WRONG!                │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    299 + 299 + 349 = 947 cents              ✅ exact                │
//! │                                                                     │
//! │  Subtotals are therefore always exact; rounding happens in ONE      │
//! │  place only - the tax calculation.                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use trolley_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(299); // $2.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                      // $5.98
//! let total = doubled + Money::from_cents(349); // $9.47
//! assert_eq!(total.cents(), 947);
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic never silently wraps to a different type
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; serializes as a bare cents integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::money::Money;
    ///
    /// let price = Money::from_cents(299); // Represents $2.99
    /// assert_eq!(price.cents(), 299);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::money::Money;
    ///
    /// let price = Money::from_major_minor(3, 49); // $3.49
    /// assert_eq!(price.cents(), 349);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major_units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_units(&self) -> i64 {
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

    /// Calculates the tax due on this amount, rounded to the nearest cent.
    ///
    /// This is the ONLY place in the crate where rounding happens.
    /// Half-cent amounts round up (half-away-from-zero for the non-negative
    /// amounts that occur in a cart).
    ///
    /// ## Implementation
    /// Integer math throughout: `(cents × bps + 5000) / 10000`.
    /// The +5000 provides the rounding (5000/10000 = half a cent).
    /// i128 intermediates so large carts cannot overflow.
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::money::Money;
    /// use trolley_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(947); // $9.47
    /// let rate = TaxRate::from_bps(1250);    // 12.5%
    ///
    /// // $9.47 × 12.5% = $1.18375 → rounds to $1.18
    /// assert_eq!(subtotal.tax(rate).cents(), 118);
    /// ```
    pub fn tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.major_units().abs(),
            self.minor_units()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing line totals into a subtotal.
impl Sum for Money {
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
    fn test_from_cents() {
        let money = Money::from_cents(947);
        assert_eq!(money.cents(), 947);
        assert_eq!(money.major_units(), 9);
        assert_eq!(money.minor_units(), 47);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(3, 49);
        assert_eq!(money.cents(), 349);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1065)), "$10.65");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(598);
        let b = Money::from_cents(349);

        assert_eq!((a + b).cents(), 947);
        assert_eq!((a - b).cents(), 249);
        assert_eq!((b * 2).cents(), 698);
    }

    #[test]
    fn test_sum_of_line_totals() {
        let lines = [Money::from_cents(598), Money::from_cents(349)];
        let subtotal: Money = lines.into_iter().sum();
        assert_eq!(subtotal.cents(), 947);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_tax_basic() {
        // $10.00 at 10% = $1.00
        let amount = Money::from_cents(1000);
        let tax = amount.tax(TaxRate::from_bps(1000));
        assert_eq!(tax.cents(), 100);
    }

    #[test]
    fn test_tax_rounds_down_below_half_cent() {
        // $9.47 × 12.5% = $1.18375 → $1.18
        let amount = Money::from_cents(947);
        let tax = amount.tax(TaxRate::from_bps(1250));
        assert_eq!(tax.cents(), 118);
    }

    #[test]
    fn test_tax_rounds_up_from_half_cent() {
        // $0.04 × 12.5% = $0.005 → $0.01
        let amount = Money::from_cents(4);
        let tax = amount.tax(TaxRate::from_bps(1250));
        assert_eq!(tax.cents(), 1);

        // $5.98 × 12.5% = $0.7475 → $0.75
        let amount = Money::from_cents(598);
        let tax = amount.tax(TaxRate::from_bps(1250));
        assert_eq!(tax.cents(), 75);
    }

    #[test]
    fn test_tax_on_zero_is_zero() {
        let tax = Money::zero().tax(TaxRate::from_bps(1250));
        assert!(tax.is_zero());
    }
}
