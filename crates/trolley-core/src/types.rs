//! # Domain Types
//!
//! Core domain types used throughout Trolley.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌───────────────────┐          ┌───────────────────┐               │
//! │  │     Product       │          │     TaxRate       │               │
//! │  │  ───────────────  │          │  ───────────────  │               │
//! │  │  title            │          │  bps (u32)        │               │
//! │  │  unit_price_cents │          │  1250 = 12.5%     │               │
//! │  └───────────────────┘          └───────────────────┘               │
//! │                                                                     │
//! │  A Product is what the catalog resolves a product id into.          │
//! │  The cart freezes a copy of it per line; the TaxRate is fixed       │
//! │  once per cart at construction.                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1250 bps = 12.5%, the rate the demo cart runs with.
/// Integer bps keep the tax calculation in pure integer math.
///
/// Valid rates are `[0, 10000)` - a fraction below 1.0 - enforced by
/// [`crate::validation::validate_tax_rate_bps`] at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A priced product as resolved from the catalog.
///
/// The catalog boundary guarantees `unit_price_cents >= 0`; nothing inside
/// the cart ever re-checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name shown in cart listings.
    pub title: String,

    /// Unit price in cents (smallest currency unit).
    pub unit_price_cents: i64,
}

impl Product {
    /// Creates a product from a title and a unit price in cents.
    pub fn new(title: impl Into<String>, unit_price_cents: i64) -> Self {
        Product {
            title: title.into(),
            unit_price_cents,
        }
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_units() {
        let rate = TaxRate::from_bps(1250);
        assert_eq!(rate.bps(), 1250);
        assert_eq!(rate.percentage(), 12.5);

        let from_pct = TaxRate::from_percentage(12.5);
        assert_eq!(from_pct, rate);
    }

    #[test]
    fn test_tax_rate_zero() {
        assert!(TaxRate::zero().is_zero());
        assert!(TaxRate::default().is_zero());
        assert!(!TaxRate::from_bps(1).is_zero());
    }

    #[test]
    fn test_product_unit_price() {
        let product = Product::new("Corn Flakes", 299);
        assert_eq!(product.unit_price(), Money::from_cents(299));
    }
}
