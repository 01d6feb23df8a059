//! # Pricing Calculator
//!
//! Pure functions deriving monetary totals from the cart's current lines.
//!
//! ## Rounding Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Two-Step Rounding                               │
//! │                                                                     │
//! │  subtotal = Σ quantity × unit_price        (exact, integer cents)   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  tax = round(subtotal × rate)              (the only rounding)      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  total = subtotal + tax                    (adds the ROUNDED tax)   │
//! │                                                                     │
//! │  The grand total is built from the rounded tax, NOT from            │
//! │  round(subtotal × (1 + rate)). Keep this order: the receipt's       │
//! │  total must always equal its printed subtotal plus its printed      │
//! │  tax, cent for cent.                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine};
use crate::money::Money;
use crate::types::TaxRate;

// =============================================================================
// Pricing Functions
// =============================================================================

/// Exact sum of `quantity × unit_price` across all lines.
///
/// Zero for an empty cart. No intermediate rounding happens; integer
/// cents make the sum exact by construction.
pub fn subtotal(lines: &[CartLine]) -> Money {
    lines.iter().map(CartLine::line_total).sum()
}

/// Tax payable on the subtotal, rounded to the nearest cent.
pub fn tax(lines: &[CartLine], rate: TaxRate) -> Money {
    subtotal(lines).tax(rate)
}

/// Grand total: subtotal plus the already-rounded tax.
pub fn total(lines: &[CartLine], rate: TaxRate) -> Money {
    subtotal(lines) + tax(lines, rate)
}

/// One display label per line, in first-insertion order.
pub fn item_labels(lines: &[CartLine]) -> Vec<String> {
    lines
        .iter()
        .map(|l| format!("Cart contains {} x {}", l.quantity, l.product.title))
        .collect()
}

// =============================================================================
// Cart State Snapshot
// =============================================================================

/// A consistent snapshot of the cart: item labels plus derived totals.
///
/// This is the single composed read used by all external consumers. It is
/// captured in one pass over an immutably borrowed cart, so subtotal, tax,
/// and total always describe the same item set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Display labels, one per line in insertion order.
    pub items: Vec<String>,

    /// Exact subtotal in cents.
    pub subtotal: Money,

    /// Tax payable, rounded to the nearest cent.
    pub tax: Money,

    /// Grand total (subtotal + rounded tax).
    pub total: Money,
}

impl From<&Cart> for CartState {
    fn from(cart: &Cart) -> Self {
        let lines = cart.lines();
        let rate = cart.tax_rate();
        CartState {
            items: item_labels(lines),
            subtotal: subtotal(lines),
            tax: tax(lines, rate),
            total: total(lines, rate),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn stocked_cart() -> Cart {
        let mut cart = Cart::new(TaxRate::from_bps(1250));
        cart.add_line("cornflakes", Product::new("Corn Flakes", 299), 1)
            .unwrap();
        cart.add_line("cornflakes", Product::new("Corn Flakes", 299), 1)
            .unwrap();
        cart.add_line("weetabix", Product::new("Weetabix", 349), 1)
            .unwrap();
        cart
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let cart = Cart::new(TaxRate::from_bps(1250));
        let state = CartState::from(&cart);

        assert!(state.items.is_empty());
        assert!(state.subtotal.is_zero());
        assert!(state.tax.is_zero());
        assert!(state.total.is_zero());
    }

    #[test]
    fn test_worked_example() {
        // 2 × $2.99 + 1 × $3.49 = $9.47
        // tax at 12.5% = round($1.18375) = $1.18
        // total = $9.47 + $1.18 = $10.65
        let cart = stocked_cart();
        let state = CartState::from(&cart);

        assert_eq!(state.subtotal, Money::from_cents(947));
        assert_eq!(state.tax, Money::from_cents(118));
        assert_eq!(state.total, Money::from_cents(1065));
    }

    #[test]
    fn test_total_adds_rounded_tax() {
        // The grand total must be exactly printed-subtotal + printed-tax
        let cart = stocked_cart();
        let state = CartState::from(&cart);

        assert_eq!(state.total, state.subtotal + state.tax);
    }

    #[test]
    fn test_item_labels_format_and_order() {
        let cart = stocked_cart();
        let state = CartState::from(&cart);

        assert_eq!(
            state.items,
            vec![
                "Cart contains 2 x Corn Flakes".to_string(),
                "Cart contains 1 x Weetabix".to_string(),
            ]
        );
    }

    #[test]
    fn test_zero_rate_means_zero_tax() {
        let mut cart = Cart::new(TaxRate::zero());
        cart.add_line("weetabix", Product::new("Weetabix", 349), 2)
            .unwrap();

        let state = CartState::from(&cart);
        assert_eq!(state.subtotal, Money::from_cents(698));
        assert!(state.tax.is_zero());
        assert_eq!(state.total, state.subtotal);
    }

    #[test]
    fn test_state_serializes_to_camel_case_json() {
        let cart = stocked_cart();
        let state = CartState::from(&cart);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["subtotal"], 947);
        assert_eq!(json["tax"], 118);
        assert_eq!(json["total"], 1065);
        assert_eq!(json["items"][0], "Cart contains 2 x Corn Flakes");
    }
}
