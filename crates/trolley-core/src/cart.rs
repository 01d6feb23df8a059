//! # Cart State Machine
//!
//! The single source of truth for "what is in the cart and how much of it."
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Cart State Transitions                          │
//! │                                                                     │
//! │  Caller Action             Operation               State Change     │
//! │  ─────────────             ─────────               ────────────     │
//! │                                                                     │
//! │  New product ────────────► add_line() ───────────► lines.push(..)   │
//! │                                                                     │
//! │  Known product ──────────► add_line() ───────────► quantity += n    │
//! │                                                                     │
//! │  Adjust quantity ────────► update_quantity() ────► quantity ± n     │
//! │                                       │                             │
//! │                                       └── reaches 0 or below?       │
//! │                                           line is EVICTED           │
//! │                                                                     │
//! │  Empty the cart ─────────► clear() ──────────────► lines = []       │
//! │                                                                     │
//! │  NOTE: Eviction is the ONLY deletion path. A line with              │
//! │        quantity <= 0 never exists; it is removed, not stored.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Every retained line has `quantity > 0`
//! - Lines are unique by product id
//! - Lines keep first-insertion order for listings
//! - A failed operation leaves the cart untouched

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing;
use crate::types::{Product, TaxRate};
use crate::validation;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Update Operation
// =============================================================================

/// The direction of a quantity update.
///
/// A closed two-variant enum instead of a free-form string selector:
/// every match on it is exhaustive, and anything else coming in over a
/// string boundary is rejected as [`CoreError::UnknownOperation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateOp {
    /// Increase the line quantity.
    Add,
    /// Decrease the line quantity (evicts at zero or below).
    Remove,
}

impl FromStr for UpdateOp {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(UpdateOp::Add),
            "remove" => Ok(UpdateOp::Remove),
            other => Err(CoreError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for UpdateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateOp::Add => write!(f, "add"),
            UpdateOp::Remove => write!(f, "remove"),
        }
    }
}

/// What a successful quantity update did to the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The line survived with the given new quantity.
    Adjusted(i64),
    /// The quantity reached zero or below and the line was removed.
    Evicted,
}

// =============================================================================
// Cart Line
// =============================================================================

/// One entry mapping a resolved product to a positive quantity.
///
/// ## Design Notes
/// - `product`: frozen copy of the catalog record at the time of adding.
///   The cart keeps displaying consistent data even if the catalog
///   changes afterwards.
/// - `quantity`: invariant `> 0`; the cart evicts the line before it
///   could ever hold zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product identifier this line is keyed by.
    pub product_id: String,

    /// Resolved product data, frozen at add time.
    pub product: Product,

    /// Quantity in the cart. Always positive while the line exists.
    pub quantity: i64,

    /// When this line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn new(product_id: &str, product: Product, quantity: i64) -> Self {
        CartLine {
            product_id: product_id.to_string(),
            product,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity). Exact, no rounding.
    pub fn line_total(&self) -> Money {
        self.product.unit_price() * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// One logical owner per instance: mutation takes `&mut self`, so the
/// borrow checker serializes access. The cart is never shared between
/// engine instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in first-insertion order, unique by product id.
    lines: Vec<CartLine>,

    /// Tax rate, fixed at construction.
    tax_rate: TaxRate,

    /// When the cart was created/last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart with the given tax rate.
    pub fn new(tax_rate: TaxRate) -> Self {
        Cart {
            lines: Vec::new(),
            tax_rate,
            created_at: Utc::now(),
        }
    }

    /// Adds a resolved product to the cart, merging into an existing line.
    ///
    /// ## Behavior
    /// - If a line for `product_id` exists: its quantity increases; the
    ///   already-frozen product data is kept
    /// - Otherwise: a new line is appended, preserving insertion order
    ///
    /// ## Errors
    /// - Empty/oversized product id, non-positive quantity
    /// - Merged quantity above [`MAX_LINE_QUANTITY`]
    /// - Cart already at [`MAX_CART_LINES`] distinct lines
    pub fn add_line(
        &mut self,
        product_id: &str,
        product: Product,
        quantity: i64,
    ) -> CoreResult<()> {
        validation::validate_product_id(product_id)?;
        validation::validate_quantity(quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            let merged = line.quantity + quantity;
            if merged > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: merged,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity = merged;
            return Ok(());
        }

        if quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine::new(product_id, product, quantity));
        Ok(())
    }

    /// Adjusts the quantity of an existing line by a positive delta.
    ///
    /// ## Behavior
    /// - `Add` computes `quantity + delta`, `Remove` computes
    ///   `quantity - delta`
    /// - A result of zero or below EVICTS the line - removing more than
    ///   the held quantity is legal and never stores a negative
    /// - Purely local state mutation; the catalog is never consulted
    ///
    /// ## Errors
    /// - No line for `product_id`
    /// - `delta <= 0` (rejected, never clamped)
    /// - Adjusted quantity above [`MAX_LINE_QUANTITY`]
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        delta: i64,
        op: UpdateOp,
    ) -> CoreResult<UpdateOutcome> {
        validation::validate_quantity(delta)?;

        let idx = self
            .lines
            .iter()
            .position(|l| l.product_id == product_id)
            .ok_or_else(|| CoreError::LineNotFound(product_id.to_string()))?;

        let existing = self.lines[idx].quantity;
        let adjusted = match op {
            UpdateOp::Add => existing + delta,
            UpdateOp::Remove => existing - delta,
        };

        if adjusted <= 0 {
            self.lines.remove(idx);
            return Ok(UpdateOutcome::Evicted);
        }

        if adjusted > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: adjusted,
                max: MAX_LINE_QUANTITY,
            });
        }

        self.lines[idx].quantity = adjusted;
        Ok(UpdateOutcome::Adjusted(adjusted))
    }

    /// Checks whether a line exists for the given product id. No side effect.
    pub fn contains(&self, product_id: &str) -> bool {
        self.lines.iter().any(|l| l.product_id == product_id)
    }

    /// Removes all lines. Idempotent.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Read-only view of the lines in first-insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The tax rate this cart was constructed with.
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the subtotal (before tax). Exact in cents.
    pub fn subtotal(&self) -> Money {
        pricing::subtotal(&self.lines)
    }

    /// Calculates the tax payable, rounded to the nearest cent.
    pub fn tax(&self) -> Money {
        pricing::tax(&self.lines, self.tax_rate)
    }

    /// Calculates the grand total (subtotal + rounded tax).
    pub fn total(&self) -> Money {
        pricing::total(&self.lines, self.tax_rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
