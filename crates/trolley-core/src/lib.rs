//! # trolley-core: Pure Business Logic for Trolley
//!
//! This crate is the **heart** of Trolley. It contains all cart and pricing
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Trolley Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    apps/checkout (CLI)                        │  │
//! │  │     add_product ──► update_quantity ──► calculate_state       │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                ★ trolley-core (THIS CRATE) ★                  │  │
//! │  │                                                               │  │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌────────────┐   │  │
//! │  │   │  types   │  │  money   │  │   cart   │  │  pricing   │   │  │
//! │  │   │ Product  │  │  Money   │  │   Cart   │  │ CartState  │   │  │
//! │  │   │ TaxRate  │  │ tax calc │  │ CartLine │  │  labels    │   │  │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └────────────┘   │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                        │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              trolley-catalog (Resolution Layer)               │  │
//! │  │         HTTP catalog client, wire records, test double        │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart state machine (lines, quantities, eviction)
//! - [`pricing`] - Subtotal/tax/total derivation and item labels
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use trolley_core::cart::{Cart, UpdateOp};
//! use trolley_core::types::{Product, TaxRate};
//!
//! let mut cart = Cart::new(TaxRate::from_bps(1250)); // 12.5%
//!
//! let cornflakes = Product::new("Corn Flakes", 299); // $2.99
//! cart.add_line("cornflakes", cornflakes, 2).unwrap();
//!
//! // Removing the full quantity evicts the line entirely
//! cart.update_quantity("cornflakes", 2, UpdateOp::Remove).unwrap();
//! assert!(cart.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use trolley_core::Money` instead of
// `use trolley_core::money::Money`

pub use cart::{Cart, CartLine, UpdateOp};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use pricing::CartState;
pub use types::{Product, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and keeps a single checkout at a reasonable size.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line in the cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
