//! # Shopping Cart Engine
//!
//! Composes the pure cart state machine with a product catalog.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      add_product(id, qty)                           │
//! │                                                                     │
//! │  validate id + qty ── bad ──────────────────────────► false         │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  line exists? ── yes ──► update_quantity(id, qty, Add)              │
//! │        │                 (local, no catalog call)                   │
//! │        ▼ no                                                         │
//! │  catalog.resolve(id) ── Err ──► warn! ──────────────► false         │
//! │        │                        (cart unchanged)                    │
//! │        ▼ Ok(product)                                                │
//! │  cart.add_line(id, product, qty) ───────────────────► true          │
//! │                                                                     │
//! │  Only this resolution step suspends; every other engine             │
//! │  operation is synchronous local state mutation.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Surface
//! The engine reports success/failure as a boolean and logs the typed
//! error. No failure here is fatal, and a failed call never leaves a
//! partially mutated cart behind.

use tracing::{debug, warn};

use trolley_catalog::ProductCatalog;
use trolley_core::cart::{Cart, UpdateOp, UpdateOutcome};
use trolley_core::pricing::CartState;
use trolley_core::types::TaxRate;
use trolley_core::validation;

/// The caller-facing cart engine.
///
/// Owns one [`Cart`] exclusively; mutation takes `&mut self`, so one
/// logical owner at a time is enforced by the borrow checker. Concurrent
/// `add_product` calls for the same unresolved id are a caller concern -
/// the engine does not deduplicate in-flight resolutions.
pub struct ShoppingCart {
    cart: Cart,
    catalog: Box<dyn ProductCatalog>,
}

impl ShoppingCart {
    /// Creates an engine over the given catalog with a fixed tax rate.
    pub fn new(catalog: Box<dyn ProductCatalog>, tax_rate: TaxRate) -> Self {
        ShoppingCart {
            cart: Cart::new(tax_rate),
            catalog,
        }
    }

    /// Adds a product to the cart, resolving it through the catalog if
    /// it is not already there.
    ///
    /// ## Behavior
    /// - Repeat adds route to the local update path without touching the
    ///   catalog
    /// - Resolution failure leaves the cart unchanged and returns `false`
    pub async fn add_product(&mut self, product_id: &str, quantity: i64) -> bool {
        if let Err(err) = validation::validate_product_id(product_id)
            .and_then(|()| validation::validate_quantity(quantity))
        {
            warn!(%product_id, quantity, error = %err, "Rejected add_product input");
            return false;
        }

        if self.cart.contains(product_id) {
            return self.update_quantity(product_id, quantity, UpdateOp::Add);
        }

        match self.catalog.resolve(product_id).await {
            Ok(product) => match self.cart.add_line(product_id, product, quantity) {
                Ok(()) => {
                    debug!(%product_id, quantity, "Added product to cart");
                    true
                }
                Err(err) => {
                    warn!(%product_id, quantity, error = %err, "Rejected cart line");
                    false
                }
            },
            Err(err) => {
                warn!(%product_id, error = %err, "Could not resolve product");
                false
            }
        }
    }

    /// Adjusts the quantity of an existing line. Purely local; never
    /// suspends.
    pub fn update_quantity(&mut self, product_id: &str, delta: i64, op: UpdateOp) -> bool {
        match self.cart.update_quantity(product_id, delta, op) {
            Ok(UpdateOutcome::Adjusted(quantity)) => {
                debug!(%product_id, quantity, %op, "Adjusted line quantity");
                true
            }
            Ok(UpdateOutcome::Evicted) => {
                debug!(%product_id, %op, "Line evicted from cart");
                true
            }
            Err(err) => {
                warn!(%product_id, delta, %op, error = %err, "Rejected quantity update");
                false
            }
        }
    }

    /// Checks whether the cart holds a line for the product.
    pub fn contains_product(&self, product_id: &str) -> bool {
        self.cart.contains(product_id)
    }

    /// Empties the cart. Idempotent.
    pub fn clear_products(&mut self) {
        self.cart.clear();
        debug!("Cart cleared");
    }

    /// Captures a consistent snapshot of item labels and totals.
    pub fn calculate_state(&self) -> CartState {
        CartState::from(&self.cart)
    }

    /// Read access to the underlying cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use trolley_catalog::{CatalogResult, InMemoryCatalog};
    use trolley_core::Money;
    use trolley_core::types::Product;

    use super::*;

    fn demo_catalog() -> InMemoryCatalog {
        InMemoryCatalog::new()
            .with_product("cornflakes", "Corn Flakes", 299)
            .with_product("weetabix", "Weetabix", 349)
    }

    fn engine() -> ShoppingCart {
        ShoppingCart::new(Box::new(demo_catalog()), TaxRate::from_bps(1250))
    }

    /// Counts resolutions so tests can assert the engine's routing.
    struct CountingCatalog {
        inner: InMemoryCatalog,
        resolutions: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ProductCatalog for CountingCatalog {
        async fn resolve(&self, product_id: &str) -> CatalogResult<Product> {
            self.resolutions.fetch_add(1, Ordering::SeqCst);
            self.inner.resolve(product_id).await
        }
    }

    #[tokio::test]
    async fn test_add_product_resolves_and_stores_line() {
        let mut engine = engine();

        assert!(engine.add_product("cornflakes", 2).await);
        assert!(engine.contains_product("cornflakes"));
        assert_eq!(engine.cart().total_quantity(), 2);
    }

    #[tokio::test]
    async fn test_add_unknown_product_fails_without_mutation() {
        let mut engine = engine();

        assert!(!engine.add_product("unobtainium", 1).await);
        assert!(!engine.contains_product("unobtainium"));
        assert!(engine.cart().is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_non_positive_quantity() {
        let mut engine = engine();

        assert!(!engine.add_product("cornflakes", 0).await);
        assert!(!engine.add_product("cornflakes", -1).await);
        assert!(!engine.add_product("", 1).await);
        assert!(engine.cart().is_empty());
    }

    #[tokio::test]
    async fn test_repeat_add_routes_to_update_without_resolving() {
        let resolutions = Arc::new(AtomicUsize::new(0));
        let catalog = CountingCatalog {
            inner: demo_catalog(),
            resolutions: resolutions.clone(),
        };
        let mut engine = ShoppingCart::new(Box::new(catalog), TaxRate::from_bps(1250));

        assert!(engine.add_product("cornflakes", 1).await);
        assert!(engine.add_product("cornflakes", 1).await);

        // Second add merged locally; the catalog was hit exactly once
        assert_eq!(resolutions.load(Ordering::SeqCst), 1);
        assert_eq!(engine.cart().lines()[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_worked_example_totals() {
        let mut engine = engine();

        engine.add_product("cornflakes", 1).await;
        engine.add_product("cornflakes", 1).await;
        engine.add_product("weetabix", 1).await;

        engine.update_quantity("cornflakes", 3, UpdateOp::Add);
        engine.update_quantity("cornflakes", 3, UpdateOp::Remove);

        let state = engine.calculate_state();
        assert_eq!(
            state.items,
            vec![
                "Cart contains 2 x Corn Flakes".to_string(),
                "Cart contains 1 x Weetabix".to_string(),
            ]
        );
        assert_eq!(state.subtotal, Money::from_cents(947));
        assert_eq!(state.tax, Money::from_cents(118));
        assert_eq!(state.total, Money::from_cents(1065));
    }

    #[tokio::test]
    async fn test_update_quantity_unknown_product_fails() {
        let mut engine = engine();

        assert!(!engine.update_quantity("unknown", 1, UpdateOp::Add));
        assert!(engine.cart().is_empty());
    }

    #[tokio::test]
    async fn test_remove_to_zero_evicts() {
        let mut engine = engine();
        engine.add_product("cornflakes", 2).await;

        assert!(engine.update_quantity("cornflakes", 2, UpdateOp::Remove));
        assert!(!engine.contains_product("cornflakes"));
    }

    #[tokio::test]
    async fn test_clear_products_is_idempotent() {
        let mut engine = engine();
        engine.add_product("cornflakes", 2).await;

        engine.clear_products();
        engine.clear_products();

        let state = engine.calculate_state();
        assert!(state.items.is_empty());
        assert!(state.subtotal.is_zero());
        assert!(state.tax.is_zero());
        assert!(state.total.is_zero());
    }
}
