//! # In-Memory Catalog
//!
//! A deterministic catalog double backed by a plain map.
//!
//! Used two ways:
//! - Engine and integration tests resolve against it instead of mocking
//!   HTTP transport
//! - The demo CLI falls back to a seeded instance when no catalog
//!   endpoint is configured

use std::collections::HashMap;

use async_trait::async_trait;

use trolley_core::Product;

use crate::client::ProductCatalog;
use crate::error::{CatalogError, CatalogResult};

/// Catalog resolving from an in-process map. Unknown ids report
/// [`CatalogError::NotFound`], exactly like the HTTP adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<String, Product>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion for test and demo setup.
    ///
    /// ## Example
    /// ```rust
    /// use trolley_catalog::InMemoryCatalog;
    ///
    /// let catalog = InMemoryCatalog::new()
    ///     .with_product("cornflakes", "Corn Flakes", 299)
    ///     .with_product("weetabix", "Weetabix", 349);
    /// ```
    pub fn with_product(
        mut self,
        product_id: &str,
        title: &str,
        unit_price_cents: i64,
    ) -> Self {
        self.insert(product_id, Product::new(title, unit_price_cents));
        self
    }

    /// Inserts or replaces a record.
    pub fn insert(&mut self, product_id: &str, product: Product) {
        self.products.insert(product_id.to_string(), product);
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn resolve(&self, product_id: &str) -> CatalogResult<Product> {
        self.products
            .get(product_id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                product_id: product_id.to_string(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
