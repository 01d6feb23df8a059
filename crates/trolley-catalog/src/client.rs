//! # Catalog Port
//!
//! The trait seam between the cart engine and whatever supplies product
//! data. The engine only ever sees this trait; transport lives behind it.

use async_trait::async_trait;

use trolley_core::Product;

use crate::error::CatalogResult;

/// Resolves a product identifier into a priced product.
///
/// ## Contract
/// - Success returns a [`Product`] with a validated non-negative price
/// - Failure (unknown id, transport error, timeout, bad record) returns a
///   [`crate::CatalogError`]; callers treat all variants as "cannot add
///   this product now"
/// - Implementations own their retry policy; callers never retry
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Resolves one product identifier.
    async fn resolve(&self, product_id: &str) -> CatalogResult<Product>;
}
