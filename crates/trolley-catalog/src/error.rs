//! # Resolution Errors
//!
//! Error taxonomy for product resolution.
//!
//! The engine treats every variant uniformly as "cannot add this product
//! now" - none of them is fatal, and none of them mutates the cart. The
//! variants exist so logs can say what actually went wrong.

use thiserror::Error;

/// Product resolution failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no record for the identifier.
    #[error("Product not found in catalog: {product_id}")]
    NotFound { product_id: String },

    /// The catalog answered with a non-success status other than 404.
    #[error("Catalog returned status {status} for {product_id}")]
    UpstreamStatus { product_id: String, status: u16 },

    /// The request itself failed: connection, timeout, or undecodable body.
    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The record decoded, but its price is negative or not a finite number.
    #[error("Catalog price for {product_id} is invalid: {price}")]
    InvalidPrice { product_id: String, price: f64 },
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::NotFound {
            product_id: "unobtainium".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Product not found in catalog: unobtainium"
        );

        let err = CatalogError::UpstreamStatus {
            product_id: "cornflakes".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "Catalog returned status 503 for cornflakes");
    }
}
