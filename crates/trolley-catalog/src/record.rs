//! # Wire Record
//!
//! The catalog's JSON shape, and its conversion into the core [`Product`].
//!
//! ## Wire Format
//! ```text
//! GET {base}/{product_id}.json
//!
//! {
//!   "title": "Corn Flakes",
//!   "price": 2.99
//! }
//! ```
//!
//! The upstream price is a decimal number. It crosses into the integer-cents
//! world exactly once, here, with validation: everything past this boundary
//! trusts `unit_price_cents >= 0`.

use serde::Deserialize;

use trolley_core::Product;

use crate::error::{CatalogError, CatalogResult};

/// One catalog record as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    /// Display name of the product.
    pub title: String,

    /// Unit price in major units, e.g. `2.99`.
    pub price: f64,
}

impl ProductRecord {
    /// Validates the record and converts it into a core [`Product`].
    ///
    /// ## Rules
    /// - The price must be a finite, non-negative number
    /// - It is rounded to the nearest whole cent
    pub fn into_product(self, product_id: &str) -> CatalogResult<Product> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CatalogError::InvalidPrice {
                product_id: product_id.to_string(),
                price: self.price,
            });
        }

        let unit_price_cents = (self.price * 100.0).round() as i64;
        Ok(Product::new(self.title, unit_price_cents))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, price: f64) -> ProductRecord {
        ProductRecord {
            title: title.to_string(),
            price,
        }
    }

    #[test]
    fn test_price_converts_to_cents() {
        let product = record("Corn Flakes", 2.99).into_product("cornflakes").unwrap();
        assert_eq!(product.title, "Corn Flakes");
        assert_eq!(product.unit_price_cents, 299);
    }

    #[test]
    fn test_price_rounds_to_nearest_cent() {
        let product = record("Milk", 2.996).into_product("milk").unwrap();
        assert_eq!(product.unit_price_cents, 300);

        let product = record("Milk", 2.994).into_product("milk").unwrap();
        assert_eq!(product.unit_price_cents, 299);
    }

    #[test]
    fn test_free_product_is_valid() {
        let product = record("Sample", 0.0).into_product("sample").unwrap();
        assert_eq!(product.unit_price_cents, 0);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let err = record("Broken", -0.01).into_product("broken");
        assert!(matches!(err, Err(CatalogError::InvalidPrice { .. })));
    }

    #[test]
    fn test_non_finite_price_is_rejected() {
        assert!(record("Broken", f64::NAN).into_product("broken").is_err());
        assert!(record("Broken", f64::INFINITY)
            .into_product("broken")
            .is_err());
    }

    #[test]
    fn test_decodes_wire_json() {
        let record: ProductRecord =
            serde_json::from_str(r#"{"title": "Weetabix", "price": 3.49}"#).unwrap();
        let product = record.into_product("weetabix").unwrap();
        assert_eq!(product.unit_price_cents, 349);
    }
}
