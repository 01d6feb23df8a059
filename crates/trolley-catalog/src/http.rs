//! # HTTP Catalog
//!
//! Reqwest-backed catalog adapter. This module owns transport details
//! only: URL construction, timeout, status mapping, and JSON decoding
//! into the wire record.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use trolley_core::Product;

use crate::client::ProductCatalog;
use crate::error::{CatalogError, CatalogResult};
use crate::record::ProductRecord;

/// User agent sent with every catalog request.
const USER_AGENT: &str = concat!("trolley-catalog/", env!("CARGO_PKG_VERSION"));

/// Catalog adapter that fetches `GET {base}/{product_id}.json`.
///
/// ## Failure Mapping
/// ```text
/// 404               → CatalogError::NotFound
/// other non-2xx     → CatalogError::UpstreamStatus
/// timeout / decode  → CatalogError::Transport
/// bad price value   → CatalogError::InvalidPrice
/// ```
///
/// No retries: a failed resolution surfaces immediately and the caller
/// decides what to do with it.
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
}

impl HttpCatalog {
    /// Builds a catalog with an explicit request timeout.
    ///
    /// ## Errors
    /// Returns an error when the underlying reqwest client cannot be
    /// constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(HttpCatalog { client, base_url })
    }

    /// The record URL for one product id.
    fn record_url(&self, product_id: &str) -> String {
        format!(
            "{}/{}.json",
            self.base_url.as_str().trim_end_matches('/'),
            product_id
        )
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalog {
    async fn resolve(&self, product_id: &str) -> CatalogResult<Product> {
        let url = self.record_url(product_id);
        debug!(%product_id, %url, "Resolving product from catalog");

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound {
                product_id: product_id.to_string(),
            }),
            status if !status.is_success() => Err(CatalogError::UpstreamStatus {
                product_id: product_id.to_string(),
                status: status.as_u16(),
            }),
            _ => {
                let record: ProductRecord = response.json().await?;
                record.into_product(product_id)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(base: &str) -> HttpCatalog {
        HttpCatalog::new(Url::parse(base).unwrap(), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_record_url() {
        let catalog = catalog("https://catalog.example.com/products");
        assert_eq!(
            catalog.record_url("cornflakes"),
            "https://catalog.example.com/products/cornflakes.json"
        );
    }

    #[test]
    fn test_record_url_with_trailing_slash() {
        let catalog = catalog("https://catalog.example.com/products/");
        assert_eq!(
            catalog.record_url("weetabix"),
            "https://catalog.example.com/products/weetabix.json"
        );
    }
}
