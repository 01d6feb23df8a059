//! # trolley-catalog: Product Resolution for Trolley
//!
//! This crate resolves product identifiers into priced [`Product`]s.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Trolley Resolution Flow                       │
//! │                                                                     │
//! │  Engine (add_product)                                               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 trolley-catalog (THIS CRATE)                  │  │
//! │  │                                                               │  │
//! │  │   ┌──────────────┐   ┌──────────────┐   ┌─────────────────┐  │  │
//! │  │   │ProductCatalog│   │ HttpCatalog  │   │ InMemoryCatalog │  │  │
//! │  │   │   (port)     │◄──│ GET {id}.json│   │  (test double)  │  │  │
//! │  │   └──────────────┘   └──────┬───────┘   └─────────────────┘  │  │
//! │  │                            │                                  │  │
//! │  │                     ProductRecord ──► validate ──► Product    │  │
//! │  └────────────────────────────┼──────────────────────────────────┘  │
//! │                               │                                     │
//! │                               ▼                                     │
//! │                    Hosted catalog (JSON over HTTP)                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`client`] - The `ProductCatalog` port consumed by the engine
//! - [`http`] - reqwest-backed catalog over `GET {base}/{id}.json`
//! - [`record`] - Wire record DTO and boundary validation
//! - [`memory`] - Deterministic in-memory catalog for tests and demos
//! - [`error`] - Resolution error taxonomy
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trolley_catalog::{HttpCatalog, ProductCatalog};
//!
//! let catalog = HttpCatalog::new(base_url, Duration::from_secs(10))?;
//! let product = catalog.resolve("cornflakes").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod error;
pub mod http;
pub mod memory;
pub mod record;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use client::ProductCatalog;
pub use error::{CatalogError, CatalogResult};
pub use http::HttpCatalog;
pub use memory::InMemoryCatalog;
pub use record::ProductRecord;
