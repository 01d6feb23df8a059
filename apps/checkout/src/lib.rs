//! # Trolley Checkout
//!
//! Orchestration layer for the Trolley demo application.
//!
//! ## Module Organization
//! ```text
//! trolley_checkout/
//! ├── lib.rs       ◄─── You are here (module exports)
//! ├── engine.rs    ◄─── ShoppingCart: cart + catalog composition
//! ├── config.rs    ◄─── Environment-driven configuration
//! └── main.rs      ◄─── Logging init + scripted demo flow
//! ```
//!
//! The engine is the public surface callers talk to: it resolves new
//! products through the catalog, routes repeat adds to local quantity
//! updates, and reports success or failure as a boolean while logging
//! the typed error underneath.

pub mod config;
pub mod engine;

pub use config::{CheckoutConfig, ConfigError};
pub use engine::ShoppingCart;
