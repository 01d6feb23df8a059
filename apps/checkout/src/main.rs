//! # Checkout Demo Entry Point
//!
//! Scripted shopping flow against a configured (or built-in) catalog.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging), `RUST_LOG` overrides the default
//! 2. Load configuration from the environment
//! 3. Build the catalog (HTTP when `CATALOG_BASE_URL` is set, otherwise
//!    the seeded in-memory demo catalog)
//! 4. Run the scripted flow and print the receipt-style summary

use tracing::info;
use tracing_subscriber::EnvFilter;

use trolley_catalog::{HttpCatalog, InMemoryCatalog, ProductCatalog};
use trolley_checkout::config::CheckoutConfig;
use trolley_checkout::engine::ShoppingCart;
use trolley_core::cart::UpdateOp;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = CheckoutConfig::load()?;
    info!(
        tax_rate_bps = config.tax_rate_bps,
        timeout_secs = config.catalog_timeout_secs,
        "Configuration loaded"
    );

    let catalog: Box<dyn ProductCatalog> = match &config.catalog_base_url {
        Some(base_url) => {
            info!(%base_url, "Using HTTP catalog");
            Box::new(HttpCatalog::new(base_url.clone(), config.catalog_timeout())?)
        }
        None => {
            info!("CATALOG_BASE_URL not set, using the built-in demo catalog");
            Box::new(demo_catalog())
        }
    };

    let mut cart = ShoppingCart::new(catalog, config.tax_rate());

    // Start adding products
    cart.add_product("cornflakes", 1).await;
    cart.add_product("cornflakes", 1).await;
    cart.add_product("weetabix", 1).await;

    // A round trip that nets out to the original quantities
    cart.update_quantity("cornflakes", 3, UpdateOp::Add);
    cart.update_quantity("cornflakes", 3, UpdateOp::Remove);

    let state = cart.calculate_state();

    for label in &state.items {
        println!("{label}");
    }
    println!("Cart subtotal: {}", state.subtotal);
    println!("Tax payable:   {}", state.tax);
    println!("Total payable: {}", state.total);

    Ok(())
}

/// Seeded catalog used when no endpoint is configured.
fn demo_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_product("cornflakes", "Corn Flakes", 299)
        .with_product("weetabix", "Weetabix", 349)
        .with_product("cheerios", "Cheerios", 843)
        .with_product("frosties", "Frosties", 499)
        .with_product("shreddies", "Shreddies", 468)
}
