//! Checkout configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. The tax rate and catalog endpoint are static inputs to the
//! engine: they are read once at startup and never change while the
//! process runs.

use std::env;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use trolley_core::types::TaxRate;
use trolley_core::validation;

/// Checkout configuration.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Catalog endpoint base URL. When absent, the demo runs against the
    /// built-in in-memory catalog.
    pub catalog_base_url: Option<Url>,

    /// Per-request catalog timeout in seconds.
    pub catalog_timeout_secs: u64,

    /// Tax rate in basis points (1250 = 12.5%).
    pub tax_rate_bps: u32,
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable               | Default | Meaning                        |
    /// |------------------------|---------|--------------------------------|
    /// | `CATALOG_BASE_URL`     | unset   | Catalog endpoint (HTTP)        |
    /// | `CATALOG_TIMEOUT_SECS` | `10`    | Per-request timeout            |
    /// | `TAX_RATE_BPS`         | `1250`  | Tax rate in basis points       |
    pub fn load() -> Result<Self, ConfigError> {
        let catalog_base_url = match env::var("CATALOG_BASE_URL") {
            Ok(raw) => Some(
                Url::parse(&raw)
                    .map_err(|_| ConfigError::InvalidValue("CATALOG_BASE_URL".to_string()))?,
            ),
            Err(_) => None,
        };

        let catalog_timeout_secs = env::var("CATALOG_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("CATALOG_TIMEOUT_SECS".to_string()))?;

        let tax_rate_bps: u32 = env::var("TAX_RATE_BPS")
            .unwrap_or_else(|_| "1250".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("TAX_RATE_BPS".to_string()))?;

        // The rate is a fraction below 1.0; 100% and up is a config typo
        validation::validate_tax_rate_bps(tax_rate_bps)
            .map_err(|_| ConfigError::TaxRateOutOfRange(tax_rate_bps))?;

        Ok(CheckoutConfig {
            catalog_base_url,
            catalog_timeout_secs,
            tax_rate_bps,
        })
    }

    /// The configured tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// The configured catalog timeout.
    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog_timeout_secs)
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("TAX_RATE_BPS must be below 10000, got {0}")]
    TaxRateOutOfRange(u32),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_conversion() {
        let config = CheckoutConfig {
            catalog_base_url: None,
            catalog_timeout_secs: 10,
            tax_rate_bps: 1250,
        };

        assert_eq!(config.tax_rate(), TaxRate::from_bps(1250));
        assert_eq!(config.catalog_timeout(), Duration::from_secs(10));
    }
}
