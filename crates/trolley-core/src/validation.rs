//! # Validation Module
//!
//! Input validation rules for cart operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: Engine surface (apps/checkout)                            │
//! │  ├── Rejects bad input before any catalog call                      │
//! │  └── Turns rejections into boolean failures + warn! logs            │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Cart state machine (this crate)                           │
//! │  ├── Re-checks on every mutation                                    │
//! │  └── Guarantees no invalid line is ever stored                      │
//! │                                                                     │
//! │  The state machine never trusts its callers.                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use trolley_core::validation::{validate_product_id, validate_quantity};
//!
//! validate_product_id("cornflakes").unwrap();
//! validate_quantity(2).unwrap();
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};

/// Product ids longer than this are certainly malformed input.
const MAX_PRODUCT_ID_LEN: usize = 100;

// =============================================================================
// Validators
// =============================================================================

/// Validates a product identifier.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
pub fn validate_product_id(product_id: &str) -> ValidationResult<()> {
    let product_id = product_id.trim();

    if product_id.is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    if product_id.len() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "product id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a quantity or quantity delta.
///
/// Zero and negative amounts are rejected, never clamped. A caller that
/// wants to shrink a line passes a positive delta with the remove
/// operation instead.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price in cents.
pub fn validate_unit_price(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::NegativePrice { cents });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// The rate is a fraction in `[0, 1)`, so anything from 10000 bps (100%)
/// upward is rejected.
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps >= 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax rate bps".to_string(),
            min: 0,
            max: 9999,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("cornflakes").is_ok());
        assert!(validate_product_id("frosties-500g").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(0).is_ok());
        assert!(validate_unit_price(299).is_ok());
        assert!(validate_unit_price(-1).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(1250).is_ok());
        assert!(validate_tax_rate_bps(9999).is_ok());

        assert!(validate_tax_rate_bps(10000).is_err());
        assert!(validate_tax_rate_bps(20000).is_err());
    }
}
