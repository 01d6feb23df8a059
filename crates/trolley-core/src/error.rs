//! # Error Types
//!
//! Domain-specific error types for trolley-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  trolley-core errors (this file)                                    │
//! │  ├── CoreError        - Cart state machine failures                 │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  trolley-catalog errors (separate crate)                            │
//! │  └── CatalogError     - Product resolution failures                 │
//! │                                                                     │
//! │  Engine surface (apps/checkout)                                     │
//! │  └── bool             - success/failure, details go to the log      │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → warn!(..) → false              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, limits)
//! 3. Errors are enum variants, never String
//! 4. No error in this crate is fatal; the cart is always left in its
//!    prior valid state when an operation fails

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart state machine errors.
///
/// These errors represent rejected cart operations. Rejection always means
/// "no mutation happened"; partial updates are never observable.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The cart holds no line for the given product id.
    ///
    /// ## When This Occurs
    /// - `update_quantity` for a product that was never added
    /// - `update_quantity` for a product whose line was already evicted
    #[error("No cart line for product: {0}")]
    LineNotFound(String),

    /// The operation selector is not one of the recognized variants.
    ///
    /// Only `add` and `remove` exist; anything else is rejected rather
    /// than guessed at.
    #[error("Unknown cart operation: {0}")]
    UnknownOperation(String),

    /// A line quantity would exceed the per-line maximum.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// The cart has reached its maximum number of distinct lines.
    #[error("Cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before the state machine runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be a positive integer.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// A unit price below zero is never valid.
    #[error("unit price must not be negative, got {cents} cents")]
    NegativePrice { cents: i64 },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::LineNotFound("cornflakes".to_string());
        assert_eq!(err.to_string(), "No cart line for product: cornflakes");

        let err = CoreError::QuantityTooLarge {
            requested: 1000,
            max: 999,
        };
        assert_eq!(
            err.to_string(),
            "Quantity 1000 exceeds maximum allowed (999)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "product id".to_string(),
        };
        assert_eq!(err.to_string(), "product id is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
