//! # Error Types
//!
//! Domain-specific error types for grocery-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  grocery-core errors (this file)                                       │
//! │  ├── CoreError        - Terminal operation failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → Signal (1/0) for legacy hosts     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product code, quantity)
//! 3. Errors are enum variants, never String
//! 4. Every failure a terminal can hit is a variant here, never a panic

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Terminal operation errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// No product with this code in the catalog.
    ///
    /// ## When This Occurs
    /// - Scanning a code the catalog does not know
    /// - Pricing a code that was never added to the catalog
    /// - Totalling scans after the catalog was replaced without that code
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A bulk quantity of zero would divide by zero during totalling.
    #[error("Invalid bulk quantity {qty} for product {code}: must be at least 1")]
    InvalidBulkQuantity { code: String, qty: u32 },

    /// The same code appears twice in a catalog.
    #[error("Duplicate product code in catalog: {0}")]
    DuplicateCode(String),

    /// A catalog copy did not contain the same entries as its source.
    ///
    /// ## User Workflow
    /// ```text
    /// set_catalog([A, B, C])
    ///      │
    ///      ▼
    /// copy → [A, B]     (entries lost)
    ///      │
    ///      ▼
    /// CatalogCopyMismatch { expected: 3, actual: 2 }
    ///      │
    ///      ▼
    /// Catalog reset to unset, caller retries
    /// ```
    #[error("Catalog copy mismatch: expected {expected} entries, copied {actual}")]
    CatalogCopyMismatch { expected: usize, actual: usize },

    /// Terminal configuration could not be parsed.
    #[error("Invalid terminal configuration: {0}")]
    Config(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before terminal state is touched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Duplicate value (e.g., duplicate product code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidBulkQuantity {
            code: "A".to_string(),
            qty: 0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid bulk quantity 0 for product A: must be at least 1"
        );

        let err = CoreError::CatalogCopyMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Catalog copy mismatch: expected 4 entries, copied 3"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "terminal_code".to_string(),
        };
        assert_eq!(err.to_string(), "terminal_code is required");

        let err = ValidationError::Duplicate {
            field: "code".to_string(),
            value: "A".to_string(),
        };
        assert_eq!(err.to_string(), "code 'A' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::TooLong {
            field: "terminal_code".to_string(),
            max: 50,
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
