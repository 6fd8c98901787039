//! # Validation Module
//!
//! Input validation for terminal operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  TerminalConfig::from_json_str                                          │
//! │  └── validate_terminal_code                                            │
//! │                                                                         │
//! │  Terminal::set_catalog                                                  │
//! │  └── validate_unique_codes (when duplicates are rejected)              │
//! │                                                                         │
//! │  Product::apply_pricing / pricing::line_total                           │
//! │  └── validate_bulk_quantity                                            │
//! │                                                                         │
//! │  Prices themselves are NOT validated: callers own their consistency.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocery_core::validation::{validate_terminal_code, validate_unique_codes};
//! use grocery_core::Product;
//!
//! validate_terminal_code("LANE-01").unwrap();
//!
//! let catalog = vec![Product::new("A"), Product::new("A")];
//! assert!(validate_unique_codes(&catalog).is_err());
//! ```

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest terminal label accepted from configuration.
pub const MAX_TERMINAL_CODE_LEN: usize = 50;

/// Validates a bulk quantity for the product with `code`.
///
/// Zero is the only invalid value: it would divide by zero during totalling.
pub fn validate_bulk_quantity(code: &str, qty: u32) -> CoreResult<()> {
    if qty == 0 {
        return Err(CoreError::InvalidBulkQuantity {
            code: code.to_string(),
            qty,
        });
    }
    Ok(())
}

/// Validates that no two products share a code.
///
/// Reports the first code seen twice, in catalog order.
pub fn validate_unique_codes(products: &[Product]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.code()) {
            return Err(ValidationError::Duplicate {
                field: "code".to_string(),
                value: product.code().to_string(),
            });
        }
    }
    Ok(())
}

/// Validates a terminal label.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 50 characters
pub fn validate_terminal_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "terminal_code".to_string(),
        });
    }

    if code.chars().count() > MAX_TERMINAL_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "terminal_code".to_string(),
            max: MAX_TERMINAL_CODE_LEN,
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
    fn test_validate_bulk_quantity() {
        assert!(validate_bulk_quantity("A", 1).is_ok());
        assert!(validate_bulk_quantity("A", 6).is_ok());
        assert!(validate_bulk_quantity("A", 0).is_err());
    }

    #[test]
    fn test_validate_unique_codes() {
        let unique = vec![Product::new("A"), Product::new("B"), Product::new("C")];
        assert!(validate_unique_codes(&unique).is_ok());
        assert!(validate_unique_codes(&[]).is_ok());
    }

    #[test]
    fn test_validate_unique_codes_reports_first_duplicate() {
        let catalog = vec![
            Product::new("A"),
            Product::new("B"),
            Product::new("B"),
            Product::new("A"),
        ];
        assert_eq!(
            validate_unique_codes(&catalog),
            Err(ValidationError::Duplicate {
                field: "code".to_string(),
                value: "B".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_terminal_code() {
        assert!(validate_terminal_code("LANE-01").is_ok());
        assert!(validate_terminal_code("   ").is_err());
        assert!(validate_terminal_code(&"T".repeat(51)).is_err());
        assert!(validate_terminal_code(&"T".repeat(50)).is_ok());
    }
}
