//! # Error Types
//!
//! Domain-specific error types for fatura-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  fatura-core errors (this file)                                     │
//! │  ├── CoreError        - Lookup misses + wrapped validation          │
//! │  └── ValidationError  - Per-field draft violations                  │
//! │                                                                     │
//! │  fatura-session errors (separate crate)                             │
//! │  ├── SubmitError      - Submission pipeline failures                │
//! │  └── BoundaryError    - Persistence boundary failures               │
//! │                                                                     │
//! │  Nothing here is fatal: every error leaves the editing session      │
//! │  usable. Validation blocks submission; a lookup miss only signals   │
//! │  a notification; boundary failures preserve the draft for retry.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field path, barcode, id)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core invoice engine errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id not present in the current catalog snapshot.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Barcode scan matched nothing - surfaced as a notification and the
    /// draft stays untouched so the operator can retry the scan.
    #[error("No product with barcode: {0}")]
    BarcodeNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Per-field draft validation errors.
///
/// Raised at the submission boundary, surfaced field-by-field, and never
/// sent to the persistence boundary. Row fields are addressed as
/// `items[2].quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is below the allowed minimum.
    #[error("{field} must be at least {min}")]
    MustBeAtLeast { field: String, min: i64 },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

impl ValidationError {
    /// The field path this error points at, for the field-level error
    /// surface of the form.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::MustBeAtLeast { field, .. }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }
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
        let err = CoreError::BarcodeNotFound("999".to_string());
        assert_eq!(err.to_string(), "No product with barcode: 999");

        let err = ValidationError::Required {
            field: "customerName".to_string(),
        };
        assert_eq!(err.to_string(), "customerName is required");

        let err = ValidationError::MustBeAtLeast {
            field: "items[0].quantity".to_string(),
            min: 1,
        };
        assert_eq!(err.to_string(), "items[0].quantity must be at least 1");
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::MustBeAtLeast {
            field: "items[2].quantity".to_string(),
            min: 1,
        };
        assert_eq!(err.field(), "items[2].quantity");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "customerName".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
