//! # Validation Module
//!
//! Draft validation for the submission boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Form (external)                                           │
//! │  ├── Basic format hints while typing                                │
//! │  └── Immediate operator feedback                                    │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE, at submit time                               │
//! │  ├── customerName required                                          │
//! │  ├── at least one row                                               │
//! │  ├── per-row: product resolved, quantity ≥ 1, price ≥ 0             │
//! │  └── errors collected per field, e.g. "items[2].quantity"           │
//! │                                                                     │
//! │  During editing, ANY transient value is allowed - the draft is      │
//! │  never blocked mid-keystroke. Coercion happens only here.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::draft::{InvoiceDraft, LineItem};
use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_LINE_ITEMS, MAX_LINE_QUANTITY};

/// Result type for validation: either ok, or every violation found.
pub type DraftValidation = Result<(), Vec<ValidationError>>;

/// Validates the customer name (required, at least one character after
/// trimming).
pub fn validate_customer_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "customerName".to_string(),
        });
    }
    Ok(())
}

/// Validates one invoice row, addressing fields as `items[i].field`.
pub fn validate_line_item(index: usize, item: &LineItem) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match &item.product_id {
        Some(id) if !id.trim().is_empty() => {}
        _ => errors.push(ValidationError::Required {
            field: format!("items[{}].productId", index),
        }),
    }

    if item.product_name.trim().is_empty() {
        errors.push(ValidationError::Required {
            field: format!("items[{}].productName", index),
        });
    }

    if item.quantity < 1 {
        errors.push(ValidationError::MustBeAtLeast {
            field: format!("items[{}].quantity", index),
            min: 1,
        });
    } else if item.quantity > MAX_LINE_QUANTITY {
        errors.push(ValidationError::OutOfRange {
            field: format!("items[{}].quantity", index),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    // Lenient parsing already maps garbage to zero; the only way a price
    // fails validation is an explicitly negative value.
    if Money::parse_lenient(&item.price).is_negative() {
        errors.push(ValidationError::MustBeAtLeast {
            field: format!("items[{}].price", index),
            min: 0,
        });
    }

    errors
}

/// Validates the whole draft for submission, collecting every field-level
/// violation instead of stopping at the first.
///
/// A draft that fails here is never sent to the persistence boundary.
pub fn validate_draft(draft: &InvoiceDraft) -> DraftValidation {
    let mut errors = Vec::new();

    if let Err(e) = validate_customer_name(&draft.customer_name) {
        errors.push(e);
    }

    if Money::parse_lenient(&draft.discount).is_negative() {
        errors.push(ValidationError::MustBeAtLeast {
            field: "discount".to_string(),
            min: 0,
        });
    }

    if draft.items.is_empty() {
        errors.push(ValidationError::Required {
            field: "items".to_string(),
        });
    } else if draft.items.len() > MAX_LINE_ITEMS {
        errors.push(ValidationError::OutOfRange {
            field: "items".to_string(),
            min: 1,
            max: MAX_LINE_ITEMS as i64,
        });
    }

    for (index, item) in draft.items.iter().enumerate() {
        errors.extend(validate_line_item(index, item));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
