//! # Notification Events
//!
//! User-facing outcomes emitted by session operations, modeled as plain
//! return values. Rendering and localization happen outside this
//! workspace; the shell decides whether a `Notification` becomes a toast,
//! a status line, or nothing at all.

use serde::{Deserialize, Serialize};

use fatura_core::CoreError;

/// How prominent the shell should render the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

/// A user-facing outcome of a session operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    /// A product was added to the invoice (search pick or barcode scan).
    pub fn product_added(product_name: &str) -> Self {
        Notification {
            title: "Product added".to_string(),
            description: product_name.to_string(),
            severity: Severity::Success,
        }
    }

    /// A barcode scan matched nothing.
    pub fn barcode_not_found(code: &str) -> Self {
        Notification {
            title: "Product not found".to_string(),
            description: format!("No product with barcode {}", code),
            severity: Severity::Error,
        }
    }

    /// The persistence boundary rejected or failed the submission.
    pub fn submission_failed(reason: &str) -> Self {
        Notification {
            title: "Submission failed".to_string(),
            description: reason.to_string(),
            severity: Severity::Error,
        }
    }

    /// The notification for a resolver lookup miss, if the miss is one
    /// the shell should toast. Unknown dropdown ids are silent no-ops
    /// and carry nothing.
    pub fn from_lookup_miss(err: &CoreError) -> Option<Self> {
        match err {
            CoreError::BarcodeNotFound(code) => Some(Notification::barcode_not_found(code)),
            _ => None,
        }
    }
}
