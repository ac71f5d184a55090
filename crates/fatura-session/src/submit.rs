//! # Submission Assembler
//!
//! Validates and serializes the draft into the transaction+items shape
//! the external persistence API consumes.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Submission Pipeline                            │
//! │                                                                     │
//! │  submit()                                                           │
//! │     │                                                               │
//! │     ├── in-flight slot taken? ──► SubmitError::SubmissionInFlight   │
//! │     │                                                               │
//! │     ▼                                                               │
//! │  validate_draft ──► field errors? ──► SubmitError::Invalid          │
//! │     │               (boundary never called)                         │
//! │     ▼                                                               │
//! │  assemble: recompute totals FROM RAW FIELDS                         │
//! │     │      (cached line totals are never trusted)                   │
//! │     ▼                                                               │
//! │  boundary.save_sale(request)  ── one atomic request ──┐             │
//! │     │                                                 │             │
//! │     ├── Ok  ──► draft reset, receipt returned         │             │
//! │     └── Err ──► draft PRESERVED unchanged for retry ◄─┘             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use fatura_core::validation::validate_draft;
use fatura_core::{Currency, InvoiceDraft, Money, PaymentType, ValidationError};

use crate::notify::Notification;
use crate::state::EditingSession;

// =============================================================================
// Boundary Records
// =============================================================================

/// Transaction lifecycle status. This engine only ever submits completed
/// sales; drafts live in memory and are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
}

/// Transaction kind. Returns/refunds are out of scope, so sale is the
/// only variant submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Sale,
}

/// The transaction header handed to the persistence boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Transaction id (UUID v4), generated at assembly time.
    pub id: String,
    pub customer_id: Option<String>,
    pub customer_name: String,
    /// Grand total, recomputed independently of cached draft fields.
    pub total: Money,
    pub discount: Money,
    /// Hard-coded zero: tax computation is out of scope.
    pub tax: Money,
    pub payment_type: PaymentType,
    pub currency: Currency,
    pub status: TransactionStatus,
    pub transaction_type: TransactionType,
    pub created_at: DateTime<Utc>,
}

/// One persisted invoice row, parallel to the transaction header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionItemRecord {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub price: Money,
    pub total: Money,
}

/// The single atomic request the persistence boundary accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub transaction: TransactionRecord,
    pub items: Vec<TransactionItemRecord>,
}

/// What the caller gets back after a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReceipt {
    pub transaction_id: String,
    pub total: Money,
    pub item_count: usize,
}

// =============================================================================
// Persistence Boundary
// =============================================================================

/// Failure reported by the persistence boundary. Never fatal: the draft
/// survives and the operator retries.
#[derive(Debug, Clone, Error)]
#[error("persistence boundary failure: {message}")]
pub struct BoundaryError {
    pub message: String,
}

impl BoundaryError {
    pub fn new(message: impl Into<String>) -> Self {
        BoundaryError {
            message: message.into(),
        }
    }
}

/// The external persistence API this engine hands completed invoices to.
///
/// Implementations own transport, storage, and downstream cache
/// invalidation (transaction list, dashboard metrics); this crate only
/// guarantees the request is internally consistent and sent at most once
/// at a time.
#[async_trait]
pub trait PersistenceBoundary: Send + Sync {
    /// Persists the transaction and its items as one atomic request.
    async fn save_sale(&self, request: &SubmissionRequest) -> Result<(), BoundaryError>;
}

// =============================================================================
// Submit Error
// =============================================================================

/// Failures of the submission pipeline.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Field-level validation failed; nothing was sent to the boundary.
    #[error("draft failed validation ({} field error(s))", .0.len())]
    Invalid(Vec<ValidationError>),

    /// A submission is already outstanding for this draft.
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// The persistence boundary failed; the draft is preserved for retry.
    #[error(transparent)]
    Boundary(#[from] BoundaryError),
}

impl SubmitError {
    /// The user-facing notification carried by this failure, if any.
    ///
    /// Boundary failures toast as submission-failed. Validation errors
    /// surface per field instead, and an in-flight rejection only means
    /// the submit control should already be disabled - neither carries a
    /// notification.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            SubmitError::Boundary(e) => Some(Notification::submission_failed(&e.message)),
            SubmitError::Invalid(_) | SubmitError::SubmissionInFlight => None,
        }
    }
}

// =============================================================================
// Assembly
// =============================================================================

/// Validates the draft and builds the boundary request.
///
/// Totals are recomputed here from the raw price/quantity fields - the
/// cached `total` values on the draft are display state and are not
/// trusted (defense against a stale recompute pass).
pub fn assemble(draft: &InvoiceDraft) -> Result<SubmissionRequest, Vec<ValidationError>> {
    validate_draft(draft)?;

    let items: Vec<TransactionItemRecord> = draft
        .items
        .iter()
        .map(|item| {
            let price = Money::parse_lenient(&item.price);
            TransactionItemRecord {
                // Validation guarantees the id is present
                product_id: item.product_id.clone().unwrap_or_default(),
                product_name: item.product_name.clone(),
                quantity: item.quantity,
                price,
                total: price.multiply_quantity(item.quantity),
            }
        })
        .collect();

    let items_total: Money = items.iter().map(|i| i.total).sum();
    let discount = Money::parse_lenient(&draft.discount);

    Ok(SubmissionRequest {
        transaction: TransactionRecord {
            id: Uuid::new_v4().to_string(),
            customer_id: draft.customer_id.clone(),
            customer_name: draft.customer_name.clone(),
            total: items_total.sub_floor_zero(discount),
            discount,
            tax: Money::zero(),
            payment_type: draft.payment_type,
            currency: draft.currency,
            status: TransactionStatus::Completed,
            transaction_type: TransactionType::Sale,
            created_at: Utc::now(),
        },
        items,
    })
}

// =============================================================================
// Submit
// =============================================================================

/// Submits the session's draft to the persistence boundary.
///
/// At-most-one submission is in flight per draft; a second call while one
/// is outstanding returns [`SubmitError::SubmissionInFlight`] without
/// touching anything. On success the draft resets to a fresh empty draft
/// and the session closes the form. On any failure the draft is preserved
/// unchanged so the operator can retry.
pub async fn submit(
    session: &EditingSession,
    boundary: &dyn PersistenceBoundary,
) -> Result<SubmitReceipt, SubmitError> {
    if !session.try_begin_submit() {
        warn!("Rejected concurrent submission attempt");
        return Err(SubmitError::SubmissionInFlight);
    }

    let result = submit_locked(session, boundary).await;
    session.end_submit();
    result
}

async fn submit_locked(
    session: &EditingSession,
    boundary: &dyn PersistenceBoundary,
) -> Result<SubmitReceipt, SubmitError> {
    let draft = session.with_draft(|d| d.clone());

    let request = assemble(&draft).map_err(SubmitError::Invalid)?;
    let receipt = SubmitReceipt {
        transaction_id: request.transaction.id.clone(),
        total: request.transaction.total,
        item_count: request.items.len(),
    };

    match boundary.save_sale(&request).await {
        Ok(()) => {
            session.reset();
            info!(
                transaction_id = %receipt.transaction_id,
                total = %receipt.total,
                items = receipt.item_count,
                "Invoice submitted"
            );
            Ok(receipt)
        }
        Err(e) => {
            warn!(error = %e, "Submission failed, draft preserved for retry");
            Err(SubmitError::Boundary(e))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
