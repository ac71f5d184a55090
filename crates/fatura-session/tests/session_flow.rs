//! End-to-end editing session scenarios against an in-memory persistence
//! double: edit, resolve, recompute, submit, retry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use fatura_core::{CatalogIndex, Customer, Money, Product};
use fatura_session::{
    scan_barcode, select_customer, select_existing, submit, BoundaryError, EditingSession,
    Notification, PersistenceBoundary, Severity, SubmissionRequest, SubmitError,
};

/// In-memory persistence double. Records every accepted request and can
/// be armed to fail the next call.
#[derive(Default)]
struct InMemoryBoundary {
    saved: Mutex<Vec<SubmissionRequest>>,
    fail_next: AtomicBool,
}

impl InMemoryBoundary {
    fn arm_failure(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn saved_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }
}

#[async_trait]
impl PersistenceBoundary for InMemoryBoundary {
    async fn save_sale(&self, request: &SubmissionRequest) -> Result<(), BoundaryError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(BoundaryError::new("backend unavailable"));
        }
        self.saved.lock().unwrap().push(request.clone());
        Ok(())
    }
}

fn catalog() -> CatalogIndex {
    CatalogIndex::new(
        vec![
            Product {
                id: "p1".to_string(),
                name: "Pen".to_string(),
                sku: "PN1".to_string(),
                barcode: Some("123".to_string()),
                price: "2.50".to_string(),
                stock: 40,
            },
            Product {
                id: "p2".to_string(),
                name: "Notebook".to_string(),
                sku: "NB1".to_string(),
                barcode: Some("456".to_string()),
                price: "5.00".to_string(),
                stock: 12,
            },
        ],
        vec![Customer {
            id: "c1".to_string(),
            name: "Acme".to_string(),
        }],
    )
}

/// Builds a submittable session: customer picked, opening row resolved to
/// the Pen, one Notebook scanned in.
fn edited_session(catalog: &CatalogIndex) -> EditingSession {
    let session = EditingSession::new();
    select_customer(&session, catalog, "c1");
    select_existing(&session, catalog, 0, "p1");
    session.with_draft_mut(|d| d.items[0].quantity = 2);
    scan_barcode(&session, catalog, "456").unwrap();
    session
}

#[tokio::test]
async fn successful_submit_persists_once_and_resets_the_draft() {
    let catalog = catalog();
    let session = edited_session(&catalog);
    let boundary = InMemoryBoundary::default();

    // 2 × 2.50 + 1 × 5.00 = 10.00, discount 1.00
    session.with_draft_mut(|d| d.discount = "1".to_string());
    let totals = session.totals();
    assert_eq!(totals.subtotal.minor(), 1000);
    assert_eq!(totals.grand_total.minor(), 900);

    let receipt = submit(&session, &boundary).await.unwrap();
    assert_eq!(receipt.total, Money::from_minor(900));
    assert_eq!(receipt.item_count, 2);
    assert_eq!(boundary.saved_count(), 1);

    // Draft discarded, session is a fresh form again
    session.with_draft(|d| {
        assert_eq!(d.customer_name, "");
        assert_eq!(d.item_count(), 1);
        assert!(!d.items[0].is_resolved());
    });
    assert!(!session.is_submitting());

    let saved = boundary.saved.lock().unwrap();
    let request = &saved[0];
    assert_eq!(request.transaction.customer_id.as_deref(), Some("c1"));
    assert_eq!(request.transaction.customer_name, "Acme");
    assert_eq!(request.items[0].product_name, "Pen");
    assert_eq!(request.items[1].product_name, "Notebook");
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_boundary() {
    let catalog = catalog();
    let session = EditingSession::new();
    let boundary = InMemoryBoundary::default();

    // Customer picked but the opening row is still unresolved
    select_customer(&session, &catalog, "c1");

    let err = submit(&session, &boundary).await.unwrap_err();
    match err {
        SubmitError::Invalid(errors) => {
            assert!(errors.iter().any(|e| e.field() == "items[0].productId"));
        }
        other => panic!("expected Invalid, got {:?}", other),
    }
    assert_eq!(boundary.saved_count(), 0);
    // Session stays editable
    assert!(!session.is_submitting());
}

#[tokio::test]
async fn boundary_failure_preserves_the_draft_for_retry() {
    let catalog = catalog();
    let session = edited_session(&catalog);
    let boundary = InMemoryBoundary::default();
    boundary.arm_failure();

    let before = session.with_draft(|d| d.clone());
    let err = submit(&session, &boundary).await.unwrap_err();
    assert!(matches!(err, SubmitError::Boundary(_)));

    // The failure carries the submission-failed payload for the shell
    let notice = err.notification().unwrap();
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.description, "backend unavailable");

    // Draft fully preserved, retry succeeds
    session.with_draft(|d| {
        assert_eq!(d.customer_name, before.customer_name);
        assert_eq!(d.item_count(), before.item_count());
    });
    let receipt = submit(&session, &boundary).await.unwrap();
    assert_eq!(receipt.item_count, 2);
    assert_eq!(boundary.saved_count(), 1);
}

#[tokio::test]
async fn second_submit_is_rejected_while_one_is_in_flight() {
    let catalog = catalog();
    let session = edited_session(&catalog);
    let boundary = InMemoryBoundary::default();

    // Claim the slot as if a submission were outstanding
    assert!(session.try_begin_submit());
    let err = submit(&session, &boundary).await.unwrap_err();
    assert!(matches!(err, SubmitError::SubmissionInFlight));
    assert_eq!(boundary.saved_count(), 0);
    session.end_submit();

    // Slot released, the real submit goes through
    assert!(submit(&session, &boundary).await.is_ok());
    assert_eq!(boundary.saved_count(), 1);
}

#[tokio::test]
async fn scan_miss_then_corrected_scan() {
    let catalog = catalog();
    let session = EditingSession::new();

    let err = scan_barcode(&session, &catalog, "999").unwrap_err();
    let notice = Notification::from_lookup_miss(&err).unwrap();
    assert_eq!(notice, Notification::barcode_not_found("999"));
    session.with_draft(|d| assert_eq!(d.item_count(), 1));

    scan_barcode(&session, &catalog, "123").unwrap();
    session.with_draft(|d| {
        assert_eq!(d.item_count(), 2);
        assert_eq!(d.items[1].total, Money::from_minor(250));
    });
}
