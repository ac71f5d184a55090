//! # fatura-session: The Invoice Editing Session
//!
//! Orchestration layer over [`fatura_core`]: owns the draft being edited,
//! exposes the three product-acquisition operations, and drives the
//! submission pipeline against an external persistence boundary.
//!
//! ## Event Model
//! Single editing session, cooperative and event-driven. Every mutation
//! happens on a discrete operator event and is followed by a synchronous
//! recompute; the only suspending operation is [`submit`], and at most one
//! submission is in flight per draft.
//!
//! ## Modules
//!
//! - [`state`] - `EditingSession`: the `Arc<Mutex<InvoiceDraft>>` owner
//! - [`resolver`] - select/search/scan operations producing line items
//! - [`submit`] - validation, assembly, and the persistence boundary
//! - [`notify`] - notification events returned to the shell

pub mod notify;
pub mod resolver;
pub mod state;
pub mod submit;

pub use notify::{Notification, Severity};
pub use resolver::{add_from_search, scan_barcode, select_customer, select_existing};
pub use state::EditingSession;
pub use submit::{
    assemble, submit, BoundaryError, PersistenceBoundary, SubmissionRequest, SubmitError,
    SubmitReceipt, TransactionItemRecord, TransactionRecord, TransactionStatus, TransactionType,
};
