//! # Editing Session State
//!
//! Manages the draft invoice owned by the active editing session.
//!
//! ## Thread Safety
//! The draft is wrapped in `Arc<Mutex<T>>` because:
//! 1. The UI shell and async submit task may both touch the session
//! 2. Only one operation should modify the draft at a time
//!
//! All mutations are driven by discrete operator events (keystroke,
//! selection, click); recomputation is synchronous pure arithmetic and
//! completes before the next render. The lone suspending operation is
//! submission, and the `submitting` flag keeps it at-most-one in flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use fatura_core::{DraftTotals, InvoiceDraft};

/// The editing session that exclusively owns one draft invoice.
///
/// Cloning the session is cheap and shares the same draft (Arc).
#[derive(Debug, Clone)]
pub struct EditingSession {
    draft: Arc<Mutex<InvoiceDraft>>,
    submitting: Arc<AtomicBool>,
}

impl EditingSession {
    /// Opens a session with a fresh draft (one blank row).
    pub fn new() -> Self {
        EditingSession {
            draft: Arc::new(Mutex::new(InvoiceDraft::new())),
            submitting: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Executes a function with read access to the draft.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = session.with_draft(|d| d.item_count());
    /// ```
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InvoiceDraft) -> R,
    {
        let draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&draft)
    }

    /// Executes a function with write access to the draft.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_draft_mut(|d| d.remove_item(index));
    /// ```
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InvoiceDraft) -> R,
    {
        let mut draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&mut draft)
    }

    /// Recomputes every derived field and returns current totals.
    pub fn totals(&self) -> DraftTotals {
        self.with_draft_mut(|d| d.recompute())
    }

    /// Discards the draft and starts over (explicit cancel, or the reset
    /// after a successful submission). Partial drafts are never kept.
    pub fn reset(&self) {
        self.with_draft_mut(|d| *d = InvoiceDraft::new());
    }

    /// Tries to claim the in-flight submission slot.
    ///
    /// Returns false when a submission is already outstanding; the submit
    /// control stays disabled until [`EditingSession::end_submit`].
    pub fn try_begin_submit(&self) -> bool {
        self.submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Releases the in-flight submission slot.
    pub fn end_submit(&self) {
        self.submitting.store(false, Ordering::Release);
    }

    /// Whether a submission is currently outstanding.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }
}

impl Default for EditingSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_opens_with_one_blank_row() {
        let session = EditingSession::new();
        assert_eq!(session.with_draft(|d| d.item_count()), 1);
        assert_eq!(session.totals().grand_total.minor(), 0);
    }

    #[test]
    fn test_reset_discards_edits() {
        let session = EditingSession::new();
        session.with_draft_mut(|d| {
            d.customer_name = "Acme".to_string();
            d.items[0].price = "10".to_string();
        });
        session.reset();
        assert_eq!(session.with_draft(|d| d.customer_name.clone()), "");
        assert_eq!(session.with_draft(|d| d.items[0].price.clone()), "0");
    }

    #[test]
    fn test_submit_slot_is_exclusive() {
        let session = EditingSession::new();
        assert!(session.try_begin_submit());
        assert!(session.is_submitting());
        assert!(!session.try_begin_submit());

        session.end_submit();
        assert!(!session.is_submitting());
        assert!(session.try_begin_submit());
    }

    #[test]
    fn test_clones_share_the_same_draft() {
        let session = EditingSession::new();
        let clone = session.clone();
        clone.with_draft_mut(|d| d.customer_name = "Acme".to_string());
        assert_eq!(session.with_draft(|d| d.customer_name.clone()), "Acme");
    }
}
