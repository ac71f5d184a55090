//! # Acquisition Resolver
//!
//! The three entry points that turn an operator action into a canonical
//! invoice row, plus the customer picker. All of them funnel into the
//! same [`LineItem`] shape and every mutation is followed by a synchronous
//! recompute pass.
//!
//! ## Acquisition Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Product Acquisition Paths                        │
//! │                                                                     │
//! │  Dropdown pick ──► select_existing ──► mutates the targeted row     │
//! │                                        in place                     │
//! │                                                                     │
//! │  Search panel ───► add_from_search ──► appends a new row, qty 1     │
//! │                                                                     │
//! │  Barcode scan ───► scan_barcode ─────► appends on match,            │
//! │                                        LookupMiss otherwise         │
//! │                                                                     │
//! │  Duplicate product rows are permitted and never auto-merged.        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use fatura_core::{CatalogIndex, CoreError, CoreResult, LineItem, Product};

use crate::notify::Notification;
use crate::state::EditingSession;

/// Resolves a row against a product picked from the trusted dropdown.
///
/// On a catalog hit the targeted row takes the product's id, name, and
/// price; quantity is left untouched. An unknown id or an out-of-range
/// row index is a silent no-op - the id came from a dropdown of known
/// products, so a miss only means the snapshot changed underneath us.
pub fn select_existing(
    session: &EditingSession,
    catalog: &CatalogIndex,
    row_index: usize,
    product_id: &str,
) {
    let Some(product) = catalog.find_product_by_id(product_id) else {
        debug!(product_id = %product_id, "select_existing: unknown id, ignoring");
        return;
    };

    session.with_draft_mut(|draft| {
        if let Some(item) = draft.items.get_mut(row_index) {
            item.product_id = Some(product.id.clone());
            item.product_name = product.name.clone();
            item.price = product.price.clone();
            debug!(row = row_index, product_id = %product.id, "Row resolved from dropdown");
        } else {
            debug!(row = row_index, "select_existing: row index out of range, ignoring");
        }
        draft.recompute();
    });
}

/// Appends a row for a product picked from the search panel.
///
/// Quantity starts at 1 and the price is frozen from the product. The
/// caller clears the search query; the returned notification is the
/// product-added signal for the shell.
pub fn add_from_search(session: &EditingSession, product: &Product) -> Notification {
    session.with_draft_mut(|draft| {
        draft.add_item(LineItem::from_product(product));
        draft.recompute();
    });
    info!(product_id = %product.id, name = %product.name, "Product added from search");
    Notification::product_added(&product.name)
}

/// Appends a row for a scanned barcode.
///
/// Exact, case-sensitive match. A miss returns
/// [`CoreError::BarcodeNotFound`] and leaves the draft untouched so the
/// operator can correct and rescan; the caller keeps the typed code. On a
/// match the caller clears the input and closes the scan panel.
pub fn scan_barcode(
    session: &EditingSession,
    catalog: &CatalogIndex,
    code: &str,
) -> CoreResult<Notification> {
    let Some(product) = catalog.find_product_by_barcode(code) else {
        debug!(barcode = %code, "Barcode matched nothing");
        return Err(CoreError::BarcodeNotFound(code.to_string()));
    };

    session.with_draft_mut(|draft| {
        draft.add_item(LineItem::from_product(product));
        draft.recompute();
    });
    info!(barcode = %code, product_id = %product.id, "Product added from barcode scan");
    Ok(Notification::product_added(&product.name))
}

/// Sets the draft's customer from the catalog.
///
/// Unknown ids are ignored, same trusted-dropdown policy as
/// [`select_existing`].
pub fn select_customer(session: &EditingSession, catalog: &CatalogIndex, customer_id: &str) {
    let Some(customer) = catalog.find_customer_by_id(customer_id) else {
        debug!(customer_id = %customer_id, "select_customer: unknown id, ignoring");
        return;
    };

    session.with_draft_mut(|draft| {
        draft.customer_id = Some(customer.id.clone());
        draft.customer_name = customer.name.clone();
    });
    debug!(customer_id = %customer.id, "Customer selected");
}

// =============================================================================
// Unit Tests
// =============================================================================
