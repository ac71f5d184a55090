//! # Catalog Index
//!
//! In-memory product/customer lookup backing all three acquisition paths
//! (dropdown select, free-text search, barcode scan).
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Product Lookup Paths                             │
//! │                                                                     │
//! │  Dropdown pick ─────► find_product_by_id ──────► exact id match     │
//! │                                                                     │
//! │  Barcode scanner ───► find_product_by_barcode ─► exact, case-       │
//! │                                                  sensitive          │
//! │                                                                     │
//! │  Typed query ───────► search ──────────────────► substring over     │
//! │                                                  name / SKU /       │
//! │                                                  barcode            │
//! │                                                                     │
//! │  All paths read the same immutable snapshot. Refreshing the         │
//! │  catalog means building a new index and swapping it between         │
//! │  renders - the caller's job, never this type's.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{Customer, Product};
use crate::SEARCH_DISPLAY_LIMIT;

/// Read-only snapshot of the product and customer catalogs.
///
/// Holds no mutable state beyond the snapshot itself; a stale snapshot is
/// replaced by constructing a new index.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    products: Vec<Product>,
    customers: Vec<Customer>,
}

impl CatalogIndex {
    /// Builds an index over the given catalog snapshots.
    pub fn new(products: Vec<Product>, customers: Vec<Customer>) -> Self {
        CatalogIndex {
            products,
            customers,
        }
    }

    /// Exact product lookup by id.
    pub fn find_product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Exact, case-sensitive barcode lookup.
    pub fn find_product_by_barcode(&self, code: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.barcode.as_deref() == Some(code))
    }

    /// Exact customer lookup by id.
    pub fn find_customer_by_id(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Free-text product search.
    ///
    /// ## Matching Rules
    /// - name: case-insensitive substring
    /// - SKU: case-insensitive substring
    /// - barcode: substring containment (scanner fragments match)
    ///
    /// Results come back in the catalog's natural order and the predicate
    /// is unbounded; [`CatalogIndex::search_display`] applies the UI cap.
    ///
    /// An empty (or whitespace-only) query yields nothing: the search
    /// panel is hidden until the operator types something. That is policy,
    /// not an index limitation.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.sku.to_lowercase().contains(&needle)
                    || p.barcode.as_deref().is_some_and(|b| b.contains(query))
            })
            .collect()
    }

    /// [`CatalogIndex::search`] capped to the first
    /// [`SEARCH_DISPLAY_LIMIT`] hits for the dropdown panel.
    pub fn search_display(&self, query: &str) -> Vec<&Product> {
        let mut results = self.search(query);
        results.truncate(SEARCH_DISPLAY_LIMIT);
        results
    }

    /// All products in the snapshot (the trusted dropdown source).
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All customers in the snapshot.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
