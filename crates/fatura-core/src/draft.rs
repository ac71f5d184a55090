//! # Invoice Draft
//!
//! The in-memory invoice being edited: line items plus the aggregator
//! that keeps derived totals consistent.
//!
//! ## Recomputation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Draft Recomputation                              │
//! │                                                                     │
//! │  Operator Action            Mutation                 Derived        │
//! │  ───────────────            ────────                 ───────        │
//! │                                                                     │
//! │  Types a price ───────────► items[i].price ──┐                      │
//! │  Changes quantity ────────► items[i].quantity├─► recompute() ──►    │
//! │  Picks/scans a product ───► items.push(..)   │    every line total, │
//! │  Edits the discount ──────► discount ────────┘    subtotal,         │
//! │                                                   grand total       │
//! │                                                                     │
//! │  recompute() is pure and idempotent: run it after EVERY mutation,   │
//! │  run it twice, the answer is the same.                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `total == parse(price) × max(quantity, 0)` after every recompute pass
//! - `grand_total == max(0, subtotal − discount)`, never negative
//! - the draft always holds at least one row; removing the last row is
//!   a no-op

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Currency, PaymentType, Product};

// =============================================================================
// Line Item
// =============================================================================

/// One row of the invoice.
///
/// ## Design Notes
/// - `product_id: None` marks a row still pending product resolution.
///   An unresolved row is editable but fails validation at submit time.
/// - `price` stays the raw typed text; parsing happens at recompute time
///   and garbage counts as zero. The derived `total` is always a valid
///   Money value.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Resolved product id, or None while the row is pending resolution.
    pub product_id: Option<String>,

    /// Product name shown on the row (frozen at resolution time).
    pub product_name: String,

    /// Quantity. May transiently hold any value during typing; values
    /// below 1 are rejected at the submission boundary.
    pub quantity: i64,

    /// Unit price as typed (decimal string).
    pub price: String,

    /// Derived line total. Never independently edited.
    #[ts(as = "String")]
    pub total: Money,
}

impl LineItem {
    /// The initial empty row the form opens with.
    pub fn blank() -> Self {
        LineItem {
            product_id: None,
            product_name: String::new(),
            quantity: 1,
            price: "0".to_string(),
            total: Money::zero(),
        }
    }

    /// Creates a resolved row from a catalog product, quantity 1.
    ///
    /// The price is copied at this moment; later catalog changes do not
    /// touch rows already on the invoice.
    pub fn from_product(product: &Product) -> Self {
        let mut item = LineItem {
            product_id: Some(product.id.clone()),
            product_name: product.name.clone(),
            quantity: 1,
            price: product.price.clone(),
            total: Money::zero(),
        };
        item.recompute_total();
        item
    }

    /// Refreshes the derived line total:
    /// `total = parse_lenient(price) × max(quantity, 0)`.
    ///
    /// Never fails: unparseable price and non-positive quantity both
    /// contribute zero.
    pub fn recompute_total(&mut self) {
        self.total = Money::parse_lenient(&self.price).multiply_quantity(self.quantity);
    }

    /// Whether the row has been resolved to a concrete product.
    pub fn is_resolved(&self) -> bool {
        self.product_id.is_some() && !self.product_name.trim().is_empty()
    }
}

// =============================================================================
// Invoice Draft
// =============================================================================

/// The in-memory, not-yet-persisted invoice being edited.
///
/// Exclusively owned by the active editing session: discarded on
/// successful submission or explicit cancel, never persisted partially.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    /// Selected customer id, if one was picked from the catalog.
    pub customer_id: Option<String>,

    /// Customer display name (required at submit time).
    pub customer_name: String,

    /// Invoice-level discount as typed (decimal string, default "0").
    pub discount: String,

    pub payment_type: PaymentType,

    pub currency: Currency,

    /// Ordered line items. Always at least one row.
    pub items: Vec<LineItem>,
}

impl InvoiceDraft {
    /// A fresh draft with one blank row, as the form opens.
    pub fn new() -> Self {
        InvoiceDraft {
            customer_id: None,
            customer_name: String::new(),
            discount: "0".to_string(),
            payment_type: PaymentType::default(),
            currency: Currency::default(),
            items: vec![LineItem::blank()],
        }
    }

    /// Appends a row. Duplicate product rows are permitted and never
    /// auto-merged.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Removes a row by index.
    ///
    /// No-op when exactly one row remains (the invoice always keeps at
    /// least one row) or when the index is out of range.
    pub fn remove_item(&mut self, index: usize) {
        if self.items.len() > 1 && index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Refreshes every derived field and returns the totals.
    ///
    /// Pure and idempotent: no I/O, no side effects beyond the derived
    /// fields, and a second run on the same input yields the same output.
    pub fn recompute(&mut self) -> DraftTotals {
        for item in &mut self.items {
            item.recompute_total();
        }
        let subtotal: Money = self.items.iter().map(|i| i.total).sum();
        let discount = Money::parse_lenient(&self.discount);
        DraftTotals {
            subtotal,
            grand_total: subtotal.sub_floor_zero(discount),
        }
    }

    /// Number of rows.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Draft Totals
// =============================================================================

/// Derived totals summary, recomputed on every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DraftTotals {
    #[ts(as = "String")]
    pub subtotal: Money,
    /// `max(0, subtotal − discount)`.
    #[ts(as = "String")]
    pub grand_total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            sku: format!("SKU-{}", id),
            barcode: None,
            price: price.to_string(),
            stock: 10,
        }
    }

    #[test]
    fn test_new_draft_has_one_blank_row() {
        let draft = InvoiceDraft::new();
        assert_eq!(draft.item_count(), 1);
        assert!(!draft.items[0].is_resolved());
        assert_eq!(draft.discount, "0");
    }

    #[test]
    fn test_line_total_invariant_after_recompute() {
        let mut draft = InvoiceDraft::new();
        draft.items[0].price = "10".to_string();
        draft.items[0].quantity = 2;
        draft.add_item(LineItem {
            product_id: Some("p2".to_string()),
            product_name: "Two".to_string(),
            quantity: 1,
            price: "5".to_string(),
            total: Money::zero(),
        });

        let totals = draft.recompute();

        assert_eq!(draft.items[0].total.minor(), 2000);
        assert_eq!(draft.items[1].total.minor(), 500);
        assert_eq!(totals.subtotal.minor(), 2500);
    }

    #[test]
    fn test_discount_applies_to_grand_total() {
        // Scenario: [{10 × 2}, {5 × 1}], discount "3" → subtotal 25, grand 22
        let mut draft = InvoiceDraft::new();
        draft.items[0].price = "10".to_string();
        draft.items[0].quantity = 2;
        let mut second = LineItem::blank();
        second.price = "5".to_string();
        second.quantity = 1;
        draft.add_item(second);
        draft.discount = "3".to_string();

        let totals = draft.recompute();
        assert_eq!(totals.subtotal.to_string(), "25.00");
        assert_eq!(totals.grand_total.to_string(), "22.00");
    }

    #[test]
    fn test_grand_total_floors_at_zero() {
        let mut draft = InvoiceDraft::new();
        draft.items[0].price = "25".to_string();
        draft.items[0].quantity = 1;
        draft.discount = "100".to_string();

        let totals = draft.recompute();
        assert_eq!(totals.subtotal.minor(), 2500);
        assert_eq!(totals.grand_total, Money::zero());
    }

    #[test]
    fn test_garbage_price_and_quantity_count_as_zero() {
        let mut draft = InvoiceDraft::new();
        draft.items[0].price = "not a number".to_string();
        draft.items[0].quantity = 3;
        let mut negative_qty = LineItem::blank();
        negative_qty.price = "10".to_string();
        negative_qty.quantity = -2;
        draft.add_item(negative_qty);

        let totals = draft.recompute();
        assert_eq!(draft.items[0].total, Money::zero());
        assert_eq!(draft.items[1].total, Money::zero());
        assert_eq!(totals.grand_total, Money::zero());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut draft = InvoiceDraft::new();
        draft.items[0].price = "7.25".to_string();
        draft.items[0].quantity = 3;
        draft.discount = "1.5".to_string();

        let first = draft.recompute();
        let second = draft.recompute();
        assert_eq!(first, second);
    }

    #[test]
    fn test_remove_last_row_is_noop() {
        let mut draft = InvoiceDraft::new();
        draft.remove_item(0);
        assert_eq!(draft.item_count(), 1);

        draft.add_item(LineItem::blank());
        draft.remove_item(1);
        assert_eq!(draft.item_count(), 1);

        // Out of range index is also a no-op
        draft.remove_item(5);
        assert_eq!(draft.item_count(), 1);
    }

    #[test]
    fn test_duplicate_product_rows_are_not_merged() {
        let product = test_product("p1", "2.50");
        let mut draft = InvoiceDraft::new();
        draft.add_item(LineItem::from_product(&product));
        draft.add_item(LineItem::from_product(&product));

        // Three rows: the blank opener plus two identical product rows
        assert_eq!(draft.item_count(), 3);
        assert_eq!(draft.items[1].product_id, draft.items[2].product_id);
    }

    #[test]
    fn test_from_product_copies_price_and_sets_quantity_one() {
        let product = test_product("p1", "2.50");
        let item = LineItem::from_product(&product);

        assert_eq!(item.product_id.as_deref(), Some("p1"));
        assert_eq!(item.product_name, "Product p1");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, "2.50");
        assert_eq!(item.total.minor(), 250);
        assert!(item.is_resolved());
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = InvoiceDraft::new();
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("customerName").is_some());
        assert!(json.get("paymentType").is_some());
        assert!(json["items"][0].get("productId").is_some());
        assert_eq!(json["items"][0]["total"], "0.00");
    }
}
