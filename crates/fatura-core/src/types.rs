//! # Domain Types
//!
//! Core domain types used throughout Fatura POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐         │
//! │  │    Product    │   │   Customer    │   │   Currency    │         │
//! │  │  ───────────  │   │  ───────────  │   │  ───────────  │         │
//! │  │  id           │   │  id           │   │  Try ("TRY")  │         │
//! │  │  sku          │   │  name         │   │  Usd ("USD")  │         │
//! │  │  barcode?     │   └───────────────┘   └───────────────┘         │
//! │  │  price (text) │                                                 │
//! │  └───────────────┘   ┌───────────────┐                             │
//! │                      │  PaymentType  │                             │
//! │                      │  Cash, Credit │                             │
//! │                      └───────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products and customers are **read-only snapshots** supplied by the
//! surrounding application (its catalog service); this crate never mutates
//! them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Currency
// =============================================================================

/// Invoice currency.
///
/// A display label only: no exchange-rate conversion happens anywhere in
/// this engine. Totals are computed in whichever currency the operator
/// picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Currency {
    #[serde(rename = "TRY")]
    Try,
    #[serde(rename = "USD")]
    Usd,
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Try
    }
}

// =============================================================================
// Payment Type
// =============================================================================

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Physical cash payment.
    Cash,
    /// Credit / card payment.
    Credit,
}

impl Default for PaymentType {
    fn default() -> Self {
        PaymentType::Cash
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale, as supplied by the catalog source.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (opaque to this engine).
    pub id: String,

    /// Display name shown to the operator and on the invoice row.
    pub name: String,

    /// Stock Keeping Unit - business identifier, searchable.
    pub sku: String,

    /// Barcode (EAN-13, UPC-A, etc.), if the product has one.
    pub barcode: Option<String>,

    /// Unit price as a decimal string, exactly as the catalog stores it.
    pub price: String,

    /// Current stock level. Informational only: this engine never
    /// deducts inventory.
    pub stock: i64,
}

impl Product {
    /// Returns the unit price as Money (lenient: a malformed catalog
    /// price is zero, never a panic).
    #[inline]
    pub fn price(&self) -> Money {
        Money::parse_lenient(&self.price)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer, as supplied by the catalog source.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_serializes_as_iso_label() {
        assert_eq!(serde_json::to_string(&Currency::Try).unwrap(), "\"TRY\"");
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
    }

    #[test]
    fn test_payment_type_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&PaymentType::Cash).unwrap(), "\"cash\"");
        assert_eq!(serde_json::to_string(&PaymentType::Credit).unwrap(), "\"credit\"");
    }

    #[test]
    fn test_product_price_accessor_is_lenient() {
        let mut product = Product {
            id: "p1".to_string(),
            name: "Pen".to_string(),
            sku: "PN1".to_string(),
            barcode: Some("123".to_string()),
            price: "2.50".to_string(),
            stock: 10,
        };
        assert_eq!(product.price().minor(), 250);

        product.price = "broken".to_string();
        assert_eq!(product.price(), Money::zero());
    }
}
