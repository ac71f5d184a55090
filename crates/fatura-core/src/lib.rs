//! # fatura-core: Pure Invoice Logic for Fatura POS
//!
//! This crate is the **heart** of the invoice engine. It contains all
//! line-item and totals logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Fatura POS Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │              Invoice Form (external presentation)             │ │
//! │  │   Customer picker ──► Item rows ──► Totals ──► Submit button  │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │                      fatura-session                           │ │
//! │  │   EditingSession, resolver operations, submission boundary    │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │               ★ fatura-core (THIS CRATE) ★                    │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌───────────┐          │ │
//! │  │  │  money  │ │  draft  │ │ catalog  │ │ validation│          │ │
//! │  │  │  Money  │ │ LineItem│ │  Index   │ │   rules   │          │ │
//! │  │  │  parse  │ │  Totals │ │  search  │ │  checks   │          │ │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └───────────┘          │ │
//! │  │                                                               │ │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Customer, Currency, PaymentType)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`draft`] - The invoice draft: line items and the totals aggregator
//! - [`catalog`] - Read-only product/customer lookup and search
//! - [`error`] - Domain error types
//! - [`validation`] - Submission-boundary validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: recomputation is deterministic and idempotent
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all arithmetic in minor units (i64), decimal
//!    strings only at the edges
//! 4. **Lenient at the keystroke, strict at the boundary**: typed garbage
//!    counts as zero while editing; it becomes a field error at submit

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod draft;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::CatalogIndex;
pub use draft::{DraftTotals, InvoiceDraft, LineItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Currency, Customer, PaymentType, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// How many search hits the dropdown panel shows.
///
/// The search predicate itself is unbounded; only the display is capped.
pub const SEARCH_DISPLAY_LIMIT: usize = 5;

/// Maximum rows allowed on a single invoice.
///
/// Prevents runaway drafts and keeps transactions a reasonable size.
pub const MAX_LINE_ITEMS: usize = 100;

/// Maximum quantity of a single row.
///
/// Prevents accidental over-entry (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
