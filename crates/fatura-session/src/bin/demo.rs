//! # Editing Session Demo
//!
//! Drives a scripted invoice editing session against a logging
//! persistence stub. Useful for eyeballing the tracing output and the
//! request shape without a frontend.
//!
//! ## Usage
//! ```bash
//! cargo run -p fatura-session --bin demo
//!
//! # Verbose
//! RUST_LOG=debug cargo run -p fatura-session --bin demo
//! ```

use async_trait::async_trait;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fatura_core::{CatalogIndex, Customer, Product};
use fatura_session::{
    add_from_search, scan_barcode, select_customer, select_existing, submit, BoundaryError,
    EditingSession, Notification, PersistenceBoundary, SubmissionRequest,
};

/// Persistence stub: logs the request instead of storing it.
struct LoggingBoundary;

#[async_trait]
impl PersistenceBoundary for LoggingBoundary {
    async fn save_sale(&self, request: &SubmissionRequest) -> Result<(), BoundaryError> {
        let body = serde_json::to_string_pretty(request)
            .map_err(|e| BoundaryError::new(e.to_string()))?;
        info!("save_sale request:\n{}", body);
        Ok(())
    }
}

fn demo_catalog() -> CatalogIndex {
    let products = vec![
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
        Product {
            id: "p3".to_string(),
            name: "Eraser".to_string(),
            sku: "ER1".to_string(),
            barcode: None,
            price: "0.75".to_string(),
            stock: 100,
        },
    ];
    let customers = vec![Customer {
        id: "c1".to_string(),
        name: "Acme Stationery".to_string(),
    }];
    CatalogIndex::new(products, customers)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let catalog = demo_catalog();
    let session = EditingSession::new();

    // Pick a customer and resolve the opening blank row from the dropdown
    select_customer(&session, &catalog, "c1");
    select_existing(&session, &catalog, 0, "p3");
    session.with_draft_mut(|d| d.items[0].quantity = 2);

    // Search path
    for hit in catalog.search_display("note") {
        info!(name = %hit.name, sku = %hit.sku, "search hit");
    }
    let note = add_from_search(&session, catalog.find_product_by_id("p2").expect("seeded"));
    info!(?note, "search outcome");

    // Barcode path, one miss then one hit
    if let Err(e) = scan_barcode(&session, &catalog, "999") {
        let notice = Notification::from_lookup_miss(&e);
        info!(?notice, "scan miss, input retained for retry");
    }
    let scanned = scan_barcode(&session, &catalog, "123")?;
    info!(?scanned, "scan outcome");

    session.with_draft_mut(|d| d.discount = "1.50".to_string());
    let totals = session.totals();
    info!(subtotal = %totals.subtotal, grand_total = %totals.grand_total, "draft totals");

    match submit(&session, &LoggingBoundary).await {
        Ok(receipt) => {
            info!(
                transaction_id = %receipt.transaction_id,
                total = %receipt.total,
                items = receipt.item_count,
                "submitted; session reset"
            );
            Ok(())
        }
        Err(e) => {
            let notice = e.notification();
            info!(?notice, "submission outcome; draft preserved for retry");
            Err(e.into())
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fatura_session=debug,fatura_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
