use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;
use tracing::info;

use crate::application::InventoryLedger;
use crate::domain::{Car, Customer, Sale, Seed};

/// Outcome of loading a seed or snapshot file
#[derive(Debug)]
pub struct ImportResult {
    pub ledger: InventoryLedger,
    pub cars: usize,
    pub customers: usize,
    pub sales: usize,
}

/// Accepts both a plain seed (`cars`, `customers`) and a full snapshot
/// written by `export full`, whose extra fields are ignored apart from `sales`.
#[derive(Debug, Deserialize)]
struct ImportDocument {
    #[serde(default)]
    cars: Vec<Car>,
    #[serde(default)]
    customers: Vec<Customer>,
    #[serde(default)]
    sales: Vec<Sale>,
}

/// Build a ledger from JSON.
///
/// Cars keep the availability recorded in the document (available when the
/// field is absent). Recorded sales are restored as they were written, with
/// their own copies of the car and customer, id and timestamp, so history
/// survives even when the car has since been removed or its id restocked.
/// Sequence numbers must run 1, 2, 3... once sorted.
pub fn import_json<R: Read>(reader: R) -> Result<ImportResult> {
    let document: ImportDocument =
        serde_json::from_reader(reader).context("Failed to parse showroom JSON")?;

    let cars = document.cars.len();
    let customers = document.customers.len();

    let mut ledger = InventoryLedger::with_seed(Seed::new(document.cars, document.customers))
        .context("Seed contains conflicting records")?;

    let mut sales = document.sales;
    sales.sort_by_key(|s| s.sequence);
    let sale_count = sales.len();
    for sale in sales {
        ledger
            .restore_sale(sale)
            .context("Sales log is not a continuous sequence")?;
    }

    info!(cars, customers, sales = sale_count, "imported showroom data");

    Ok(ImportResult {
        ledger,
        cars,
        customers,
        sales: sale_count,
    })
}
