use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::debug;

use crate::application::InventoryLedger;
use crate::domain::{Car, Customer, Sale};

/// Snapshot format version written by `export full`
pub const SNAPSHOT_VERSION: &str = "1";

/// Full showroom state for JSON export and re-import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub cars: Vec<Car>,
    pub customers: Vec<Customer>,
    pub sales: Vec<Sale>,
}

/// Exporter for writing ledger contents to CSV or JSON
pub struct Exporter<'a> {
    ledger: &'a InventoryLedger,
}

impl<'a> Exporter<'a> {
    pub fn new(ledger: &'a InventoryLedger) -> Self {
        Self { ledger }
    }

    /// Export the car inventory to CSV
    pub fn export_cars_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record([
            "car_id",
            "brand",
            "model",
            "year",
            "price_cents",
            "status",
            "image_path",
        ])?;

        let mut count = 0;
        for summary in self.ledger.list_cars() {
            let car = summary.car();
            csv_writer.write_record([
                car.car_id.to_string(),
                car.brand.clone(),
                car.model.clone(),
                car.year.to_string(),
                car.price.to_string(),
                car.status().to_string(),
                car.image_path.clone().unwrap_or_default(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        debug!(count, "exported cars");
        Ok(count)
    }

    /// Export registered customers to CSV
    pub fn export_customers_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["customer_id", "name", "contact"])?;

        let mut count = 0;
        for customer in self.ledger.list_customers() {
            csv_writer.write_record([
                customer.customer_id.to_string(),
                customer.name.clone(),
                customer.contact.clone(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        debug!(count, "exported customers");
        Ok(count)
    }

    /// Export the sales log to CSV, one row per sale
    pub fn export_sales_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record([
            "sequence",
            "sale_id",
            "sold_at",
            "car_id",
            "car",
            "price_cents",
            "customer_id",
            "customer",
        ])?;

        let mut count = 0;
        for summary in self.ledger.list_sales() {
            let sale = summary.sale();
            csv_writer.write_record([
                sale.sequence.to_string(),
                sale.id.to_string(),
                sale.sold_at.to_rfc3339(),
                sale.car.car_id.to_string(),
                format!("{} {} ({})", sale.car.brand, sale.car.model, sale.car.year),
                sale.car.price.to_string(),
                sale.customer.customer_id.to_string(),
                sale.customer.name.clone(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        debug!(count, "exported sales");
        Ok(count)
    }

    /// Build a snapshot of everything in the ledger
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION.to_string(),
            exported_at: Utc::now(),
            cars: self.ledger.list_cars().into_iter().map(|s| s.car().clone()).collect(),
            customers: self.ledger.list_customers().into_iter().cloned().collect(),
            sales: self.ledger.sales().to_vec(),
        }
    }

    /// Export the full ledger as pretty-printed JSON
    pub fn export_full_json<W: Write>(&self, mut writer: W) -> Result<Snapshot> {
        let snapshot = self.snapshot();
        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(snapshot)
    }
}
