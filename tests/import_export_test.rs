mod common;

use anyhow::Result;
use common::{camry_and_john, sample_ledger};
use showroom::application::InventoryLedger;
use showroom::domain::Car;
use showroom::io::{Exporter, import_json};
use std::fs::File;
use tempfile::TempDir;

#[test]
fn test_export_cars_csv() -> Result<()> {
    let mut ledger = sample_ledger()?;
    ledger.sell_car(2, 1)?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&ledger).export_cars_csv(&mut buffer)?;
    assert_eq!(count, 5);

    let csv = String::from_utf8(buffer)?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "car_id,brand,model,year,price_cents,status,image_path"
    );
    assert_eq!(lines[1], "1,Toyota,Camry,2022,2500000,Available,toyota_camry.jpg");
    assert_eq!(lines[2], "2,Honda,Civic,2021,2200000,Sold,honda_civic.jpg");
    assert_eq!(lines.len(), 6);

    Ok(())
}

#[test]
fn test_export_customers_and_sales_csv() -> Result<()> {
    let mut ledger = sample_ledger()?;
    ledger.sell_car(3, 2)?;

    let exporter = Exporter::new(&ledger);

    let mut customers = Vec::new();
    assert_eq!(exporter.export_customers_csv(&mut customers)?, 3);
    let customers = String::from_utf8(customers)?;
    assert!(customers.starts_with("customer_id,name,contact\n1,John Doe,john@email.com\n"));

    let mut sales = Vec::new();
    assert_eq!(exporter.export_sales_csv(&mut sales)?, 1);
    let sales = String::from_utf8(sales)?;
    let row = sales.lines().nth(1).unwrap();
    assert!(row.starts_with("1,"));
    assert!(row.contains(",3,Ford Mustang (2023),3500000,2,Jane Smith"));

    Ok(())
}

#[test]
fn test_empty_exports_have_headers_only() -> Result<()> {
    let ledger = InventoryLedger::new();

    let mut buffer = Vec::new();
    assert_eq!(Exporter::new(&ledger).export_sales_csv(&mut buffer)?, 0);
    assert_eq!(String::from_utf8(buffer)?.lines().count(), 1);

    Ok(())
}

#[test]
fn test_full_snapshot_reimport() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("showroom.json");

    let mut ledger = sample_ledger()?;
    ledger.sell_car(1, 3)?;
    ledger.sell_car(5, 1)?;

    let snapshot = Exporter::new(&ledger).export_full_json(File::create(&path)?)?;
    assert_eq!(snapshot.cars.len(), 5);
    assert_eq!(snapshot.sales.len(), 2);

    let result = import_json(File::open(&path)?)?;
    assert_eq!(result.cars, 5);
    assert_eq!(result.customers, 3);
    assert_eq!(result.sales, 2);

    let restored = result.ledger;
    assert_eq!(restored.stats(), ledger.stats());
    assert!(!restored.car(1).unwrap().is_available);
    assert!(!restored.car(5).unwrap().is_available);
    assert!(restored.car(2).unwrap().is_available);
    // Ids, timestamps and the car/customer copies come back untouched
    assert_eq!(restored.sales(), ledger.sales());

    Ok(())
}

#[test]
fn test_sale_of_removed_car_survives_import() -> Result<()> {
    let mut ledger = sample_ledger()?;
    ledger.sell_car(4, 2)?;
    ledger.sell_car(2, 1)?;
    ledger.remove_car(4)?;

    let mut buffer = Vec::new();
    Exporter::new(&ledger).export_full_json(&mut buffer)?;

    let result = import_json(buffer.as_slice())?;
    assert_eq!(result.sales, 2);

    let restored = result.ledger;
    assert!(restored.car(4).is_none());
    assert_eq!(restored.sales(), ledger.sales());
    assert_eq!(
        restored.list_sales().to_string(),
        "Sales Records:\n\
         1. 4 - BMW X5 (2022) - $55000.00 sold to 2 - Jane Smith - jane@email.com\n\
         2. 2 - Honda Civic (2021) - $22000.00 sold to 1 - John Doe - john@email.com"
    );

    Ok(())
}

#[test]
fn test_restocked_car_id_round_trip() -> Result<()> {
    let mut ledger = camry_and_john()?;
    ledger.sell_car(1, 1)?;
    ledger.remove_car(1)?;
    ledger.add_car(Car::new(1, "Toyota", "Camry", 2024, 2_800_000))?;

    let cars_before = ledger.list_cars().to_string();
    let sales_before = ledger.list_sales().to_string();
    assert!(cars_before.contains("1 - Toyota Camry (2024) - $28000.00 - Available"));
    assert!(sales_before.contains("1. 1 - Toyota Camry (2022) - $25000.00 sold to"));

    let mut buffer = Vec::new();
    Exporter::new(&ledger).export_full_json(&mut buffer)?;
    let mut restored = import_json(buffer.as_slice())?.ledger;

    assert_eq!(restored.list_cars().to_string(), cars_before);
    assert_eq!(restored.list_sales().to_string(), sales_before);

    // The restocked car is still for sale and continues the numbering
    let sale = restored.sell_car(1, 1)?;
    assert_eq!(sale.sequence, 2);
    assert_eq!(sale.car.year, 2024);

    Ok(())
}

#[test]
fn test_import_rejects_broken_sale_sequence() -> Result<()> {
    let mut ledger = sample_ledger()?;
    ledger.sell_car(1, 1)?;
    ledger.sell_car(2, 2)?;

    let mut snapshot = Exporter::new(&ledger).snapshot();
    snapshot.sales[1].sequence = 1;
    let duplicated = serde_json::to_vec(&snapshot)?;
    let err = import_json(duplicated.as_slice()).unwrap_err();
    assert!(format!("{:#}", err).contains("Sale #1 is out of sequence, expected #2."));

    snapshot.sales[1].sequence = 5;
    let gapped = serde_json::to_vec(&snapshot)?;
    assert!(import_json(gapped.as_slice()).is_err());

    Ok(())
}

#[test]
fn test_import_plain_seed() -> Result<()> {
    let json = r#"{
        "cars": [
            {"car_id": 10, "brand": "Mazda", "model": "MX-5", "year": 2020, "price": 2750000},
            {"car_id": 11, "brand": "Volvo", "model": "XC60", "year": 2022, "price": 4800000,
             "is_available": false, "image_path": "volvo.jpg"}
        ],
        "customers": [
            {"customer_id": 1, "name": "Ada", "contact": "555-0100"}
        ]
    }"#;

    let result = import_json(json.as_bytes())?;
    let ledger = result.ledger;

    assert_eq!(result.cars, 2);
    assert_eq!(result.sales, 0);
    // Availability defaults to in stock and is otherwise taken as recorded
    assert!(ledger.car(10).unwrap().is_available);
    assert!(!ledger.car(11).unwrap().is_available);
    assert_eq!(ledger.car(11).unwrap().image_path.as_deref(), Some("volvo.jpg"));
    assert_eq!(ledger.customer(1).unwrap().contact, "555-0100");

    Ok(())
}

#[test]
fn test_import_rejects_duplicate_ids() {
    let json = r#"{"customers": [
        {"customer_id": 1, "name": "Ada", "contact": "a"},
        {"customer_id": 1, "name": "Bob", "contact": "b"}
    ]}"#;

    let err = import_json(json.as_bytes()).unwrap_err();
    assert!(format!("{:#}", err).contains("Customer with ID 1 is already registered."));
}

#[test]
fn test_import_rejects_malformed_json() {
    assert!(import_json("not json".as_bytes()).is_err());
}
