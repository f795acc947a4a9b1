// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use showroom::application::InventoryLedger;
use showroom::domain::{Car, Customer, Seed};

/// Ledger holding the Camry and John Doe used by most scenarios
pub fn camry_and_john() -> Result<InventoryLedger> {
    let mut ledger = InventoryLedger::new();
    ledger.add_car(Car::new(1, "Toyota", "Camry", 2022, 2_500_000))?;
    ledger.add_customer(Customer::new(1, "John Doe", "john@email.com"))?;
    Ok(ledger)
}

/// Ledger seeded with the showroom's sample stock
pub fn sample_ledger() -> Result<InventoryLedger> {
    Ok(InventoryLedger::with_seed(Seed::sample())?)
}

/// Run the interactive menu over scripted input and capture what it printed
pub fn run_menu(ledger: &mut InventoryLedger, script: &str) -> Result<String> {
    let mut output = Vec::new();
    showroom::cli::Menu::new(script.as_bytes(), &mut output).run(ledger)?;
    Ok(String::from_utf8(output)?)
}
