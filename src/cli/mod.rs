use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use crate::application::InventoryLedger;
use crate::domain::Seed;
use crate::io::{Exporter, import_json};

mod menu;

pub use menu::Menu;

/// Showroom - car inventory and sales ledger
#[derive(Parser, Debug)]
#[command(name = "showroom")]
#[command(about = "Track a car showroom's stock, customers and sales")]
#[command(version)]
pub struct Cli {
    /// JSON file to start from: a seed (`cars`, `customers`) or an `export full` snapshot
    #[arg(short, long)]
    pub seed: Option<PathBuf>,

    /// Start with an empty showroom instead of the sample data
    #[arg(long, conflicts_with = "seed")]
    pub empty: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (default)
    Menu,

    /// List cars with their availability
    Cars,

    /// List registered customers
    Customers,

    /// List recorded sales
    Sales,

    /// Show dashboard statistics
    Stats,

    /// Export data to CSV or JSON
    Export {
        /// What to export: cars, customers, sales (CSV) or full (JSON)
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Build the ledger the session starts from.
    pub fn load_ledger(&self) -> Result<InventoryLedger> {
        if let Some(path) = &self.seed {
            let file = File::open(path)
                .with_context(|| format!("Failed to open seed file: {}", path.display()))?;
            let result = import_json(BufReader::new(file))
                .with_context(|| format!("Failed to load seed file: {}", path.display()))?;

            if self.verbose {
                eprintln!(
                    "Loaded {} cars, {} customers, {} sales from {}",
                    result.cars,
                    result.customers,
                    result.sales,
                    path.display()
                );
            }
            return Ok(result.ledger);
        }

        let seed = if self.empty {
            Seed::default()
        } else {
            Seed::sample()
        };
        InventoryLedger::with_seed(seed).context("Failed to seed showroom")
    }

    pub fn run(self) -> Result<()> {
        let mut ledger = self.load_ledger()?;

        match self.command.unwrap_or(Commands::Menu) {
            Commands::Menu => {
                let stdin = io::stdin();
                let mut menu = Menu::new(stdin.lock(), io::stdout());
                menu.run(&mut ledger)?;
            }
            Commands::Cars => println!("{}", ledger.list_cars()),
            Commands::Customers => println!("{}", ledger.list_customers()),
            Commands::Sales => println!("{}", ledger.list_sales()),
            Commands::Stats => println!("{}", ledger.stats()),
            Commands::Export {
                export_type,
                output,
            } => run_export_command(&ledger, &export_type, output.as_ref())?,
        }

        Ok(())
    }
}

fn run_export_command(
    ledger: &InventoryLedger,
    export_type: &str,
    output: Option<&PathBuf>,
) -> Result<()> {
    let exporter = Exporter::new(ledger);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(io::stdout()),
    };

    match export_type {
        "cars" => {
            let count = exporter.export_cars_csv(writer)?;
            if output.is_some() {
                eprintln!("Exported {} cars", count);
            }
        }
        "customers" => {
            let count = exporter.export_customers_csv(writer)?;
            if output.is_some() {
                eprintln!("Exported {} customers", count);
            }
        }
        "sales" => {
            let count = exporter.export_sales_csv(writer)?;
            if output.is_some() {
                eprintln!("Exported {} sales", count);
            }
        }
        "full" => {
            let snapshot = exporter.export_full_json(writer)?;
            if output.is_some() {
                eprintln!(
                    "Exported showroom: {} cars, {} customers, {} sales",
                    snapshot.cars.len(),
                    snapshot.customers.len(),
                    snapshot.sales.len()
                );
            }
        }
        _ => {
            anyhow::bail!(
                "Invalid export type '{}'. Valid types: cars, customers, sales, full",
                export_type
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_sample_data() {
        let cli = Cli::parse_from(["showroom"]);
        assert!(cli.command.is_none());

        let ledger = cli.load_ledger().unwrap();
        assert_eq!(ledger.stats().total_cars, 5);
        assert_eq!(ledger.stats().total_customers, 3);
    }

    #[test]
    fn test_empty_flag() {
        let cli = Cli::parse_from(["showroom", "--empty", "cars"]);
        assert!(matches!(cli.command, Some(Commands::Cars)));

        let ledger = cli.load_ledger().unwrap();
        assert!(ledger.list_cars().is_empty());
    }

    #[test]
    fn test_seed_conflicts_with_empty() {
        let result = Cli::try_parse_from(["showroom", "--empty", "--seed", "stock.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_export_type() {
        let ledger = InventoryLedger::new();
        assert!(run_export_command(&ledger, "invoices", None).is_err());
    }
}
