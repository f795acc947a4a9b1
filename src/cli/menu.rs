use anyhow::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::application::InventoryLedger;
use crate::domain::{Car, CarId, Customer, CustomerId, parse_price};

const INVALID_INPUT: &str = "Invalid input. Please enter valid data types.";

/// Interactive numbered menu over an [`InventoryLedger`].
///
/// Generic over its input and output so it can be driven by a terminal or
/// by a test. The menu parses and validates everything the user types; the
/// ledger only ever sees typed values. End of input behaves like "Exit".
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(&mut self, ledger: &mut InventoryLedger) -> Result<()> {
        loop {
            self.print_options()?;
            let Some(choice) = self.prompt("Enter your choice (1-9): ")? else {
                self.farewell()?;
                return Ok(());
            };

            match choice.trim() {
                "1" => writeln!(self.output, "{}", ledger.list_cars())?,
                "2" => self.add_car(ledger)?,
                "3" => self.remove_car(ledger)?,
                "4" => writeln!(self.output, "{}", ledger.list_customers())?,
                "5" => self.add_customer(ledger)?,
                "6" => self.sell_car(ledger)?,
                "7" => writeln!(self.output, "{}", ledger.list_sales())?,
                "8" => {
                    self.farewell()?;
                    return Ok(());
                }
                "9" => {
                    writeln!(self.output, "--- Dashboard ---")?;
                    writeln!(self.output, "{}", ledger.stats())?;
                }
                _ => writeln!(
                    self.output,
                    "Invalid choice. Please enter a number between 1-9."
                )?,
            }
        }
    }

    fn print_options(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Car Showroom Management System ===")?;
        for line in [
            "1. Display Cars",
            "2. Add Car",
            "3. Remove Car",
            "4. Display Customers",
            "5. Add Customer",
            "6. Sell Car",
            "7. Display Sales",
            "8. Exit",
            "9. Dashboard",
        ] {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Thank you for using Car Showroom Management System!"
        )?;
        Ok(())
    }

    fn add_car(&mut self, ledger: &mut InventoryLedger) -> Result<()> {
        let Some(car_id) = self.ask_number::<CarId>("Enter Car ID: ")? else {
            return Ok(());
        };
        let Some(brand) = self.prompt("Enter Brand: ")? else {
            return Ok(());
        };
        let Some(model) = self.prompt("Enter Model: ")? else {
            return Ok(());
        };
        let Some(year) = self.ask_number::<u16>("Enter Year: ")? else {
            return Ok(());
        };
        let Some(price) = self.ask("Enter Price: ", |s| parse_price(s).ok())? else {
            return Ok(());
        };
        let Some(image) = self.prompt("Enter Image Path (optional): ")? else {
            return Ok(());
        };

        let (brand, model) = (brand.trim(), model.trim());
        if brand.is_empty() || model.is_empty() {
            writeln!(self.output, "Brand and Model cannot be empty!")?;
            return Ok(());
        }

        let mut car = Car::new(car_id, brand, model, year, price);
        let image = image.trim();
        if !image.is_empty() {
            car = car.with_image(image);
        }

        match ledger.add_car(car) {
            Ok(car) => writeln!(self.output, "Car '{}' added to showroom.", car)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn remove_car(&mut self, ledger: &mut InventoryLedger) -> Result<()> {
        let Some(car_id) = self.ask_number::<CarId>("Enter Car ID to remove: ")? else {
            return Ok(());
        };

        match ledger.remove_car(car_id) {
            Ok(_) => writeln!(self.output, "Car with ID {} removed from showroom.", car_id)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn add_customer(&mut self, ledger: &mut InventoryLedger) -> Result<()> {
        let Some(customer_id) = self.ask_number::<CustomerId>("Enter Customer ID: ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(());
        };
        let Some(contact) = self.prompt("Enter Contact: ")? else {
            return Ok(());
        };

        let (name, contact) = (name.trim(), contact.trim());
        if name.is_empty() || contact.is_empty() {
            writeln!(self.output, "Name and Contact cannot be empty!")?;
            return Ok(());
        }

        match ledger.add_customer(Customer::new(customer_id, name, contact)) {
            Ok(customer) => writeln!(self.output, "Customer '{}' added to records.", customer)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn sell_car(&mut self, ledger: &mut InventoryLedger) -> Result<()> {
        let Some(car_id) = self.ask_number::<CarId>("Enter Car ID to sell: ")? else {
            return Ok(());
        };
        let Some(customer_id) = self.ask_number::<CustomerId>("Enter Customer ID: ")? else {
            return Ok(());
        };

        match ledger.sell_car(car_id, customer_id) {
            Ok(sale) => writeln!(self.output, "{}", sale)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    /// Print a prompt and read one line. `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt and convert the answer. Prints the invalid-input notice and
    /// returns `None` when conversion fails, so the caller abandons the form.
    fn ask<T>(&mut self, label: &str, parse: impl FnOnce(&str) -> Option<T>) -> Result<Option<T>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        match parse(raw.trim()) {
            Some(value) => Ok(Some(value)),
            None => {
                writeln!(self.output, "{}", INVALID_INPUT)?;
                Ok(None)
            }
        }
    }

    fn ask_number<T: FromStr>(&mut self, label: &str) -> Result<Option<T>> {
        self.ask(label, |s| s.parse().ok())
    }
}
