use tracing::{debug, info, warn};

use crate::domain::{
    Car, CarId, CarSummary, Customer, CustomerId, Listing, Sale, SaleSummary, Seed,
};
use crate::storage::Repository;

use super::{AppError, InventoryStats};

/// The inventory ledger: the showroom's cars, customers and sales.
/// This is the only interface front-ends (menu, CLI, ...) talk to.
///
/// The ledger never touches a terminal or a file, everything it knows is
/// handed to it by the caller as typed values.
#[derive(Debug, Default)]
pub struct InventoryLedger {
    repo: Repository,
}

impl InventoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            repo: Repository::new(),
        }
    }

    /// Create a ledger pre-loaded with the given cars and customers.
    pub fn with_seed(seed: Seed) -> Result<Self, AppError> {
        let mut ledger = Self::new();
        for car in seed.cars {
            ledger.add_car(car)?;
        }
        for customer in seed.customers {
            ledger.add_customer(customer)?;
        }
        debug!(
            cars = ledger.repo.list_cars().len(),
            customers = ledger.repo.list_customers().len(),
            "seeded ledger"
        );
        Ok(ledger)
    }

    // ========================
    // Car operations
    // ========================

    /// Put a car on the showroom floor.
    pub fn add_car(&mut self, car: Car) -> Result<&Car, AppError> {
        if self.repo.get_car(car.car_id).is_some() {
            warn!(car_id = car.car_id, "rejected duplicate car id");
            return Err(AppError::DuplicateCarId(car.car_id));
        }

        info!(car_id = car.car_id, brand = %car.brand, model = %car.model, "car added");
        Ok(self.repo.save_car(car))
    }

    /// Take a car out of the inventory. Sales already recorded for it keep
    /// their own copy of the car.
    pub fn remove_car(&mut self, car_id: CarId) -> Result<Car, AppError> {
        match self.repo.delete_car(car_id) {
            Some(car) => {
                info!(car_id, "car removed");
                Ok(car)
            }
            None => {
                warn!(car_id, "cannot remove unknown car");
                Err(AppError::CarNotFound(car_id))
            }
        }
    }

    pub fn car(&self, car_id: CarId) -> Option<&Car> {
        self.repo.get_car(car_id)
    }

    /// Cars in the order they were added, each with its availability.
    pub fn list_cars(&self) -> Listing<impl Iterator<Item = CarSummary<'_>> + Clone> {
        Listing::new(
            "Available Cars:",
            "No cars available in showroom.",
            self.repo.list_cars().iter().map(CarSummary),
        )
    }

    // ========================
    // Customer operations
    // ========================

    /// Register a customer.
    pub fn add_customer(&mut self, customer: Customer) -> Result<&Customer, AppError> {
        if self.repo.get_customer(customer.customer_id).is_some() {
            warn!(
                customer_id = customer.customer_id,
                "rejected duplicate customer id"
            );
            return Err(AppError::DuplicateCustomerId(customer.customer_id));
        }

        info!(customer_id = customer.customer_id, name = %customer.name, "customer added");
        Ok(self.repo.save_customer(customer))
    }

    pub fn customer(&self, customer_id: CustomerId) -> Option<&Customer> {
        self.repo.get_customer(customer_id)
    }

    pub fn list_customers(&self) -> Listing<impl Iterator<Item = &Customer> + Clone> {
        Listing::new(
            "Registered Customers:",
            "No customers registered.",
            self.repo.list_customers().iter(),
        )
    }

    // ========================
    // Sale operations
    // ========================

    /// Sell a car to a registered customer.
    ///
    /// The car is checked first: an unknown car yields `CarNotFound` and a
    /// sold one `AlreadySold`, whatever the customer id. Only then is the
    /// customer looked up. Nothing changes unless every check passes.
    pub fn sell_car(&mut self, car_id: CarId, customer_id: CustomerId) -> Result<&Sale, AppError> {
        let Some(car) = self.repo.get_car(car_id) else {
            warn!(car_id, customer_id, "sale rejected: unknown car");
            return Err(AppError::CarNotFound(car_id));
        };
        if !car.is_available {
            warn!(car_id, customer_id, "sale rejected: car already sold");
            return Err(AppError::AlreadySold(car_id));
        }

        let Some(customer) = self.repo.get_customer(customer_id).cloned() else {
            warn!(car_id, customer_id, "sale rejected: unknown customer");
            return Err(AppError::CustomerNotFound(customer_id));
        };

        let Some(car) = self.repo.get_car_mut(car_id) else {
            return Err(AppError::CarNotFound(car_id));
        };
        car.is_available = false;
        let sale = Sale::new(car, &customer);

        let sale = self.repo.save_sale(sale);
        info!(
            car_id,
            customer_id,
            sequence = sale.sequence,
            sale_id = %sale.id,
            "car sold"
        );
        Ok(sale)
    }

    /// Put back a sale recorded earlier (for example by a snapshot export).
    ///
    /// The sale is trusted as history: its car and customer copies, id and
    /// timestamp are kept and the current inventory is not consulted. Its
    /// sequence number must be the next one in the log.
    pub fn restore_sale(&mut self, sale: Sale) -> Result<&Sale, AppError> {
        let expected = self.repo.list_sales().len() as u64 + 1;
        if sale.sequence != expected {
            warn!(expected, found = sale.sequence, "rejected out of sequence sale");
            return Err(AppError::SaleOutOfSequence {
                expected,
                found: sale.sequence,
            });
        }

        debug!(sequence = sale.sequence, sale_id = %sale.id, "sale restored");
        Ok(self.repo.restore_sale(sale))
    }

    pub fn sales(&self) -> &[Sale] {
        self.repo.list_sales()
    }

    pub fn list_sales(&self) -> Listing<impl Iterator<Item = SaleSummary<'_>> + Clone> {
        Listing::new(
            "Sales Records:",
            "No sales recorded yet.",
            self.repo.list_sales().iter().map(SaleSummary),
        )
    }

    // ========================
    // Reporting
    // ========================

    /// Dashboard numbers for the current state of the showroom.
    pub fn stats(&self) -> InventoryStats {
        let cars = self.repo.list_cars();
        let available_cars = cars.iter().filter(|c| c.is_available).count();
        let sales = self.repo.list_sales();

        InventoryStats {
            total_cars: cars.len(),
            available_cars,
            sold_cars: cars.len() - available_cars,
            total_customers: self.repo.list_customers().len(),
            total_sales: sales.len(),
            revenue: sales.iter().map(|s| s.car.price).sum(),
        }
    }
}
