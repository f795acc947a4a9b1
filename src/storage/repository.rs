use crate::domain::{Car, CarId, Customer, CustomerId, Sale};

/// In-memory store for cars, customers and sales.
///
/// Records are kept in insertion order and looked up with a linear scan;
/// the first match wins. The repository enforces nothing beyond that, the
/// rules about who may buy what live in the application layer.
#[derive(Debug, Default)]
pub struct Repository {
    cars: Vec<Car>,
    customers: Vec<Customer>,
    sales: Vec<Sale>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Car operations
    // ========================

    pub fn save_car(&mut self, car: Car) -> &Car {
        self.cars.push(car);
        &self.cars[self.cars.len() - 1]
    }

    pub fn get_car(&self, car_id: CarId) -> Option<&Car> {
        self.cars.iter().find(|c| c.car_id == car_id)
    }

    pub fn get_car_mut(&mut self, car_id: CarId) -> Option<&mut Car> {
        self.cars.iter_mut().find(|c| c.car_id == car_id)
    }

    /// Remove the first car with the given id, returning it.
    pub fn delete_car(&mut self, car_id: CarId) -> Option<Car> {
        let index = self.cars.iter().position(|c| c.car_id == car_id)?;
        Some(self.cars.remove(index))
    }

    pub fn list_cars(&self) -> &[Car] {
        &self.cars
    }

    // ========================
    // Customer operations
    // ========================

    pub fn save_customer(&mut self, customer: Customer) -> &Customer {
        self.customers.push(customer);
        &self.customers[self.customers.len() - 1]
    }

    pub fn get_customer(&self, customer_id: CustomerId) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|c| c.customer_id == customer_id)
    }

    pub fn list_customers(&self) -> &[Customer] {
        &self.customers
    }

    // ========================
    // Sale operations
    // ========================

    /// Append a sale to the log, assigning its 1-based sequence number.
    pub fn save_sale(&mut self, mut sale: Sale) -> &Sale {
        sale.sequence = self.sales.len() as u64 + 1;
        self.sales.push(sale);
        &self.sales[self.sales.len() - 1]
    }

    /// Append a previously recorded sale as is, keeping its sequence number.
    pub fn restore_sale(&mut self, sale: Sale) -> &Sale {
        self.sales.push(sale);
        &self.sales[self.sales.len() - 1]
    }

    pub fn list_sales(&self) -> &[Sale] {
        &self.sales
    }
}
