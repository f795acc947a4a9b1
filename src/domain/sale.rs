use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Car, Customer};

pub type SaleId = Uuid;

/// A completed sale. Sales are immutable and hold copies of the car and the
/// customer as they were at the moment of sale, so later changes to the
/// inventory (such as removing the car) never rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    /// 1-based position in the sales log
    pub sequence: u64,
    pub car: Car,
    pub customer: Customer,
    pub sold_at: DateTime<Utc>,
}

impl Sale {
    /// Create a sale from an already sold car. Sequence number must be
    /// assigned by the repository.
    pub fn new(car: &Car, customer: &Customer) -> Self {
        assert!(!car.is_available, "Sale requires a car marked as sold");
        Self {
            id: Uuid::new_v4(),
            sequence: 0,
            car: car.clone(),
            customer: customer.clone(),
            sold_at: Utc::now(),
        }
    }
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Car '{}' sold to '{}'", self.car, self.customer)
    }
}

/// One line of the sales listing.
#[derive(Debug, Clone, Copy)]
pub struct SaleSummary<'a>(pub &'a Sale);

impl<'a> SaleSummary<'a> {
    pub fn position(&self) -> u64 {
        self.0.sequence
    }

    pub fn sale(&self) -> &'a Sale {
        self.0
    }

    pub fn car(&self) -> &'a Car {
        &self.0.car
    }

    pub fn customer(&self) -> &'a Customer {
        &self.0.customer
    }
}

impl fmt::Display for SaleSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} sold to {}",
            self.position(),
            self.car(),
            self.customer()
        )
    }
}
