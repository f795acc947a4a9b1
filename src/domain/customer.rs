use std::fmt;

use serde::{Deserialize, Serialize};

pub type CustomerId = u32;

/// A registered buyer. Customers are never edited once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub name: String,
    /// Free-form contact detail (email, phone, ...)
    pub contact: String,
}

impl Customer {
    pub fn new(customer_id: CustomerId, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            customer_id,
            name: name.into(),
            contact: contact.into(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.customer_id, self.name, self.contact)
    }
}
