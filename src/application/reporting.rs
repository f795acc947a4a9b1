use serde::{Deserialize, Serialize};

use crate::domain::{Cents, format_price};

/// Headline numbers for the showroom dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total_cars: usize,
    pub available_cars: usize,
    pub sold_cars: usize,
    pub total_customers: usize,
    pub total_sales: usize,
    /// Sum of the prices recorded on every sale
    pub revenue: Cents,
}

impl std::fmt::Display for InventoryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total Cars:      {}", self.total_cars)?;
        writeln!(f, "  Available:     {}", self.available_cars)?;
        writeln!(f, "  Sold:          {}", self.sold_cars)?;
        writeln!(f, "Total Customers: {}", self.total_customers)?;
        writeln!(f, "Total Sales:     {}", self.total_sales)?;
        write!(f, "Revenue:         {}", format_price(self.revenue))
    }
}
