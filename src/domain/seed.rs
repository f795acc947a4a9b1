use serde::{Deserialize, Serialize};

use super::{Car, Customer};

/// Records loaded into a ledger when it is constructed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub cars: Vec<Car>,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

impl Seed {
    pub fn new(cars: Vec<Car>, customers: Vec<Customer>) -> Self {
        Self { cars, customers }
    }

    /// The showroom's demo stock and customers.
    pub fn sample() -> Self {
        Self {
            cars: vec![
                Car::new(1, "Toyota", "Camry", 2022, 2_500_000).with_image("toyota_camry.jpg"),
                Car::new(2, "Honda", "Civic", 2021, 2_200_000).with_image("honda_civic.jpg"),
                Car::new(3, "Ford", "Mustang", 2023, 3_500_000).with_image("ford_mustang.jpg"),
                Car::new(4, "BMW", "X5", 2022, 5_500_000).with_image("bmw_x5.jpg"),
                Car::new(5, "Mercedes", "C-Class", 2023, 4_500_000).with_image("mercedes_c.jpg"),
            ],
            customers: vec![
                Customer::new(1, "John Doe", "john@email.com"),
                Customer::new(2, "Jane Smith", "jane@email.com"),
                Customer::new(3, "Robert Johnson", "robert@email.com"),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty() && self.customers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_unique_ids() {
        let seed = Seed::sample();

        let mut car_ids: Vec<_> = seed.cars.iter().map(|c| c.car_id).collect();
        car_ids.sort_unstable();
        car_ids.dedup();
        assert_eq!(car_ids.len(), 5);
        assert!(seed.cars.iter().all(|c| c.is_available));

        let mut customer_ids: Vec<_> = seed.customers.iter().map(|c| c.customer_id).collect();
        customer_ids.sort_unstable();
        customer_ids.dedup();
        assert_eq!(customer_ids.len(), 3);
    }

    #[test]
    fn test_seed_json_fields_are_optional() {
        let seed: Seed = serde_json::from_str(r#"{"customers": []}"#).unwrap();
        assert!(seed.is_empty());
    }
}
