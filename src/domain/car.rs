use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Cents, format_price};

pub type CarId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub car_id: CarId,
    pub brand: String,
    pub model: String,
    pub year: u16,
    /// Asking price in cents
    pub price: Cents,
    /// Flipped to false exactly once, when the car is sold
    #[serde(default = "in_stock")]
    pub is_available: bool,
    /// Picture file name, only meaningful to front-ends that show images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

fn in_stock() -> bool {
    true
}

impl Car {
    pub fn new(
        car_id: CarId,
        brand: impl Into<String>,
        model: impl Into<String>,
        year: u16,
        price: Cents,
    ) -> Self {
        Self {
            car_id,
            brand: brand.into(),
            model: model.into(),
            year,
            price,
            is_available: true,
            image_path: None,
        }
    }

    pub fn with_image(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }

    pub fn status(&self) -> Availability {
        if self.is_available {
            Availability::Available
        } else {
            Availability::Sold
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {} ({}) - {}",
            self.car_id,
            self.brand,
            self.model,
            self.year,
            format_price(self.price)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    Available,
    Sold,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Sold => "Sold",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the car listing: the car followed by its availability.
#[derive(Debug, Clone, Copy)]
pub struct CarSummary<'a>(pub &'a Car);

impl<'a> CarSummary<'a> {
    pub fn car(&self) -> &'a Car {
        self.0
    }
}

impl fmt::Display for CarSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.0, self.0.status())
    }
}
