use thiserror::Error;

use crate::domain::{CarId, CustomerId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Car with ID {0} not found.")]
    CarNotFound(CarId),

    #[error("Car with ID {0} is already sold.")]
    AlreadySold(CarId),

    #[error("Customer with ID {0} not found.")]
    CustomerNotFound(CustomerId),

    #[error("Car with ID {0} is already in the showroom.")]
    DuplicateCarId(CarId),

    #[error("Customer with ID {0} is already registered.")]
    DuplicateCustomerId(CustomerId),

    #[error("Sale #{found} is out of sequence, expected #{expected}.")]
    SaleOutOfSequence { expected: u64, found: u64 },
}
