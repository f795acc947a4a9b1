// Application layer: the inventory ledger and the rules around selling cars.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
