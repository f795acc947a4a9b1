mod car;
mod customer;
mod listing;
mod money;
mod sale;
mod seed;

pub use car::*;
pub use customer::*;
pub use listing::*;
pub use money::*;
pub use sale::*;
pub use seed::*;
