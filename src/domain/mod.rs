mod car;
mod customer;
mod money;
mod rental;

pub use car::*;
pub use customer::*;
pub use money::*;
pub use rental::*;
