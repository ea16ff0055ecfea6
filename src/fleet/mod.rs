pub mod rental;
pub mod selector;
pub mod vehicle;

pub use rental::{run_rental, RentalRequest};
pub use selector::{SelectorError, VehicleKind};
pub use vehicle::{Car, Fleet, RentalQuote, Suv, Truck, Vehicle, VehicleInfo, CURRENCY};
