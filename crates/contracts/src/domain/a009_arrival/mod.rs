pub mod aggregate;

pub use aggregate::{Arrival, ArrivalDto, ArrivalStatus};
