pub mod aggregate;

pub use aggregate::{City, CityDto};
