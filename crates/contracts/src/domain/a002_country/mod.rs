pub mod aggregate;

pub use aggregate::{Country, CountryDto};
