pub mod aggregate;

pub use aggregate::{Quality, QualityDto};
