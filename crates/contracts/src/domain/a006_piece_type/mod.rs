pub mod aggregate;

pub use aggregate::{PieceType, PieceTypeDto};
