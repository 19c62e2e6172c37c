//! Common types and traits for all referential aggregates

pub mod reference_entity;
pub mod serde_helpers;
pub mod validation;

// Re-exports
pub use reference_entity::{ReferenceEntity, StatusFilterMode};
