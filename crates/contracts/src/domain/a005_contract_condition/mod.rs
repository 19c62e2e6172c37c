pub mod aggregate;

pub use aggregate::{ContractCondition, ContractConditionDto};
