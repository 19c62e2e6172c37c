pub mod calendar;
pub mod metadata;
pub mod normalize;
pub mod pagination;
pub mod query;
