//! Types shared by the referential admin frontend: pagination, filter
//! queries, the tolerant record normalizer and the referential aggregates.

pub mod domain;
pub mod shared;
