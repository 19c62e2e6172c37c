pub mod list;
pub mod planning;
