pub mod a001_supplier;
pub mod a002_country;
pub mod a003_bank;
pub mod a004_currency;
pub mod a005_contract_condition;
pub mod a006_piece_type;
pub mod a007_quality;
pub mod a008_city;
pub mod a009_arrival;
