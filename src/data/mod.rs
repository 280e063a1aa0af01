// Data loading and cell-level cleaning.
pub mod cleaning;
pub mod table;
