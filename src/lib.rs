// Expense analyzer library root
// Declares the modules for the crate; the binary in main.rs wires them
// into an axum server.

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod services;
