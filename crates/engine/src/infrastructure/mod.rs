//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod csv_catalogs;
pub mod dnd5e_api;
pub mod json_store;
pub mod ports;
