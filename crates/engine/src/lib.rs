//! Sheetsmith Engine library.
//!
//! Everything around the rules core that touches the outside world.
//!
//! ## Structure
//!
//! - `use_cases/` - Character operations over the ports
//! - `infrastructure/` - CSV catalogs, JSON store and SRD API client (ports + adapters)
//! - `api/` - HTTP entry points
//! - `cli/` - Command-line entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use config::EngineConfig;
