//! Character server engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Roster operations: enumerate, create, delete
//! - `infrastructure/` - Ports, SQLite adapters, reference data, configuration
//! - `api/` - HTTP and WebSocket entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
