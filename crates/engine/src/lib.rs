//! Character sheet engine library.
//!
//! Server-side code for the character sheet service.
//!
//! ## Structure
//!
//! - `forms/` - Field-level validation of user submissions
//! - `use_cases/` - User story orchestration over the ports
//! - `infrastructure/` - Ports, the in-memory document store, config
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod forms;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
