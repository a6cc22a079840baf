//! API layer - HTTP entry points.

pub mod error;
pub mod http;
pub mod requester;

pub use error::ApiError;
