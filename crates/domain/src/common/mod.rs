//! Common utility functions shared by the schema and form layers.
//!
//! Pure functions only: no side effects, no I/O.

pub mod string;

pub use string::{some_if_not_empty, StringExt};
