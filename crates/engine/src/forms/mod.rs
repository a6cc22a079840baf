//! Form layer: field-level validation of user submissions.

pub mod registration;

pub use registration::{FormValidation, RegistrationForm};
