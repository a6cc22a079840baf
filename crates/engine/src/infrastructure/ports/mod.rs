//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Document store access (in-memory today, a document database driver later)
//! - The user directory characters point at
//! - Clock (for testing)

mod error;
mod repos;
mod testing;
pub mod types;

pub use error::RepoError;
pub use repos::{CharacterRepo, UserRepo};
pub use testing::ClockPort;
pub use types::{normalize_email, User};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockCharacterRepo, MockUserRepo};

#[cfg(test)]
pub use testing::MockClockPort;
