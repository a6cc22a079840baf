//! Repository port traits for document store access.

use async_trait::async_trait;
use charsheets_domain::{Character, CharacterId, UserId};

use super::error::RepoError;
use super::types::User;

// =============================================================================
// Character Documents
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;
    /// Insert or replace the whole document, embedded records included.
    async fn save(&self, character: &Character) -> Result<(), RepoError>;
    async fn delete(&self, id: CharacterId) -> Result<(), RepoError>;
    /// All characters referencing `owner`, ordered by name.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Character>, RepoError>;
}

// =============================================================================
// User Directory
// =============================================================================

/// Lookup for the independently managed user collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn get(&self, id: UserId) -> Result<Option<User>, RepoError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
    async fn save(&self, user: &User) -> Result<(), RepoError>;
}
