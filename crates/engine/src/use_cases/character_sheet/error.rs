//! Character sheet operation errors.

use crate::infrastructure::ports::RepoError;
use charsheets_domain::{CharacterId, DomainError, UserId};

/// Errors that can occur during character sheet operations.
#[derive(Debug, thiserror::Error)]
pub enum CharacterSheetError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Character {0} belongs to another user")]
    Forbidden(CharacterId),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
