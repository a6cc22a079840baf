//! Records owned by the engine rather than the character sheet domain.

use chrono::{DateTime, Utc};
use charsheets_domain::UserId;
use serde::{Deserialize, Serialize};

/// A registered account, stored in its own collection.
///
/// Characters refer to it by `UserId` only. Credentials are not kept here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user; the email is stored lower-cased.
    pub fn new(email: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: UserId::new(),
            email: normalize_email(email),
            created_at: now,
        }
    }
}

/// Canonical form used for storing and comparing emails.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
