//! In-memory document store.
//!
//! Stands in for the document database driver. Records are kept as
//! `serde_json::Value` documents, not as typed structs, so every read goes
//! through the same deserialization (and bound checks) a real driver would
//! apply to stored data.

use std::fmt::Display;
use std::hash::Hash;

use async_trait::async_trait;
use charsheets_domain::{Character, CharacterId, UserId};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::ports::{normalize_email, CharacterRepo, RepoError, User, UserRepo};

/// A named collection of JSON documents keyed by id.
struct Collection<K> {
    name: &'static str,
    docs: DashMap<K, Value>,
}

impl<K> Collection<K>
where
    K: Eq + Hash + Display + Copy,
{
    fn new(name: &'static str) -> Self {
        Self {
            name,
            docs: DashMap::new(),
        }
    }

    fn get<T: DeserializeOwned>(&self, id: K) -> Result<Option<T>, RepoError> {
        let Some(doc) = self.docs.get(&id) else {
            return Ok(None);
        };
        let record = serde_json::from_value(doc.value().clone()).map_err(|e| {
            RepoError::serialization(format!("{} document {}: {}", self.name, id, e))
        })?;
        Ok(Some(record))
    }

    fn put<T: Serialize>(&self, id: K, record: &T) -> Result<(), RepoError> {
        let doc = serde_json::to_value(record).map_err(RepoError::serialization)?;
        self.docs.insert(id, doc);
        Ok(())
    }

    fn remove(&self, id: K) -> Result<(), RepoError> {
        self.docs
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found(self.name, id))
    }

    /// Deserialize every document whose `field` equals `expected`.
    fn find_by<T: DeserializeOwned>(&self, field: &str, expected: &str) -> Result<Vec<T>, RepoError> {
        let matching: Vec<Value> = self
            .docs
            .iter()
            .filter(|entry| entry.value().get(field).and_then(Value::as_str) == Some(expected))
            .map(|entry| entry.value().clone())
            .collect();

        matching
            .into_iter()
            .map(|doc| {
                serde_json::from_value(doc)
                    .map_err(|e| RepoError::serialization(format!("{} document: {}", self.name, e)))
            })
            .collect()
    }
}

/// Document store holding the `characters` and `users` collections.
pub struct InMemoryDocumentStore {
    characters: Collection<CharacterId>,
    users: Collection<UserId>,
    /// Unique index over normalized user emails.
    emails: DashMap<String, UserId>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            characters: Collection::new("Character"),
            users: Collection::new("User"),
            emails: DashMap::new(),
        }
    }

    /// Store a raw character document without going through the record type.
    pub fn insert_character_document(&self, id: CharacterId, doc: Value) {
        self.characters.docs.insert(id, doc);
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharacterRepo for InMemoryDocumentStore {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        self.characters.get(id)
    }

    async fn save(&self, character: &Character) -> Result<(), RepoError> {
        self.characters.put(character.id(), character)?;
        tracing::debug!(character_id = %character.id(), "Saved character document");
        Ok(())
    }

    async fn delete(&self, id: CharacterId) -> Result<(), RepoError> {
        self.characters.remove(id)?;
        tracing::debug!(character_id = %id, "Deleted character document");
        Ok(())
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Character>, RepoError> {
        let mut characters: Vec<Character> =
            self.characters.find_by("owner", &owner.to_string())?;
        characters.sort_by(|a, b| a.name().cmp(b.name()).then(a.id().cmp(&b.id())));
        Ok(characters)
    }
}

#[async_trait]
impl UserRepo for InMemoryDocumentStore {
    async fn get(&self, id: UserId) -> Result<Option<User>, RepoError> {
        self.users.get(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let owner = self
            .emails
            .get(&normalize_email(email))
            .map(|entry| *entry.value());
        match owner {
            Some(id) => self.users.get(id),
            None => Ok(None),
        }
    }

    async fn save(&self, user: &User) -> Result<(), RepoError> {
        let previous: Option<User> = self.users.get(user.id)?;

        // Claim the email under the index shard lock; concurrent claims of
        // the same email serialize here.
        match self.emails.entry(user.email.clone()) {
            Entry::Occupied(owner) if *owner.get() != user.id => {
                return Err(RepoError::constraint(format!(
                    "email already registered: {}",
                    user.email
                )));
            }
            Entry::Occupied(_) => {}
            Entry::Vacant(slot) => {
                slot.insert(user.id);
            }
        }

        self.users.put(user.id, user)?;

        if let Some(previous) = previous.filter(|p| p.email != user.email) {
            self.emails
                .remove_if(&previous.email, |_, owner| *owner == user.id);
        }

        tracing::debug!(user_id = %user.id, "Saved user document");
        Ok(())
    }
}
