//! Character sheet use cases.
//!
//! Create, read, update and delete whole sheets, and manage the owned
//! armor, attack and ability lists. Every operation acts on behalf of a
//! requesting user and only touches that user's characters.

mod error;
mod input;

pub use error::CharacterSheetError;
pub use input::CharacterInput;

use std::sync::Arc;

use charsheets_domain::{Ability, Armor, Attack, Character, CharacterId, DomainError, UserId};

use crate::infrastructure::ports::{CharacterRepo, ClockPort, UserRepo};

/// Container for character sheet use cases.
pub struct CharacterSheetUseCases {
    character_repo: Arc<dyn CharacterRepo>,
    user_repo: Arc<dyn UserRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CharacterSheetUseCases {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        user_repo: Arc<dyn UserRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            character_repo,
            user_repo,
            clock,
        }
    }

    // =========================================================================
    // Whole Sheets
    // =========================================================================

    /// Create a sheet owned by `requester`.
    ///
    /// The requester must exist in the user directory.
    pub async fn create(
        &self,
        requester: UserId,
        input: CharacterInput,
    ) -> Result<Character, CharacterSheetError> {
        self.user_repo
            .get(requester)
            .await?
            .ok_or(CharacterSheetError::UserNotFound(requester))?;

        let character = input.into_character(requester, self.clock.now());
        self.character_repo.save(&character).await?;

        tracing::info!(
            character_id = %character.id(),
            owner = %requester,
            "Created character"
        );
        Ok(character)
    }

    pub async fn get(
        &self,
        requester: UserId,
        id: CharacterId,
    ) -> Result<Character, CharacterSheetError> {
        self.load_owned(requester, id).await
    }

    /// All of the requester's characters, ordered by name.
    pub async fn list(&self, requester: UserId) -> Result<Vec<Character>, CharacterSheetError> {
        Ok(self.character_repo.list_by_owner(requester).await?)
    }

    /// Replace every editable part of a sheet.
    pub async fn update(
        &self,
        requester: UserId,
        id: CharacterId,
        input: CharacterInput,
    ) -> Result<Character, CharacterSheetError> {
        let (character, ()) = self
            .modify(requester, id, |character| {
                input.apply_to(character);
                Ok(())
            })
            .await?;
        Ok(character)
    }

    pub async fn delete(&self, requester: UserId, id: CharacterId) -> Result<(), CharacterSheetError> {
        self.load_owned(requester, id).await?;
        self.character_repo.delete(id).await?;
        tracing::info!(character_id = %id, "Deleted character");
        Ok(())
    }

    // =========================================================================
    // Armor
    // =========================================================================

    pub async fn add_armor(
        &self,
        requester: UserId,
        id: CharacterId,
        armor: Armor,
    ) -> Result<Character, CharacterSheetError> {
        let (character, _) = self
            .modify(requester, id, |c| Ok(c.add_armor(armor)))
            .await?;
        Ok(character)
    }

    pub async fn update_armor(
        &self,
        requester: UserId,
        id: CharacterId,
        index: usize,
        armor: Armor,
    ) -> Result<Character, CharacterSheetError> {
        let (character, ()) = self
            .modify(requester, id, |c| c.replace_armor(index, armor))
            .await?;
        Ok(character)
    }

    pub async fn remove_armor(
        &self,
        requester: UserId,
        id: CharacterId,
        index: usize,
    ) -> Result<Character, CharacterSheetError> {
        let (character, _) = self
            .modify(requester, id, |c| c.remove_armor(index))
            .await?;
        Ok(character)
    }

    // =========================================================================
    // Attacks
    // =========================================================================

    pub async fn add_attack(
        &self,
        requester: UserId,
        id: CharacterId,
        attack: Attack,
    ) -> Result<Character, CharacterSheetError> {
        let (character, _) = self
            .modify(requester, id, |c| Ok(c.add_attack(attack)))
            .await?;
        Ok(character)
    }

    pub async fn update_attack(
        &self,
        requester: UserId,
        id: CharacterId,
        index: usize,
        attack: Attack,
    ) -> Result<Character, CharacterSheetError> {
        let (character, ()) = self
            .modify(requester, id, |c| c.replace_attack(index, attack))
            .await?;
        Ok(character)
    }

    pub async fn remove_attack(
        &self,
        requester: UserId,
        id: CharacterId,
        index: usize,
    ) -> Result<Character, CharacterSheetError> {
        let (character, _) = self
            .modify(requester, id, |c| c.remove_attack(index))
            .await?;
        Ok(character)
    }

    // =========================================================================
    // Abilities
    // =========================================================================

    pub async fn add_ability(
        &self,
        requester: UserId,
        id: CharacterId,
        ability: Ability,
    ) -> Result<Character, CharacterSheetError> {
        let (character, _) = self
            .modify(requester, id, |c| Ok(c.add_ability(ability)))
            .await?;
        Ok(character)
    }

    pub async fn update_ability(
        &self,
        requester: UserId,
        id: CharacterId,
        index: usize,
        ability: Ability,
    ) -> Result<Character, CharacterSheetError> {
        let (character, ()) = self
            .modify(requester, id, |c| c.replace_ability(index, ability))
            .await?;
        Ok(character)
    }

    pub async fn remove_ability(
        &self,
        requester: UserId,
        id: CharacterId,
        index: usize,
    ) -> Result<Character, CharacterSheetError> {
        let (character, _) = self
            .modify(requester, id, |c| c.remove_ability(index))
            .await?;
        Ok(character)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    async fn load_owned(
        &self,
        requester: UserId,
        id: CharacterId,
    ) -> Result<Character, CharacterSheetError> {
        let character = self
            .character_repo
            .get(id)
            .await?
            .ok_or(CharacterSheetError::CharacterNotFound(id))?;

        if !character.is_owned_by(requester) {
            tracing::warn!(
                character_id = %id,
                requester = %requester,
                "Rejected access to another user's character"
            );
            return Err(CharacterSheetError::Forbidden(id));
        }
        Ok(character)
    }

    /// Load, mutate, stamp and save a sheet as one unit.
    ///
    /// Nothing is written if `change` fails.
    async fn modify<R>(
        &self,
        requester: UserId,
        id: CharacterId,
        change: impl FnOnce(&mut Character) -> Result<R, DomainError>,
    ) -> Result<(Character, R), CharacterSheetError> {
        let mut character = self.load_owned(requester, id).await?;
        let result = change(&mut character)?;
        character.touch(self.clock.now());
        self.character_repo.save(&character).await?;
        tracing::debug!(character_id = %id, "Updated character");
        Ok((character, result))
    }
}
