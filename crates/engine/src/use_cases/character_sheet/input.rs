//! Editable body of a character sheet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use charsheets_domain::{
    Ability, Armor, Attack, Attributes, Character, ClassInfo, Saves, Skills, UserId,
};

/// Everything on a sheet the owner can write: all parts except the id,
/// the owner reference and the timestamps.
///
/// Uses the same keys as the stored document. Missing keys take their
/// defaults; attribute scores are bound-checked while deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterInput {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CharClass")]
    pub char_class: String,
    #[serde(rename = "Subclass")]
    pub subclass: String,
    #[serde(rename = "Appearance")]
    pub appearance: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "ClassObjList")]
    pub class: ClassInfo,
    #[serde(rename = "AttributeList")]
    pub attributes: Attributes,
    #[serde(rename = "SavesList")]
    pub saves: Saves,
    #[serde(rename = "SkillsList")]
    pub skills: Skills,
    #[serde(rename = "ArmorObjList")]
    pub armor: Vec<Armor>,
    #[serde(rename = "AttacksList")]
    pub attacks: Vec<Attack>,
    #[serde(rename = "AbilityObjsList")]
    pub abilities: Vec<Ability>,
}

impl CharacterInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Build a new sheet for `owner` from this input.
    pub fn into_character(self, owner: UserId, now: DateTime<Utc>) -> Character {
        let mut character = Character::new(owner, String::new(), now);
        self.apply_to(&mut character);
        character
    }

    /// Overwrite every editable part of `character`.
    pub fn apply_to(self, character: &mut Character) {
        character.set_name(self.name);
        character.set_class_labels(self.char_class, self.subclass);
        character.set_appearance(self.appearance);
        character.set_description(self.description);
        character.set_class(self.class);
        character.set_attributes(self.attributes);
        character.set_saves(self.saves);
        character.set_skills(self.skills);
        character.set_armor(self.armor);
        character.set_attacks(self.attacks);
        character.set_abilities(self.abilities);
    }
}
