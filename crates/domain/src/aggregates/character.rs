//! Character aggregate - the root document of a character sheet.
//!
//! Every embedded record (attributes, proficiencies, class, equipment,
//! abilities) lives and dies with its character. The owning user is held
//! by id only; resolving it is the job of whoever holds a user store.
//!
//! # Invariants
//!
//! - Every attribute score is in `1..=20` (enforced by `AttributeScore`)
//! - Armor, attacks and abilities are ordered lists, empty by default
//! - No derived modifier is ever stored

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Ability, Armor, Attack, Attributes, ClassInfo, Saves, Skills};
use crate::error::DomainError;
use crate::ids::{CharacterId, UserId};

/// A character sheet.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use charsheets_domain::{Armor, Character, UserId};
///
/// let owner = UserId::new();
/// let mut character = Character::new(owner, "Tordek", Utc::now());
/// character.add_armor(Armor::new("Chain mail", 16).heavy());
///
/// assert!(character.is_owned_by(owner));
/// assert_eq!(character.armor().len(), 1);
/// assert!(character.attacks().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(rename = "_id")]
    id: CharacterId,

    // Identity
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "CharClass", default)]
    char_class: String,
    #[serde(rename = "Subclass", default)]
    subclass: String,
    #[serde(rename = "Appearance", default)]
    appearance: String,
    #[serde(rename = "Description", default)]
    description: String,

    // Embedded blocks
    #[serde(rename = "ClassObjList", default)]
    class: ClassInfo,
    #[serde(rename = "AttributeList", default)]
    attributes: Attributes,
    #[serde(rename = "SavesList", default)]
    saves: Saves,
    #[serde(rename = "SkillsList", default)]
    skills: Skills,

    // Owned collections
    #[serde(rename = "ArmorObjList", default)]
    armor: Vec<Armor>,
    #[serde(rename = "AttacksList", default)]
    attacks: Vec<Attack>,
    #[serde(rename = "AbilityObjsList", default)]
    abilities: Vec<Ability>,

    // Reference to the owning user document
    owner: UserId,

    // Metadata
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create an empty sheet for `owner`.
    ///
    /// Attributes start at 10, no proficiencies are set, and the equipment
    /// and ability lists are empty.
    pub fn new(owner: UserId, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            char_class: String::new(),
            subclass: String::new(),
            appearance: String::new(),
            description: String::new(),
            class: ClassInfo::default(),
            attributes: Attributes::default(),
            saves: Saves::default(),
            skills: Skills::default(),
            armor: Vec::new(),
            attacks: Vec::new(),
            abilities: Vec::new(),
            owner,
            created_at: now,
            updated_at: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[inline]
    pub fn owner(&self) -> UserId {
        self.owner
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn char_class(&self) -> &str {
        &self.char_class
    }

    #[inline]
    pub fn subclass(&self) -> &str {
        &self.subclass
    }

    #[inline]
    pub fn appearance(&self) -> &str {
        &self.appearance
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn class(&self) -> &ClassInfo {
        &self.class
    }

    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[inline]
    pub fn saves(&self) -> &Saves {
        &self.saves
    }

    #[inline]
    pub fn skills(&self) -> &Skills {
        &self.skills
    }

    #[inline]
    pub fn armor(&self) -> &[Armor] {
        &self.armor
    }

    #[inline]
    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    #[inline]
    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether `user_id` is the owning user.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner == user_id
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_class_labels(
        mut self,
        char_class: impl Into<String>,
        subclass: impl Into<String>,
    ) -> Self {
        self.char_class = char_class.into();
        self.subclass = subclass.into();
        self
    }

    pub fn with_appearance(mut self, appearance: impl Into<String>) -> Self {
        self.appearance = appearance.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_class(mut self, class: ClassInfo) -> Self {
        self.class = class;
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_saves(mut self, saves: Saves) -> Self {
        self.saves = saves;
        self
    }

    pub fn with_skills(mut self, skills: Skills) -> Self {
        self.skills = skills;
        self
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_class_labels(&mut self, char_class: impl Into<String>, subclass: impl Into<String>) {
        self.char_class = char_class.into();
        self.subclass = subclass.into();
    }

    pub fn set_appearance(&mut self, appearance: impl Into<String>) {
        self.appearance = appearance.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_class(&mut self, class: ClassInfo) {
        self.class = class;
    }

    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.attributes = attributes;
    }

    pub fn set_saves(&mut self, saves: Saves) {
        self.saves = saves;
    }

    pub fn set_skills(&mut self, skills: Skills) {
        self.skills = skills;
    }

    pub fn set_armor(&mut self, armor: Vec<Armor>) {
        self.armor = armor;
    }

    pub fn set_attacks(&mut self, attacks: Vec<Attack>) {
        self.attacks = attacks;
    }

    pub fn set_abilities(&mut self, abilities: Vec<Ability>) {
        self.abilities = abilities;
    }

    /// Record a modification time. The aggregate never reads the clock itself.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    // =========================================================================
    // Owned Collections
    // =========================================================================

    /// Append an armor entry, returning its index.
    pub fn add_armor(&mut self, armor: Armor) -> usize {
        self.armor.push(armor);
        self.armor.len() - 1
    }

    pub fn replace_armor(&mut self, index: usize, armor: Armor) -> Result<(), DomainError> {
        replace_at(&mut self.armor, index, armor, "Armor")
    }

    pub fn remove_armor(&mut self, index: usize) -> Result<Armor, DomainError> {
        remove_at(&mut self.armor, index, "Armor")
    }

    /// Append an attack, returning its index.
    pub fn add_attack(&mut self, attack: Attack) -> usize {
        self.attacks.push(attack);
        self.attacks.len() - 1
    }

    pub fn replace_attack(&mut self, index: usize, attack: Attack) -> Result<(), DomainError> {
        replace_at(&mut self.attacks, index, attack, "Attack")
    }

    pub fn remove_attack(&mut self, index: usize) -> Result<Attack, DomainError> {
        remove_at(&mut self.attacks, index, "Attack")
    }

    /// Append an ability, returning its index.
    pub fn add_ability(&mut self, ability: Ability) -> usize {
        self.abilities.push(ability);
        self.abilities.len() - 1
    }

    pub fn replace_ability(&mut self, index: usize, ability: Ability) -> Result<(), DomainError> {
        replace_at(&mut self.abilities, index, ability, "Ability")
    }

    pub fn remove_ability(&mut self, index: usize) -> Result<Ability, DomainError> {
        remove_at(&mut self.abilities, index, "Ability")
    }
}

fn replace_at<T>(
    items: &mut [T],
    index: usize,
    item: T,
    entity_type: &'static str,
) -> Result<(), DomainError> {
    let slot = items
        .get_mut(index)
        .ok_or_else(|| DomainError::not_found(entity_type, index.to_string()))?;
    *slot = item;
    Ok(())
}

fn remove_at<T>(
    items: &mut Vec<T>,
    index: usize,
    entity_type: &'static str,
) -> Result<T, DomainError> {
    if index >= items.len() {
        return Err(DomainError::not_found(entity_type, index.to_string()));
    }
    Ok(items.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{Attribute, Skill};
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn test_character() -> Character {
        Character::new(UserId::new(), "Mialee", fixed_time())
    }

    #[test]
    fn new_character_has_empty_collections() {
        let character = test_character();
        assert!(character.armor().is_empty());
        assert!(character.attacks().is_empty());
        assert!(character.abilities().is_empty());
        assert_eq!(character.created_at(), character.updated_at());
    }

    #[test]
    fn empty_collections_survive_a_document_round_trip() {
        let character = test_character();
        let doc = serde_json::to_value(&character).unwrap();
        assert_eq!(doc["ArmorObjList"], serde_json::json!([]));
        assert_eq!(doc["AttacksList"], serde_json::json!([]));
        let loaded: Character = serde_json::from_value(doc).unwrap();
        assert_eq!(loaded, character);
    }

    #[test]
    fn document_uses_sheet_keys() {
        let owner = UserId::new();
        let character = Character::new(owner, "Mialee", fixed_time())
            .with_class_labels("Wizard", "Evocation")
            .with_appearance("Silver hair")
            .with_skills(Skills::default().with(Skill::Arcana));
        let doc = serde_json::to_value(&character).unwrap();

        assert_eq!(doc["_id"], character.id().to_string());
        assert_eq!(doc["Name"], "Mialee");
        assert_eq!(doc["CharClass"], "Wizard");
        assert_eq!(doc["Subclass"], "Evocation");
        assert_eq!(doc["Appearance"], "Silver hair");
        assert_eq!(doc["AttributeList"]["strength"], 10);
        assert_eq!(doc["SkillsList"]["Arcana"], true);
        assert_eq!(doc["SavesList"]["WisSave"], false);
        assert_eq!(doc["owner"], owner.to_string());
    }

    #[test]
    fn collections_are_ordered_and_indexable() {
        let mut character = test_character();
        assert_eq!(character.add_attack(Attack::new("Dagger", 4)), 0);
        assert_eq!(character.add_attack(Attack::new("Quarterstaff", 6)), 1);
        assert_eq!(character.add_attack(Attack::new("Light crossbow", 8)), 2);

        character
            .replace_attack(1, Attack::new("Quarterstaff", 8))
            .unwrap();
        let removed = character.remove_attack(0).unwrap();
        assert_eq!(removed.name, "Dagger");

        let dice: Vec<_> = character.attacks().iter().map(|a| a.dmg_die).collect();
        assert_eq!(dice, vec![8, 8]);
    }

    #[test]
    fn out_of_range_index_is_not_found() {
        let mut character = test_character();
        character.add_armor(Armor::new("Leather", 11).light());

        let err = character.remove_armor(1).unwrap_err();
        assert_eq!(err, DomainError::not_found("Armor", "1"));
        assert!(character
            .replace_ability(0, Ability::new("Second Wind", 10))
            .is_err());
        assert_eq!(character.armor().len(), 1);
    }

    #[test]
    fn document_with_out_of_range_attribute_fails_to_load() {
        let character = test_character();
        let mut doc = serde_json::to_value(&character).unwrap();
        doc["AttributeList"]["wisdom"] = serde_json::json!(21);
        assert!(serde_json::from_value::<Character>(doc).is_err());
    }

    #[test]
    fn minimal_document_loads_with_defaults() {
        let owner = UserId::new();
        let id = CharacterId::new();
        let doc = serde_json::json!({
            "_id": id.to_string(),
            "owner": owner.to_string(),
            "created_at": "2025-03-01T12:00:00Z",
            "updated_at": "2025-03-01T12:00:00Z",
        });
        let character: Character = serde_json::from_value(doc).unwrap();
        assert_eq!(character.id(), id);
        assert!(character.is_owned_by(owner));
        assert_eq!(character.attributes().get(Attribute::Dexterity).value(), 10);
        assert!(character.abilities().is_empty());
    }

    #[test]
    fn touch_moves_updated_at_only() {
        let mut character = test_character();
        let later = Utc.with_ymd_and_hms(2025, 3, 2, 8, 0, 0).unwrap();
        character.touch(later);
        assert_eq!(character.created_at(), fixed_time());
        assert_eq!(character.updated_at(), later);
    }
}
