//! Class block and the free-form abilities a player tracks for it.

use serde::{Deserialize, Serialize};

use crate::entities::Attributes;

/// A character ability: class feature, spell, racial trait, whatever the
/// player wants to keep on the sheet. Carries its own attribute snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Ability {
    pub name: String,
    pub description: String,
    pub die_type: i32,
    pub attribute: Attributes,
}

impl Ability {
    pub fn new(name: impl Into<String>, die_type: i32) -> Self {
        Self {
            name: name.into(),
            die_type,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attribute = attributes;
        self
    }
}

/// The character's class as recorded on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ClassInfo {
    pub name: String,
    pub subclass: String,
    pub char_class: String,
    pub abilities: Vec<Ability>,
}

impl ClassInfo {
    pub fn new(char_class: impl Into<String>) -> Self {
        let char_class = char_class.into();
        Self {
            name: char_class.clone(),
            char_class,
            ..Default::default()
        }
    }

    pub fn with_subclass(mut self, subclass: impl Into<String>) -> Self {
        self.subclass = subclass.into();
        self
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }
}
