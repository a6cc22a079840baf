//! Armor and attack records embedded in a character sheet.

use serde::{Deserialize, Serialize};

/// A piece of armor the character can wear.
///
/// `ac_value` is unbounded: magic items, curses and house rules all push
/// armor class outside any sensible range. The category flags are
/// independent of each other (a shield can also be flagged light, etc.).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Armor {
    pub name: String,
    pub description: String,
    #[serde(rename = "ACValue")]
    pub ac_value: i32,
    pub heavy_armor: bool,
    pub medium_armor: bool,
    pub light_armor: bool,
    pub shield: bool,
}

impl Armor {
    pub fn new(name: impl Into<String>, ac_value: i32) -> Self {
        Self {
            name: name.into(),
            ac_value,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn heavy(mut self) -> Self {
        self.heavy_armor = true;
        self
    }

    pub fn medium(mut self) -> Self {
        self.medium_armor = true;
        self
    }

    pub fn light(mut self) -> Self {
        self.light_armor = true;
        self
    }

    pub fn shield(mut self) -> Self {
        self.shield = true;
        self
    }
}

/// An attack the character can make. Only the damage die is stored; the
/// roll and its modifiers happen client-side.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Attack {
    pub name: String,
    pub description: String,
    pub dmg_die: i32,
}

impl Attack {
    pub fn new(name: impl Into<String>, dmg_die: i32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            dmg_die,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
