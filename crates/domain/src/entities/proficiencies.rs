//! Saving-throw and skill proficiency blocks.
//!
//! Both are plain booleans. Proficiency bonuses depend on level and
//! attribute modifiers and are worked out client-side.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Attribute, Skill};

/// Saving-throw proficiency, one flag per attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Saves {
    #[serde(rename = "StrSave")]
    pub strength: bool,
    #[serde(rename = "DexSave")]
    pub dexterity: bool,
    #[serde(rename = "ConSave")]
    pub constitution: bool,
    #[serde(rename = "IntSave")]
    pub intelligence: bool,
    #[serde(rename = "WisSave")]
    pub wisdom: bool,
    #[serde(rename = "ChaSave")]
    pub charisma: bool,
}

impl Saves {
    pub fn is_proficient(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, attribute: Attribute, proficient: bool) {
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Constitution => &mut self.constitution,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Charisma => &mut self.charisma,
        };
        *slot = proficient;
    }

    /// Attributes with save proficiency, in sheet order.
    pub fn proficient(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::ALL
            .into_iter()
            .filter(|a| self.is_proficient(*a))
    }
}

/// Skill proficiency, one flag per skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Skills {
    pub athletics: bool,
    pub acrobatics: bool,
    #[serde(rename = "Sleight")]
    pub sleight_of_hand: bool,
    pub stealth: bool,
    pub arcana: bool,
    pub history: bool,
    pub investigation: bool,
    pub nature: bool,
    pub religion: bool,
    pub animal_handling: bool,
    pub insight: bool,
    pub medicine: bool,
    pub perception: bool,
    pub survival: bool,
    pub deception: bool,
    pub intimidation: bool,
    pub performance: bool,
    pub persuasion: bool,
}

impl Skills {
    fn slot(&mut self, skill: Skill) -> &mut bool {
        match skill {
            Skill::Athletics => &mut self.athletics,
            Skill::Acrobatics => &mut self.acrobatics,
            Skill::SleightOfHand => &mut self.sleight_of_hand,
            Skill::Stealth => &mut self.stealth,
            Skill::Arcana => &mut self.arcana,
            Skill::History => &mut self.history,
            Skill::Investigation => &mut self.investigation,
            Skill::Nature => &mut self.nature,
            Skill::Religion => &mut self.religion,
            Skill::AnimalHandling => &mut self.animal_handling,
            Skill::Insight => &mut self.insight,
            Skill::Medicine => &mut self.medicine,
            Skill::Perception => &mut self.perception,
            Skill::Survival => &mut self.survival,
            Skill::Deception => &mut self.deception,
            Skill::Intimidation => &mut self.intimidation,
            Skill::Performance => &mut self.performance,
            Skill::Persuasion => &mut self.persuasion,
        }
    }

    pub fn is_proficient(&self, skill: Skill) -> bool {
        match skill {
            Skill::Athletics => self.athletics,
            Skill::Acrobatics => self.acrobatics,
            Skill::SleightOfHand => self.sleight_of_hand,
            Skill::Stealth => self.stealth,
            Skill::Arcana => self.arcana,
            Skill::History => self.history,
            Skill::Investigation => self.investigation,
            Skill::Nature => self.nature,
            Skill::Religion => self.religion,
            Skill::AnimalHandling => self.animal_handling,
            Skill::Insight => self.insight,
            Skill::Medicine => self.medicine,
            Skill::Perception => self.perception,
            Skill::Survival => self.survival,
            Skill::Deception => self.deception,
            Skill::Intimidation => self.intimidation,
            Skill::Performance => self.performance,
            Skill::Persuasion => self.persuasion,
        }
    }

    pub fn set(&mut self, skill: Skill, proficient: bool) {
        *self.slot(skill) = proficient;
    }

    /// Builder-style variant of [`Skills::set`] that marks a skill proficient.
    pub fn with(mut self, skill: Skill) -> Self {
        self.set(skill, true);
        self
    }

    /// Skills with proficiency, in sheet order.
    pub fn proficient(&self) -> impl Iterator<Item = Skill> + '_ {
        Skill::ALL.into_iter().filter(|s| self.is_proficient(*s))
    }
}
