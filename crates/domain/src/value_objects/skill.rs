//! Skill value object - the eighteen proficiency-bearing skills.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A skill a character may be proficient in.
///
/// Serialized with the same names used as keys in a skills block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Athletics,
    Acrobatics,
    #[serde(rename = "Sleight")]
    SleightOfHand,
    Stealth,
    Arcana,
    History,
    Investigation,
    Nature,
    Religion,
    AnimalHandling,
    Insight,
    Medicine,
    Perception,
    Survival,
    Deception,
    Intimidation,
    Performance,
    Persuasion,
}

impl Skill {
    /// All skills in sheet order.
    pub const ALL: [Skill; 18] = [
        Self::Athletics,
        Self::Acrobatics,
        Self::SleightOfHand,
        Self::Stealth,
        Self::Arcana,
        Self::History,
        Self::Investigation,
        Self::Nature,
        Self::Religion,
        Self::AnimalHandling,
        Self::Insight,
        Self::Medicine,
        Self::Perception,
        Self::Survival,
        Self::Deception,
        Self::Intimidation,
        Self::Performance,
        Self::Persuasion,
    ];

    /// Returns the key this skill is stored under.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Athletics => "Athletics",
            Self::Acrobatics => "Acrobatics",
            Self::SleightOfHand => "Sleight",
            Self::Stealth => "Stealth",
            Self::Arcana => "Arcana",
            Self::History => "History",
            Self::Investigation => "Investigation",
            Self::Nature => "Nature",
            Self::Religion => "Religion",
            Self::AnimalHandling => "AnimalHandling",
            Self::Insight => "Insight",
            Self::Medicine => "Medicine",
            Self::Perception => "Perception",
            Self::Survival => "Survival",
            Self::Deception => "Deception",
            Self::Intimidation => "Intimidation",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
        }
    }

    /// Returns the human-readable name (e.g., "Sleight of Hand").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SleightOfHand => "Sleight of Hand",
            Self::AnimalHandling => "Animal Handling",
            other => other.field_name(),
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Skill {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        let normalized = match normalized.as_str() {
            "sleightofhand" => "sleight",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|skill| skill.field_name().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| DomainError::parse(format!("Unknown skill: {}", s)))
    }
}
