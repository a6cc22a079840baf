//! Attribute block - the six bounded base statistics of a character.
//!
//! Only raw scores are stored. Modifiers change far more often than the
//! scores they derive from and are computed by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Attribute, AttributeScore};

/// Six attribute scores, each in `1..=20`. Missing scores read as 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    strength: AttributeScore,
    dexterity: AttributeScore,
    constitution: AttributeScore,
    intelligence: AttributeScore,
    wisdom: AttributeScore,
    charisma: AttributeScore,
}

impl Attributes {
    /// Build an attribute block from raw scores.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first attribute whose
    /// score is outside `1..=20`.
    pub fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Result<Self, DomainError> {
        let score = |attribute: Attribute, value: i32| {
            AttributeScore::new(value).map_err(|_| {
                DomainError::validation(format!(
                    "{} must be between 1 and 20, got {}",
                    attribute.field_name(),
                    value
                ))
            })
        };

        Ok(Self {
            strength: score(Attribute::Strength, strength)?,
            dexterity: score(Attribute::Dexterity, dexterity)?,
            constitution: score(Attribute::Constitution, constitution)?,
            intelligence: score(Attribute::Intelligence, intelligence)?,
            wisdom: score(Attribute::Wisdom, wisdom)?,
            charisma: score(Attribute::Charisma, charisma)?,
        })
    }

    pub fn get(&self, attribute: Attribute) -> AttributeScore {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, attribute: Attribute, score: AttributeScore) {
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Constitution => &mut self.constitution,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Charisma => &mut self.charisma,
        };
        *slot = score;
    }

    /// Builder-style variant of [`Attributes::set`].
    pub fn with(mut self, attribute: Attribute, score: AttributeScore) -> Self {
        self.set(attribute, score);
        self
    }

    /// Iterates `(attribute, score)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, AttributeScore)> + '_ {
        Attribute::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_bounds() {
        let low = Attributes::new(1, 1, 1, 1, 1, 1).unwrap();
        assert!(low.iter().all(|(_, s)| s.value() == 1));
        let high = Attributes::new(20, 20, 20, 20, 20, 20).unwrap();
        assert!(high.iter().all(|(_, s)| s.value() == 20));
    }

    #[test]
    fn new_rejects_any_single_out_of_range_field() {
        for position in 0..6 {
            for bad in [0, 21] {
                let mut scores = [10; 6];
                scores[position] = bad;
                let err = Attributes::new(
                    scores[0], scores[1], scores[2], scores[3], scores[4], scores[5],
                )
                .unwrap_err();
                let expected = Attribute::ALL[position].field_name();
                assert!(err.to_string().contains(expected), "{err}");
            }
        }
    }

    #[test]
    fn get_and_set_address_the_right_field() {
        let mut attrs = Attributes::new(8, 12, 14, 10, 13, 15).unwrap();
        assert_eq!(attrs.get(Attribute::Constitution).value(), 14);
        attrs.set(Attribute::Wisdom, AttributeScore::new(18).unwrap());
        assert_eq!(attrs.get(Attribute::Wisdom).value(), 18);
        assert_eq!(attrs.get(Attribute::Charisma).value(), 15);
    }

    #[test]
    fn document_uses_lowercase_keys() {
        let attrs = Attributes::new(8, 12, 14, 10, 13, 15).unwrap();
        let value = serde_json::to_value(attrs).unwrap();
        assert_eq!(value["strength"], 8);
        assert_eq!(value["charisma"], 15);
    }

    #[test]
    fn document_with_out_of_range_score_fails_to_load() {
        let json = r#"{"strength":8,"dexterity":12,"constitution":0,
            "intelligence":10,"wisdom":13,"charisma":15}"#;
        assert!(serde_json::from_str::<Attributes>(json).is_err());
    }

    #[test]
    fn partial_document_fills_missing_scores() {
        let attrs: Attributes = serde_json::from_str(r#"{"strength":17}"#).unwrap();
        assert_eq!(attrs.get(Attribute::Strength).value(), 17);
        assert_eq!(attrs.get(Attribute::Wisdom).value(), 10);
    }

    #[test]
    fn default_is_ten_everywhere() {
        assert!(Attributes::default().iter().all(|(_, s)| s.value() == 10));
    }
}
