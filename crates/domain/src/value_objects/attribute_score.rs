//! Bounded attribute score newtype.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Lowest score an attribute may hold.
pub const MIN_ATTRIBUTE_SCORE: i32 = 1;

/// Highest score an attribute may hold.
pub const MAX_ATTRIBUTE_SCORE: i32 = 20;

/// A validated attribute score in `1..=20`.
///
/// Deserialization goes through [`AttributeScore::new`], so a stored or
/// submitted document with an out-of-range score fails to load.
///
/// # Example
///
/// ```
/// use charsheets_domain::value_objects::AttributeScore;
///
/// assert_eq!(AttributeScore::new(14).unwrap().value(), 14);
/// assert!(AttributeScore::new(0).is_err());
/// assert!(AttributeScore::new(21).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AttributeScore(i32);

impl AttributeScore {
    /// Create a new attribute score.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value` is outside `1..=20`.
    pub fn new(value: i32) -> Result<Self, DomainError> {
        if !(MIN_ATTRIBUTE_SCORE..=MAX_ATTRIBUTE_SCORE).contains(&value) {
            return Err(DomainError::validation(format!(
                "attribute score must be between {} and {}, got {}",
                MIN_ATTRIBUTE_SCORE, MAX_ATTRIBUTE_SCORE, value
            )));
        }
        Ok(Self(value))
    }

    /// Returns the raw score.
    pub fn value(self) -> i32 {
        self.0
    }
}

impl Default for AttributeScore {
    fn default() -> Self {
        Self(10)
    }
}

impl fmt::Display for AttributeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for AttributeScore {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AttributeScore> for i32 {
    fn from(score: AttributeScore) -> i32 {
        score.0
    }
}
