//! Value objects for the character sheet schema.

mod attribute;
mod attribute_score;
mod skill;

pub use attribute::Attribute;
pub use attribute_score::{AttributeScore, MAX_ATTRIBUTE_SCORE, MIN_ATTRIBUTE_SCORE};
pub use skill::Skill;
