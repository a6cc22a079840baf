//! Character sheet domain.
//!
//! Schema layer for D&D character sheets: the records a sheet is made of,
//! their bounds, and the `Character` aggregate that owns them. Nothing in
//! this crate performs I/O or computes derived statistics.

pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::Character;
pub use entities::{Ability, Armor, Attack, Attributes, ClassInfo, Saves, Skills};
pub use error::DomainError;
pub use ids::{CharacterId, UserId};
pub use value_objects::{Attribute, AttributeScore, Skill};
