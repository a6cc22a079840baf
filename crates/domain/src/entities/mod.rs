//! Embedded records of a character sheet.
//!
//! None of these has an identity of its own; they are stored inline in
//! their parent document.

mod attributes;
mod class_info;
mod equipment;
mod proficiencies;

pub use attributes::Attributes;
pub use class_info::{Ability, ClassInfo};
pub use equipment::{Armor, Attack};
pub use proficiencies::{Saves, Skills};
