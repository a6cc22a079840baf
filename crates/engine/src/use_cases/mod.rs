//! Use cases - user story orchestration over the ports.

pub mod character_sheet;
pub mod registration;

pub use character_sheet::{CharacterInput, CharacterSheetError, CharacterSheetUseCases};
pub use registration::{RegisterUser, RegistrationError, RegistrationOutcome};
