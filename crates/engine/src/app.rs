//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::SystemClock,
    memory::InMemoryDocumentStore,
    ports::{CharacterRepo, ClockPort, UserRepo},
};
use crate::use_cases;

/// Main application state.
///
/// Holds the use cases; the ports are wired into them in [`App::new`].
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub character_sheet: use_cases::CharacterSheetUseCases,
    pub register: use_cases::RegisterUser,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        user_repo: Arc<dyn UserRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let use_cases = UseCases {
            character_sheet: use_cases::CharacterSheetUseCases::new(
                character_repo,
                user_repo.clone(),
                clock.clone(),
            ),
            register: use_cases::RegisterUser::new(user_repo, clock),
        };

        Self { use_cases }
    }

    /// App backed by a fresh in-memory document store and the system clock.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryDocumentStore::new());
        Self::new(store.clone(), store, Arc::new(SystemClock::new()))
    }
}
