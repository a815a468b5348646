//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    ports::{AbilityPort, CharacterRepo, ReferenceDataPort, TemplateSetRepo},
    sqlite::{SqliteAbilityLearner, SqliteRepositories},
};
use crate::use_cases;

/// Main application state.
///
/// Holds all repository ports and use cases.
/// Passed to HTTP/WebSocket handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for the injected ports.
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
    pub template_set: Arc<dyn TemplateSetRepo>,
    pub reference: Arc<dyn ReferenceDataPort>,
    pub abilities: Arc<dyn AbilityPort>,
}

/// Container for all use cases.
pub struct UseCases {
    pub character: use_cases::CharacterUseCases,
}

impl App {
    /// Wire the application on top of the SQLite store.
    pub fn new(
        repos: SqliteRepositories,
        reference: Arc<dyn ReferenceDataPort>,
        strict_create_outcome: bool,
    ) -> Self {
        let abilities = Arc::new(SqliteAbilityLearner::new(repos.pool.clone(), reference.clone()));

        Self::from_ports(
            Repositories {
                character: repos.character,
                template_set: repos.template_set,
                reference,
                abilities,
            },
            strict_create_outcome,
        )
    }

    /// Wire the application from already-built ports.
    pub fn from_ports(repositories: Repositories, strict_create_outcome: bool) -> Self {
        let character = use_cases::CharacterUseCases::new(
            Arc::new(use_cases::character::EnumerateCharacters::new(
                repositories.character.clone(),
            )),
            Arc::new(
                use_cases::character::CreateCharacter::new(
                    repositories.character.clone(),
                    repositories.template_set.clone(),
                    repositories.reference.clone(),
                    repositories.abilities.clone(),
                )
                .with_strict_write_outcome(strict_create_outcome),
            ),
            Arc::new(use_cases::character::DeleteCharacter::new(
                repositories.character.clone(),
            )),
        );

        Self {
            repositories,
            use_cases: UseCases { character },
        }
    }
}
