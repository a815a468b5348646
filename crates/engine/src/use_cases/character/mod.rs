//! Character roster use cases.
//!
//! Listing, creating and deleting the characters on an account.

use std::sync::Arc;

mod create;
mod delete;
mod enumerate;
mod error;

pub use create::{CreateCharacter, CreateCharacterInput};
pub use delete::DeleteCharacter;
pub use enumerate::EnumerateCharacters;
pub use error::CharacterError;

/// Container for character roster use cases.
pub struct CharacterUseCases {
    pub enumerate: Arc<EnumerateCharacters>,
    pub create: Arc<CreateCharacter>,
    pub delete: Arc<DeleteCharacter>,
}

impl CharacterUseCases {
    pub fn new(
        enumerate: Arc<EnumerateCharacters>,
        create: Arc<CreateCharacter>,
        delete: Arc<DeleteCharacter>,
    ) -> Self {
        Self {
            enumerate,
            create,
            delete,
        }
    }
}
