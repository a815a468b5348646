//! Ports for collaborators outside the character store.

use async_trait::async_trait;
use charserver_domain::{Character, CreationData};

use super::error::RepoError;

/// Read-only static tables shipped with the client data.
#[cfg_attr(test, mockall::automock)]
pub trait ReferenceDataPort: Send + Sync {
    fn has_race(&self, race: u8) -> bool;
    fn has_class(&self, class: u8) -> bool;
    /// Whether the race may be played as the class.
    fn has_race_class(&self, race: u8, class: u8) -> bool;
    /// Default spawn for a character created without a template.
    fn creation_data(&self, race: u8, class: u8) -> Option<CreationData>;
}

/// Grants the abilities every new character starts with.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AbilityPort: Send + Sync {
    async fn learn_start_abilities(&self, character: &Character) -> Result<(), RepoError>;
}
