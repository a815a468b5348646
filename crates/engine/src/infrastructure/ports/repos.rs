//! Repository port traits for database access.

use async_trait::async_trait;
use charserver_domain::{
    AccountId, Character, CharacterGuid, CharacterName, NewCharacter, RealmId, TemplateSet,
    TemplateSetId,
};

use super::error::RepoError;

// =============================================================================
// Character Store
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    /// Every character on the account, ordered by list position.
    async fn list_for_account(&self, account_id: AccountId) -> Result<Vec<Character>, RepoError>;

    /// Whether any character, on any account, already uses this exact name.
    async fn name_exists(&self, name: &CharacterName) -> Result<bool, RepoError>;

    /// Store a new character. The store assigns guid and list position.
    ///
    /// Returns `RepoError::ConstraintViolation` when the name was taken
    /// between the availability check and the write.
    async fn insert(&self, character: &NewCharacter) -> Result<Character, RepoError>;

    /// Delete the character only if `account_id` owns it.
    /// Returns whether a row was removed.
    async fn delete_owned(
        &self,
        guid: CharacterGuid,
        account_id: AccountId,
    ) -> Result<bool, RepoError>;
}

// =============================================================================
// Creation Template Sets
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateSetRepo: Send + Sync {
    async fn account_template_set_ids(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<TemplateSetId>, RepoError>;

    async fn realm_template_set_ids(&self, realm_id: RealmId)
        -> Result<Vec<TemplateSetId>, RepoError>;

    async fn get(&self, id: TemplateSetId) -> Result<Option<TemplateSet>, RepoError>;
}
