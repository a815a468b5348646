//! Delete character use case.

use std::sync::Arc;

use charserver_domain::{CharDeleteCode, CharacterGuid, SmartGuid};

use crate::infrastructure::ports::{CharacterRepo, SessionContext};

use super::error::CharacterError;

pub struct DeleteCharacter {
    characters: Arc<dyn CharacterRepo>,
}

impl DeleteCharacter {
    pub fn new(characters: Arc<dyn CharacterRepo>) -> Self {
        Self { characters }
    }

    /// Delete a character owned by the session's account.
    ///
    /// # Returns
    /// * `Ok(CharDeleteCode::Success)` - The row existed on this account and is gone
    /// * `Ok(CharDeleteCode::Failed)` - No such character on this account
    /// * `Err(CharacterError::MalformedIdentity)` - The guid is empty or not a
    ///   player guid; the caller must drop the session without replying
    pub async fn execute(
        &self,
        session: SessionContext,
        guid: SmartGuid,
    ) -> Result<CharDeleteCode, CharacterError> {
        if guid.creation_bits() == 0 || !guid.is_player() {
            return Err(CharacterError::MalformedIdentity(guid));
        }

        let removed = self
            .characters
            .delete_owned(CharacterGuid::new(guid.raw_id()), session.account_id)
            .await?;

        if removed {
            tracing::info!(account_id = %session.account_id, %guid, "Character deleted");
            Ok(CharDeleteCode::Success)
        } else {
            tracing::debug!(account_id = %session.account_id, %guid, "No owned character to delete");
            Ok(CharDeleteCode::Failed)
        }
    }
}
