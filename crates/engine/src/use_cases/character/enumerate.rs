//! Enumerate characters use case.

use std::sync::Arc;

use charserver_domain::Character;

use crate::infrastructure::ports::{CharacterRepo, SessionContext};

use super::error::CharacterError;

pub struct EnumerateCharacters {
    characters: Arc<dyn CharacterRepo>,
}

impl EnumerateCharacters {
    pub fn new(characters: Arc<dyn CharacterRepo>) -> Self {
        Self { characters }
    }

    /// The session's roster, ordered by list position.
    pub async fn execute(&self, session: SessionContext) -> Result<Vec<Character>, CharacterError> {
        let mut roster = self.characters.list_for_account(session.account_id).await?;
        // The client renders in slot order; don't trust the adapter's ordering.
        roster.sort_by_key(|c| (c.list_position, c.guid));

        tracing::debug!(
            account_id = %session.account_id,
            count = roster.len(),
            "Enumerated characters"
        );
        Ok(roster)
    }
}
