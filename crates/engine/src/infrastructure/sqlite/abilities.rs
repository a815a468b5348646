//! Start ability grants backed by the character database.

use std::sync::Arc;

use async_trait::async_trait;
use charserver_domain::Character;
use sqlx::sqlite::SqlitePool;

use crate::infrastructure::ports::{AbilityPort, ReferenceDataPort, RepoError};

/// Writes the race/class start abilities for a freshly created character.
pub struct SqliteAbilityLearner {
    pool: SqlitePool,
    reference: Arc<dyn ReferenceDataPort>,
}

impl SqliteAbilityLearner {
    pub fn new(pool: SqlitePool, reference: Arc<dyn ReferenceDataPort>) -> Self {
        Self { pool, reference }
    }
}

#[async_trait]
impl AbilityPort for SqliteAbilityLearner {
    async fn learn_start_abilities(&self, character: &Character) -> Result<(), RepoError> {
        let abilities = self
            .reference
            .creation_data(character.race, character.class)
            .map(|data| data.start_abilities)
            .unwrap_or_default();

        if abilities.is_empty() {
            return Ok(());
        }

        let guid = i64::try_from(character.guid.get())
            .map_err(|_| RepoError::serialization(format!("guid out of range: {}", character.guid)))?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("learn_start_abilities", e))?;

        for ability_id in &abilities {
            sqlx::query("INSERT OR IGNORE INTO character_abilities (guid, ability_id) VALUES (?, ?)")
                .bind(guid)
                .bind(i64::from(*ability_id))
                .execute(&mut *tx)
                .await
                .map_err(|e| RepoError::database("learn_start_abilities", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepoError::database("learn_start_abilities", e))?;

        tracing::debug!(
            guid = %character.guid,
            count = abilities.len(),
            "Start abilities learned"
        );
        Ok(())
    }
}
