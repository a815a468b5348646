//! SQLite creation template set repository.

use async_trait::async_trait;
use charserver_domain::{AccountId, RealmId, TemplateSet, TemplateSetId};
use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use super::helpers::int_column;
use crate::infrastructure::ports::{RepoError, TemplateSetRepo};

pub struct SqliteTemplateSetRepo {
    pool: SqlitePool,
}

impl SqliteTemplateSetRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn set_ids(
        &self,
        operation: &'static str,
        query: &'static str,
        owner: u32,
    ) -> Result<Vec<TemplateSetId>, RepoError> {
        let rows = sqlx::query(query)
            .bind(i64::from(owner))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database(operation, e))?;

        rows.iter()
            .map(|row| int_column(row, "set_id").map(TemplateSetId::new))
            .collect()
    }
}

#[async_trait]
impl TemplateSetRepo for SqliteTemplateSetRepo {
    async fn account_template_set_ids(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<TemplateSetId>, RepoError> {
        self.set_ids(
            "account_template_set_ids",
            "SELECT set_id FROM account_template_sets WHERE account_id = ? ORDER BY set_id",
            account_id.get(),
        )
        .await
    }

    async fn realm_template_set_ids(
        &self,
        realm_id: RealmId,
    ) -> Result<Vec<TemplateSetId>, RepoError> {
        self.set_ids(
            "realm_template_set_ids",
            "SELECT set_id FROM realm_template_sets WHERE realm_id = ? ORDER BY set_id",
            realm_id.get(),
        )
        .await
    }

    async fn get(&self, id: TemplateSetId) -> Result<Option<TemplateSet>, RepoError> {
        let row = sqlx::query("SELECT id, name, description FROM template_sets WHERE id = ?")
            .bind(i64::from(id.get()))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get_template_set", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(TemplateSet {
            id: TemplateSetId::new(int_column(&row, "id")?),
            name: row
                .try_get("name")
                .map_err(|e| RepoError::database("get_template_set", e))?,
            description: row
                .try_get("description")
                .map_err(|e| RepoError::database("get_template_set", e))?,
        }))
    }
}
