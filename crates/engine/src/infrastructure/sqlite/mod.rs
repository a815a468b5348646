//! SQLite implementations of the storage ports.

use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::infrastructure::ports::RepoError;

mod abilities;
mod character_repo;
mod helpers;
mod schema;
mod template_repo;

pub use abilities::SqliteAbilityLearner;
pub use character_repo::SqliteCharacterRepo;
pub use schema::ensure_schema;
pub use template_repo::SqliteTemplateSetRepo;


/// All SQLite repositories sharing one pool.
pub struct SqliteRepositories {
    pub pool: SqlitePool,
    pub character: Arc<SqliteCharacterRepo>,
    pub template_set: Arc<SqliteTemplateSetRepo>,
}

impl SqliteRepositories {
    /// Open (creating if missing) the database file and ensure the schema.
    pub async fn connect(db_path: &str) -> Result<Self, RepoError> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path))
            .map_err(|e| RepoError::database("connect", e))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        ensure_schema(&pool)
            .await
            .map_err(|e| RepoError::database("ensure_schema", e))?;

        Ok(Self::new(pool))
    }

    pub fn new(pool: SqlitePool) -> Self {
        Self {
            character: Arc::new(SqliteCharacterRepo::new(pool.clone())),
            template_set: Arc::new(SqliteTemplateSetRepo::new(pool.clone())),
            pool,
        }
    }
}
