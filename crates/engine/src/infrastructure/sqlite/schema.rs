//! SQLite schema initialization - tables, constraints and indexes.

use sqlx::SqlitePool;

const STATEMENTS: &[&str] = &[
    // Names are globally unique with binary (case-sensitive) collation. This is
    // the authoritative guard; the use case's availability check is advisory.
    r#"
    CREATE TABLE IF NOT EXISTS characters (
        guid INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        account_id INTEGER NOT NULL,
        realm_id INTEGER NOT NULL,
        race INTEGER NOT NULL,
        class INTEGER NOT NULL,
        sex INTEGER NOT NULL,
        skin INTEGER NOT NULL DEFAULT 0,
        face INTEGER NOT NULL DEFAULT 0,
        hair_style INTEGER NOT NULL DEFAULT 0,
        hair_color INTEGER NOT NULL DEFAULT 0,
        facial_hair_style INTEGER NOT NULL DEFAULT 0,
        level INTEGER NOT NULL DEFAULT 1,
        zone INTEGER NOT NULL DEFAULT 0,
        map INTEGER NOT NULL DEFAULT 0,
        x REAL NOT NULL DEFAULT 0,
        y REAL NOT NULL DEFAULT 0,
        z REAL NOT NULL DEFAULT 0,
        o REAL NOT NULL DEFAULT 0,
        guild_id INTEGER,
        character_flags INTEGER NOT NULL DEFAULT 0,
        customize_flags INTEGER NOT NULL DEFAULT 0,
        flags3 INTEGER NOT NULL DEFAULT 0,
        pet_display_id INTEGER,
        pet_level INTEGER,
        pet_family INTEGER,
        list_position INTEGER NOT NULL DEFAULT 0,
        first_login INTEGER NOT NULL DEFAULT 1
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_characters_account ON characters (account_id, list_position)",
    r#"
    CREATE TABLE IF NOT EXISTS template_sets (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS account_template_sets (
        account_id INTEGER NOT NULL,
        set_id INTEGER NOT NULL REFERENCES template_sets (id) ON DELETE CASCADE,
        PRIMARY KEY (account_id, set_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS realm_template_sets (
        realm_id INTEGER NOT NULL,
        set_id INTEGER NOT NULL REFERENCES template_sets (id) ON DELETE CASCADE,
        PRIMARY KEY (realm_id, set_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS character_abilities (
        guid INTEGER NOT NULL REFERENCES characters (guid) ON DELETE CASCADE,
        ability_id INTEGER NOT NULL,
        PRIMARY KEY (guid, ability_id)
    )
    "#,
];

/// Create tables and indexes. Idempotent; run once on startup.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("SQLite schema initialized (tables and indexes ensured)");
    Ok(())
}
