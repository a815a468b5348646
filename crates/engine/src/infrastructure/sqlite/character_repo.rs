//! SQLite character repository implementation.

use async_trait::async_trait;
use charserver_domain::{
    AccountId, Appearance, Character, CharacterFlags, CharacterGuid, CharacterName, NewCharacter,
    PetSummary, Position, RealmId,
};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use super::helpers::{int_column, optional_int_column, real_column, write_error};
use crate::infrastructure::ports::{CharacterRepo, RepoError};

const CHARACTER_COLUMNS: &str = "guid, name, account_id, realm_id, race, class, sex, skin, face, \
    hair_style, hair_color, facial_hair_style, level, zone, map, x, y, z, o, guild_id, \
    character_flags, customize_flags, flags3, pet_display_id, pet_level, pet_family, \
    list_position, first_login";

pub struct SqliteCharacterRepo {
    pool: SqlitePool,
}

impl SqliteCharacterRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterRepo for SqliteCharacterRepo {
    async fn list_for_account(&self, account_id: AccountId) -> Result<Vec<Character>, RepoError> {
        let query = format!(
            "SELECT {} FROM characters WHERE account_id = ? ORDER BY list_position, guid",
            CHARACTER_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(i64::from(account_id.get()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list_for_account", e))?;

        // One undecodable row drops out of the roster instead of failing it.
        let characters = rows
            .iter()
            .filter_map(|row| match row_to_character(row) {
                Ok(character) => Some(character),
                Err(e) => {
                    tracing::warn!(
                        account_id = %account_id,
                        error = %e,
                        "Skipping undecodable character row"
                    );
                    None
                }
            })
            .collect();
        Ok(characters)
    }

    async fn name_exists(&self, name: &CharacterName) -> Result<bool, RepoError> {
        let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM characters WHERE name = ?) AS taken")
            .bind(name.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::database("name_exists", e))?;

        let taken: i64 = row
            .try_get("taken")
            .map_err(|e| RepoError::database("name_exists", e))?;
        Ok(taken != 0)
    }

    async fn insert(&self, character: &NewCharacter) -> Result<Character, RepoError> {
        // The new character takes the account's lowest free list position.
        let row = sqlx::query(
            r#"
            INSERT INTO characters (
                name, account_id, realm_id, race, class, sex,
                skin, face, hair_style, hair_color, facial_hair_style,
                level, zone, map, x, y, z, o,
                character_flags, first_login, list_position
            )
            VALUES (
                ?, ?, ?, ?, ?, ?,
                ?, ?, ?, ?, ?,
                ?, ?, ?, ?, ?, ?, ?,
                ?, ?,
                (SELECT CASE
                    WHEN NOT EXISTS (
                        SELECT 1 FROM characters WHERE account_id = ? AND list_position = 0
                    ) THEN 0
                    ELSE (
                        SELECT MIN(taken.list_position) + 1
                        FROM characters AS taken
                        WHERE taken.account_id = ?
                          AND NOT EXISTS (
                              SELECT 1 FROM characters AS following
                              WHERE following.account_id = taken.account_id
                                AND following.list_position = taken.list_position + 1
                          )
                    )
                END)
            )
            RETURNING guid, list_position
            "#,
        )
        .bind(character.name.as_str())
        .bind(i64::from(character.account_id.get()))
        .bind(i64::from(character.realm_id.get()))
        .bind(i64::from(character.race))
        .bind(i64::from(character.class))
        .bind(i64::from(character.sex))
        .bind(i64::from(character.appearance.skin))
        .bind(i64::from(character.appearance.face))
        .bind(i64::from(character.appearance.hair_style))
        .bind(i64::from(character.appearance.hair_color))
        .bind(i64::from(character.appearance.facial_hair_style))
        .bind(i64::from(character.level))
        .bind(i64::from(character.zone))
        .bind(i64::from(character.map))
        .bind(f64::from(character.position.x))
        .bind(f64::from(character.position.y))
        .bind(f64::from(character.position.z))
        .bind(f64::from(character.position.orientation))
        .bind(i64::from(character.flags.bits()))
        .bind(character.first_login)
        .bind(i64::from(character.account_id.get()))
        .bind(i64::from(character.account_id.get()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("insert_character", e))?;

        let guid: u64 = int_column(&row, "guid")?;
        // Rosters past 255 entries share the last slot.
        let list_position =
            u8::try_from(int_column::<i64>(&row, "list_position")?).unwrap_or(u8::MAX);

        Ok(Character::from_new(
            CharacterGuid::new(guid),
            list_position,
            character.clone(),
        ))
    }

    async fn delete_owned(
        &self,
        guid: CharacterGuid,
        account_id: AccountId,
    ) -> Result<bool, RepoError> {
        // Guids beyond i64 can't have been issued by this store.
        let Ok(guid) = i64::try_from(guid.get()) else {
            return Ok(false);
        };

        let result = sqlx::query("DELETE FROM characters WHERE guid = ? AND account_id = ?")
            .bind(guid)
            .bind(i64::from(account_id.get()))
            .execute(&self.pool)
            .await
            .map_err(|e| write_error("delete_character", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_character(row: &SqliteRow) -> Result<Character, RepoError> {
    let name: String = row
        .try_get("name")
        .map_err(|e| RepoError::database("decode_row", e))?;
    let name = CharacterName::from_stored(name);

    let pet = optional_int_column::<u32>(row, "pet_display_id")?
        .map(|display_id| -> Result<PetSummary, RepoError> {
            Ok(PetSummary {
                display_id,
                level: optional_int_column(row, "pet_level")?.unwrap_or(0),
                family: optional_int_column(row, "pet_family")?.unwrap_or(0),
            })
        })
        .transpose()?;

    let first_login: i64 = int_column(row, "first_login")?;

    Ok(Character {
        guid: CharacterGuid::new(int_column(row, "guid")?),
        name,
        account_id: AccountId::new(int_column(row, "account_id")?),
        realm_id: RealmId::new(int_column(row, "realm_id")?),
        race: int_column(row, "race")?,
        class: int_column(row, "class")?,
        sex: int_column(row, "sex")?,
        appearance: Appearance {
            skin: int_column(row, "skin")?,
            face: int_column(row, "face")?,
            hair_style: int_column(row, "hair_style")?,
            hair_color: int_column(row, "hair_color")?,
            facial_hair_style: int_column(row, "facial_hair_style")?,
        },
        level: int_column(row, "level")?,
        zone: int_column(row, "zone")?,
        map: int_column(row, "map")?,
        position: Position {
            x: real_column(row, "x")?,
            y: real_column(row, "y")?,
            z: real_column(row, "z")?,
            orientation: real_column(row, "o")?,
        },
        guild_id: optional_int_column(row, "guild_id")?,
        flags: CharacterFlags::from_bits(int_column(row, "character_flags")?),
        customize_flags: int_column(row, "customize_flags")?,
        flags3: int_column(row, "flags3")?,
        pet,
        list_position: int_column(row, "list_position")?,
        first_login: first_login != 0,
    })
}
