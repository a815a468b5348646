//! Row decoding helpers.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::infrastructure::ports::RepoError;

/// Read an INTEGER column into a narrower or unsigned type.
pub(super) fn int_column<T>(row: &SqliteRow, column: &'static str) -> Result<T, RepoError>
where
    T: TryFrom<i64>,
{
    let raw: i64 = row
        .try_get(column)
        .map_err(|e| RepoError::database("decode_row", e))?;
    T::try_from(raw)
        .map_err(|_| RepoError::serialization(format!("{} out of range: {}", column, raw)))
}

/// Same as [`int_column`] for nullable columns.
pub(super) fn optional_int_column<T>(
    row: &SqliteRow,
    column: &'static str,
) -> Result<Option<T>, RepoError>
where
    T: TryFrom<i64>,
{
    let raw: Option<i64> = row
        .try_get(column)
        .map_err(|e| RepoError::database("decode_row", e))?;
    raw.map(|value| {
        T::try_from(value)
            .map_err(|_| RepoError::serialization(format!("{} out of range: {}", column, value)))
    })
    .transpose()
}

pub(super) fn real_column(row: &SqliteRow, column: &'static str) -> Result<f32, RepoError> {
    let raw: f64 = row
        .try_get(column)
        .map_err(|e| RepoError::database("decode_row", e))?;
    Ok(raw as f32)
}

/// Map a write error, singling out unique/foreign-key rejections.
pub(super) fn write_error(operation: &'static str, error: sqlx::Error) -> RepoError {
    match &error {
        sqlx::Error::Database(db)
            if db.is_unique_violation() || db.is_foreign_key_violation() =>
        {
            RepoError::constraint(db.message())
        }
        _ => RepoError::database(operation, error),
    }
}
