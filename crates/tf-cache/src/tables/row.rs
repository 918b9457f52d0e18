//! Column decoding helpers shared by the table modules.

use crate::{CacheError, Result};

use tf_core::ErrorLocation;

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

#[track_caller]
pub(crate) fn col_uuid(row: &SqliteRow, column: &str) -> Result<Uuid> {
    let value: String = row.try_get(column)?;
    Uuid::parse_str(&value).map_err(|e| CacheError::Initialization {
        message: format!("Invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn col_uuid_opt(row: &SqliteRow, column: &str) -> Result<Option<Uuid>> {
    let value: Option<String> = row.try_get(column)?;
    value
        .map(|v| {
            Uuid::parse_str(&v).map_err(|e| CacheError::Initialization {
                message: format!("Invalid UUID in {}: {}", column, e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()
}

#[track_caller]
pub(crate) fn col_timestamp(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>> {
    let value: i64 = row.try_get(column)?;
    DateTime::from_timestamp(value, 0).ok_or_else(|| CacheError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn col_timestamp_opt(row: &SqliteRow, column: &str) -> Result<Option<DateTime<Utc>>> {
    let value: Option<i64> = row.try_get(column)?;
    Ok(value.and_then(|ts| DateTime::from_timestamp(ts, 0)))
}

#[track_caller]
pub(crate) fn col_date(row: &SqliteRow, column: &str) -> Result<NaiveDate> {
    let value: String = row.try_get(column)?;
    value
        .parse()
        .map_err(|e| CacheError::Initialization {
            message: format!("Invalid date in {}: {}", column, e),
            location: ErrorLocation::from(Location::caller()),
        })
}

#[track_caller]
pub(crate) fn col_enum<T>(row: &SqliteRow, column: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value: String = row.try_get(column)?;
    value.parse().map_err(|e: T::Err| CacheError::Initialization {
        message: format!("Invalid value in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}
