use std::backtrace::Backtrace;
use std::collections::HashSet;

use rusqlite::Connection;
use serde::{Deserialize, Deserializer};

use crate::model::error::ServiceError;
use crate::repository::Db;

/// opens a connection for a service function, logging and mapping the failure if the database can't be opened
pub fn open_connection(db: &Db) -> Result<Connection, ServiceError> {
    db.open_connection().map_err(|e| {
        log::error!(
            "Failed to open a connection to the database at {:?}! Error is {e:?}\n{}",
            db.location(),
            Backtrace::force_capture()
        );
        ServiceError::DbError
    })
}

/// pulls a required string field out of a request body. Missing and empty values are both rejected
pub fn required_field(value: Option<String>, field: &str) -> Result<String, ServiceError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ServiceError::missing_field(field)),
    }
}

/// used with `#[serde(default, deserialize_with = "deserialize_some")]` on an `Option<Option<T>>`, so that
/// a missing field is `None` and an explicit `null` is `Some(None)`
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// removes repeated ids while keeping the order of first appearance
pub fn dedupe_ids(ids: Vec<u32>) -> Vec<u32> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
