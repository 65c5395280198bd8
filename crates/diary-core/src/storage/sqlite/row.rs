//! Entry row type for database queries.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::error::{DiaryError, Result};
use crate::storage::types::Entry;

/// Raw row data from the entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: String,
    pub content: String,
    pub timestamp: String,
}

impl EntryRow {
    pub fn from_sql(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            content: row.get(1)?,
            timestamp: row.get(2)?,
        })
    }
}

impl TryFrom<EntryRow> for Entry {
    type Error = DiaryError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| DiaryError::Storage(format!("Invalid entry UUID: {}", e)))?;
        let timestamp = DateTime::parse_from_rfc3339(&row.timestamp)
            .map_err(|e| DiaryError::Storage(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(Entry {
            id,
            content: row.content,
            timestamp,
        })
    }
}

/// Encode a timestamp for storage.
///
/// Fixed nanosecond precision keeps lexical order equal to chronological
/// order, which `ORDER BY timestamp` relies on.
pub fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
