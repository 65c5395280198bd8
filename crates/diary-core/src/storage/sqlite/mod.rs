//! SQLite storage backend.
//!
//! One database file, one `entries` table. Every operation is a single
//! statement, so SQLite's own atomicity is all the recovery there is.

mod row;

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};
use uuid::Uuid;

use crate::error::{DiaryError, Result};
use crate::storage::traits::EntryStore;
use crate::storage::types::{Entry, EntryFilter, NewEntry};

use row::{encode_timestamp, EntryRow};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS entries (
        id TEXT PRIMARY KEY,
        content TEXT NOT NULL,
        timestamp TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS entries_timestamp ON entries (timestamp);
"#;

/// SQLite-backed entry store.
pub struct SqliteStore {
    path: Option<PathBuf>,
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema exists.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Storage` if the directory or file cannot be
    /// created, or the schema cannot be written.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    DiaryError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let conn = Connection::open(path).map_err(|e| {
            DiaryError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let mut store = Self {
            path: Some(path.to_path_buf()),
            conn,
        };
        store.initialize()?;

        tracing::info!(path = %path.display(), "opened diary database");
        Ok(store)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { path: None, conn };
        store.initialize()?;
        Ok(store)
    }

    /// Path of the backing file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Close the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| DiaryError::from(e))
    }
}

impl EntryStore for SqliteStore {
    fn initialize(&mut self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    fn create(&mut self, entry: &NewEntry) -> Result<Uuid> {
        if entry.content.trim().is_empty() {
            return Err(DiaryError::Validation(
                "Entry content cannot be empty".to_string(),
            ));
        }

        let id = Uuid::now_v7();
        self.conn.execute(
            "INSERT INTO entries (id, content, timestamp) VALUES (?, ?, ?)",
            (
                id.to_string(),
                entry.content.as_str(),
                encode_timestamp(&entry.timestamp),
            ),
        )?;

        tracing::debug!(%id, "created entry");
        Ok(id)
    }

    fn list(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        let mut query = String::from("SELECT id, content, timestamp FROM entries");
        if let Some(ref fragment) = filter.contains {
            // instr() is case-sensitive, unlike LIKE
            query.push_str(" WHERE instr(content, ?) > 0");
            params.push(Box::new(fragment.clone()));
        }
        query.push_str(" ORDER BY timestamp DESC, rowid DESC");

        if let Some(limit) = filter.limit {
            query.push_str(" LIMIT ?");
            params.push(Box::new(limit as i64));
        }

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter()),
            EntryRow::from_sql,
        )?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(Entry::try_from(row?)?);
        }

        tracing::debug!(
            count = entries.len(),
            filtered = filter.contains.is_some(),
            "listed entries"
        );
        Ok(entries)
    }

    fn delete(&mut self, id: &Uuid) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?", [id.to_string()])?;

        tracing::debug!(%id, removed, "deleted entry");
        Ok(removed > 0)
    }

    fn get_entry(&self, id: &Uuid) -> Result<Option<Entry>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, content, timestamp FROM entries WHERE id = ?",
                [id.to_string()],
                EntryRow::from_sql,
            )
            .optional()?;

        row.map(Entry::try_from).transpose()
    }

    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| DiaryError::Storage(format!("Invalid entry count: {}", count)))
    }
}
