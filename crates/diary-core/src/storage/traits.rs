//! Storage trait definition.
//!
//! The `EntryStore` trait is the narrow interface the CLI talks to. It is
//! object safe so the interaction loop can hold a `&mut dyn EntryStore`.

use uuid::Uuid;

use super::types::{Entry, EntryFilter, NewEntry};
use crate::error::Result;

/// Storage interface for journal entries.
///
/// All implementations must ensure:
/// - Each operation is a single atomic statement
/// - Entries are never reordered in storage; ordering happens at query time
/// - Content is never modified after creation
pub trait EntryStore {
    /// Ensure the backing schema exists.
    ///
    /// Safe to call any number of times; later calls are no-ops.
    fn initialize(&mut self) -> Result<()>;

    /// Persist a new entry.
    ///
    /// # Returns
    ///
    /// Returns the identity assigned to the entry.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Validation` if the content is empty, or
    /// `DiaryError::Storage` if the write cannot be committed.
    fn create(&mut self, entry: &NewEntry) -> Result<Uuid>;

    /// List entries matching the filter.
    ///
    /// Entries are returned newest first. The returned vector is a snapshot:
    /// later writes do not affect it.
    fn list(&self, filter: &EntryFilter) -> Result<Vec<Entry>>;

    /// Delete an entry by identity.
    ///
    /// Returns `true` if a row was removed. A missing identity is not an
    /// error, so deleting twice is harmless.
    fn delete(&mut self, id: &Uuid) -> Result<bool>;

    /// Get an entry by identity.
    ///
    /// Returns `Ok(None)` if not found.
    fn get_entry(&self, id: &Uuid) -> Result<Option<Entry>>;

    /// Number of stored entries.
    fn count(&self) -> Result<usize>;
}
