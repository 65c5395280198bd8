//! Storage abstraction for Diary.
//!
//! This module defines the `EntryStore` trait and the core types for
//! persisting journal entries.
//!
//! ## Architecture
//!
//! The storage layer is backend-agnostic. Callers hold a `&mut dyn EntryStore`
//! and only ever see `create`, `list` and `delete` (plus small lookups).
//! The shipped backend is a single-file SQLite database.

pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use sqlite::SqliteStore;
pub use traits::EntryStore;
pub use types::{Entry, EntryFilter, NewEntry};
