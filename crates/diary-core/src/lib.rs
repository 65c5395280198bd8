//! # Diary Core
//!
//! Core library for Diary - a small, local, CLI-first journal.
//!
//! This crate provides the entry data model, the storage abstraction and its
//! SQLite implementation, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: `EntryStore` trait, entry types and the SQLite backend
//! - **error**: Error type shared by all core operations

pub mod error;
pub mod storage;

pub use error::{DiaryError, Result};
pub use storage::{EntryStore, SqliteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
