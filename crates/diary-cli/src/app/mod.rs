//! Application-level utilities for the Diary CLI.
//!
//! This module provides:
//! - Path resolution for config, database and log files
//! - The session handle passed to every interactive flow

mod resolver;
mod session;

pub use resolver::{resolve_config_path, resolve_database_path, resolve_log_dir};
pub use session::Session;

#[cfg(test)]
pub(crate) use session::testing;
