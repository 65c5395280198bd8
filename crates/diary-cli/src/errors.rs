//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use diary_core::DiaryError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Database unreachable or unwritable
    Storage(String),

    /// Config file unreadable or invalid
    Config { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Storage(message) => write!(f, "{}", message),
            CliError::Config { message, hint } => write!(f, "{}\n{}", message, hint),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a Storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        CliError::Storage(message.into())
    }

    /// Create a Config error with message and hint.
    pub fn config(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::Config {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Storage(_) => exit_codes::STORAGE_FAILED,
            CliError::Config { .. } => exit_codes::CONFIG_INVALID,
        }
    }
}

/// Exit code for any error that reached `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<DiaryError>() {
        Some(core_err) if core_err.is_storage() => exit_codes::STORAGE_FAILED,
        _ => exit_codes::FAILURE,
    }
}

/// Print error message to stderr and exit with the matching code.
pub fn exit_with(err: &anyhow::Error) -> ! {
    eprintln!("Error: {:#}", err);
    std::process::exit(exit_code_for(err))
}
