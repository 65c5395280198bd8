//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Database could not be opened, read or written.
    pub const STORAGE_FAILED: i32 = 3;

    /// Config file unreadable or invalid.
    pub const CONFIG_INVALID: i32 = 4;
}
