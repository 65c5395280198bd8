//! Error types for Diary core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Diary operations.
pub type Result<T> = std::result::Result<T, DiaryError>;

/// Core error type for Diary operations.
#[derive(Debug, Error)]
pub enum DiaryError {
    /// Storage backend unreachable, unreadable or unwritable
    #[error("Storage error: {0}")]
    Storage(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl DiaryError {
    /// Whether this error came from the storage backend.
    pub fn is_storage(&self) -> bool {
        matches!(self, DiaryError::Storage(_))
    }
}

impl From<std::io::Error> for DiaryError {
    fn from(err: std::io::Error) -> Self {
        DiaryError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for DiaryError {
    fn from(err: rusqlite::Error) -> Self {
        DiaryError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_storage() {
        let err: DiaryError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.is_storage());
        assert_eq!(err.to_string(), "Storage error: denied");
    }

    #[test]
    fn test_validation_is_not_storage() {
        let err = DiaryError::Validation("empty".to_string());
        assert!(!err.is_storage());
    }
}
