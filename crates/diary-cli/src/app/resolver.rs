//! Path resolution for config, database and log files.

use std::path::PathBuf;

use crate::config::{default_config_path, default_database_path, xdg_data_dir, DiaryConfig};

/// Resolve the config file path.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    default_config_path()
}

/// Resolve the database path from config, falling back to the XDG data dir.
pub fn resolve_database_path(config: &DiaryConfig) -> anyhow::Result<PathBuf> {
    match config.diary.path.as_deref().map(str::trim) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => default_database_path(),
    }
}

/// Resolve the directory the log file is written to.
pub fn resolve_log_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_path_wins() {
        let mut config = DiaryConfig::default();
        config.diary.path = Some("/tmp/elsewhere.db".to_string());
        assert_eq!(
            resolve_database_path(&config).unwrap(),
            PathBuf::from("/tmp/elsewhere.db")
        );
    }

    #[test]
    fn test_blank_path_falls_back_to_default() {
        let mut config = DiaryConfig::default();
        config.diary.path = Some("  ".to_string());
        let path = resolve_database_path(&config).unwrap();
        assert!(path.ends_with("diary/diary.db"));
    }
}
