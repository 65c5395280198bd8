use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DATABASE_FILE_NAME: &str = "diary.db";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DiaryConfig {
    #[serde(default)]
    pub diary: DiarySection,
    #[serde(default)]
    pub ui: UiSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DiarySection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    pub timezone: Option<String>,
    #[serde(default = "default_true")]
    pub clear_screen: bool,
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            timezone: None,
            clear_screen: true,
            color: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_database_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(DATABASE_FILE_NAME))
}

pub fn read_config(path: &Path) -> anyhow::Result<DiaryConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config at `path`, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<DiaryConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(DiaryConfig::default());
    }
    read_config(path)
}

pub fn parse_config(contents: &str) -> Result<DiaryConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("diary"));
        }
    }
    Ok(home_dir()?.join(".config").join("diary"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("diary"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("diary"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
