//! Settings storage
//!
//! Manages persistence of sync preferences and application settings.

use crate::storage::{get_data_dir, StorageError};
use crate::types::is_reserved_category;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_REMOTE_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Environment variable overriding the remote endpoint
pub const REMOTE_URL_ENV: &str = "QUOTEDECK_REMOTE_URL";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Endpoint polled for remote quotes
    #[serde(default = "default_remote_url")]
    pub remote_url: String,
    /// Category assigned to every quote fetched from the remote endpoint
    #[serde(default = "default_remote_category")]
    pub remote_category: String,
    /// Number of remote items consumed per fetch
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: usize,
    /// Seconds between two automatic syncs
    #[serde(default = "default_sync_interval")]
    pub sync_interval_secs: u64,
    /// Run the periodic sync at all
    #[serde(default = "default_auto_sync")]
    pub auto_sync: bool,
    /// HTTP timeout for a single fetch
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Where quotes are stored (platform data dir when unset)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// UI theme: "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_remote_url() -> String {
    DEFAULT_REMOTE_URL.to_string()
}

fn default_remote_category() -> String {
    "server".to_string()
}

fn default_fetch_limit() -> usize {
    5
}

fn default_sync_interval() -> u64 {
    30
}

fn default_auto_sync() -> bool {
    true
}

fn default_request_timeout() -> u64 {
    15
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            remote_url: default_remote_url(),
            remote_category: default_remote_category(),
            fetch_limit: default_fetch_limit(),
            sync_interval_secs: default_sync_interval(),
            auto_sync: default_auto_sync(),
            request_timeout_secs: default_request_timeout(),
            data_dir: None,
            theme: default_theme(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Ensures all parameters are within acceptable ranges.
    pub fn validate(&mut self) {
        if self.remote_url.trim().is_empty() {
            self.remote_url = default_remote_url();
        }

        if self.remote_category.trim().is_empty() || is_reserved_category(&self.remote_category) {
            self.remote_category = default_remote_category();
        }

        self.fetch_limit = self.fetch_limit.clamp(1, 50);
        self.sync_interval_secs = self.sync_interval_secs.clamp(5, 3600);
        self.request_timeout_secs = self.request_timeout_secs.clamp(1, 120);

        if self.theme != "dark" && self.theme != "light" {
            self.theme = default_theme();
        }
    }

    /// Flip between the dark and light theme
    pub fn toggle_theme(&mut self) {
        self.theme = if self.theme == "light" {
            "dark".to_string()
        } else {
            "light".to_string()
        };
    }

    /// Apply environment overrides
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(REMOTE_URL_ENV) {
            if !url.trim().is_empty() {
                tracing::info!("Using remote URL from {}", REMOTE_URL_ENV);
                self.remote_url = url;
            }
        }
    }

    /// Directory holding quote data
    pub fn quotes_dir(&self) -> Result<PathBuf, StorageError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => get_data_dir(),
        }
    }

    pub fn sync_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.sync_interval_secs)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    let mut settings = match load_settings_internal() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    };
    settings.apply_env();
    settings
}

/// Internal settings loading with error propagation
fn load_settings_internal() -> Result<AppSettings, StorageError> {
    read_settings(&get_settings_path()?)
}

fn read_settings(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;

    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    write_settings(&get_settings_path()?, settings)
}

fn write_settings(path: &Path, settings: &AppSettings) -> Result<(), StorageError> {
    // Ensure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.remote_url, DEFAULT_REMOTE_URL);
        assert_eq!(settings.remote_category, "server");
        assert_eq!(settings.fetch_limit, 5);
        assert_eq!(settings.sync_interval_secs, 30);
        assert!(settings.auto_sync);
        assert!(settings.data_dir.is_none());
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = AppSettings::default();

        settings.fetch_limit = 0;
        settings.sync_interval_secs = 1;
        settings.validate();
        assert_eq!(settings.fetch_limit, 1);
        assert_eq!(settings.sync_interval_secs, 5);

        settings.fetch_limit = 1000;
        settings.sync_interval_secs = 100_000;
        settings.validate();
        assert_eq!(settings.fetch_limit, 50);
        assert_eq!(settings.sync_interval_secs, 3600);

        settings.remote_url = "   ".to_string();
        settings.remote_category = String::new();
        settings.theme = "neon".to_string();
        settings.validate();
        assert_eq!(settings.remote_url, DEFAULT_REMOTE_URL);
        assert_eq!(settings.remote_category, "server");
        assert_eq!(settings.theme, "dark");

        settings.remote_category = "all".to_string();
        settings.validate();
        assert_eq!(settings.remote_category, "server");
    }

    #[test]
    fn test_toggle_theme() {
        let mut settings = AppSettings::default();
        settings.toggle_theme();
        assert_eq!(settings.theme, "light");
        settings.toggle_theme();
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn test_saved_theme_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = AppSettings::default();
        settings.toggle_theme();
        settings.fetch_limit = 8;
        write_settings(&path, &settings).unwrap();

        let loaded = read_settings(&path).unwrap();
        assert_eq!(loaded.theme, "light");
        assert_eq!(loaded.fetch_limit, 8);
    }

    #[test]
    fn test_missing_settings_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = read_settings(&dir.path().join("settings.json")).unwrap();
        assert_eq!(loaded.theme, "dark");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"sync_interval_secs": 60}"#).unwrap();
        assert_eq!(settings.sync_interval_secs, 60);
        assert_eq!(settings.fetch_limit, 5);
        assert_eq!(settings.remote_category, "server");
    }

    #[test]
    fn test_quotes_dir_override() {
        let settings = AppSettings {
            data_dir: Some(PathBuf::from("/tmp/quotes")),
            ..AppSettings::default()
        };
        assert_eq!(settings.quotes_dir().unwrap(), PathBuf::from("/tmp/quotes"));
    }

    #[test]
    fn test_settings_serialization() {
        let settings = AppSettings::default();

        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: AppSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(settings.remote_url, deserialized.remote_url);
        assert_eq!(settings.sync_interval_secs, deserialized.sync_interval_secs);
        assert_eq!(settings.theme, deserialized.theme);
    }
}
