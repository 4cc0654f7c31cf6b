//! Console settings persistence.
//!
//! Stores settings in the platform-specific config directory:
//! - Linux: ~/.config/apiconsole/settings.json
//! - macOS: ~/Library/Application Support/apiconsole/settings.json
//! - Windows: %APPDATA%/apiconsole/settings.json
//!
//! Environment variables override the file; command-line flags (applied by
//! the binary) override both.

use std::path::{Path, PathBuf};

use apiconsole_domain::{ConsoleSettings, DomainError};
use tokio::fs;
use tracing::debug;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

/// Overrides `proxy_base`.
pub const ENV_PROXY_BASE: &str = "APICONSOLE_PROXY_BASE";

/// Overrides `catalog_path`.
pub const ENV_CATALOG: &str = "APICONSOLE_CATALOG";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// The effective settings are invalid.
    #[error("Invalid settings: {0}")]
    Invalid(#[from] DomainError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for console settings.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRepository {
    /// Creates a repository backed by the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|p| p.join("apiconsole").join("settings.json")),
        }
    }

    /// Creates a repository backed by an explicit file.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the settings file path, if one could be determined.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads settings from disk.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<ConsoleSettings, SettingsError> {
        let Some(path) = self.path() else {
            return Ok(ConsoleSettings::default());
        };

        if !fs::try_exists(path).await? {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(ConsoleSettings::default());
        }

        let content = fs::read(path).await?;
        Ok(from_json_bytes(&content)?)
    }

    /// Loads settings and applies process environment overrides.
    ///
    /// The result is not validated, so callers can layer further overrides
    /// before calling [`ConsoleSettings::validate`].
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails.
    pub async fn load_with_env(&self) -> Result<ConsoleSettings, SettingsError> {
        Ok(apply_env_overrides(self.load().await?, |key| {
            std::env::var(key).ok()
        }))
    }

    /// Saves settings to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is available or writing fails.
    pub async fn save(&self, settings: &ConsoleSettings) -> Result<(), SettingsError> {
        let path = self.path().ok_or(SettingsError::NoConfigDir)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = to_json_stable_bytes(settings)?;
        fs::write(path, content).await?;

        Ok(())
    }
}

/// Applies environment overrides read through `lookup`. Blank values are
/// ignored.
#[must_use]
pub fn apply_env_overrides(
    mut settings: ConsoleSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> ConsoleSettings {
    let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(proxy_base) = present(ENV_PROXY_BASE) {
        settings.proxy_base = proxy_base;
    }
    if let Some(catalog) = present(ENV_CATALOG) {
        settings.catalog_path = Some(PathBuf::from(catalog));
    }
    settings
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use apiconsole_domain::DEFAULT_PROXY_BASE;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_path_is_under_apiconsole() {
        if let Some(path) = SettingsRepository::new().path() {
            assert!(path.ends_with("apiconsole/settings.json"));
        }
    }

    #[tokio::test]
    async fn test_load_returns_default_when_no_file() {
        let dir = TempDir::new().unwrap();
        let repo = SettingsRepository::with_path(dir.path().join("settings.json"));
        let settings = repo.load().await.unwrap();
        assert_eq!(settings, ConsoleSettings::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let repo = SettingsRepository::with_path(dir.path().join("nested").join("settings.json"));
        let settings = ConsoleSettings::default()
            .with_proxy_base("https://gateway.local/proxy")
            .with_catalog_path("/srv/catalog.yaml");

        repo.save(&settings).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), settings);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{oops").unwrap();

        let result = SettingsRepository::with_path(path).load().await;
        assert!(matches!(result, Err(SettingsError::Serialization(_))));
    }

    #[test]
    fn test_env_overrides() {
        let settings = apply_env_overrides(ConsoleSettings::default(), |key| match key {
            ENV_PROXY_BASE => Some("https://staging.local/proxy".to_string()),
            ENV_CATALOG => Some("catalog.yaml".to_string()),
            _ => None,
        });
        assert_eq!(settings.proxy_base, "https://staging.local/proxy");
        assert_eq!(settings.catalog_path, Some(PathBuf::from("catalog.yaml")));
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let settings = apply_env_overrides(ConsoleSettings::default(), |_| Some("  ".to_string()));
        assert_eq!(settings.proxy_base, DEFAULT_PROXY_BASE);
        assert!(settings.catalog_path.is_none());
    }
}
