//! Exhibit configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "exhibit.toml";

/// Top-level configuration (exhibit.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExhibitConfig {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Defaults for `exhibit count`
#[derive(Debug, Deserialize, Serialize)]
pub struct CounterConfig {
    #[serde(default = "default_duration")]
    pub duration_ms: f64,
    /// Easing name, e.g. `quart` or `cubic`
    #[serde(default = "default_easing")]
    pub easing: String,
    /// Locale used to group digits; falls back to the environment
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default = "default_fps")]
    pub fps: u32,
}

fn default_duration() -> f64 {
    2000.0
}

fn default_easing() -> String {
    "quart".to_string()
}

fn default_fps() -> u32 {
    60
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration(),
            easing: default_easing(),
            locale: None,
            fps: default_fps(),
        }
    }
}

/// Where the theme preference lives
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Preference file; defaults to the user config directory
    #[serde(default)]
    pub store: Option<PathBuf>,
}

impl ThemeConfig {
    pub fn store_path(&self) -> PathBuf {
        self.store.clone().unwrap_or_else(default_store_path)
    }
}

/// `<config dir>/exhibit/theme.toml`, or `./theme.toml` without a config dir
pub fn default_store_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("exhibit"))
        .unwrap_or_default()
        .join("theme.toml")
}

impl ExhibitConfig {
    /// Load configuration from a file or a directory containing exhibit.toml
    ///
    /// A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: ExhibitConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Write a default exhibit.toml into `dir`, refusing to overwrite
    pub fn init(dir: &Path) -> Result<PathBuf> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            anyhow::bail!("{} already exists", path.display());
        }
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
        fs::write(&path, Self::default().to_toml()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExhibitConfig::load(dir.path()).unwrap();
        assert_eq!(config.counter.duration_ms, 2000.0);
        assert_eq!(config.counter.easing, "quart");
        assert_eq!(config.counter.fps, 60);
        assert_eq!(config.theme.store, None);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[counter]\neasing = \"cubic\"\nlocale = \"vi-VN\"\n",
        )
        .unwrap();

        let config = ExhibitConfig::load(dir.path()).unwrap();
        assert_eq!(config.counter.easing, "cubic");
        assert_eq!(config.counter.locale.as_deref(), Some("vi-VN"));
        assert_eq!(config.counter.duration_ms, 2000.0);
    }

    #[test]
    fn init_writes_loadable_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = ExhibitConfig::init(dir.path()).unwrap();
        let config = ExhibitConfig::load(&path).unwrap();
        assert_eq!(config.counter.fps, 60);
        assert!(ExhibitConfig::init(dir.path()).is_err());
    }

    #[test]
    fn bad_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[counter\n").unwrap();
        let err = ExhibitConfig::load(dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }
}
