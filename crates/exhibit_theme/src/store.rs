//! Persisted theme preference
//!
//! The only thing persisted is a single flag: the chosen scheme. It lives
//! behind [`PreferenceStore`] so the state never touches storage directly.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::scheme::ColorScheme;

/// Where the chosen color scheme is remembered
pub trait PreferenceStore {
    /// The saved scheme, or `None` if the user never chose one
    fn load(&self) -> Result<Option<ColorScheme>>;

    fn save(&mut self, scheme: ColorScheme) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn load(&self) -> Result<Option<ColorScheme>> {
        (**self).load()
    }

    fn save(&mut self, scheme: ColorScheme) -> Result<()> {
        (**self).save(scheme)
    }
}

/// In-memory store, for tests and hosts without persistence
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    saved: Option<ColorScheme>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saved(scheme: ColorScheme) -> Self {
        Self {
            saved: Some(scheme),
        }
    }

    pub fn saved(&self) -> Option<ColorScheme> {
        self.saved
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<ColorScheme>> {
        Ok(self.saved)
    }

    fn save(&mut self, scheme: ColorScheme) -> Result<()> {
        self.saved = Some(scheme);
        Ok(())
    }
}

/// On-disk layout: `theme = "dark"`
#[derive(Debug, Default, Deserialize, Serialize)]
struct PreferenceFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

/// TOML file store
///
/// A missing file means no saved preference.
#[derive(Clone, Debug)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ThemeError {
        ThemeError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for TomlFileStore {
    fn load(&self) -> Result<Option<ColorScheme>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no saved theme preference");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let file: PreferenceFile = toml::from_str(&content).map_err(|source| ThemeError::Parse {
            path: self.path.clone(),
            source,
        })?;

        Ok(file.theme.as_deref().and_then(ColorScheme::from_saved))
    }

    fn save(&mut self, scheme: ColorScheme) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let file = PreferenceFile {
            theme: Some(scheme.as_str().to_string()),
        };
        fs::write(&self.path, toml::to_string(&file)?).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), %scheme, "theme preference saved");
        Ok(())
    }
}
