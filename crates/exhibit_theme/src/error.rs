//! Theme error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading or writing the theme preference
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Preference file could not be read or written
    #[error("Preference store I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Preference file is not valid TOML
    #[error("Failed to parse preference file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Preference could not be encoded
    #[error("Failed to serialize preference: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Stored value is neither `light` nor `dark`
    #[error("Unknown color scheme: {0}")]
    UnknownScheme(String),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
