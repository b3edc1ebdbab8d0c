//! Light/dark color scheme

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// The page's color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    /// The value written to the preference store
    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    /// Read a value from the preference store
    ///
    /// Only `"dark"` selects the dark scheme. An empty value counts as no
    /// preference. Anything else is light.
    pub fn from_saved(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "dark" => Some(ColorScheme::Dark),
            "light" => Some(ColorScheme::Light),
            other => {
                tracing::warn!(value = other, "unrecognized saved theme, using light");
                Some(ColorScheme::Light)
            }
        }
    }

    /// Icon name for the toggle button: it shows the scheme you would switch to
    pub fn icon_name(self) -> &'static str {
        match self {
            ColorScheme::Dark => "light_mode",
            ColorScheme::Light => "dark_mode",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(ThemeError::UnknownScheme(other.to_string())),
        }
    }
}

/// Pick the scheme to start with
///
/// A saved preference always wins. Without one, follow the system.
pub fn resolve_scheme(saved: Option<ColorScheme>, system_prefers_dark: bool) -> ColorScheme {
    match saved {
        Some(scheme) => scheme,
        None if system_prefers_dark => ColorScheme::Dark,
        None => ColorScheme::Light,
    }
}

/// Best-effort system hint from the terminal environment
///
/// Reads `COLORFGBG` (`"fg;bg"`); background colors 0-6 and 8 are dark.
pub fn detect_system_color_scheme() -> ColorScheme {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| scheme_from_colorfgbg(&value))
        .unwrap_or_default()
}

fn scheme_from_colorfgbg(value: &str) -> Option<ColorScheme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(match bg {
        0..=6 | 8 => ColorScheme::Dark,
        _ => ColorScheme::Light,
    })
}
