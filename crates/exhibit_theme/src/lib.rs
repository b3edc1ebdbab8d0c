//! Exhibit Theme
//!
//! Light/dark color scheme selection for the exhibition page.
//!
//! # Overview
//!
//! - [`ColorScheme`]: the two schemes and the single persisted flag
//! - [`resolve_scheme`]: a saved choice wins, otherwise follow the system
//! - [`ThemeState`]: the current scheme as an explicit value, not a global
//! - [`PreferenceStore`]: where the choice is written back ([`TomlFileStore`],
//!   [`MemoryStore`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use exhibit_theme::{detect_system_color_scheme, ThemeState, TomlFileStore};
//!
//! let store = TomlFileStore::new("theme.toml");
//! let mut theme = ThemeState::load(store, detect_system_color_scheme().is_dark())?;
//! theme.toggle()?;
//! ```

pub mod error;
pub mod scheme;
pub mod state;
pub mod store;

pub use error::{Result, ThemeError};
pub use scheme::{detect_system_color_scheme, resolve_scheme, ColorScheme};
pub use state::ThemeState;
pub use store::{MemoryStore, PreferenceStore, TomlFileStore};
