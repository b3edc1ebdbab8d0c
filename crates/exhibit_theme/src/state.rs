//! Theme state
//!
//! An explicit value built at startup and handed to the presentation layer.
//! Every scheme change is written back through the [`PreferenceStore`] it
//! was built with.

use crate::error::Result;
use crate::scheme::{resolve_scheme, ColorScheme};
use crate::store::PreferenceStore;

/// Current color scheme plus the store it persists to
pub struct ThemeState<S> {
    scheme: ColorScheme,
    store: S,
    /// Set when the scheme changed and the host has not repainted yet
    needs_repaint: bool,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Resolve the starting scheme from the store and the system hint
    pub fn load(store: S, system_prefers_dark: bool) -> Result<Self> {
        let saved = store.load()?;
        let scheme = resolve_scheme(saved, system_prefers_dark);
        tracing::debug!(?saved, system_prefers_dark, %scheme, "theme resolved");

        Ok(Self {
            scheme,
            store,
            needs_repaint: true,
        })
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }

    /// Icon to show on the toggle button
    pub fn icon_name(&self) -> &'static str {
        self.scheme.icon_name()
    }

    /// Set and persist the scheme
    ///
    /// The preference is saved even if the scheme is unchanged, matching an
    /// explicit user choice.
    pub fn set_scheme(&mut self, scheme: ColorScheme) -> Result<()> {
        if self.scheme != scheme {
            tracing::debug!(from = %self.scheme, to = %scheme, "switching color scheme");
            self.scheme = scheme;
            self.needs_repaint = true;
        }
        self.store.save(scheme)
    }

    /// Flip between light and dark and persist the result
    pub fn toggle(&mut self) -> Result<ColorScheme> {
        let next = self.scheme.toggle();
        self.set_scheme(next)?;
        Ok(next)
    }

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    pub fn clear_repaint(&mut self) {
        self.needs_repaint = false;
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
