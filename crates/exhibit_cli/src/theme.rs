//! `exhibit theme`: show, toggle or set the saved color scheme

use anyhow::{Context, Result};
use exhibit_theme::{ColorScheme, PreferenceStore, ThemeState};

/// What to do with the preference
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set(ColorScheme),
}

/// Apply `action` and return the scheme now in effect
pub fn apply<S: PreferenceStore>(
    store: S,
    system_prefers_dark: bool,
    action: ThemeAction,
) -> Result<ColorScheme> {
    let mut state =
        ThemeState::load(store, system_prefers_dark).context("Failed to load theme preference")?;

    match action {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            state.toggle().context("Failed to save theme preference")?;
        }
        ThemeAction::Set(scheme) => {
            state
                .set_scheme(scheme)
                .context("Failed to save theme preference")?;
        }
    }

    Ok(state.scheme())
}
