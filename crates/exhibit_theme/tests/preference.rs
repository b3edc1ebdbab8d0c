use exhibit_theme::{ColorScheme, PreferenceStore, ThemeState, TomlFileStore};
use pretty_assertions::assert_eq;

#[test]
fn saved_preference_beats_system_hint_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");

    // first visit: nothing saved, system is dark
    let mut theme = ThemeState::load(TomlFileStore::new(&path), true).unwrap();
    assert_eq!(theme.scheme(), ColorScheme::Dark);
    theme.toggle().unwrap();
    assert_eq!(theme.scheme(), ColorScheme::Light);

    // next visit: the saved choice wins over the system
    let theme = ThemeState::load(TomlFileStore::new(&path), true).unwrap();
    assert_eq!(theme.scheme(), ColorScheme::Light);
    assert_eq!(theme.icon_name(), "dark_mode");
}

#[test]
fn explicit_set_is_written_even_without_a_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");

    let mut theme = ThemeState::load(TomlFileStore::new(&path), false).unwrap();
    theme.set_scheme(ColorScheme::Light).unwrap();

    assert_eq!(
        TomlFileStore::new(&path).load().unwrap(),
        Some(ColorScheme::Light)
    );
}

#[test]
fn hand_edited_preference_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");
    std::fs::write(&path, r#"theme = "Dark""#).unwrap();

    let theme = ThemeState::load(TomlFileStore::new(&path), true).unwrap();
    assert_eq!(theme.scheme(), ColorScheme::Light);

    std::fs::write(&path, r#"theme = """#).unwrap();
    let theme = ThemeState::load(TomlFileStore::new(&path), true).unwrap();
    assert_eq!(theme.scheme(), ColorScheme::Dark);
}
