/// Locale used when nothing else matches. The exhibition page is Vietnamese.
pub const DEFAULT_LOCALE: &str = "vi-VN";

/// Normalize locale identifiers to a canonical-ish form for lookup.
///
/// - Converts `_` to `-` (POSIX environments report `vi_VN`).
/// - Drops an encoding suffix (`vi_VN.UTF-8`).
/// - Trims whitespace.
pub fn normalize_locale(s: &str) -> String {
    let s = s.trim();
    let s = s.split('.').next().unwrap_or(s);
    s.replace('_', "-")
}

/// Primary language subtag, lowercased (`vi-VN` -> `vi`).
pub fn language(locale: &str) -> String {
    normalize_locale(locale)
        .split('-')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Create a fallback chain for locale lookup.
///
/// Example:
/// - `en-US` -> `["en-US", "en", "vi-VN"]`
/// - `vi-VN` -> `["vi-VN", "vi"]`
pub fn locale_fallback_chain(locale: &str) -> Vec<String> {
    let l = normalize_locale(locale);
    let mut chain = Vec::new();

    if !l.is_empty() {
        chain.push(l.clone());
        if let Some(lang) = l.split('-').next() {
            if !lang.is_empty() {
                chain.push(lang.to_string());
            }
        }
    }

    chain.push(DEFAULT_LOCALE.to_string());

    // Dedup, preserve order.
    let mut out = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for x in chain {
        if seen.insert(x.clone()) {
            out.push(x);
        }
    }
    out
}

/// Locale from the process environment (`LC_ALL`, `LC_NUMERIC`, `LANG`)
pub fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_NUMERIC", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|value| normalize_locale(&value))
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalizes_posix_names() {
        assert_eq!(normalize_locale(" vi_VN.UTF-8 "), "vi-VN");
        assert_eq!(language("de_DE"), "de");
        assert_eq!(language("EN"), "en");
    }

    #[test]
    fn fallback_chain_ends_with_default() {
        assert_eq!(locale_fallback_chain("en_US"), vec!["en-US", "en", "vi-VN"]);
        assert_eq!(locale_fallback_chain("vi-VN"), vec!["vi-VN", "vi"]);
        assert_eq!(locale_fallback_chain(""), vec!["vi-VN"]);
    }
}
