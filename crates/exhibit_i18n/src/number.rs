//! Locale-aware integer formatting for counter displays

use num_format::{Locale, ToFormattedString};

use crate::locale::locale_fallback_chain;

/// Resolve a locale identifier to its formatting rules.
///
/// Walks the fallback chain (`en-US`, `en`, then the default locale) and
/// takes the first entry the formatting tables know.
pub fn number_locale(locale: &str) -> Locale {
    locale_fallback_chain(locale)
        .iter()
        .find_map(|name| Locale::from_name(name).ok())
        .unwrap_or(Locale::en)
}

/// Thousands separator used by a locale
pub fn group_separator(locale: &str) -> &'static str {
    number_locale(locale).separator()
}

/// Format the integer part of `value` with the locale's digit grouping.
///
/// Non-finite values render as `NaN`, `∞` and `-∞`.
pub fn format_integer(value: f64, locale: &str) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let whole = value.trunc();
    if whole.abs() >= i128::MAX as f64 {
        return format!("{whole:.0}");
    }
    (whole as i128).to_formatted_string(&number_locale(locale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn vietnamese_uses_dots() {
        assert_eq!(format_integer(1_234_567.0, "vi-VN"), "1.234.567");
        assert_eq!(format_integer(54.0, "vi-VN"), "54");
        assert_eq!(format_integer(1000.0, "vi"), "1.000");
        assert_eq!(format_integer(12_000.0, "vi_VN.UTF-8"), "12.000");
    }

    #[test]
    fn german_uses_dots() {
        assert_eq!(format_integer(7_654_321.0, "de-DE"), "7.654.321");
    }

    #[test]
    fn english_uses_commas() {
        assert_eq!(format_integer(12_345.0, "en-US"), "12,345");
        assert_eq!(format_integer(-9_876_543.0, "en_GB"), "-9,876,543");
    }

    #[test]
    fn unknown_locale_uses_default() {
        assert_eq!(number_locale("zz-ZZ"), Locale::vi);
        assert_eq!(format_integer(1_000.0, "zz"), "1.000");
    }

    #[test]
    fn separator_follows_locale() {
        assert_eq!(group_separator("vi-VN"), ".");
        assert_eq!(group_separator("en"), ",");
        assert!(!group_separator("fr-FR").is_empty());
    }

    #[test]
    fn small_and_fractional_values() {
        assert_eq!(format_integer(0.0, "en"), "0");
        assert_eq!(format_integer(-0.4, "en"), "0");
        assert_eq!(format_integer(999.9, "en"), "999");
    }

    #[test]
    fn values_beyond_i64() {
        assert_eq!(
            format_integer(1e20, "en"),
            "100,000,000,000,000,000,000"
        );
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_integer(f64::NAN, "vi-VN"), "NaN");
        assert_eq!(format_integer(f64::INFINITY, "vi-VN"), "∞");
        assert_eq!(format_integer(f64::NEG_INFINITY, "vi-VN"), "-∞");
    }
}
