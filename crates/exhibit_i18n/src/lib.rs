//! Exhibit internationalization (i18n)
//!
//! Counter values are formatted by the caller, not by the animation system.
//! This crate supplies the locale pieces for that:
//! - locale identifier normalization and fallback chains
//! - integer formatting with locale digit grouping (`vi-VN` -> `12.345`)

mod locale;
mod number;

pub use locale::{
    language, locale_fallback_chain, normalize_locale, system_locale, DEFAULT_LOCALE,
};
pub use number::{format_integer, group_separator, number_locale};
