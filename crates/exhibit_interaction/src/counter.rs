//! Counter elements
//!
//! Turns the markup attributes of a counter (`data-counter`,
//! `data-duration`) or the text of a statistic into the interpolation that
//! animates it.

use exhibit_animation::{Easing, Interpolation};

/// Duration used when a counter does not declare a usable one
pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// Parse a leading integer the way markup attributes are read: optional
/// whitespace and sign, then digits, ignoring whatever follows. A `0x`
/// prefix reads hexadecimal.
///
/// `"1,234"` reads as 1; `"abc"` and `""` read as nothing. The result is a
/// float, so digit runs too long for any integer type still read (rounded).
pub fn parse_int(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first().copied() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }
    let value = if radix == 10 {
        digits.parse::<f64>().ok()?
    } else {
        digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
    };
    Some(if negative { -value } else { value })
}

/// Everything needed to animate one counter
#[derive(Clone, Copy, Debug)]
pub struct CounterSpec {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl CounterSpec {
    /// A `data-counter` element: counts up from zero with quartic ease-out
    ///
    /// Returns `None` if the target is missing or not a number. A missing,
    /// zero or unreadable duration falls back to [`DEFAULT_DURATION_MS`].
    pub fn from_attributes(counter: Option<&str>, duration: Option<&str>) -> Option<Self> {
        let end = parse_int(counter?)?;
        let duration_ms = duration
            .and_then(parse_int)
            .filter(|ms| *ms != 0.0)
            .unwrap_or(DEFAULT_DURATION_MS);

        Some(Self {
            start: 0.0,
            end,
            duration_ms,
            easing: Easing::QUART,
        })
    }

    /// A statistic whose final number is its own text: counts up from zero
    /// over two seconds with cubic ease-out
    pub fn from_text(text: &str) -> Option<Self> {
        let end = parse_int(text)?;
        Some(Self {
            start: 0.0,
            end,
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::CUBIC,
        })
    }

    pub fn interpolation(&self) -> Interpolation {
        Interpolation::new(self.start, self.end, self.duration_ms, self.easing)
    }
}
