//! Easing functions for animations

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Easing function type
///
/// Maps normalized elapsed time (0.0 to 1.0) to a normalized eased fraction.
/// Curves are expected to pass through (0, 0) and (1, 1), but nothing here
/// checks that.
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    CubicBezier(f64, f64, f64, f64),
    /// Caller-supplied curve
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Quartic ease-out, `1 - (1 - t)^4`. Used by `data-counter` elements.
    pub const QUART: Easing = Easing::EaseOutQuart;

    /// Cubic ease-out, `1 - (1 - t)^3`. Used by statistic numbers.
    pub const CUBIC: Easing = Easing::EaseOutCubic;

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInQuart => t * t * t * t,
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, *x1, *y1, *x2, *y2),
            Easing::Custom(f) => f(t),
        }
    }

    /// Short name used in config files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInQuad => "in-quad",
            Easing::EaseOutQuad => "quad",
            Easing::EaseInOutQuad => "in-out-quad",
            Easing::EaseInCubic => "in-cubic",
            Easing::EaseOutCubic => "cubic",
            Easing::EaseInOutCubic => "in-out-cubic",
            Easing::EaseInQuart => "in-quart",
            Easing::EaseOutQuart => "quart",
            Easing::EaseInOutQuart => "in-out-quart",
            Easing::CubicBezier(..) => "cubic-bezier",
            Easing::Custom(_) => "custom",
        }
    }
}

/// Returned when an easing name is not recognized
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown easing `{0}`")]
pub struct UnknownEasing(pub String);

impl FromStr for Easing {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let easing = match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Easing::Linear,
            "in-quad" => Easing::EaseInQuad,
            "quad" | "out-quad" => Easing::EaseOutQuad,
            "in-out-quad" => Easing::EaseInOutQuad,
            "in-cubic" => Easing::EaseInCubic,
            "cubic" | "out-cubic" => Easing::EaseOutCubic,
            "in-out-cubic" => Easing::EaseInOutCubic,
            "in-quart" => Easing::EaseInQuart,
            "quart" | "out-quart" => Easing::EaseOutQuart,
            "in-out-quart" => Easing::EaseInOutQuart,
            "ease" => Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
            "ease-in" => Easing::CubicBezier(0.42, 0.0, 1.0, 1.0),
            "ease-out" => Easing::CubicBezier(0.0, 0.0, 0.58, 1.0),
            "ease-in-out" => Easing::CubicBezier(0.42, 0.0, 0.58, 1.0),
            other => return Err(UnknownEasing(other.to_string())),
        };
        Ok(easing)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
            other => f.write_str(other.name()),
        }
    }
}

/// Cubic bezier easing calculation (matches CSS timing functions).
///
/// Newton-Raphson with a binary-search fallback when the slope flattens.
fn cubic_bezier_ease(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let mut p = t;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - t;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2);
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    p = t;
    for _ in 0..20 {
        let val = bezier_sample(p, x1, x2);
        if (val - t).abs() < 1e-7 {
            break;
        }
        if val < t {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_sample(p, y1, y2)
}

/// B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³, in Horner form
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}
