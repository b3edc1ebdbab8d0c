//! Hero parallax
//!
//! Scroll events arrive far more often than frames. [`Parallax`] lets at
//! most one update be queued per frame and computes every layer's offset
//! when that frame runs.

use smallvec::SmallVec;

/// Speed used by layers that do not declare one
pub const DEFAULT_SPEED: f64 = 0.5;

/// Vertical offset (px) of a layer moving at `speed` relative to the scroll
pub fn offset(scrolled: f64, speed: f64) -> f64 {
    scrolled * speed
}

/// Layer speed from its declared attribute, falling back to [`DEFAULT_SPEED`]
///
/// An absent, empty or unparseable value uses the default. An explicit `0`
/// is kept and pins the layer in place.
pub fn layer_speed(attr: Option<&str>) -> f64 {
    attr.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite())
        .unwrap_or(DEFAULT_SPEED)
}

/// CSS transform for a layer offset
pub fn transform(offset: f64) -> String {
    format!("translateY({offset}px)")
}

/// Per-frame throttle for parallax layers
#[derive(Clone, Debug)]
pub struct Parallax {
    speeds: SmallVec<[f64; 4]>,
    ticking: bool,
}

impl Parallax {
    /// Returns `None` when the page has no parallax layers, so no scroll
    /// handler needs installing.
    pub fn new(speeds: impl IntoIterator<Item = f64>) -> Option<Self> {
        let speeds: SmallVec<[f64; 4]> = speeds.into_iter().collect();
        if speeds.is_empty() {
            return None;
        }
        Some(Self {
            speeds,
            ticking: false,
        })
    }

    /// Called on every scroll event. Returns `true` if the caller should
    /// request a frame; `false` if one is already pending.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.ticking
    }

    /// Run the queued frame: one offset per layer, in layer order
    pub fn frame(&mut self, scrolled: f64) -> SmallVec<[f64; 4]> {
        self.ticking = false;
        self.speeds
            .iter()
            .map(|speed| offset(scrolled, *speed))
            .collect()
    }

    pub fn layer_count(&self) -> usize {
        self.speeds.len()
    }
}
