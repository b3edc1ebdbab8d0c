//! Scroll reveal and entrance staggering
//!
//! Elements animate in when they become visible. Visibility arrives in
//! batches from the host's intersection observer; each visible entry is
//! delayed by its position in the batch so neighbours cascade.

use std::time::Duration;

/// Delay between consecutive revealed entries in one batch
pub const REVEAL_STEP: Duration = Duration::from_millis(100);

/// Delay between consecutive cards on initial page load
pub const STAGGER_STEP: Duration = Duration::from_millis(150);

/// Classes added to an element once it is revealed
pub const REVEAL_CLASSES: [&str; 2] = ["active", "animated"];

/// Entrance animation class for hero content and staggered cards
pub const ENTRANCE_CLASS: &str = "animate-fade-in-up";

/// Delay for the `index`-th entry of a visibility batch
pub fn reveal_delay(index: usize) -> Duration {
    REVEAL_STEP * index as u32
}

/// Animation delay for the `index`-th card on page load
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP * index as u32
}

/// Intersection settings for one kind of observed element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    /// Bottom root margin in px (negative shrinks the viewport)
    pub bottom_margin: f64,
    /// Stop observing after the first hit
    pub once: bool,
}

impl ObserverOptions {
    /// Scroll-reveal blocks: 10% visible, 50px before the viewport bottom
    pub const REVEAL: Self = Self {
        threshold: 0.1,
        bottom_margin: -50.0,
        once: false,
    };

    /// Animated counters: half visible, fire once
    pub const COUNTER: Self = Self {
        threshold: 0.5,
        bottom_margin: 0.0,
        once: true,
    };

    /// Statistic numbers: any visibility, fire once
    pub const STAT: Self = Self {
        threshold: 0.0,
        bottom_margin: 0.0,
        once: true,
    };

    /// Lazy background images: start loading 50px before they scroll in
    pub const LAZY_IMAGE: Self = Self {
        threshold: 0.0,
        bottom_margin: 50.0,
        once: true,
    };
}

/// Tracks whether an observed element should trigger
#[derive(Clone, Debug)]
pub struct VisibilityTrigger {
    options: ObserverOptions,
    fired: bool,
}

impl VisibilityTrigger {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            fired: false,
        }
    }

    /// Is the element intersecting at this visible ratio?
    ///
    /// A zero threshold means any visible pixel counts.
    pub fn intersects(&self, ratio: f64) -> bool {
        if self.options.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.options.threshold
        }
    }

    /// Feed a visibility change. Returns `true` when the element triggers.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.options.once && self.fired {
            return false;
        }
        if !self.intersects(ratio) {
            return false;
        }
        self.fired = true;
        true
    }

    /// Whether the host should keep observing this element
    pub fn is_observing(&self) -> bool {
        !(self.options.once && self.fired)
    }
}

/// Delays for the intersecting entries of one observer batch
///
/// The position counts every entry in the batch, visible or not, so a hidden
/// entry still leaves a gap in the cascade.
pub fn reveal_batch<T: Copy>(entries: &[(T, bool)]) -> Vec<(T, Duration)> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, (_, intersecting))| *intersecting)
        .map(|(index, (target, _))| (*target, reveal_delay(index)))
        .collect()
}
