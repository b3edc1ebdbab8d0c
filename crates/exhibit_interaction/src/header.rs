//! Header reaction to page scroll
//!
//! The header gains a shadow once the page has scrolled a little, and past a
//! larger threshold it hides while scrolling down and comes back when
//! scrolling up.

/// Scroll offset (px) after which the header gets a shadow
pub const SHADOW_THRESHOLD: f64 = 50.0;

/// Scroll offset (px) after which scroll direction hides or shows the header
pub const HIDE_THRESHOLD: f64 = 100.0;

/// CSS transition applied to the header so hide/show is animated
pub const HEADER_TRANSITION: &str = "transform 0.3s ease, box-shadow 0.3s ease";

/// What the header should look like after a scroll event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub shadow: bool,
    pub hidden: bool,
}

impl HeaderState {
    /// Vertical translation for the header element
    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

/// Tracks scroll direction between events
#[derive(Clone, Debug, Default)]
pub struct HeaderScroll {
    last_scroll: f64,
    state: HeaderState,
}

impl HeaderScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    /// Feed the current vertical scroll offset
    ///
    /// At or below [`HIDE_THRESHOLD`] the hidden flag is left as it was.
    pub fn on_scroll(&mut self, current: f64) -> HeaderState {
        self.state.shadow = current > SHADOW_THRESHOLD;

        if current > HIDE_THRESHOLD {
            self.state.hidden = current > self.last_scroll;
        }

        self.last_scroll = current;
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_past_fifty() {
        let mut header = HeaderScroll::new();
        assert!(!header.on_scroll(50.0).shadow);
        assert!(header.on_scroll(51.0).shadow);
        assert!(!header.on_scroll(10.0).shadow);
    }

    #[test]
    fn hides_only_past_threshold_when_scrolling_down() {
        let mut header = HeaderScroll::new();
        assert!(!header.on_scroll(80.0).hidden);
        assert!(!header.on_scroll(100.0).hidden);
        assert!(header.on_scroll(150.0).hidden);
        assert_eq!(header.state().transform(), "translateY(-100%)");
        assert!(!header.on_scroll(120.0).hidden);
        assert_eq!(header.state().transform(), "translateY(0)");
    }

    #[test]
    fn top_region_keeps_previous_visibility() {
        let mut header = HeaderScroll::new();
        header.on_scroll(300.0);
        assert!(header.state().hidden);
        // jumping back to the top does not re-show the header by itself
        assert!(header.on_scroll(20.0).hidden);
        // but the next scroll past the threshold is measured from there
        assert!(header.on_scroll(150.0).hidden);
        assert!(!header.on_scroll(140.0).hidden);
    }
}
