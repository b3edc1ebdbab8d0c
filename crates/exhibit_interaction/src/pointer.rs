//! Pointer effects: button ripples and the cursor trail

use std::time::Duration;

use exhibit_animation::{FrameTask, TaskStatus};

/// How long a ripple stays in the button before it is removed
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);

/// Fraction of the remaining distance the trail covers each frame
pub const TRAIL_FOLLOW: f64 = 0.1;

/// Narrowest viewport (px) that shows the cursor trail
pub const TRAIL_MIN_WIDTH: f64 = 768.0;

/// Axis-aligned box in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Size and position of a ripple inside the clicked button
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Center a square ripple, as large as the button's longer side, on the
    /// click point
    pub fn place(button: Rect, click_x: f64, click_y: f64) -> Self {
        let size = button.width.max(button.height);
        Self {
            size,
            left: click_x - button.left - size / 2.0,
            top: click_y - button.top - size / 2.0,
        }
    }
}

/// A dot that eases toward the pointer every frame
///
/// Runs forever once started; it is a [`FrameTask`] that never finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorTrail {
    pub target: (f64, f64),
    pub position: (f64, f64),
}

impl CursorTrail {
    /// `None` on narrow or touch screens
    pub fn enabled(viewport_width: f64, touch: bool) -> Option<Self> {
        if viewport_width < TRAIL_MIN_WIDTH || touch {
            return None;
        }
        Some(Self::default())
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.target = (x, y);
    }

    /// Move one frame toward the pointer and return the new position
    pub fn advance(&mut self) -> (f64, f64) {
        let (tx, ty) = self.target;
        let (x, y) = self.position;
        self.position = (x + (tx - x) * TRAIL_FOLLOW, y + (ty - y) * TRAIL_FOLLOW);
        self.position
    }

    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.position.0, self.position.1)
    }
}

impl FrameTask for CursorTrail {
    fn step(&mut self, _now_ms: f64) -> TaskStatus {
        self.advance();
        TaskStatus::Running
    }

    fn is_finished(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_centered_on_click() {
        let button = Rect {
            left: 100.0,
            top: 50.0,
            width: 120.0,
            height: 40.0,
        };
        let ripple = Ripple::place(button, 130.0, 60.0);
        assert_eq!(
            ripple,
            Ripple {
                size: 120.0,
                left: -30.0,
                top: -50.0
            }
        );
    }

    #[test]
    fn trail_only_on_wide_pointer_screens() {
        assert!(CursorTrail::enabled(767.0, false).is_none());
        assert!(CursorTrail::enabled(1024.0, true).is_none());
        assert!(CursorTrail::enabled(1024.0, false).is_some());
    }

    #[test]
    fn trail_closes_a_tenth_of_the_gap() {
        let mut trail = CursorTrail::default();
        trail.pointer_moved(100.0, -50.0);
        assert_eq!(trail.advance(), (10.0, -5.0));
        let (x, _) = trail.advance();
        assert!((x - 19.0).abs() < 1e-9);
        assert!(!trail.is_finished());
    }
}
