//! Frame clocks
//!
//! The rendering loop is an injected capability: something that fires once
//! before each repaint and reports a monotonic timestamp in milliseconds.
//! Animation code only ever talks to [`FrameClock`], so it can be driven by a
//! real display loop, a terminal, or a [`ManualClock`] in tests.

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

/// Default frame interval, 60 frames per second
pub const DEFAULT_FRAME_MS: f64 = 1000.0 / 60.0;

/// Host rendering-loop capability
pub trait FrameClock {
    /// Current monotonic time in milliseconds
    fn now_ms(&self) -> f64;

    /// Block (or advance) until the next frame and return its timestamp
    fn wait_for_frame(&mut self) -> f64;
}

impl<C: FrameClock + ?Sized> FrameClock for &mut C {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }

    fn wait_for_frame(&mut self) -> f64 {
        (**self).wait_for_frame()
    }
}

/// A hand-driven clock for tests and offline rendering
///
/// Each call to [`FrameClock::wait_for_frame`] returns the next scripted
/// timestamp if one is queued, otherwise advances by the frame interval.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: f64,
    frame_ms: f64,
    script: VecDeque<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: start_ms,
            frame_ms: DEFAULT_FRAME_MS,
            script: VecDeque::new(),
        }
    }

    /// Builder: set the amount each unscripted frame advances by
    pub fn with_frame_interval(mut self, frame_ms: f64) -> Self {
        self.frame_ms = frame_ms;
        self
    }

    /// Builder: queue explicit frame timestamps
    ///
    /// Timestamps are returned verbatim, so a script can go backwards to
    /// simulate a host clock that reports a frame before the run began.
    pub fn with_frames(mut self, frames: impl IntoIterator<Item = f64>) -> Self {
        self.script.extend(frames);
        self
    }

    pub fn advance(&mut self, ms: f64) {
        self.now += ms;
    }

    pub fn set(&mut self, now_ms: f64) {
        self.now = now_ms;
    }

    pub fn frame_interval(&self) -> f64 {
        self.frame_ms
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl FrameClock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now
    }

    fn wait_for_frame(&mut self) -> f64 {
        self.now = match self.script.pop_front() {
            Some(ts) => ts,
            None => self.now + self.frame_ms,
        };
        self.now
    }
}

/// Wall-clock frames paced to a target frame rate
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
    last_frame: Instant,
    frame: Duration,
}

impl SystemClock {
    pub fn new(target_fps: u32) -> Self {
        let now = Instant::now();
        Self {
            origin: now,
            last_frame: now,
            frame: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
        }
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.frame = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
    }

    pub fn target_fps(&self) -> u32 {
        (1.0 / self.frame.as_secs_f64()).round() as u32
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FrameClock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn wait_for_frame(&mut self) -> f64 {
        let deadline = self.last_frame + self.frame;
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
        self.last_frame = Instant::now();
        self.now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances_by_interval() {
        let mut clock = ManualClock::new(10.0).with_frame_interval(5.0);
        assert_eq!(clock.wait_for_frame(), 15.0);
        assert_eq!(clock.wait_for_frame(), 20.0);
        assert_eq!(clock.now_ms(), 20.0);
    }

    #[test]
    fn manual_clock_prefers_script() {
        let mut clock = ManualClock::new(0.0)
            .with_frame_interval(10.0)
            .with_frames([3.0, -1.0]);
        assert_eq!(clock.wait_for_frame(), 3.0);
        assert_eq!(clock.wait_for_frame(), -1.0);
        assert_eq!(clock.wait_for_frame(), 9.0);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let mut clock = SystemClock::new(1000);
        let a = clock.wait_for_frame();
        let b = clock.wait_for_frame();
        assert!(b >= a);
        assert_eq!(clock.target_fps(), 1000);
    }
}
