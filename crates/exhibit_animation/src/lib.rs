//! Exhibit Animation System
//!
//! Eased value interpolation driven by an injected frame clock.
//!
//! # Features
//!
//! - **Interpolation**: count from one number to another over a duration
//! - **Easing**: named curves (quartic and cubic ease-out among them) or your own
//! - **Frame clocks**: real display pacing or a hand-driven clock for tests
//! - **Scheduling**: independent runs stepped together, cancellable by handle

pub mod clock;
pub mod easing;
pub mod interpolate;
pub mod scheduler;
pub mod task;

pub use clock::{FrameClock, ManualClock, SystemClock};
pub use easing::{Easing, UnknownEasing};
pub use interpolate::{run, CounterTask, Interpolation};
pub use scheduler::{AnimationScheduler, RunId};
pub use task::{FrameTask, TaskStatus};
