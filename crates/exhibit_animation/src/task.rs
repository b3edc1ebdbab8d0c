//! Frame tasks
//!
//! A frame task is a unit of work that is stepped once per frame and can be
//! asked whether it has finished. This replaces callbacks that reschedule
//! themselves with the host.

/// Result of stepping a task once
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    /// Wants another frame
    Running,
    /// Done; will not do anything if stepped again
    Finished,
}

impl TaskStatus {
    pub fn is_finished(self) -> bool {
        self == TaskStatus::Finished
    }
}

/// Something advanced once per rendering-loop callback
pub trait FrameTask {
    /// Advance to the frame at `now_ms`
    fn step(&mut self, now_ms: f64) -> TaskStatus;

    fn is_finished(&self) -> bool;
}

impl<T: FrameTask + ?Sized> FrameTask for Box<T> {
    fn step(&mut self, now_ms: f64) -> TaskStatus {
        (**self).step(now_ms)
    }

    fn is_finished(&self) -> bool {
        (**self).is_finished()
    }
}
