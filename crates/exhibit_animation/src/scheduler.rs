//! Animation scheduler
//!
//! Holds independent frame tasks and steps them each frame. Tasks share no
//! state with each other; the scheduler only owns them and forgets them once
//! they finish.

use crate::clock::FrameClock;
use crate::task::{FrameTask, TaskStatus};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled run
    pub struct RunId;
}

/// The animation scheduler that ticks all active runs
#[derive(Default)]
pub struct AnimationScheduler<'a> {
    runs: SlotMap<RunId, Box<dyn FrameTask + 'a>>,
}

impl<'a> AnimationScheduler<'a> {
    pub fn new() -> Self {
        Self {
            runs: SlotMap::with_key(),
        }
    }

    pub fn add<T: FrameTask + 'a>(&mut self, task: T) -> RunId {
        self.runs.insert(Box::new(task))
    }

    /// Stop a run before it finishes. Its sink is never called again.
    ///
    /// Returns `false` if the run already finished or was cancelled.
    pub fn cancel(&mut self, id: RunId) -> bool {
        let removed = self.runs.remove(id).is_some();
        if removed {
            tracing::debug!(?id, "run cancelled");
        }
        removed
    }

    pub fn is_active(&self, id: RunId) -> bool {
        self.runs.contains_key(id)
    }

    /// Step every run once with the same frame timestamp
    pub fn tick(&mut self, now_ms: f64) {
        self.runs
            .retain(|_, task| task.step(now_ms) == TaskStatus::Running);
        tracing::trace!(now_ms, active = self.runs.len(), "scheduler tick");
    }

    /// Tick on every frame of `clock` until nothing is left. Returns the
    /// number of frames waited.
    pub fn run_until_idle<C: FrameClock + ?Sized>(&mut self, clock: &mut C) -> usize {
        let mut frames = 0;
        while self.has_active_animations() {
            self.tick(clock.wait_for_frame());
            frames += 1;
        }
        frames
    }

    /// Check if any runs are still active
    pub fn has_active_animations(&self) -> bool {
        !self.runs.is_empty()
    }

    /// Get the number of runs in the scheduler
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
