//! Timed value interpolation
//!
//! An [`Interpolation`] describes a run from `start` to `end` over a duration
//! with an easing curve. A [`CounterTask`] binds one to a begin time and a
//! display sink and steps it once per frame, reporting
//! `floor(start + (end - start) * easing(progress))` each time until progress
//! reaches 1.
//!
//! Malformed numbers (NaN, infinities) are not rejected; they flow through to
//! the sink as-is.

use crate::clock::FrameClock;
use crate::easing::Easing;
use crate::task::{FrameTask, TaskStatus};

/// Parameters of a single interpolation run
#[derive(Clone, Copy, Debug)]
pub struct Interpolation {
    start: f64,
    end: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Interpolation {
    pub fn new(start: f64, end: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration_ms,
            easing,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Normalized progress after `elapsed_ms`
    ///
    /// A zero or negative duration is already complete. Negative elapsed
    /// time (a frame stamped before the run began) clamps to 0.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Displayed value at a given progress
    ///
    /// A fully eased run reports exactly `floor(end)`; `start + range` can
    /// round below `end` when `start` is fractional.
    pub fn value_at(&self, progress: f64) -> f64 {
        let eased = self.easing.apply(progress);
        if eased == 1.0 {
            return self.end.floor();
        }
        (self.start + (self.end - self.start) * eased).floor()
    }

    /// Displayed value after `elapsed_ms`
    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        self.value_at(self.progress(elapsed_ms))
    }

    /// Bind this run to a begin time and a display sink
    pub fn begin<F>(self, begin_ms: f64, display: F) -> CounterTask<F>
    where
        F: FnMut(f64),
    {
        CounterTask::new(self, begin_ms, display)
    }
}

/// An interpolation run in progress
///
/// `begin_ms` is fixed at creation. The task is running until a frame
/// reports progress 1 (or a progress that is not less than 1, such as NaN),
/// after which stepping is a no-op. Progress never decreases: a frame stamped
/// earlier than the previous one repeats the previous progress.
pub struct CounterTask<F> {
    interpolation: Interpolation,
    begin_ms: f64,
    display: F,
    finished: bool,
    frames: usize,
    progress: f64,
}

impl<F: FnMut(f64)> CounterTask<F> {
    pub fn new(interpolation: Interpolation, begin_ms: f64, display: F) -> Self {
        Self {
            interpolation,
            begin_ms,
            display,
            finished: false,
            frames: 0,
            progress: 0.0,
        }
    }

    pub fn interpolation(&self) -> &Interpolation {
        &self.interpolation
    }

    pub fn begin_ms(&self) -> f64 {
        self.begin_ms
    }

    /// Number of times the sink has been invoked
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl<F: FnMut(f64)> FrameTask for CounterTask<F> {
    fn step(&mut self, now_ms: f64) -> TaskStatus {
        if self.finished {
            return TaskStatus::Finished;
        }

        let progress = self.interpolation.progress(now_ms - self.begin_ms);
        // NaN is not less than anything, so it still reaches the sink
        let progress = if progress < self.progress {
            self.progress
        } else {
            progress
        };
        self.progress = progress;
        (self.display)(self.interpolation.value_at(progress));
        self.frames += 1;

        if progress < 1.0 {
            TaskStatus::Running
        } else {
            self.finished = true;
            TaskStatus::Finished
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Animate from `start` to `end`, calling `display` once per frame of `clock`
///
/// The begin time is read from the clock before the first frame is awaited.
/// Returns the number of frames the sink saw. An infinite duration never
/// completes.
pub fn run<C, F>(
    clock: &mut C,
    display: F,
    start: f64,
    end: f64,
    duration_ms: f64,
    easing: Easing,
) -> usize
where
    C: FrameClock + ?Sized,
    F: FnMut(f64),
{
    let interpolation = Interpolation::new(start, end, duration_ms, easing);
    let begin_ms = clock.now_ms();
    tracing::debug!(start, end, duration_ms, easing = %easing, begin_ms, "interpolation started");

    let mut task = interpolation.begin(begin_ms, display);
    while !task.step(clock.wait_for_frame()).is_finished() {}

    tracing::debug!(frames = task.frames(), "interpolation finished");
    task.frames()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use pretty_assertions::assert_eq;

    fn collect(
        clock: &mut ManualClock,
        start: f64,
        end: f64,
        duration_ms: f64,
        easing: Easing,
    ) -> Vec<f64> {
        let mut seen = Vec::new();
        run(clock, |v| seen.push(v), start, end, duration_ms, easing);
        seen
    }

    #[test]
    fn quart_counter_at_half_time() {
        let mut clock = ManualClock::new(0.0).with_frame_interval(500.0);
        let seen = collect(&mut clock, 0.0, 100.0, 1000.0, Easing::QUART);
        assert_eq!(seen, vec![93.0, 100.0]);
    }

    #[test]
    fn cubic_counter_at_one_fifth() {
        let interpolation = Interpolation::new(0.0, 50.0, 500.0, Easing::CUBIC);
        assert_eq!(interpolation.sample(100.0), 24.0);
    }

    #[test]
    fn equal_bounds_report_start() {
        let mut clock = ManualClock::default();
        let seen = collect(&mut clock, 7.0, 7.0, 300.0, Easing::QUART);
        assert!(!seen.is_empty());
        assert!(seen.iter().all(|&v| v == 7.0));
    }

    #[test]
    fn non_positive_duration_reports_once() {
        for duration in [0.0, -250.0] {
            let mut clock = ManualClock::default();
            let seen = collect(&mut clock, 3.0, 42.9, duration, Easing::CUBIC);
            assert_eq!(seen, vec![42.0], "duration {duration}");
        }
    }

    #[test]
    fn descending_run_converges() {
        let mut clock = ManualClock::default();
        let seen = collect(&mut clock, 100.0, 0.0, 400.0, Easing::QUART);
        assert_eq!(seen.last(), Some(&0.0));
        assert!(seen.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn frame_before_begin_clamps_to_start() {
        let mut clock = ManualClock::new(100.0).with_frames([90.0, 600.0, 1100.0]);
        let seen = collect(&mut clock, 0.0, 100.0, 1000.0, Easing::QUART);
        assert_eq!(seen, vec![0.0, 93.0, 100.0]);
    }

    #[test]
    fn fractional_start_ends_on_floor_of_end() {
        let mut clock = ManualClock::default();
        let seen = collect(&mut clock, -628.1874682105646, 482.0, 1000.0, Easing::QUART);
        assert_eq!(seen.last(), Some(&482.0));

        let mut clock = ManualClock::default();
        let seen = collect(&mut clock, -382.94114614453804, 737.0, 0.0, Easing::CUBIC);
        assert_eq!(seen, vec![737.0]);
    }

    #[test]
    fn clock_stepping_back_mid_run_holds_value() {
        let mut clock = ManualClock::new(0.0).with_frames([500.0, 100.0, 1000.0]);
        let seen = collect(&mut clock, 0.0, 100.0, 1000.0, Easing::QUART);
        assert_eq!(seen, vec![93.0, 93.0, 100.0]);
    }

    #[test]
    fn nan_propagates_and_stops() {
        let mut clock = ManualClock::default();
        let seen = collect(&mut clock, 0.0, f64::NAN, 1000.0, Easing::QUART);
        assert!(seen[0].is_nan());

        let mut clock = ManualClock::default();
        let seen = collect(&mut clock, 0.0, 10.0, f64::NAN, Easing::QUART);
        assert_eq!(seen.len(), 1);
        assert!(seen[0].is_nan());
    }

    #[test]
    fn finished_task_ignores_further_frames() {
        let mut calls = 0;
        let mut task = Interpolation::new(0.0, 1.0, 10.0, Easing::Linear).begin(0.0, |_| calls += 1);
        assert_eq!(task.step(5.0), TaskStatus::Running);
        assert_eq!(task.step(10.0), TaskStatus::Finished);
        assert_eq!(task.step(20.0), TaskStatus::Finished);
        assert!(task.is_finished());
        assert_eq!(task.frames(), 2);
        drop(task);
        assert_eq!(calls, 2);
    }

    #[test]
    fn begin_time_comes_from_clock() {
        let mut clock = ManualClock::new(1_000.0).with_frame_interval(250.0);
        let seen = collect(&mut clock, 0.0, 1_000.0, 1_000.0, Easing::Linear);
        assert_eq!(seen, vec![250.0, 500.0, 750.0, 1_000.0]);
    }
}
