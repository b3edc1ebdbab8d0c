//! Typing effect: reveal text one character per tick

use std::time::Duration;

use exhibit_animation::{FrameTask, TaskStatus};

/// Default time between characters
pub const DEFAULT_SPEED: Duration = Duration::from_millis(50);

/// Reveals `text` one character at a time, each `speed` apart
///
/// The first character appears immediately when the task is first stepped.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    speed_ms: f64,
    /// Byte length of the visible prefix
    shown: usize,
    next_at: Option<f64>,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, speed: Duration) -> Self {
        Self {
            text: text.into(),
            speed_ms: speed.as_secs_f64() * 1000.0,
            shown: 0,
            next_at: None,
        }
    }

    /// Currently visible text
    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }

    fn reveal_one(&mut self) {
        if let Some(ch) = self.text[self.shown..].chars().next() {
            self.shown += ch.len_utf8();
        }
    }
}

impl FrameTask for Typewriter {
    fn step(&mut self, now_ms: f64) -> TaskStatus {
        let mut due = *self.next_at.get_or_insert(now_ms);
        while !self.is_finished() && now_ms >= due {
            self.reveal_one();
            due += self.speed_ms;
        }
        self.next_at = Some(due);

        if self.is_finished() {
            TaskStatus::Finished
        } else {
            TaskStatus::Running
        }
    }

    fn is_finished(&self) -> bool {
        self.shown == self.text.len()
    }
}
