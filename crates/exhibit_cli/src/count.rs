//! `exhibit count`: animate a number in the terminal

use std::cell::RefCell;
use std::io::{self, Write};

use anyhow::{Context, Result};
use exhibit_animation::{Easing, FrameClock, FrameTask, Interpolation, SystemClock};
use exhibit_i18n::{format_integer, normalize_locale, system_locale, DEFAULT_LOCALE};

/// Resolved parameters for one terminal counter
#[derive(Debug)]
pub struct CountOptions {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub easing: Easing,
    pub locale: String,
    pub fps: u32,
}

impl CountOptions {
    pub fn new(
        from: f64,
        to: f64,
        duration_ms: f64,
        easing: &str,
        locale: Option<&str>,
        fps: u32,
    ) -> Result<Self> {
        let easing = easing.parse::<Easing>().context("Invalid easing")?;
        let locale = locale
            .map(normalize_locale)
            .or_else(system_locale)
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        Ok(Self {
            from,
            to,
            duration_ms,
            easing,
            locale,
            fps,
        })
    }
}

/// Drive the counter against `clock`, writing each frame over the previous
/// one. Returns the number of frames drawn.
///
/// A failed write ends the run at that frame.
pub fn count_with<C, W>(options: &CountOptions, clock: &mut C, out: &mut W) -> Result<usize>
where
    C: FrameClock + ?Sized,
    W: Write,
{
    let write_error: RefCell<Option<io::Error>> = RefCell::new(None);
    let interpolation = Interpolation::new(
        options.from,
        options.to,
        options.duration_ms,
        options.easing,
    );

    let begin_ms = clock.now_ms();
    tracing::debug!(begin_ms, "counter started");

    let mut task = interpolation.begin(begin_ms, |value| {
        let written = write!(out, "\r{}", format_integer(value, &options.locale))
            .and_then(|_| out.flush());
        if let Err(e) = written {
            *write_error.borrow_mut() = Some(e);
        }
    });
    loop {
        let status = task.step(clock.wait_for_frame());
        if let Some(e) = write_error.borrow_mut().take() {
            tracing::debug!(frames = task.frames(), "counter output closed");
            return Err(e).context("Failed to write counter frame");
        }
        if status.is_finished() {
            break;
        }
    }

    let frames = task.frames();
    drop(task);
    writeln!(out)?;
    Ok(frames)
}

/// Run the counter in real time on stdout
pub fn count(options: &CountOptions) -> Result<()> {
    tracing::info!(
        from = options.from,
        to = options.to,
        duration_ms = options.duration_ms,
        easing = %options.easing,
        locale = %options.locale,
        "counting"
    );
    let mut clock = SystemClock::new(options.fps);
    let stdout = io::stdout();
    let frames = count_with(options, &mut clock, &mut stdout.lock())?;
    tracing::debug!(frames, "counter done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhibit_animation::ManualClock;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_grouped_frames() {
        let options = CountOptions::new(0.0, 12_000.0, 1000.0, "quart", Some("vi_VN"), 60).unwrap();
        let mut clock = ManualClock::new(0.0).with_frame_interval(500.0);
        let mut out = Vec::new();

        let frames = count_with(&options, &mut clock, &mut out).unwrap();

        assert_eq!(frames, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "\r11.250\r12.000\n");
    }

    struct BrokenPipe {
        writes: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_stops_the_run() {
        let options = CountOptions::new(0.0, 100.0, 10_000.0, "linear", Some("en"), 60).unwrap();
        let mut clock = ManualClock::new(0.0).with_frame_interval(100.0);
        let mut out = BrokenPipe { writes: 0 };

        let err = count_with(&options, &mut clock, &mut out).unwrap_err();

        assert!(format!("{err:#}").contains("Failed to write counter frame"));
        assert_eq!(out.writes, 1);
        assert_eq!(clock.now_ms(), 100.0);
    }

    #[test]
    fn rejects_unknown_easing() {
        let err = CountOptions::new(0.0, 1.0, 1.0, "wobble", Some("en"), 60).unwrap_err();
        assert!(format!("{err:#}").contains("unknown easing `wobble`"));
    }
}
