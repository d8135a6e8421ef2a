//! Auto-play driver: repeated `advance()` with a delay between frames.

use std::time::{Duration, Instant};

use crate::search::{SessionError, ViewModel};

use super::SearchSession;

/// Delay between frames at speed 1.0.
pub const BASE_STEP_DELAY: Duration = Duration::from_millis(1000);
pub const MIN_SPEED: f64 = 0.5;
pub const MAX_SPEED: f64 = 2.0;
/// Increment used by the speed up/down keys.
pub const SPEED_STEP: f64 = 0.5;

pub fn clamp_speed(speed: f64) -> f64 {
    if speed.is_nan() {
        return 1.0;
    }
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

/// Delay between frames for a speed multiplier.
pub fn step_delay(base: Duration, speed: f64) -> Duration {
    base.div_f64(clamp_speed(speed))
}

/// Tick-polled auto-play state.
///
/// Holds no timers: the caller passes the current instant to [`AutoPlay::due`]
/// from its own loop and advances the navigator when it returns true.
#[derive(Debug, Clone)]
pub struct AutoPlay {
    delay: Duration,
    playing: bool,
    last_step: Option<Instant>,
}

impl AutoPlay {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            playing: false,
            last_step: None,
        }
    }

    /// Begin playing; the first advance is due one delay after `now`.
    pub fn start(&mut self, now: Instant) {
        self.playing = true;
        self.last_step = Some(now);
    }

    pub fn stop(&mut self) {
        self.playing = false;
        self.last_step = None;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Whether an advance is due at `now`. Marks the step as taken.
    pub fn due(&mut self, now: Instant) -> bool {
        if !self.playing {
            return false;
        }
        let ready = self
            .last_step
            .map_or(true, |last| now.saturating_duration_since(last) >= self.delay);
        if ready {
            self.last_step = Some(now);
        }
        ready
    }
}

impl Default for AutoPlay {
    fn default() -> Self {
        Self::new(BASE_STEP_DELAY)
    }
}

/// Play the session's trace from the cursor to the end.
///
/// `on_frame` receives the current view first, then one view per advance,
/// with `delay` between frames. Returns the number of frames emitted.
pub async fn play_to_end<F>(
    session: &mut SearchSession,
    delay: Duration,
    mut on_frame: F,
) -> Result<usize, SessionError>
where
    F: FnMut(&ViewModel),
{
    on_frame(&session.current_view()?);
    let mut frames = 1;

    while !session.navigator().is_at_end() {
        tokio::time::sleep(delay).await;
        if !session.advance().moved() {
            break;
        }
        on_frame(&session.current_view()?);
        frames += 1;
    }

    tracing::debug!(frames, "Auto-play reached end of trace");
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_delay_scales_with_speed() {
        assert_eq!(step_delay(BASE_STEP_DELAY, 1.0), Duration::from_millis(1000));
        assert_eq!(step_delay(BASE_STEP_DELAY, 2.0), Duration::from_millis(500));
        assert_eq!(step_delay(BASE_STEP_DELAY, 0.5), Duration::from_millis(2000));
    }

    #[test]
    fn test_speed_is_clamped() {
        assert_eq!(clamp_speed(10.0), MAX_SPEED);
        assert_eq!(clamp_speed(0.0), MIN_SPEED);
        assert_eq!(clamp_speed(f64::NAN), 1.0);
    }

    #[test]
    fn test_due_respects_delay() {
        let mut autoplay = AutoPlay::new(Duration::from_millis(100));
        let start = Instant::now();

        assert!(!autoplay.due(start));

        autoplay.start(start);
        assert!(!autoplay.due(start + Duration::from_millis(50)));
        assert!(autoplay.due(start + Duration::from_millis(100)));
        // next step measured from the last one
        assert!(!autoplay.due(start + Duration::from_millis(150)));
        assert!(autoplay.due(start + Duration::from_millis(200)));
    }

    #[test]
    fn test_stop_halts_playback() {
        let mut autoplay = AutoPlay::new(Duration::ZERO);
        let now = Instant::now();
        autoplay.start(now);
        assert!(autoplay.is_playing());

        autoplay.stop();
        assert!(!autoplay.is_playing());
        assert!(!autoplay.due(now));
    }
}
