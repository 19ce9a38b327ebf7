//! Animation clocks
//!
//! Both clocks report milliseconds, the unit the orbit and demo updates are
//! tuned for.

use std::time::Instant;

use super::traits::AnimationClock;

/// Wall clock with pause and time-scale controls
///
/// Paused time does not advance and changing the scale never makes the
/// reading jump, so the output stays monotonic.
pub struct SystemClock {
    /// Reading accumulated before `segment_start`
    banked_ms: f64,
    /// Start of the current running segment; `None` while paused
    segment_start: Option<Instant>,
    time_scale: f64,
    last_reading: f64,
}

impl SystemClock {
    /// Start a running clock at zero
    pub fn new() -> Self {
        Self {
            banked_ms: 0.0,
            segment_start: Some(Instant::now()),
            time_scale: 1.0,
            last_reading: 0.0,
        }
    }

    fn segment_ms(&self) -> f64 {
        self.segment_start
            .map(|start| start.elapsed().as_secs_f64() * 1000.0 * self.time_scale)
            .unwrap_or(0.0)
    }

    /// Freeze the reading until [`resume`](Self::resume)
    pub fn pause(&mut self) {
        if self.segment_start.is_some() {
            self.banked_ms += self.segment_ms();
            self.segment_start = None;
        }
    }

    pub fn resume(&mut self) {
        if self.segment_start.is_none() {
            self.segment_start = Some(Instant::now());
        }
    }

    pub fn is_paused(&self) -> bool {
        self.segment_start.is_none()
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Set the playback speed multiplier (1.0 = real time)
    ///
    /// Negative values are clamped to zero to keep time monotonic.
    pub fn set_time_scale(&mut self, scale: f64) {
        let running = !self.is_paused();
        self.pause();
        self.time_scale = scale.max(0.0);
        if running {
            self.resume();
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClock for SystemClock {
    fn now(&mut self) -> f64 {
        let reading = (self.banked_ms + self.segment_ms()).max(self.last_reading);
        self.last_reading = reading;
        reading
    }
}

/// Clock advanced explicitly by the caller
///
/// Used for deterministic playback, offline frame stepping and tests.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    time: f64,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { time: start }
    }

    /// Jump to `time`; times earlier than the current reading are ignored
    pub fn set(&mut self, time: f64) {
        debug_assert!(time >= self.time, "clock moved backwards: {} -> {}", self.time, time);
        self.time = self.time.max(time);
    }

    pub fn advance(&mut self, delta_ms: f64) {
        debug_assert!(delta_ms >= 0.0, "negative clock step {delta_ms}");
        self.time += delta_ms.max(0.0);
    }
}

impl AnimationClock for ManualClock {
    fn now(&mut self) -> f64 {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_manual_clock_steps() {
        let mut clock = ManualClock::new(0.0);
        assert_eq!(clock.now(), 0.0);
        clock.advance(16.0);
        clock.advance(16.0);
        assert_eq!(clock.now(), 32.0);
        clock.set(1000.0);
        assert_eq!(clock.now(), 1000.0);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let mut clock = SystemClock::new();
        let mut previous = clock.now();
        for _ in 0..100 {
            let reading = clock.now();
            assert!(reading >= previous);
            previous = reading;
        }
    }

    #[test]
    fn test_paused_system_clock_holds_still() {
        let mut clock = SystemClock::new();
        clock.pause();
        let frozen = clock.now();
        thread::sleep(Duration::from_millis(5));
        assert_eq!(clock.now(), frozen);
        assert!(clock.is_paused());

        clock.resume();
        thread::sleep(Duration::from_millis(5));
        assert!(clock.now() > frozen);
    }

    #[test]
    fn test_zero_time_scale_stops_advance() {
        let mut clock = SystemClock::new();
        clock.set_time_scale(-3.0);
        assert_eq!(clock.time_scale(), 0.0);
        let first = clock.now();
        thread::sleep(Duration::from_millis(5));
        assert_eq!(clock.now(), first);
    }
}
