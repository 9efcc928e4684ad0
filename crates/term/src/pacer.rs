//! Frame pacing: a fixed sleep between frames.

use std::thread;
use std::time::Duration;

/// Time between frames at `hz` frames per second.
///
/// Non-positive or non-finite rates give a zero interval (no pacing).
pub fn frame_interval(hz: f32) -> Duration {
    if hz.is_finite() && hz > 0.0 {
        Duration::from_secs_f64(1.0 / f64::from(hz))
    } else {
        Duration::ZERO
    }
}

/// Block the calling thread for `1 / hz` seconds.
pub fn pace(hz: f32) {
    FramePacer::new(hz).pace();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    interval: Duration,
}

impl FramePacer {
    pub fn new(hz: f32) -> Self {
        Self {
            interval: frame_interval(hz),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sleep for one frame interval. This is the only blocking point of a
    /// frame loop.
    pub fn pace(&self) {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn interval_is_reciprocal_of_rate() {
        assert_eq!(frame_interval(20.0), Duration::from_millis(50));
        assert_eq!(frame_interval(1.0), Duration::from_secs(1));
    }

    #[test]
    fn invalid_rates_do_not_pace() {
        for hz in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            assert_eq!(frame_interval(hz), Duration::ZERO);
        }
    }

    #[test]
    fn pace_blocks_at_least_one_interval() {
        let pacer = FramePacer::new(200.0);
        let start = Instant::now();
        pacer.pace();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
