// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The largest frame delta, in seconds, a [`FrameClock`] reports by default.
pub const MAX_FRAME_DELTA: f64 = 0.1;

/// Converts frame timestamps into frame deltas.
///
/// Timestamps are milliseconds; deltas are seconds. The first tick reports a
/// delta of zero. Deltas are clamped to `[0, max_delta]`, and a non-finite
/// timestamp is ignored (reporting zero without moving the clock).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    last: Option<f64>,
    max_delta: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Creates a clock with the default [`MAX_FRAME_DELTA`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_delta(MAX_FRAME_DELTA)
    }

    /// Creates a clock that clamps deltas to `max_delta` seconds.
    #[must_use]
    pub const fn with_max_delta(max_delta: f64) -> Self {
        Self {
            last: None,
            max_delta,
        }
    }

    /// Returns the timestamp of the most recent tick.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.last
    }

    /// Advances to `now_ms` and returns the elapsed seconds.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let Some(last) = self.last.replace(now_ms) else {
            return 0.0;
        };
        let dt = (now_ms - last) / 1000.0;
        if dt.is_nan() {
            return 0.0;
        }
        dt.clamp(0.0, self.max_delta)
    }

    /// Forgets the last tick, so the next one reports zero.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backwards_time_is_zero() {
        let mut clock = FrameClock::new();
        clock.tick(500.0);
        assert_eq!(clock.tick(400.0), 0.0);
        // The clock follows the host even when it jumps back.
        assert_eq!(clock.last(), Some(400.0));
        assert!((clock.tick(410.0) - 0.01).abs() < 1e-12);
    }

    #[test]
    fn non_finite_timestamps_are_ignored() {
        let mut clock = FrameClock::new();
        clock.tick(100.0);
        assert_eq!(clock.tick(f64::NAN), 0.0);
        assert_eq!(clock.tick(f64::INFINITY), 0.0);
        assert_eq!(clock.last(), Some(100.0));
    }

    #[test]
    fn reset_restarts_at_zero() {
        let mut clock = FrameClock::with_max_delta(1.0);
        clock.tick(0.0);
        assert_eq!(clock.tick(500.0), 0.5);
        clock.reset();
        assert_eq!(clock.tick(10_000.0), 0.0);
    }
}
