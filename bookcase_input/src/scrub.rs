// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider scrubbing: map a pointer drag along a track to a list position.
//!
//! ## Usage
//!
//! 1) Describe the slider with a [`Track`]: where it sits along x, how wide it
//!    is, and the largest value it can produce.
//! 2) Call [`Scrubber::start`] on pointer down. It returns the value under the
//!    pointer, so a click jumps straight there.
//! 3) Call [`Scrubber::update`] on every pointer move to get the new value.
//! 4) Call [`Scrubber::end`] on pointer up. It returns the final value, which
//!    is when hosts re-arm anything that waits for the slider to settle.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use bookcase_input::scrub::{Scrubber, Track};
//!
//! let mut scrub = Scrubber::new(Track::new(100.0, 200.0, 40.0));
//! assert_eq!(scrub.start(Point::new(100.0, 5.0)), 0.0);
//! assert_eq!(scrub.update(Point::new(200.0, 9.0)), Some(20.0));
//! assert_eq!(scrub.end(), Some(20.0));
//! assert!(!scrub.is_scrubbing());
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Point, Vec2};

/// Granularity of slider values.
pub const STEP: f64 = 0.01;

const STEPS_PER_UNIT: f64 = 100.0;

/// Geometry of a horizontal slider track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    /// X coordinate of the track's leading edge.
    pub left: f64,
    /// Width of the track.
    pub width: f64,
    /// Value at the trailing edge; the leading edge is `0`.
    pub max: f64,
}

impl Track {
    /// Creates a track.
    #[must_use]
    pub const fn new(left: f64, width: f64, max: f64) -> Self {
        Self { left, width, max }
    }

    /// Returns the value under `x`, clamped to `[0, max]` and rounded to
    /// [`STEP`].
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        let max = if self.max.is_finite() {
            self.max.max(0.0)
        } else {
            0.0
        };
        if !(self.width > 0.0) || !x.is_finite() {
            return 0.0;
        }
        let t = ((x - self.left) / self.width).clamp(0.0, 1.0);
        round_to_step(t * max).min(max)
    }

    /// Returns the x coordinate of `value`.
    #[must_use]
    pub fn x_of(&self, value: f64) -> f64 {
        if self.max > 0.0 {
            self.left + self.width * (value / self.max).clamp(0.0, 1.0)
        } else {
            self.left
        }
    }
}

/// Tracks one scrub gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrubber {
    track: Track,
    start_pos: Option<Point>,
    last_pos: Option<Point>,
    value: Option<f64>,
}

impl Scrubber {
    /// Creates an idle scrubber over `track`.
    #[must_use]
    pub const fn new(track: Track) -> Self {
        Self {
            track,
            start_pos: None,
            last_pos: None,
            value: None,
        }
    }

    /// Returns the track.
    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Replaces the track, for example when the list length changes.
    ///
    /// A gesture in progress keeps going; its value is re-clamped.
    pub fn set_track(&mut self, track: Track) {
        self.track = track;
        if let Some(pos) = self.last_pos {
            self.value = Some(track.value_at(pos.x));
        }
    }

    /// Starts a gesture at `pos` and returns the value under it.
    pub fn start(&mut self, pos: Point) -> f64 {
        let value = self.track.value_at(pos.x);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.value = Some(value);
        value
    }

    /// Moves the pointer to `pos`.
    ///
    /// Returns the new value, or `None` when no gesture is active.
    pub fn update(&mut self, pos: Point) -> Option<f64> {
        self.start_pos?;
        self.last_pos = Some(pos);
        let value = self.track.value_at(pos.x);
        self.value = Some(value);
        Some(value)
    }

    /// Pointer movement since the gesture started.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        Some(self.last_pos? - self.start_pos?)
    }

    /// The value of the gesture in progress.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Ends the gesture and returns its final value.
    pub fn end(&mut self) -> Option<f64> {
        self.start_pos = None;
        self.last_pos = None;
        self.value.take()
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.start_pos.is_some()
    }
}

fn round_to_step(value: f64) -> f64 {
    (value * STEPS_PER_UNIT).round() / STEPS_PER_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_without_start_is_ignored() {
        let mut scrub = Scrubber::new(Track::new(0.0, 100.0, 10.0));
        assert_eq!(scrub.update(Point::new(50.0, 0.0)), None);
        assert_eq!(scrub.end(), None);
    }

    #[test]
    fn values_clamp_to_track() {
        let track = Track::new(10.0, 100.0, 9.0);
        assert_eq!(track.value_at(-50.0), 0.0);
        assert_eq!(track.value_at(500.0), 9.0);
        assert_eq!(track.value_at(60.0), 4.5);
    }

    #[test]
    fn values_snap_to_step() {
        let track = Track::new(0.0, 3.0, 1.0);
        // 1/3 rounds to the nearest hundredth.
        assert!((track.value_at(1.0) - 0.33).abs() < 1e-9);
    }

    #[test]
    fn degenerate_tracks_yield_zero() {
        assert_eq!(Track::new(0.0, 0.0, 10.0).value_at(5.0), 0.0);
        assert_eq!(Track::new(0.0, 10.0, -3.0).value_at(5.0), 0.0);
        assert_eq!(Track::new(0.0, 10.0, 10.0).value_at(f64::NAN), 0.0);
    }

    #[test]
    fn offset_follows_pointer() {
        let mut scrub = Scrubber::new(Track::new(0.0, 100.0, 10.0));
        scrub.start(Point::new(10.0, 10.0));
        scrub.update(Point::new(40.0, 12.0));
        assert_eq!(scrub.total_offset(), Some(Vec2::new(30.0, 2.0)));
        assert_eq!(scrub.value(), Some(4.0));
    }

    #[test]
    fn shrinking_track_reclamps_value() {
        let mut scrub = Scrubber::new(Track::new(0.0, 100.0, 100.0));
        scrub.start(Point::new(100.0, 0.0));
        scrub.set_track(Track::new(0.0, 100.0, 20.0));
        assert_eq!(scrub.value(), Some(20.0));
        assert_eq!(Track::new(0.0, 100.0, 20.0).x_of(10.0), 50.0);
    }
}
