// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shelf momentum, wheel boost, and tilt.
//!
//! ## Frame order
//!
//! A host frame runs the pieces in this order:
//!
//! 1) [`ShelfPhysicsState::begin_frame`] turns the frame timestamp into `dt`.
//! 2) [`ShelfPhysicsState::momentum`] advances the key velocity and returns the
//!    scroll delta to apply immediately, if any.
//! 3) [`ShelfPhysicsState::decay_wheel_boost`] relaxes the wheel boost, and
//!    [`ShelfPhysicsState::wheel_multiplier`] is handed to the smooth-scroll
//!    delegate.
//! 4) After the delegate has moved, [`ShelfPhysicsState::observe_scroll`]
//!    derives the tilt from how far the shelf actually moved.
//!
//! Wheel input never moves the shelf directly; it only tunes how strongly the
//! delegate reacts to the wheel.

use bookcase_input::keys::{Direction, DirectionKeys};
use bookcase_timing::FrameClock;
use serde::{Deserialize, Serialize};

/// Constants for the shelf simulation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    /// Speed, in px/s, a held key snaps to before accelerating.
    pub key_base_speed: f64,
    /// Speed cap, in px/s, for key momentum.
    pub key_max_speed: f64,
    /// Acceleration, in px/s², while a key is held.
    pub key_accel: f64,
    /// Exponential friction coefficient, per second, after release.
    pub key_friction: f64,
    /// Speeds below this, in px/s, stop dead after release.
    pub key_stop_speed: f64,
    /// Wheel events closer than this, in ms, grow the boost.
    pub wheel_burst_gap_ms: f64,
    /// Wheel events further apart than this, in ms, reset the boost.
    pub wheel_pause_gap_ms: f64,
    /// Boost added per fast wheel event.
    pub wheel_boost_step: f64,
    /// Boost ceiling.
    pub wheel_max_boost: f64,
    /// Per-frame factor applied to the excess boost above 1.
    pub wheel_boost_decay: f64,
    /// Delegate wheel multiplier at a boost of 1.
    pub wheel_base_multiplier: f64,
    /// Observed speeds below this, in px/s, produce no tilt.
    pub tilt_deadzone: f64,
    /// Degrees of tilt per px/s.
    pub tilt_sensitivity: f64,
    /// Tilt magnitude cap, in degrees.
    pub tilt_max: f64,
    /// Exponential smoothing rate, per second, toward the target tilt.
    pub tilt_smoothing: f64,
    /// Distance, in px, beyond each viewport edge that still receives tilt.
    pub cull_buffer: f64,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            key_base_speed: 100.0,
            key_max_speed: 4000.0,
            key_accel: 2400.0,
            key_friction: 8.0,
            key_stop_speed: 5.0,
            wheel_burst_gap_ms: 120.0,
            wheel_pause_gap_ms: 500.0,
            wheel_boost_step: 0.005,
            wheel_max_boost: 1.1,
            wheel_boost_decay: 0.96,
            wheel_base_multiplier: 0.3,
            tilt_deadzone: 40.0,
            tilt_sensitivity: 0.003,
            tilt_max: 25.0,
            tilt_smoothing: 5.0,
            cull_buffer: 280.0,
        }
    }
}

/// Below this the excess boost snaps back to exactly 1.
const BOOST_SNAP: f64 = 1.001;

/// State of the shelf simulation.
#[derive(Clone, Debug)]
pub struct ShelfPhysicsState {
    config: ShelfConfig,
    clock: FrameClock,
    keys: DirectionKeys,
    key_velocity: f64,
    wheel_boost: f64,
    last_wheel_ms: Option<f64>,
    current_tilt: f64,
    target_tilt: f64,
    last_scroll: Option<f64>,
}

impl Default for ShelfPhysicsState {
    fn default() -> Self {
        Self::new(ShelfConfig::default())
    }
}

impl ShelfPhysicsState {
    /// Creates a resting shelf.
    #[must_use]
    pub fn new(config: ShelfConfig) -> Self {
        Self {
            config,
            clock: FrameClock::new(),
            keys: DirectionKeys::default(),
            key_velocity: 0.0,
            wheel_boost: 1.0,
            last_wheel_ms: None,
            current_tilt: 0.0,
            target_tilt: 0.0,
            last_scroll: None,
        }
    }

    /// Replaces the frame clock, for example to change the frame delta cap.
    #[must_use]
    pub fn with_clock(mut self, clock: FrameClock) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    /// Returns the key velocity in px/s.
    #[must_use]
    pub fn key_velocity(&self) -> f64 {
        self.key_velocity
    }

    /// Returns the wheel boost (at least 1).
    #[must_use]
    pub fn wheel_boost(&self) -> f64 {
        self.wheel_boost
    }

    /// Returns the smoothed tilt in degrees.
    #[must_use]
    pub fn tilt(&self) -> f64 {
        self.current_tilt
    }

    /// Returns the tilt the smoothing is heading toward.
    #[must_use]
    pub fn target_tilt(&self) -> f64 {
        self.target_tilt
    }

    /// Returns the held keys.
    #[must_use]
    pub fn keys(&self) -> &DirectionKeys {
        &self.keys
    }

    /// Marks `dir` as held.
    pub fn press(&mut self, dir: Direction) {
        self.keys.press(dir);
    }

    /// Marks `dir` as released.
    pub fn release(&mut self, dir: Direction) {
        self.keys.release(dir);
    }

    /// Releases both keys.
    pub fn release_all(&mut self) {
        self.keys.clear();
    }

    /// Starts a frame at `now_ms` and returns the clamped delta in seconds.
    pub fn begin_frame(&mut self, now_ms: f64) -> f64 {
        self.repair();
        self.clock.tick(now_ms)
    }

    /// Advances key momentum by `dt` seconds.
    ///
    /// Returns the scroll delta in px to apply immediately, or `None` when the
    /// shelf is at rest.
    pub fn momentum(&mut self, dt: f64) -> Option<f64> {
        let c = &self.config;
        match self.keys.dominant() {
            Some(dir) => {
                let s = dir.sign();
                if self.key_velocity * s < c.key_base_speed {
                    self.key_velocity = s * c.key_base_speed;
                } else {
                    self.key_velocity += s * c.key_accel * dt;
                }
                self.key_velocity = self.key_velocity.clamp(-c.key_max_speed, c.key_max_speed);
            }
            None => {
                let damp = (c.key_friction * dt).min(1.0);
                self.key_velocity -= self.key_velocity * damp;
                if self.key_velocity.abs() < c.key_stop_speed {
                    self.key_velocity = 0.0;
                }
            }
        }
        (self.key_velocity != 0.0).then(|| self.key_velocity * dt)
    }

    /// Records a wheel event at `now_ms`.
    ///
    /// Events in quick succession grow the boost toward its ceiling; a pause
    /// resets it. The first event counts as following a pause.
    pub fn on_wheel(&mut self, now_ms: f64) {
        let c = &self.config;
        let gap = self.last_wheel_ms.map_or(f64::INFINITY, |last| now_ms - last);
        self.last_wheel_ms = Some(now_ms);
        if gap < c.wheel_burst_gap_ms {
            self.wheel_boost = (self.wheel_boost + c.wheel_boost_step).min(c.wheel_max_boost);
        } else if gap > c.wheel_pause_gap_ms {
            self.wheel_boost = 1.0;
        }
    }

    /// Relaxes the boost one frame toward 1.
    pub fn decay_wheel_boost(&mut self) {
        if self.wheel_boost > 1.0 {
            self.wheel_boost = 1.0 + (self.wheel_boost - 1.0) * self.config.wheel_boost_decay;
            if self.wheel_boost < BOOST_SNAP {
                self.wheel_boost = 1.0;
            }
        }
    }

    /// The wheel multiplier for the smooth-scroll delegate.
    #[must_use]
    pub fn wheel_multiplier(&self) -> f64 {
        self.config.wheel_base_multiplier * self.wheel_boost
    }

    /// Observes the scroll position after this frame's movement and returns
    /// the updated tilt in degrees.
    ///
    /// The first observation only records the position, so a shelf that
    /// starts scrolled does not jolt.
    pub fn observe_scroll(&mut self, scroll: f64, dt: f64) -> f64 {
        if !scroll.is_finite() {
            return self.current_tilt;
        }
        let last = *self.last_scroll.get_or_insert(scroll);
        self.last_scroll = Some(scroll);
        let velocity = if dt > 0.0 { (scroll - last) / dt } else { 0.0 };
        let c = &self.config;
        self.target_tilt = if velocity.abs() < c.tilt_deadzone {
            0.0
        } else {
            (velocity * c.tilt_sensitivity).clamp(-c.tilt_max, c.tilt_max)
        };
        let smooth = 1.0 - (-c.tilt_smoothing * dt).exp();
        self.current_tilt += (self.target_tilt - self.current_tilt) * smooth;
        self.repair();
        self.current_tilt
    }

    /// Forgets the last observed scroll position.
    ///
    /// Used when the shelf is re-rendered or returns from another mode, where
    /// the next position is not a continuation of the last one.
    pub fn forget_scroll(&mut self) {
        self.last_scroll = None;
    }

    /// Halts all motion: key velocity, tilt, and held keys.
    pub fn halt(&mut self) {
        self.keys.clear();
        self.key_velocity = 0.0;
        self.current_tilt = 0.0;
        self.target_tilt = 0.0;
        self.last_scroll = None;
    }

    /// The span `[start, end]` that receives tilt for a viewport at `scroll`
    /// of width `viewport`.
    #[must_use]
    pub fn cull_window(&self, scroll: f64, viewport: f64) -> (f64, f64) {
        let start = scroll - self.config.cull_buffer;
        (start, start + viewport + 2.0 * self.config.cull_buffer)
    }

    fn repair(&mut self) {
        if !self.key_velocity.is_finite() {
            self.key_velocity = 0.0;
        }
        if !self.current_tilt.is_finite() {
            self.current_tilt = 0.0;
        }
        if !self.target_tilt.is_finite() {
            self.target_tilt = 0.0;
        }
        if !self.wheel_boost.is_finite() || self.wheel_boost < 1.0 {
            self.wheel_boost = 1.0;
        }
        if self.last_scroll.is_some_and(|s| !s.is_finite()) {
            self.last_scroll = None;
        }
    }
}
