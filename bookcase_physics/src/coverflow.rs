// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coverflow index physics and per-item placement.
//!
//! The coverflow keeps a continuous `index` into the materialized items. The
//! item nearest to it is the active one; the others fan out to each side.
//! Each frame [`CoverflowPhysicsState::step`] runs, in order:
//!
//! 1) auto-seek toward a target (set by clicking an item), or plain friction;
//! 2) acceleration from held keys, which also cancels auto-seek;
//! 3) integration with a velocity cap, then a hard clamp to the materialized
//!    range;
//! 4) snapping toward the nearest whole item when slow and no key is held;
//! 5) the idle timer that reveals the active item's details.
//!
//! The step is purely per frame: constants are per-frame factors, not rates.

use bookcase_input::keys::{Direction, DirectionKeys};
use serde::{Deserialize, Serialize};

/// Constants for the coverflow simulation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverflowConfig {
    /// Per-frame velocity factor in free motion.
    pub friction: f64,
    /// Per-frame fraction of the distance to the nearest item covered when
    /// snapping.
    pub snap_strength: f64,
    /// Speed cap, in items per frame.
    pub max_velocity: f64,
    /// Velocity added per unit of wheel delta.
    pub wheel_factor: f64,
    /// Velocity added per frame per held key.
    pub key_accel: f64,
    /// Proportional gain of auto-seek.
    pub seek_gain: f64,
    /// Auto-seek lands exactly once closer than this.
    pub seek_epsilon: f64,
    /// Snapping engages below this speed.
    pub snap_velocity: f64,
    /// Snapping lands exactly once closer than this.
    pub snap_epsilon: f64,
    /// Speeds above this count as moving for the idle timer.
    pub idle_velocity: f64,
    /// Rest time, in ms, before details are revealed.
    pub idle_reveal_ms: f64,
    /// Items further than this from the index are culled.
    pub visible_range: f64,
    /// Fewer materialized items than this ahead of the index triggers a load.
    pub prefetch_ahead: f64,
    /// Horizontal offset, in px, of the immediate neighbors.
    pub neighbor_offset: f64,
    /// Additional horizontal offset, in px, per item beyond the neighbors.
    pub fan_spacing: f64,
    /// Depth, in px, of the active item.
    pub front_depth: f64,
    /// Depth lost, in px, per item of distance within the neighbors.
    pub depth_falloff: f64,
    /// Depth, in px, of items beyond the neighbors.
    pub back_depth: f64,
    /// Rotation, in degrees, of items at or beyond one item of distance.
    pub side_rotation: f64,
}

impl Default for CoverflowConfig {
    fn default() -> Self {
        Self {
            friction: 0.90,
            snap_strength: 0.02,
            max_velocity: 0.35,
            wheel_factor: 0.0008,
            key_accel: 0.002,
            seek_gain: 0.06,
            seek_epsilon: 0.005,
            snap_velocity: 0.01,
            snap_epsilon: 0.001,
            idle_velocity: 0.001,
            idle_reveal_ms: 500.0,
            visible_range: 15.0,
            prefetch_ahead: 30.0,
            neighbor_offset: 200.0,
            fan_spacing: 50.0,
            front_depth: 100.0,
            depth_falloff: 300.0,
            back_depth: -200.0,
            side_rotation: 60.0,
        }
    }
}

/// What the idle timer did during a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailsChange {
    /// Details became visible.
    Show,
    /// Details were hidden because the coverflow moved.
    Hide,
}

/// Result of one [`CoverflowPhysicsState::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverflowStep {
    /// The continuous index after the step.
    pub index: f64,
    /// The velocity after the step.
    pub velocity: f64,
    /// The active (nearest) item, if any item is materialized.
    pub active: Option<usize>,
    /// A change in detail visibility, if one happened.
    pub details: Option<DetailsChange>,
}

/// The 3D placement of one item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// The item's position in the list.
    pub index: usize,
    /// Horizontal translation in px.
    pub x: f64,
    /// Depth translation in px.
    pub z: f64,
    /// Rotation about the vertical axis in degrees.
    pub rotation_y: f64,
    /// Stacking order; larger is in front.
    pub z_index: i32,
    /// `true` for the active item; all others are dimmed.
    pub active: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct IdleReveal {
    deadline: Option<f64>,
    visible: bool,
}

/// State of the coverflow simulation.
#[derive(Clone, Debug)]
pub struct CoverflowPhysicsState {
    config: CoverflowConfig,
    index: f64,
    velocity: f64,
    target: Option<f64>,
    keys: DirectionKeys,
    active: bool,
    reveal: IdleReveal,
}

impl Default for CoverflowPhysicsState {
    fn default() -> Self {
        Self::new(CoverflowConfig::default())
    }
}

impl CoverflowPhysicsState {
    /// Creates a stopped coverflow at index 0.
    #[must_use]
    pub fn new(config: CoverflowConfig) -> Self {
        Self {
            config,
            index: 0.0,
            velocity: 0.0,
            target: None,
            keys: DirectionKeys::default(),
            active: false,
            reveal: IdleReveal::default(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CoverflowConfig {
        &self.config
    }

    /// Returns the continuous index.
    #[must_use]
    pub fn index(&self) -> f64 {
        self.index
    }

    /// Returns the velocity in items per frame.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns the auto-seek target, if seeking.
    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.target
    }

    /// Returns `true` while the loop is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` while the active item's details are shown.
    #[must_use]
    pub fn details_visible(&self) -> bool {
        self.reveal.visible
    }

    /// Returns the nearest whole item to the index.
    #[must_use]
    pub fn rounded_index(&self) -> usize {
        round_to_index(self.index)
    }

    /// Starts (or resumes) the loop at `index`.
    ///
    /// Velocity and held keys are reset. Starting an already running loop only
    /// moves the index.
    pub fn start(&mut self, index: f64) {
        self.index = if index.is_finite() { index.max(0.0) } else { 0.0 };
        self.velocity = 0.0;
        self.keys.clear();
        self.active = true;
    }

    /// Pauses the loop. Auto-seek and the idle timer are cancelled and details
    /// hidden; the index is kept for the next start.
    pub fn stop(&mut self) {
        self.active = false;
        self.target = None;
        self.keys.clear();
        self.reveal = IdleReveal::default();
    }

    /// Marks `dir` as held and cancels auto-seek.
    pub fn press(&mut self, dir: Direction) {
        self.keys.press(dir);
        self.target = None;
    }

    /// Marks `dir` as released.
    pub fn release(&mut self, dir: Direction) {
        self.keys.release(dir);
    }

    /// Applies a wheel delta and cancels auto-seek.
    pub fn on_wheel(&mut self, delta: f64) {
        if delta.is_finite() {
            self.target = None;
            self.velocity += delta * self.config.wheel_factor;
        }
    }

    /// Starts auto-seeking toward `index`.
    pub fn seek(&mut self, index: f64) {
        if index.is_finite() {
            self.target = Some(index.max(0.0));
        }
    }

    /// Moves the index directly, as when dragging the slider.
    ///
    /// Velocity and auto-seek are cleared, details are hidden, and the idle
    /// timer is cancelled. Returns `true` if details were visible.
    pub fn scrub(&mut self, value: f64) -> bool {
        if value.is_finite() {
            self.index = value.max(0.0);
        }
        self.target = None;
        self.velocity = 0.0;
        let was_visible = self.reveal.visible;
        self.reveal = IdleReveal::default();
        was_visible
    }

    /// Re-arms the idle timer when a scrub gesture ends at `now_ms`.
    pub fn scrub_end(&mut self, now_ms: f64) {
        self.reveal.deadline = Some(now_ms + self.config.idle_reveal_ms);
    }

    /// Hides details and cancels the idle timer without touching motion.
    ///
    /// Returns `true` if details were visible.
    pub fn hide_details(&mut self) -> bool {
        let was_visible = self.reveal.visible;
        self.reveal = IdleReveal::default();
        was_visible
    }

    /// Returns `true` if fewer than the prefetch distance of items are
    /// materialized ahead of the index.
    #[must_use]
    pub fn wants_prefetch(&self, materialized: usize) -> bool {
        count_as_f64(materialized) - self.index < self.config.prefetch_ahead
    }

    /// Advances one frame.
    ///
    /// `materialized` is the number of materialized items; the index is held
    /// within `[0, materialized - 1]`. Returns `None` when the loop is stopped.
    pub fn step(&mut self, now_ms: f64, materialized: usize) -> Option<CoverflowStep> {
        if !self.active {
            return None;
        }
        self.repair();
        let c = self.config;

        match self.target {
            Some(target) => {
                let gap = target - self.index;
                if gap.abs() < c.seek_epsilon {
                    self.index = target;
                    self.velocity = 0.0;
                    self.target = None;
                } else {
                    self.velocity = (gap * c.seek_gain).clamp(-c.max_velocity, c.max_velocity);
                }
            }
            None => self.velocity *= c.friction,
        }

        if self.keys.any() {
            self.velocity += self.keys.net() * c.key_accel;
            self.target = None;
        }

        self.index += self.velocity.clamp(-c.max_velocity, c.max_velocity);

        let last = materialized.checked_sub(1).map(count_as_f64);
        if self.index < 0.0 {
            self.index = 0.0;
            self.velocity = 0.0;
        }
        match last {
            Some(last) if self.index > last => {
                self.index = last;
                self.velocity = 0.0;
            }
            None => {
                self.index = 0.0;
                self.velocity = 0.0;
            }
            Some(_) => {}
        }

        let key_held = self.keys.any();
        if !key_held && self.velocity.abs() < c.snap_velocity {
            let nearest = self.index.round();
            let gap = nearest - self.index;
            if gap.abs() > c.snap_epsilon {
                self.index += gap * c.snap_strength;
            } else {
                self.index = nearest;
            }
        }

        let details = self.update_reveal(now_ms, key_held);

        Some(CoverflowStep {
            index: self.index,
            velocity: self.velocity,
            active: (materialized > 0).then(|| self.rounded_index().min(materialized - 1)),
            details,
        })
    }

    fn update_reveal(&mut self, now_ms: f64, key_held: bool) -> Option<DetailsChange> {
        let c = &self.config;
        if self.velocity.abs() > c.idle_velocity || key_held {
            self.reveal.deadline = None;
            if self.reveal.visible {
                self.reveal.visible = false;
                return Some(DetailsChange::Hide);
            }
            return None;
        }
        if self.reveal.visible {
            return None;
        }
        match self.reveal.deadline {
            None => {
                self.reveal.deadline = Some(now_ms + c.idle_reveal_ms);
                None
            }
            Some(deadline) if now_ms >= deadline => {
                self.reveal.deadline = None;
                if self.velocity.abs() < c.idle_velocity {
                    self.reveal.visible = true;
                    Some(DetailsChange::Show)
                } else {
                    None
                }
            }
            Some(_) => None,
        }
    }

    /// Returns the placement of every materialized item within the visible
    /// range of the index, in list order.
    pub fn placements(&self, materialized: usize) -> impl Iterator<Item = Placement> + '_ {
        let c = &self.config;
        let first = round_to_index((self.index - c.visible_range).ceil());
        let last = round_to_index((self.index + c.visible_range).floor());
        let end = last.saturating_add(1).min(materialized);
        let active = self.rounded_index();
        (first.min(end)..end).map(move |i| self.place(i, active))
    }

    fn place(&self, i: usize, active: usize) -> Placement {
        let c = &self.config;
        let dist = count_as_f64(i) - self.index;
        let abs = dist.abs();
        let (x, z, rotation_y) = if abs <= 1.0 {
            (
                dist * c.neighbor_offset,
                c.front_depth - c.depth_falloff * abs,
                -c.side_rotation * dist,
            )
        } else {
            let sign = dist.signum();
            (
                sign * (c.neighbor_offset + (abs - 1.0) * c.fan_spacing),
                c.back_depth,
                -c.side_rotation * sign,
            )
        };
        let rounded = i.abs_diff(active);
        let z_index = match rounded {
            0 => 2000,
            1 => 1500,
            n => 1000 - i32::try_from(n).unwrap_or(1000),
        };
        Placement {
            index: i,
            x,
            z,
            rotation_y,
            z_index,
            active: rounded == 0,
        }
    }

    fn repair(&mut self) {
        if !self.index.is_finite() {
            self.index = 0.0;
        }
        if !self.velocity.is_finite() {
            self.velocity = 0.0;
        }
        if self.target.is_some_and(|t| !t.is_finite()) {
            self.target = None;
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the index is finite, non-negative, and bounded by a list length"
)]
fn round_to_index(value: f64) -> usize {
    if value.is_finite() && value > 0.0 {
        value.round() as usize
    } else {
        0
    }
}

// List lengths stay far below 2^52.
fn count_as_f64(n: usize) -> f64 {
    n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(index: f64) -> CoverflowPhysicsState {
        let mut cf = CoverflowPhysicsState::default();
        cf.start(index);
        cf
    }

    #[test]
    fn stopped_loop_does_not_step() {
        let mut cf = CoverflowPhysicsState::default();
        assert!(cf.step(0.0, 10).is_none());
        cf.start(2.0);
        cf.stop();
        assert!(cf.step(16.0, 10).is_none());
        assert_eq!(cf.index(), 2.0);
    }

    #[test]
    fn keys_cancel_seek_and_accelerate() {
        let mut cf = running(5.0);
        cf.seek(9.0);
        cf.press(Direction::Right);
        assert_eq!(cf.target(), None);
        let step = cf.step(0.0, 20).unwrap();
        assert!((step.velocity - 0.002).abs() < 1e-12);
        assert!(step.index > 5.0);
    }

    #[test]
    fn both_keys_cancel_out() {
        let mut cf = running(5.0);
        cf.press(Direction::Right);
        cf.press(Direction::Left);
        let step = cf.step(0.0, 20).unwrap();
        assert_eq!(step.velocity, 0.0);
        // Held keys suppress snapping.
        assert_eq!(step.index, 5.0);
    }

    #[test]
    fn wheel_adds_velocity() {
        let mut cf = running(0.0);
        cf.seek(3.0);
        cf.on_wheel(100.0);
        assert_eq!(cf.target(), None);
        assert!((cf.velocity() - 0.08).abs() < 1e-12);
    }

    #[test]
    fn snapping_settles_on_whole_item() {
        let mut cf = running(4.3);
        let mut frames = 0;
        while cf.index() != 4.0 {
            cf.step(f64::from(frames) * 16.0, 20);
            frames += 1;
            assert!(frames < 1_000, "never snapped");
        }
        assert_eq!(cf.rounded_index(), 4);
    }

    #[test]
    fn empty_list_pins_index_to_zero() {
        let mut cf = running(7.0);
        let step = cf.step(0.0, 0).unwrap();
        assert_eq!(step.index, 0.0);
        assert_eq!(step.active, None);
    }

    #[test]
    fn idle_reveal_after_rest() {
        let mut cf = running(2.0);
        assert_eq!(cf.step(0.0, 10).unwrap().details, None);
        assert_eq!(cf.step(499.0, 10).unwrap().details, None);
        assert_eq!(cf.step(500.0, 10).unwrap().details, Some(DetailsChange::Show));
        assert!(cf.details_visible());
        cf.on_wheel(100.0);
        assert_eq!(cf.step(516.0, 10).unwrap().details, Some(DetailsChange::Hide));
        assert!(!cf.details_visible());
    }

    #[test]
    fn scrub_hides_and_end_rearms() {
        let mut cf = running(0.0);
        cf.step(0.0, 10);
        cf.step(500.0, 10);
        assert!(cf.details_visible());
        assert!(cf.scrub(6.0));
        assert!(!cf.details_visible());
        assert_eq!(cf.index(), 6.0);
        cf.scrub_end(1_000.0);
        assert_eq!(cf.step(1_200.0, 10).unwrap().details, None);
        assert_eq!(cf.step(1_500.0, 10).unwrap().details, Some(DetailsChange::Show));
    }

    #[test]
    fn placement_geometry() {
        let cf = running(3.0);
        let placed: Vec<_> = cf.placements(10).collect();
        assert_eq!(placed.len(), 10);
        let active = placed[3];
        assert_eq!((active.x, active.z, active.rotation_y), (0.0, 100.0, 0.0));
        assert_eq!(active.z_index, 2000);
        assert!(active.active);
        let right = placed[4];
        assert_eq!((right.x, right.z, right.rotation_y), (200.0, -200.0, -60.0));
        assert_eq!(right.z_index, 1500);
        let far_left = placed[0];
        assert_eq!((far_left.x, far_left.z, far_left.rotation_y), (-300.0, -200.0, 60.0));
        assert_eq!(far_left.z_index, 997);
        assert!(!far_left.active);
    }

    #[test]
    fn placement_between_items_interpolates() {
        let cf = running(2.5);
        let placed: Vec<_> = cf.placements(5).collect();
        let left = placed[2];
        assert_eq!((left.x, left.z, left.rotation_y), (-100.0, -50.0, 30.0));
    }

    #[test]
    fn placements_are_culled() {
        let cf = running(40.0);
        let placed: Vec<_> = cf.placements(100).collect();
        assert_eq!(placed.first().map(|p| p.index), Some(25));
        assert_eq!(placed.last().map(|p| p.index), Some(55));
        assert!(cf.placements(20).all(|p| p.index < 20));
    }

    #[test]
    fn prefetch_threshold() {
        let cf = running(21.0);
        assert!(cf.wants_prefetch(50));
        assert!(!cf.wants_prefetch(51));
    }
}
