// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bookcase_physics --heading-base-level=0

//! Bookcase Physics: the two continuous simulations behind the shelf.
//!
//! Both simulations are explicit owned state advanced by a per-frame step
//! function. Neither reads a clock or touches a surface: hosts pass in
//! timestamps and current scroll positions, and apply what comes out.
//!
//! - [`shelf`]: linear momentum for a horizontally scrolling shelf. Held arrow
//!   keys accelerate a velocity in pixels per second, fast wheel bursts grow a
//!   wheel multiplier, and the observed scroll velocity becomes a smoothed tilt
//!   angle applied to every item near the viewport.
//! - [`coverflow`]: a continuous index into the list, moved by keys, wheel,
//!   clicks (auto-seek), and slider scrubbing. It snaps to whole items when
//!   slow, reveals details after a short idle period, and produces a 3D
//!   placement for each item near the index.
//!
//! ```rust
//! use bookcase_input::keys::Direction;
//! use bookcase_physics::shelf::ShelfPhysicsState;
//!
//! let mut shelf = ShelfPhysicsState::default();
//! shelf.press(Direction::Right);
//! shelf.begin_frame(0.0);
//! let dt = shelf.begin_frame(16.0);
//! let delta = shelf.momentum(dt).unwrap();
//! assert!(delta > 0.0);
//! ```

pub mod coverflow;
pub mod shelf;
