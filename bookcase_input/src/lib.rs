// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bookcase_input --heading-base-level=0

//! Bookcase Input: small input state managers for catalog navigation.
//!
//! The physics loops do not consume raw events. Hosts translate their events
//! into the state kept here, and the loops read that state once per frame:
//!
//! - [`keys`]: which arrow directions are currently held, with the
//!   left-wins rule used by momentum scrolling.
//! - [`scrub`]: a pointer drag along a slider track, mapped to a continuous
//!   list position.
//!
//! ```rust
//! use bookcase_input::keys::{Direction, DirectionKeys, Key};
//!
//! let mut keys = DirectionKeys::default();
//! if let Key::Direction(dir) = Key::from_name("ArrowRight") {
//!     keys.press(dir);
//! }
//! assert_eq!(keys.dominant(), Some(Direction::Right));
//! keys.press(Direction::Left);
//! assert_eq!(keys.dominant(), Some(Direction::Left));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod keys;
pub mod scrub;
