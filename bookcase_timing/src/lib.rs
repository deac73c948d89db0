// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bookcase_timing --heading-base-level=0

//! Bookcase Timing: host-agnostic timekeeping for animation loops.
//!
//! Nothing in this crate reads a clock. Hosts pass timestamps in (typically
//! the `requestAnimationFrame` timestamp or a monotonic clock, in
//! milliseconds), which keeps simulations deterministic and testable.
//!
//! - [`FrameClock`] turns successive frame timestamps into a clamped frame
//!   delta in seconds.
//! - [`TimerQueue`] holds keyed one-shot timers (debounces, idle reveals,
//!   delayed work) and reports which ones fired when polled.
//!
//! ```rust
//! use bookcase_timing::{FrameClock, TimerQueue};
//!
//! let mut clock = FrameClock::new();
//! assert_eq!(clock.tick(1_000.0), 0.0);
//! assert!((clock.tick(1_016.0) - 0.016).abs() < 1e-9);
//! // A backgrounded tab produces one huge gap; it is clamped.
//! assert_eq!(clock.tick(9_000.0), 0.1);
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Timer { Debounce }
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule(Timer::Debounce, 9_100.0);
//! assert!(timers.poll(9_050.0).is_empty());
//! assert_eq!(timers.poll(9_100.0), [Timer::Debounce]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod clock;
mod queue;

pub use clock::{FrameClock, MAX_FRAME_DELTA};
pub use queue::TimerQueue;
