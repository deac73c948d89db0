// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bookcase_view --heading-base-level=0

//! Bookcase View: presentation modes and the state machine that switches them.
//!
//! Three modes present the same view list: a horizontal [shelf](ViewMode::Shelf),
//! a vertical [stack](ViewMode::Stack), and a 3D [coverflow](ViewMode::Coverflow).
//! The [`ViewStateMachine`] separates the mode the user asked for from the mode
//! actually shown: narrow viewports always show the stack, and widening the
//! viewport again brings back the requested mode.
//!
//! Each request or breakpoint crossing yields a [`Transition`] that tells the
//! caller what to do: which physics loop to start or stop, whether to keep a
//! smooth-scroll delegate, how to keep the user's place ([`Continuity`]), and
//! the new [`PresentationFlags`] for the render surface.
//!
//! [`ShelfViewport`] holds the shelf's horizontal geometry and computes
//! centering offsets.
//!
//! ```rust
//! use bookcase_view::{ViewConfig, ViewMode, ViewStateMachine};
//!
//! let mut view = ViewStateMachine::new(ViewConfig::default(), 1280.0, Some("stack"));
//! assert_eq!(view.effective(), ViewMode::Stack);
//!
//! let t = view.request(ViewMode::Coverflow);
//! assert!(t.starts_coverflow());
//!
//! // Narrowing the window forces the stack without forgetting the request.
//! let t = view.set_width(600.0).unwrap();
//! assert!(t.stops_coverflow());
//! assert_eq!(view.requested(), ViewMode::Coverflow);
//! ```

mod flags;
mod machine;
mod mode;
mod viewport;

pub use flags::PresentationFlags;
pub use machine::{Continuity, Transition, ViewConfig, ViewStateMachine};
pub use mode::{PREFERENCE_KEY, ParseViewModeError, ViewMode};
pub use viewport::ShelfViewport;
