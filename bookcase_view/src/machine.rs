// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

use crate::{PresentationFlags, ViewMode};

/// Tunables for the view state machine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Viewports this wide or narrower, in px, are compact.
    pub compact_breakpoint: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint: 768.0,
        }
    }
}

impl ViewConfig {
    /// Returns `true` if a viewport of `width` px is compact.
    #[must_use]
    pub fn is_compact(&self, width: f64) -> bool {
        width <= self.compact_breakpoint
    }
}

/// How the destination mode should keep the user's place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Continuity {
    /// Nothing to carry over.
    None,
    /// Scroll to the item nearest the coverflow index, without selecting it.
    FromCoverflow,
    /// Keep the active selection, if any, in view.
    KeepSelection,
    /// Seed the coverflow index from the active selection, if any.
    SeedCoverflow,
}

/// The outcome of a mode request or a viewport change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Effective mode before the change.
    pub from: ViewMode,
    /// Effective mode after the change.
    pub to: ViewMode,
    /// The requested mode after the change.
    pub requested: ViewMode,
    /// Presentation flags after the change.
    pub flags: PresentationFlags,
    /// The requested mode should be written to the preference store.
    pub persist: bool,
    /// The detail panel should be hidden; the selection is kept.
    pub hide_details: bool,
}

impl Transition {
    /// Returns `true` if the coverflow loop should start (or restart).
    #[must_use]
    pub fn starts_coverflow(&self) -> bool {
        self.to == ViewMode::Coverflow
    }

    /// Returns `true` if the coverflow loop should stop.
    #[must_use]
    pub fn stops_coverflow(&self) -> bool {
        self.from == ViewMode::Coverflow && self.to != ViewMode::Coverflow
    }

    /// Returns `true` if the smooth-scroll delegate should exist afterward.
    #[must_use]
    pub fn wants_delegate(&self) -> bool {
        self.flags.contains(PresentationFlags::SMOOTH_DELEGATE)
    }

    /// How the destination keeps the user's place.
    #[must_use]
    pub fn continuity(&self) -> Continuity {
        match (self.from, self.to) {
            (_, ViewMode::Coverflow) => Continuity::SeedCoverflow,
            (ViewMode::Coverflow, _) => Continuity::FromCoverflow,
            (from, to) if from != to || self.persist => Continuity::KeepSelection,
            _ => Continuity::None,
        }
    }
}

/// The requested and effective presentation modes.
///
/// The requested mode is the user's preference. The effective mode is what is
/// actually shown: on a compact viewport it is always [`ViewMode::Stack`].
#[derive(Clone, Debug)]
pub struct ViewStateMachine {
    config: ViewConfig,
    requested: ViewMode,
    compact: bool,
    width: f64,
}

impl ViewStateMachine {
    /// Creates the machine for a viewport of `width` px.
    ///
    /// A compact viewport starts in the stack mode. Otherwise a valid stored
    /// preference wins, and the shelf is the fallback.
    #[must_use]
    pub fn new(config: ViewConfig, width: f64, stored: Option<&str>) -> Self {
        let compact = config.is_compact(width);
        let requested = if compact {
            ViewMode::Stack
        } else {
            stored
                .and_then(|s| s.parse().ok())
                .unwrap_or_default()
        };
        Self {
            config,
            requested,
            compact,
            width,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Returns the requested mode.
    #[must_use]
    pub fn requested(&self) -> ViewMode {
        self.requested
    }

    /// Returns the mode actually shown.
    #[must_use]
    pub fn effective(&self) -> ViewMode {
        if self.compact {
            ViewMode::Stack
        } else {
            self.requested
        }
    }

    /// Returns `true` while the viewport is compact.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Returns the last viewport width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the current presentation flags.
    #[must_use]
    pub fn flags(&self) -> PresentationFlags {
        PresentationFlags::compute(self.requested, self.compact)
    }

    /// Requests `mode`.
    ///
    /// Every request is a transition, including a request for the current
    /// mode; the result asks for the preference to be persisted.
    pub fn request(&mut self, mode: ViewMode) -> Transition {
        let from = self.effective();
        self.requested = mode;
        Transition {
            from,
            to: self.effective(),
            requested: mode,
            flags: self.flags(),
            persist: true,
            hide_details: self.compact,
        }
    }

    /// Records a new viewport width.
    ///
    /// Returns a transition when the viewport crossed the compact breakpoint.
    pub fn set_width(&mut self, width: f64) -> Option<Transition> {
        if !width.is_finite() {
            return None;
        }
        self.width = width;
        let compact = self.config.is_compact(width);
        if compact == self.compact {
            return None;
        }
        let from = self.effective();
        self.compact = compact;
        Some(Transition {
            from,
            to: self.effective(),
            requested: self.requested,
            flags: self.flags(),
            persist: false,
            hide_details: compact,
        })
    }
}
