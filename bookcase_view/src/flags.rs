// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;

use crate::ViewMode;

bitflags! {
    /// Presentation flags consumed by the render surface.
    ///
    /// Exactly one `VIEW_*` flag is set, naming the requested mode. The
    /// remaining flags follow from the requested mode and whether the viewport
    /// is compact.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PresentationFlags: u16 {
        /// The shelf mode is requested.
        const VIEW_SHELF = 1 << 0;
        /// The stack mode is requested.
        const VIEW_STACK = 1 << 1;
        /// The coverflow mode is requested.
        const VIEW_COVERFLOW = 1 << 2;
        /// The viewport is compact and the stack layout is forced.
        const FORCE_STACK = 1 << 3;
        /// The horizontal shelf layout is in effect.
        const FORCE_SHELF = 1 << 4;
        /// A smooth-scroll delegate should exist.
        const SMOOTH_DELEGATE = 1 << 5;
        /// The surface scrolls natively with smooth behavior.
        const NATIVE_SMOOTH_SCROLL = 1 << 6;
        /// The keyboard instructions are shown.
        const INSTRUCTIONS = 1 << 7;
        /// The coverflow slider is shown.
        const SLIDER = 1 << 8;
    }
}

impl PresentationFlags {
    /// Computes the flags for a requested mode on a compact or wide viewport.
    #[must_use]
    pub fn compute(requested: ViewMode, compact: bool) -> Self {
        let mut flags = match requested {
            ViewMode::Shelf => Self::VIEW_SHELF | Self::INSTRUCTIONS,
            ViewMode::Stack => Self::VIEW_STACK,
            ViewMode::Coverflow => Self::VIEW_COVERFLOW,
        };
        if compact {
            flags |= Self::FORCE_STACK | Self::NATIVE_SMOOTH_SCROLL;
        } else {
            match requested {
                ViewMode::Shelf => flags |= Self::FORCE_SHELF | Self::SMOOTH_DELEGATE,
                ViewMode::Stack => flags |= Self::NATIVE_SMOOTH_SCROLL,
                ViewMode::Coverflow => flags |= Self::SLIDER,
            }
        }
        flags
    }

    /// The requested mode named by the `VIEW_*` flag.
    #[must_use]
    pub fn view(self) -> Option<ViewMode> {
        if self.contains(Self::VIEW_SHELF) {
            Some(ViewMode::Shelf)
        } else if self.contains(Self::VIEW_STACK) {
            Some(ViewMode::Stack)
        } else if self.contains(Self::VIEW_COVERFLOW) {
            Some(ViewMode::Coverflow)
        } else {
            None
        }
    }
}
