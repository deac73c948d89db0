// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Session storage key under which the requested mode is persisted.
pub const PREFERENCE_KEY: &str = "preferredView";

/// A presentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Spines side by side on a horizontally scrolling shelf.
    #[default]
    Shelf,
    /// A vertically scrolling stack.
    Stack,
    /// Covers fanned out in 3D around a continuous index.
    Coverflow,
}

impl ViewMode {
    /// All modes, in picker order.
    pub const ALL: [Self; 3] = [Self::Shelf, Self::Stack, Self::Coverflow];

    /// The persisted identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shelf => "shelf",
            Self::Stack => "stack",
            Self::Coverflow => "coverflow",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`ViewMode`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown view mode `{0}`, expected one of: shelf, stack, coverflow")]
pub struct ParseViewModeError(String);

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    /// Parses a persisted identifier. Matching is exact, since stored values
    /// are only ever written by [`ViewMode::as_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseViewModeError(s.to_owned()))
    }
}
