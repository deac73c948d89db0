// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.
//!
//! Every field has a default, so a configuration file only needs the values
//! it changes:
//!
//! ```toml
//! sort = "year"
//!
//! [loader]
//! batch_size = 80
//!
//! [coverflow]
//! friction = 0.85
//! ```

use bookcase_catalog::SortKey;
use bookcase_physics::coverflow::CoverflowConfig;
use bookcase_physics::shelf::ShelfConfig;
use bookcase_search::SearchConfig;
use bookcase_view::ViewConfig;
use bookcase_virtual_list::DEFAULT_BATCH_SIZE;
use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Incremental loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Items materialized per batch.
    pub batch_size: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Delays and frame pacing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Quiet period, in ms, after the last resize before it is applied.
    pub resize_debounce_ms: f64,
    /// Delay, in ms, after the first frame before the startup fragment is
    /// resolved.
    pub deep_link_delay_ms: f64,
    /// Largest frame delta, in seconds, fed to the shelf simulation.
    pub max_frame_delta: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 100.0,
            deep_link_delay_ms: 300.0,
            max_frame_delta: bookcase_timing::MAX_FRAME_DELTA,
        }
    }
}

/// Page-level scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page scroll, in px, beyond which the back-to-top control shows.
    pub back_to_top_offset: f64,
    /// Items materialized beyond a scrubbed slider value.
    pub scrub_lookahead: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            back_to_top_offset: 300.0,
            scrub_lookahead: 5,
        }
    }
}

/// Configuration for an [`Engine`](crate::Engine).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Initial sort key.
    pub sort: SortKey,
    /// Incremental loading.
    pub loader: LoaderConfig,
    /// Fuzzy search thresholds.
    pub search: SearchConfig,
    /// Mode switching.
    pub view: ViewConfig,
    /// Shelf physics.
    pub shelf: ShelfConfig,
    /// Coverflow physics.
    pub coverflow: CoverflowConfig,
    /// Delays and frame pacing.
    pub timing: TimingConfig,
    /// Page-level scrolling.
    pub page: PageConfig,
}

impl EngineConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(input: &str) -> Result<Self, EngineError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the engine cannot run with.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.loader.batch_size == 0 {
            return Err(EngineError::Validation("loader.batch_size must be at least 1".into()));
        }
        if !self.view.compact_breakpoint.is_finite() {
            return Err(EngineError::Validation(
                "view.compact_breakpoint must be finite".into(),
            ));
        }
        let delays = [
            ("timing.resize_debounce_ms", self.timing.resize_debounce_ms),
            ("timing.deep_link_delay_ms", self.timing.deep_link_delay_ms),
            ("timing.max_frame_delta", self.timing.max_frame_delta),
            ("coverflow.idle_reveal_ms", self.coverflow.idle_reveal_ms),
        ];
        for (name, value) in delays {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::Validation(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !(self.coverflow.friction >= 0.0 && self.coverflow.friction <= 1.0) {
            return Err(EngineError::Validation(
                "coverflow.friction must be within [0, 1]".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(EngineConfig::from_toml("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = EngineConfig::from_toml(
            r#"
            sort = "year"

            [loader]
            batch_size = 80

            [coverflow]
            friction = 0.85
            "#,
        )
        .unwrap();
        assert_eq!(config.sort, SortKey::Year);
        assert_eq!(config.loader.batch_size, 80);
        assert_eq!(config.coverflow.friction, 0.85);
        assert_eq!(config.coverflow.max_velocity, 0.35);
        assert_eq!(config.shelf.key_max_speed, 4000.0);
        assert_eq!(config.view.compact_breakpoint, 768.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            EngineConfig::from_toml("[loader]\nbatch_size = 0"),
            Err(EngineError::Validation(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml("[timing]\nresize_debounce_ms = -1.0"),
            Err(EngineError::Validation(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml("sort = \"rating\""),
            Err(EngineError::Config(_))
        ));
    }
}
