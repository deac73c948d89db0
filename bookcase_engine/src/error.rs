// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bookcase_catalog::CatalogError;

/// Errors produced while setting up an [`Engine`](crate::Engine).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The catalog has no records, so there is nothing to present.
    #[error("catalog has no records")]
    NoContent,
    /// The catalog input could not be read.
    #[error("failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),
    /// The configuration could not be parsed.
    #[error("failed to parse engine config: {0}")]
    Config(#[from] toml::de::Error),
    /// The configuration parsed but holds an unusable value.
    #[error("invalid engine config: {0}")]
    Validation(String),
}
