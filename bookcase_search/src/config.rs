// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

/// Tuning knobs for the search filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Trimmed queries with fewer characters than this return the full catalog.
    pub min_query_chars: usize,
    /// Query words with fewer characters than this use [`Self::short_word_edits`].
    pub long_word_chars: usize,
    /// Edits allowed for a short query word.
    pub short_word_edits: usize,
    /// Edits allowed for a long query word.
    pub long_word_edits: usize,
}

impl SearchConfig {
    /// Returns the number of edits allowed for a query word of `chars` characters.
    #[must_use]
    pub const fn allowed_edits(&self, chars: usize) -> usize {
        if chars < self.long_word_chars {
            self.short_word_edits
        } else {
            self.long_word_edits
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: 3,
            long_word_chars: 5,
            short_word_edits: 1,
            long_word_edits: 2,
        }
    }
}
