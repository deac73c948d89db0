// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bookcase_catalog::fold;
use smallvec::SmallVec;

use crate::config::SearchConfig;

/// A parsed search query.
///
/// Most queries are a handful of words, so the folded words live inline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// The query is too short to filter; every record matches.
    All,
    /// Folded, whitespace-delimited words that must all match.
    Words(SmallVec<[Word; 4]>),
}

/// One folded query word with its precomputed edit budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: usize,
    edits: usize,
}

impl Word {
    /// The folded text of this word.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Edits this word tolerates against a single corpus word.
    #[must_use]
    pub fn allowed_edits(&self) -> usize {
        self.edits
    }

    /// Returns `true` if this word matches the folded `corpus`.
    ///
    /// A literal substring of the whole corpus matches first; otherwise some
    /// whitespace-delimited corpus word must be within the edit budget. Words
    /// whose length differs by more than the budget are skipped without
    /// computing a distance.
    pub(crate) fn matches(&self, corpus: &str) -> bool {
        if corpus.contains(self.text.as_str()) {
            return true;
        }
        // Empty tokens are never candidates. An author-less corpus ends in a
        // space, and an empty candidate would let any one-character word match.
        corpus.split_whitespace().any(|candidate| {
            let chars = candidate.chars().count();
            if chars.abs_diff(self.chars) > self.edits {
                return false;
            }
            strsim::levenshtein(&self.text, candidate) <= self.edits
        })
    }
}

impl Query {
    /// Parses `raw` under `config`.
    #[must_use]
    pub fn parse(raw: &str, config: &SearchConfig) -> Self {
        let trimmed = raw.trim();
        if trimmed.chars().count() < config.min_query_chars {
            return Self::All;
        }
        let folded = fold(trimmed);
        let words = folded
            .split_whitespace()
            .map(|text| {
                let chars = text.chars().count();
                Word {
                    text: text.to_owned(),
                    chars,
                    edits: config.allowed_edits(chars),
                }
            })
            .collect();
        Self::Words(words)
    }

    /// Returns `true` if this query does not filter.
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns `true` if every word matches the folded `corpus`.
    #[must_use]
    pub fn matches(&self, corpus: &str) -> bool {
        match self {
            Self::All => true,
            Self::Words(words) => words.iter().all(|w| w.matches(corpus)),
        }
    }
}
