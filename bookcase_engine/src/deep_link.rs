// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving navigation fragments to view-list positions.

use std::borrow::Cow;

use bookcase_catalog::{ViewList, fold};

/// Fragments this short or shorter only match ids exactly.
const MIN_TITLE_FRAGMENT: usize = 2;

/// Strips a leading `#` and percent-decodes `raw`.
///
/// Returns `None` for an empty fragment or one that does not decode to UTF-8.
#[must_use]
pub fn decode_fragment(raw: &str) -> Option<Cow<'_, str>> {
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    if raw.is_empty() {
        return None;
    }
    urlencoding::decode(raw).ok()
}

/// Finds the view-list position a decoded fragment refers to.
///
/// An exact id match wins. Otherwise a fragment longer than two characters is
/// treated as a title slug: hyphens become spaces, it is folded, and the first
/// record whose folded title contains it matches.
#[must_use]
pub fn resolve(fragment: &str, list: &ViewList) -> Option<usize> {
    if let Some(index) = list.position_of(fragment) {
        return Some(index);
    }
    if fragment.chars().count() <= MIN_TITLE_FRAGMENT {
        return None;
    }
    let needle = fold(&fragment.replace('-', " "));
    list.iter()
        .position(|record| fold(record.title()).contains(needle.as_str()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bookcase_catalog::BookRecord;

    use super::*;

    fn list() -> ViewList {
        [
            BookRecord::new("b-1", "Çalıkuşu"),
            BookRecord::new("b-2", "The Great Gatsby"),
            BookRecord::new("gatsby", "Gatsby, Revisited"),
        ]
        .into_iter()
        .map(Arc::new)
        .collect()
    }

    #[test]
    fn exact_id_wins_over_title() {
        assert_eq!(resolve("gatsby", &list()), Some(2));
    }

    #[test]
    fn slug_matches_folded_title() {
        assert_eq!(resolve("great-gatsby", &list()), Some(1));
        assert_eq!(resolve("calikusu", &list()), Some(0));
        assert_eq!(resolve("ÇALI", &list()), Some(0));
    }

    #[test]
    fn short_fragments_only_match_ids() {
        assert_eq!(resolve("gr", &list()), None);
        assert_eq!(resolve("tolkien", &list()), None);
    }

    #[test]
    fn decoding() {
        assert_eq!(decode_fragment("#great%20gatsby").as_deref(), Some("great gatsby"));
        assert_eq!(decode_fragment("b-2").as_deref(), Some("b-2"));
        assert_eq!(decode_fragment("#"), None);
        assert_eq!(decode_fragment("%FF"), None);
    }
}
