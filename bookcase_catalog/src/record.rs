// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Book records and their lenient parsing.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier of a [`BookRecord`].
///
/// The id is the only identifier that survives re-sorting and re-filtering,
/// and it is what the navigation fragment carries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(Arc<str>);

impl BookId {
    /// Creates an id from any string-like value.
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for BookId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BookId {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

/// Explicit spine colors extracted from a cover image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpinePalette {
    /// Spine background color, in any CSS color syntax.
    pub background: String,
    /// Text color readable on `background`.
    pub foreground: String,
}

/// Errors produced when a raw record cannot become a [`BookRecord`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordError {
    /// The record has no usable `id` (absent, empty, or not a string/number).
    #[error("record has no usable id")]
    MissingId,
}

/// One immutable catalog record.
///
/// Only `id` is required. Every other field is optional and degrades to
/// "unknown" when it is absent or has the wrong type.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct BookRecord {
    id: BookId,
    title: String,
    author: Option<String>,
    published: Option<i32>,
    publisher: Option<String>,
    binding: Option<String>,
    translator: Option<String>,
    isbn: Option<String>,
    cover: Option<String>,
    palette: Option<SpinePalette>,
}

impl BookRecord {
    /// Creates a record with the given id and title and no optional fields.
    #[must_use]
    pub fn new(id: impl Into<BookId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: None,
            published: None,
            publisher: None,
            binding: None,
            translator: None,
            isbn: None,
            cover: None,
            palette: None,
        }
    }

    /// Sets the author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the publication year.
    #[must_use]
    pub fn with_published(mut self, year: i32) -> Self {
        self.published = Some(year);
        self
    }

    /// Sets the publisher.
    #[must_use]
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Sets the binding (hardcover, paperback, ...).
    #[must_use]
    pub fn with_binding(mut self, binding: impl Into<String>) -> Self {
        self.binding = Some(binding.into());
        self
    }

    /// Sets the translator.
    #[must_use]
    pub fn with_translator(mut self, translator: impl Into<String>) -> Self {
        self.translator = Some(translator.into());
        self
    }

    /// Sets the ISBN as written in the source data.
    #[must_use]
    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    /// Sets the cover path. Backslashes are normalized to forward slashes.
    #[must_use]
    pub fn with_cover(mut self, cover: impl AsRef<str>) -> Self {
        self.cover = Some(normalize_cover_path(cover.as_ref()));
        self
    }

    /// Sets the explicit spine palette.
    #[must_use]
    pub fn with_palette(mut self, palette: SpinePalette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Returns the stable id.
    #[must_use]
    pub fn id(&self) -> &BookId {
        &self.id
    }

    /// Returns the raw title (empty when the source had none).
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author, if known.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Returns the publication year, if known.
    #[must_use]
    pub fn published(&self) -> Option<i32> {
        self.published
    }

    /// Returns the publisher, if known.
    #[must_use]
    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    /// Returns the binding, if known.
    #[must_use]
    pub fn binding(&self) -> Option<&str> {
        self.binding.as_deref()
    }

    /// Returns the translator, if known.
    #[must_use]
    pub fn translator(&self) -> Option<&str> {
        self.translator.as_deref()
    }

    /// Returns the ISBN as written in the source data, if known.
    #[must_use]
    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref()
    }

    /// Returns the ISBN reduced to digits and `X`, upper-cased.
    ///
    /// Returns `None` when nothing usable remains.
    #[must_use]
    pub fn sanitized_isbn(&self) -> Option<String> {
        let raw = self.isbn.as_deref()?;
        let clean: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, 'x' | 'X'))
            .map(|c| c.to_ascii_uppercase())
            .collect();
        (!clean.is_empty()).then_some(clean)
    }

    /// Returns the normalized cover path, if any.
    #[must_use]
    pub fn cover(&self) -> Option<&str> {
        self.cover.as_deref()
    }

    /// Returns the explicit spine palette, if both colors were supplied.
    #[must_use]
    pub fn palette(&self) -> Option<&SpinePalette> {
        self.palette.as_ref()
    }

    /// Returns the title in display case.
    ///
    /// Words are capitalized except short function words ("of", "the", ...)
    /// that are neither first nor last.
    ///
    /// ```rust
    /// use bookcase_catalog::BookRecord;
    ///
    /// let book = BookRecord::new("1", "the LORD of the rings");
    /// assert_eq!(book.display_title(), "The Lord of the Rings");
    /// ```
    #[must_use]
    pub fn display_title(&self) -> String {
        format_title(&self.title)
    }

    /// Returns an accessible label such as `"Beloved by Toni Morrison"`.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.author {
            Some(author) => format!("{} by {author}", self.display_title()),
            None => self.display_title(),
        }
    }
}

const SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "in", "of", "on", "or", "the", "to", "vs",
    "via",
];

fn format_title(title: &str) -> String {
    let words: Vec<String> = title.split_whitespace().map(str::to_lowercase).collect();
    let last = words.len().saturating_sub(1);
    let mut out = String::with_capacity(title.len());
    for (index, word) in words.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        let is_edge = index == 0 || index == last;
        if !is_edge && SMALL_WORDS.contains(&word.as_str()) {
            out.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

fn normalize_cover_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Wire shape of a record. Every field is a raw JSON value so that a wrong
/// type degrades to "unknown" instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawRecord {
    id: Value,
    title: Value,
    author: Value,
    published: Value,
    publisher: Value,
    binding: Value,
    translator: Value,
    isbn: Value,
    cover: Value,
    spine_color: Value,
    spine_text_color: Value,
}

impl TryFrom<RawRecord> for BookRecord {
    type Error = RecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let id = scalar_text(&raw.id).ok_or(RecordError::MissingId)?;
        let palette = match (text(&raw.spine_color), text(&raw.spine_text_color)) {
            (Some(background), Some(foreground)) => Some(SpinePalette {
                background,
                foreground,
            }),
            _ => None,
        };
        Ok(Self {
            id: BookId::from(id),
            title: text(&raw.title).unwrap_or_default(),
            author: text(&raw.author),
            published: year(&raw.published),
            publisher: text(&raw.publisher),
            binding: text(&raw.binding),
            translator: text(&raw.translator),
            isbn: scalar_text(&raw.isbn),
            cover: text(&raw.cover).map(|c| normalize_cover_path(&c)),
            palette,
        })
    }
}

/// A trimmed, non-empty string field.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        _ => None,
    }
}

/// A string or number field rendered as text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        other => text(other),
    }
}

/// A year from a number, or from the first four-digit run of a string.
fn year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => {
            if let Some(int) = n.as_i64() {
                return i32::try_from(int).ok();
            }
            let float = n.as_f64()?;
            if !float.is_finite() || float.abs() > f64::from(i32::MAX) {
                return None;
            }
            #[expect(
                clippy::cast_possible_truncation,
                reason = "range checked above; fractional years truncate"
            )]
            let whole = float.trunc() as i32;
            Some(whole)
        }
        Value::String(s) => first_four_digits(s),
        _ => None,
    }
}

fn first_four_digits(s: &str) -> Option<i32> {
    let bytes = s.as_bytes();
    let mut run = 0;
    for (i, b) in bytes.iter().enumerate() {
        if b.is_ascii_digit() {
            run += 1;
            if run == 4 {
                return s[i + 1 - 4..=i].parse().ok();
            }
        } else {
            run = 0;
        }
    }
    None
}
