//! Span scanning for double-bracket links
//!
//!     A span is one well-formed `[[...]]` occurrence. The inner text may not contain `]`, so
//!     `[[a]b]]` is not a link and nested brackets are never balanced. Matching runs left to
//!     right over the whole text and never revisits consumed characters, so spans cannot
//!     overlap.
//!
//!     Offsets are character offsets, the same unit editors use for their caret. The byte range
//!     of the inner text is carried alongside so callers can slice without recounting.

use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};
use std::iter::FusedIterator;
use std::ops::Range;

/// Two opening brackets, any run of non-`]` characters, two closing brackets.
static DOUBLE_BRACKET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]*)\]\]").unwrap());

/// Width of the `[[` and `]]` delimiters, in characters.
pub const DELIMITER_LEN: usize = 2;

/// One `[[inner]]` occurrence inside a text value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketSpan<'a> {
    /// Char offset of the first inner character.
    pub start: usize,
    /// Char offset of the last inner character, `start - 1` when the inner text is empty.
    pub end: usize,
    /// The inner text, borrowed from the scanned value.
    pub inner: &'a str,
    /// Byte range of `inner` within the scanned value.
    pub range: Range<usize>,
}

impl BracketSpan<'_> {
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of characters in the inner text.
    pub fn char_len(&self) -> usize {
        self.end + 1 - self.start
    }
}

/// Scan `text` for double-bracket spans.
///
/// The returned iterator is lazy and owns its own match state; calling `scan` again starts over
/// from the beginning of the text.
pub fn scan(text: &str) -> Spans<'_> {
    log::trace!("scanning {} bytes for link spans", text.len());
    Spans {
        text,
        captures: DOUBLE_BRACKET_REGEX.captures_iter(text),
        byte_pos: 0,
        char_pos: 0,
    }
}

/// Iterator over the spans of one text value. See [`scan`].
pub struct Spans<'a> {
    text: &'a str,
    captures: CaptureMatches<'static, 'a>,
    // Byte and char offsets of the end of the previous inner text, so char offsets are counted
    // incrementally instead of from the start of the text for every span.
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> Iterator for Spans<'a> {
    type Item = BracketSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let captures = self.captures.next()?;
        let inner = captures.get(1)?;
        let range = inner.range();

        let start = self.char_pos + self.text[self.byte_pos..range.start].chars().count();
        let len = inner.as_str().chars().count();
        self.byte_pos = range.end;
        self.char_pos = start + len;

        Some(BracketSpan {
            start,
            end: start + len - 1,
            inner: inner.as_str(),
            range,
        })
    }
}

impl FusedIterator for Spans<'_> {}
