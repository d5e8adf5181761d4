//! Cursor queries against double-bracket spans
//!
//!     The caret sits to the right of the character at `cursor - 1`. A cursor is inside a span
//!     when that character belongs to the inner text. An empty span `[[]]` has no inner
//!     character, so there the cursor counts as inside only when it sits directly after `[[`.
//!
//!     All queries share [`span_at_cursor`], and only the first containing span in scan order
//!     is ever considered.

use super::span::{scan, BracketSpan};

impl BracketSpan<'_> {
    /// Whether a caret at char offset `cursor` is inside this span.
    pub fn contains_cursor(&self, cursor: usize) -> bool {
        if self.is_empty() {
            cursor == self.start
        } else {
            self.start < cursor && cursor <= self.end + 1
        }
    }
}

/// First span in `text` containing the cursor.
pub fn span_at_cursor(text: &str, cursor: usize) -> Option<BracketSpan<'_>> {
    scan(text).find(|span| span.contains_cursor(cursor))
}

/// Checks if the cursor is surrounded by double brackets.
///
/// `is_cursor_in_span("[[filename]]", 4)` is true.
pub fn is_cursor_in_span(text: &str, cursor: usize) -> bool {
    span_at_cursor(text, cursor).is_some()
}

/// Inner text of the span containing the cursor, if any.
///
/// This is the filter value an editor uses to narrow link suggestions while the user types.
pub fn inner_text_at_cursor(text: &str, cursor: usize) -> Option<&str> {
    span_at_cursor(text, cursor).map(|span| span.inner)
}

/// Replace the inner text of the span containing the cursor.
///
/// Returns the text unchanged when no span contains the cursor. Callers that need the new caret
/// position should use [`complete_link_at_cursor`].
pub fn replace_inner_text_at_cursor(text: &str, cursor: usize, replacement: &str) -> String {
    match span_at_cursor(text, cursor) {
        Some(span) => splice(text, &span, replacement),
        None => {
            log::trace!("no link span at cursor {}, text unchanged", cursor);
            text.to_string()
        }
    }
}

/// Text and caret after replacing the inner text at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    /// Char offset just past the inserted replacement.
    pub cursor: usize,
}

/// Like [`replace_inner_text_at_cursor`], but also reports where the caret belongs afterwards.
pub fn complete_link_at_cursor(text: &str, cursor: usize, replacement: &str) -> Option<Completion> {
    let span = span_at_cursor(text, cursor)?;
    Some(Completion {
        text: splice(text, &span, replacement),
        cursor: span.start + replacement.chars().count(),
    })
}

fn splice(text: &str, span: &BracketSpan<'_>, replacement: &str) -> String {
    log::trace!(
        "replacing link inner text {:?} at {}..={}",
        span.inner,
        span.start,
        span.end
    );
    let mut out = String::with_capacity(text.len() - span.inner.len() + replacement.len());
    out.push_str(&text[..span.range.start]);
    out.push_str(replacement);
    out.push_str(&text[span.range.end..]);
    out
}
