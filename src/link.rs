//! Double-bracket link primitives
//!
//!     Links are written `[[target]]` or `[[target|alias]]` inside free text. This module finds
//!     them, answers whether the caret is inside one, and rewrites the text around them as the
//!     user types. Every function takes the text and caret it needs and returns a new value;
//!     nothing is cached between calls.
//!
//!     The pieces, leaves first:
//!
//!         - [span]: scanning text into [`BracketSpan`]s
//!         - [cursor]: caret containment, extraction and replacement
//!         - [pairing]: `[`/`]` auto-pairing on single-character edits
//!         - [decoration]: stripping brackets and aliases, parsing [`WikiLink`]s
//!         - [unique]: keeping only names that occur once
//!
//!     Known limitation: inner text cannot contain `]`, so a literal `]]` inside a link ends it.

pub mod cursor;
pub mod decoration;
pub mod pairing;
pub mod span;
pub mod unique;

pub use cursor::{
    complete_link_at_cursor, inner_text_at_cursor, is_cursor_in_span,
    replace_inner_text_at_cursor, span_at_cursor, Completion,
};
pub use decoration::{
    links, strip_alias, strip_brackets, try_strip_brackets, LinkParseError, WikiLink,
    ALIAS_SEPARATOR,
};
pub use pairing::{
    apply_edit, auto_close_on_open_bracket, auto_remove_on_delete_bracket, EditEvent,
    PairingOptions, CLOSE_BRACKET, OPEN_BRACKET,
};
pub use span::{scan, BracketSpan, Spans, DELIMITER_LEN};
pub use unique::filter_unique_strings;
