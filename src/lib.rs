//! # wikilink
//!
//! Cursor-aware editing support for double-bracket links (`[[target]]`, `[[target|alias]]`)
//! in single text fields.
//!
//! The library is a set of pure functions over `(text, cursor)` snapshots. The editor owns the
//! text and the caret, reports each edit, and applies whatever value comes back. See the
//! [link] module for the operations.
//!
//! Offsets are character offsets: `0` is before the first character.

pub mod link;

pub use link::{
    apply_edit, auto_close_on_open_bracket, auto_remove_on_delete_bracket,
    complete_link_at_cursor, filter_unique_strings, inner_text_at_cursor, is_cursor_in_span,
    replace_inner_text_at_cursor, scan, strip_alias, strip_brackets, BracketSpan, Completion,
    EditEvent, LinkParseError, PairingOptions, WikiLink,
};
