//! Bracket auto-pairing
//!
//!     Keeps `[` and `]` balanced while the user types. Both rules look only at the single
//!     characters next to the caret; they never consult spans.
//!
//!     - Typing `[` appends `]`. The closing bracket goes to the end of the text, not to the
//!       caret, so this only pairs correctly when the caret is at the end.
//!     - Deleting a `[` that was directly followed by `]` also deletes that `]`.
//!
//!     [`apply_edit`] decides which rule applies to one edit event.

use serde::Deserialize;

pub const OPEN_BRACKET: char = '[';
pub const CLOSE_BRACKET: char = ']';

/// Adds a closing bracket when the user types an opening bracket.
///
/// `new_text` is the value after the keystroke and `cursor` the caret after it.
pub fn auto_close_on_open_bracket(new_text: &str, cursor: usize) -> String {
    let typed = cursor
        .checked_sub(1)
        .and_then(|index| new_text.chars().nth(index));
    if typed == Some(OPEN_BRACKET) {
        log::debug!("auto-closing bracket typed before cursor {}", cursor);
        let mut closed = String::with_capacity(new_text.len() + 1);
        closed.push_str(new_text);
        closed.push(CLOSE_BRACKET);
        closed
    } else {
        new_text.to_string()
    }
}

/// Removes the closing bracket when the user deletes the opening bracket.
pub fn auto_remove_on_delete_bracket(previous_text: &str, new_text: &str, cursor: usize) -> String {
    let deleted = previous_text.chars().nth(cursor);
    let orphan = new_text.char_indices().nth(cursor);
    match (deleted, orphan) {
        (Some(OPEN_BRACKET), Some((offset, CLOSE_BRACKET))) => {
            log::debug!("removing orphaned closing bracket at cursor {}", cursor);
            let mut updated = String::with_capacity(new_text.len());
            updated.push_str(&new_text[..offset]);
            updated.push_str(&new_text[offset + CLOSE_BRACKET.len_utf8()..]);
            updated
        }
        _ => new_text.to_string(),
    }
}

/// Which pairing rules are active.
///
/// Deserializes from the `[pairing]` table of the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PairingOptions {
    pub auto_close: bool,
    pub auto_remove: bool,
}

impl Default for PairingOptions {
    fn default() -> Self {
        Self {
            auto_close: true,
            auto_remove: true,
        }
    }
}

/// A single edit reported by the text input: the value before, the value after and the caret
/// after the edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditEvent<'a> {
    pub previous: &'a str,
    pub text: &'a str,
    pub cursor: usize,
}

impl<'a> EditEvent<'a> {
    pub fn new(previous: &'a str, text: &'a str, cursor: usize) -> Self {
        Self {
            previous,
            text,
            cursor,
        }
    }
}

/// Apply the active pairing rule to an edit and return the value the input should show.
///
/// Insertions may auto-close, deletions may auto-remove; anything else passes through.
pub fn apply_edit(event: &EditEvent<'_>, options: &PairingOptions) -> String {
    let before = event.previous.chars().count();
    let after = event.text.chars().count();

    if after > before && options.auto_close {
        auto_close_on_open_bracket(event.text, event.cursor)
    } else if after < before && options.auto_remove {
        auto_remove_on_delete_bracket(event.previous, event.text, event.cursor)
    } else {
        event.text.to_string()
    }
}
