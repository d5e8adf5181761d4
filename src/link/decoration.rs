//! Link decoration: brackets and aliases
//!
//!     A link is written `[[target]]` or `[[target|alias]]`. The helpers here peel the
//!     delimiters and the alias off a value, and [`WikiLink`] holds the two parts once parsed.
//!
//!     `strip_brackets` and `strip_alias` expect values that were already matched by the
//!     scanner. They do not validate; `try_strip_brackets` and `WikiLink::from_str` do.

use super::span::{scan, DELIMITER_LEN};
use std::fmt;
use std::str::FromStr;

pub const ALIAS_SEPARATOR: char = '|';

/// Drop the two leading and two trailing characters.
///
/// Values shorter than four characters come back empty.
pub fn strip_brackets(value: &str) -> &str {
    let mut chars = value.chars();
    for _ in 0..DELIMITER_LEN {
        chars.next();
        chars.next_back();
    }
    chars.as_str()
}

/// Drop the surrounding `[[` and `]]`, or `None` if the value is not wrapped in them.
pub fn try_strip_brackets(value: &str) -> Option<&str> {
    value.strip_prefix("[[")?.strip_suffix("]]")
}

/// Text before the last `|`, or the whole value when there is no alias.
pub fn strip_alias(value: &str) -> &str {
    match value.rfind(ALIAS_SEPARATOR) {
        Some(index) => &value[..index],
        None => value,
    }
}

/// A parsed link: what it points to and, optionally, how it is shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WikiLink {
    pub target: String,
    pub alias: Option<String>,
}

impl WikiLink {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Split span inner text at its last `|`.
    pub fn from_inner(inner: &str) -> Self {
        match inner.rfind(ALIAS_SEPARATOR) {
            Some(index) => Self {
                target: inner[..index].to_string(),
                alias: Some(inner[index + ALIAS_SEPARATOR.len_utf8()..].to_string()),
            },
            None => Self::new(inner),
        }
    }

    /// The text a reader sees: the alias if there is one, else the target.
    pub fn display_text(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.target)
    }
}

impl fmt::Display for WikiLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "[[{}{}{}]]", self.target, ALIAS_SEPARATOR, alias),
            None => write!(f, "[[{}]]", self.target),
        }
    }
}

/// Errors from parsing a complete `[[...]]` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkParseError {
    /// The value does not start with `[[` and end with `]]`.
    MissingBrackets,
    /// The inner text contains a `]`, which no span can hold.
    UnexpectedBracket,
    /// Nothing but whitespace before the alias separator.
    EmptyTarget,
}

impl fmt::Display for LinkParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkParseError::MissingBrackets => write!(f, "link must be wrapped in [[ and ]]"),
            LinkParseError::UnexpectedBracket => write!(f, "link text must not contain ']'"),
            LinkParseError::EmptyTarget => write!(f, "link target is empty"),
        }
    }
}

impl std::error::Error for LinkParseError {}

impl FromStr for WikiLink {
    type Err = LinkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = try_strip_brackets(s).ok_or(LinkParseError::MissingBrackets)?;
        if inner.contains(']') {
            return Err(LinkParseError::UnexpectedBracket);
        }
        let link = WikiLink::from_inner(inner);
        if link.target.trim().is_empty() {
            return Err(LinkParseError::EmptyTarget);
        }
        Ok(link)
    }
}

/// Every link in `text`, one per span, in scan order. Empty spans yield an empty target.
pub fn links(text: &str) -> impl Iterator<Item = WikiLink> + '_ {
    scan(text).map(|span| WikiLink::from_inner(span.inner))
}
