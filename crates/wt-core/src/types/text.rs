//! Line splitting and text filtering options.
//!
//! These enums are configuration values: they appear in [`CountConfig`]
//! and are applied by the counter when it turns raw text into lines and
//! lines into tokens.
//!
//! [`CountConfig`]: crate::CountConfig

use std::str::{Lines, Split};

use serde::{Deserialize, Serialize};

/// How a block of text is split into lines before tokenizing.
///
/// Tokens never span whitespace, and both `\r` and `\n` are whitespace, so
/// the choice only changes how lines (and blank lines) are tallied.
///
/// # Examples
///
/// ```
/// use wt_core::LineEnding;
///
/// let lines: Vec<&str> = LineEnding::Windows.split("a\r\nb").collect();
/// assert_eq!(lines, ["a", "b"]);
///
/// let lines: Vec<&str> = LineEnding::Unix.split("a\r\nb").collect();
/// assert_eq!(lines, ["a\r", "b"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum LineEnding {
    /// Split on `\n`, dropping a trailing `\r` from each line.
    #[default]
    Any,
    /// Split on `\n` only.
    Unix,
    /// Split on `\r\n` only.
    Windows,
}

impl LineEnding {
    /// Splits `text` into lines according to this line ending.
    #[must_use]
    pub fn split(self, text: &str) -> LineSplit<'_> {
        match self {
            Self::Any => LineSplit::Any(text.lines()),
            Self::Unix => LineSplit::Unix(text.split('\n')),
            Self::Windows => LineSplit::Windows(text.split("\r\n")),
        }
    }

    /// Returns the name used in configuration files.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Unix => "unix",
            Self::Windows => "windows",
        }
    }
}

/// Iterator over the lines produced by [`LineEnding::split`].
#[derive(Debug, Clone)]
pub enum LineSplit<'a> {
    /// Lines from [`str::lines`].
    Any(Lines<'a>),
    /// Lines from splitting on `\n`.
    Unix(Split<'a, char>),
    /// Lines from splitting on `\r\n`.
    Windows(Split<'a, &'static str>),
}

impl<'a> Iterator for LineSplit<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Any(lines) => lines.next(),
            Self::Unix(split) => split.next(),
            Self::Windows(split) => split.next(),
        }
    }
}

/// Character filtering applied to each line before it is tokenized.
///
/// # Examples
///
/// ```
/// use wt_core::TextFilter;
///
/// assert_eq!(TextFilter::default(), TextFilter::Verbatim);
/// assert!(TextFilter::StripSymbols.is_stripping());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum TextFilter {
    /// Tokens are whitespace-delimited only; punctuation stays attached.
    #[default]
    Verbatim,
    /// Everything that is not a letter, a decimal digit, or whitespace is
    /// removed first.
    StripSymbols,
}

impl TextFilter {
    /// Returns `true` if this filter removes characters.
    #[inline]
    #[must_use]
    pub const fn is_stripping(self) -> bool {
        matches!(self, Self::StripSymbols)
    }
}
