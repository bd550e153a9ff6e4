//! Line cleanup applied before tokenizing.

use std::borrow::Cow;

use wt_core::TextFilter;

/// Removes every character that is not a letter, a decimal digit, or
/// whitespace.
///
/// Numeric symbols that are not decimal digits (superscripts, vulgar
/// fractions, roman numerals) are removed along with punctuation.
///
/// Returns the input unchanged (borrowed) when there is nothing to remove.
///
/// # Examples
///
/// ```
/// use wt_counter::strip_symbols;
///
/// assert_eq!(strip_symbols("Hello, world!"), "Hello world");
/// assert_eq!(strip_symbols("e=mc²"), "emc");
/// ```
#[must_use]
pub fn strip_symbols(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_kept) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(|&ch| is_kept(ch)).collect())
}

/// Applies `filter` to a line.
#[inline]
#[must_use]
pub fn apply_filter(filter: TextFilter, line: &str) -> Cow<'_, str> {
    if filter.is_stripping() {
        strip_symbols(line)
    } else {
        Cow::Borrowed(line)
    }
}

#[inline]
fn is_kept(ch: char) -> bool {
    ch.is_ascii_digit() || ch.is_whitespace() || (ch.is_alphabetic() && !ch.is_numeric())
}
