//! Whitespace tokenizer.
//!
//! A token is a maximal run of characters for which [`char::is_whitespace`]
//! is false. Punctuation is not a separator: `"Hello, world!"` yields
//! `"Hello,"` and `"world!"`.

/// Iterator over the whitespace-delimited tokens of a line.
///
/// Tokens borrow from the input, so tokenizing never allocates.
///
/// # Examples
///
/// ```
/// use wt_counter::Tokens;
///
/// let tokens: Vec<&str> = Tokens::new("  Hello,   world! ").collect();
/// assert_eq!(tokens, ["Hello,", "world!"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    /// Creates a tokenizer over `line`.
    #[inline]
    #[must_use]
    pub const fn new(line: &'a str) -> Self {
        Self { rest: line }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let mut start = None;

        for (offset, ch) in self.rest.char_indices() {
            match (start, ch.is_whitespace()) {
                (None, false) => start = Some(offset),
                (Some(begin), true) => {
                    let token = &self.rest[begin..offset];
                    self.rest = &self.rest[offset..];
                    return Some(token);
                }
                _ => {}
            }
        }

        // End of line while inside a token (or no token at all).
        let token = start.map(|begin| &self.rest[begin..]);
        self.rest = "";
        token
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<&str> {
        Tokens::new(line).collect()
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(tokens("").is_empty());
        assert!(tokens(" ").is_empty());
        assert!(tokens("\t\r\n").is_empty());
    }

    #[test]
    fn test_single_and_multiple_words() {
        assert_eq!(tokens("Hello"), ["Hello"]);
        assert_eq!(tokens("Hello world"), ["Hello", "world"]);
        assert_eq!(tokens("  Hello   world  "), ["Hello", "world"]);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        assert_eq!(tokens("Hello, world!"), ["Hello,", "world!"]);
    }

    #[test]
    fn test_all_whitespace_classes_separate() {
        assert_eq!(
            tokens("Tabs\tand\nnewlines\r\nare whitespace"),
            ["Tabs", "and", "newlines", "are", "whitespace"]
        );
        // Vertical tab, form feed, no-break space and ideographic space.
        assert_eq!(tokens("a\u{0B}b\u{0C}c\u{A0}d\u{3000}e"), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_multibyte_tokens() {
        assert_eq!(tokens("naïve café 日本語"), ["naïve", "café", "日本語"]);
    }

    #[test]
    fn test_fused_after_end() {
        let mut iter = Tokens::new("one");
        assert_eq!(iter.next(), Some("one"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
