//! The [`WordCount`] record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A word paired with the number of times it occurred.
///
/// The word is fixed when the record is created; only the counter changes.
///
/// # Examples
///
/// ```
/// use wt_core::WordCount;
///
/// let mut wc = WordCount::new("fox");
/// wc.increment();
/// wc.add(3);
///
/// assert_eq!(wc.word(), "fox");
/// assert_eq!(wc.count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount {
    word: String,
    count: u64,
}

impl WordCount {
    /// Creates a record for a word seen once.
    #[inline]
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self::with_count(word, 1)
    }

    /// Creates a record with an explicit count.
    #[inline]
    #[must_use]
    pub fn with_count(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }

    /// Returns the word.
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the number of occurrences.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Records one more occurrence.
    #[inline]
    pub fn increment(&mut self) {
        self.count += 1;
    }

    /// Records `n` more occurrences.
    #[inline]
    pub fn add(&mut self, n: u64) {
        self.count += n;
    }

    /// Consumes the record, returning the word and its count.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (String, u64) {
        (self.word, self.count)
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_one() {
        let wc = WordCount::new("the");
        assert_eq!(wc.word(), "the");
        assert_eq!(wc.count(), 1);
    }

    #[test]
    fn test_increment_and_add() {
        let mut wc = WordCount::with_count("the", 2);
        wc.increment();
        wc.add(10);
        assert_eq!(wc.count(), 13);
        assert_eq!(wc.into_parts(), ("the".to_owned(), 13));
    }

    #[test]
    fn test_display() {
        assert_eq!(WordCount::with_count("dog", 4).to_string(), "dog: 4");
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_string(&WordCount::with_count("fox", 2)).unwrap();
        assert_eq!(json, r#"{"word":"fox","count":2}"#);
    }
}
