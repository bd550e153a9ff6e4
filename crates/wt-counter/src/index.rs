//! Hash-keyed word index.
//!
//! [`WordIndex`] maps a 32-bit word hash to the [`WordCount`] for that word.
//! Looking up a word only needs its hash and a string comparison, so a word
//! that is already indexed is counted without allocating.
//!
//! # Collisions
//!
//! Two different words can share a hash (FNV-1a maps `costarring` and
//! `liquid` to the same value, for example). The first word seen keeps the
//! primary slot. Any later word whose hash lands on an occupied slot holding
//! a different word goes to a secondary table keyed by the full string,
//! where lookups compare the stored word exactly. Every token therefore ends
//! up in exactly one record and the counts always sum to the token total.
//!
//! ```text
//! record("liquid")
//!     │
//!     ├── primary[fnv("liquid")] empty          → insert
//!     ├── primary[fnv("liquid")] == "liquid"    → increment
//!     └── primary[fnv("liquid")] == "costarring"
//!             │
//!             └── collisions["liquid"]           → insert or increment
//! ```

use std::collections::hash_map::Entry;

use tracing::trace;
use wt_core::{FxHashMap, WordCount, fnv1a_32, fx_hash_map, fx_hash_map_with_capacity};

/// Initial capacity of the primary table.
const DEFAULT_CAPACITY: usize = 4096;

/// Computes the primary key of a word.
///
/// Implementations must be deterministic; equal words must hash equally.
pub trait WordHasher {
    /// Returns the key for `word`.
    fn hash_word(&self, word: &str) -> i32;
}

/// The FNV-1a word hasher used by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv1a;

impl WordHasher for Fnv1a {
    #[inline]
    fn hash_word(&self, word: &str) -> i32 {
        fnv1a_32(word)
    }
}

/// Word occurrence counts keyed by word hash.
///
/// Built fresh for each counting call. Read it as a hash-keyed map with
/// [`primary`](Self::primary) and [`collisions`](Self::collisions), iterate
/// every record with [`iter`](Self::iter), look up a word with
/// [`get`](Self::get), or flatten it with [`into_vec`](Self::into_vec).
///
/// # Examples
///
/// ```
/// use wt_counter::WordIndex;
///
/// let mut index = WordIndex::new();
/// for token in ["the", "fox", "the"] {
///     index.record(token);
/// }
///
/// assert_eq!(index.get("the").map(|wc| wc.count()), Some(2));
/// assert_eq!(index.len(), 2);
/// assert_eq!(index.total(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct WordIndex<H = Fnv1a> {
    /// Records keyed by word hash; the first word seen owns each key.
    primary: FxHashMap<i32, WordCount>,
    /// Records whose hash was already taken by a different word.
    collisions: FxHashMap<String, WordCount>,
    /// Number of tokens recorded.
    total: u64,
    hasher: H,
}

impl WordIndex<Fnv1a> {
    /// Creates an empty index using FNV-1a keys.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(Fnv1a)
    }
}

impl Default for WordIndex<Fnv1a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: WordHasher> WordIndex<H> {
    /// Creates an empty index with a custom key function.
    #[must_use]
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            primary: fx_hash_map_with_capacity(DEFAULT_CAPACITY),
            collisions: fx_hash_map(),
            total: 0,
            hasher,
        }
    }

    /// Records one occurrence of `word`.
    #[inline]
    pub fn record(&mut self, word: &str) {
        self.record_n(word, 1);
    }

    /// Records `n` occurrences of `word`.
    pub fn record_n(&mut self, word: &str, n: u64) {
        if n == 0 {
            return;
        }
        self.total += n;

        let key = self.hasher.hash_word(word);
        match self.primary.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(WordCount::with_count(word, n));
            }
            Entry::Occupied(mut slot) => {
                if slot.get().word() == word {
                    slot.get_mut().add(n);
                } else {
                    trace!(key, word, owner = slot.get().word(), "word hash collision");
                    record_collision(&mut self.collisions, word, n);
                }
            }
        }
    }

    /// Adds every record of `other` into this index.
    pub fn merge<H2>(&mut self, other: WordIndex<H2>) {
        for wc in other.into_iter_counts() {
            let (word, count) = wc.into_parts();
            self.record_n(&word, count);
        }
    }

    /// Returns the record for `word`, if it was seen.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&WordCount> {
        let key = self.hasher.hash_word(word);
        match self.primary.get(&key) {
            Some(wc) if wc.word() == word => Some(wc),
            Some(_) => self.collisions.get(word),
            None => None,
        }
    }
}

impl<H> WordIndex<H> {
    /// Returns the primary hash → record table.
    ///
    /// Words that collided with an earlier word are not in this table; see
    /// [`collisions`](Self::collisions).
    #[inline]
    #[must_use]
    pub const fn primary(&self) -> &FxHashMap<i32, WordCount> {
        &self.primary
    }

    /// Returns the records of words whose hash was already taken.
    pub fn collisions(&self) -> impl Iterator<Item = &WordCount> {
        self.collisions.values()
    }

    /// Returns the record stored under `key` in the primary table.
    #[inline]
    #[must_use]
    pub fn get_by_hash(&self, key: i32) -> Option<&WordCount> {
        self.primary.get(&key)
    }

    /// Iterates over every record, primary entries first.
    pub fn iter(&self) -> impl Iterator<Item = &WordCount> {
        self.primary.values().chain(self.collisions.values())
    }

    /// Returns the number of distinct words.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.primary.len() + self.collisions.len()
    }

    /// Returns `true` if no word was recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.collisions.is_empty()
    }

    /// Returns the number of tokens recorded (the sum of all counts).
    #[inline]
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns the number of words that needed the collision table.
    #[inline]
    #[must_use]
    pub fn collision_count(&self) -> usize {
        self.collisions.len()
    }

    /// Consumes the index, returning every record in unspecified order.
    #[must_use]
    pub fn into_vec(self) -> Vec<WordCount> {
        self.into_iter_counts().collect()
    }

    fn into_iter_counts(self) -> impl Iterator<Item = WordCount> {
        self.primary
            .into_values()
            .chain(self.collisions.into_values())
    }
}

fn record_collision(collisions: &mut FxHashMap<String, WordCount>, word: &str, n: u64) {
    if let Some(wc) = collisions.get_mut(word) {
        wc.add(n);
    } else {
        collisions.insert(word.to_owned(), WordCount::with_count(word, n));
    }
}
