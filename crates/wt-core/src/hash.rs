//! Word hashing and fast hash map aliases.
//!
//! Two hash functions live here:
//!
//! - [`fnv1a_32`], the 32-bit FNV-1a hash that keys the primary word index.
//!   It is computed directly over a borrowed `&str`, so counting a word that
//!   is already in the index never allocates.
//! - The Fx hash from `rustc-hash`, exposed through the [`FxHashMap`] and
//!   [`FxHashSet`] aliases. Fx is used for every other map in the workspace,
//!   including the secondary table that holds words whose FNV-1a key collided.
//!
//! # Examples
//!
//! ```
//! use wt_core::{fnv1a_32, FxHashMap, fx_hash_map};
//!
//! let mut map: FxHashMap<i32, &str> = fx_hash_map();
//! map.insert(fnv1a_32("hello"), "hello");
//! assert_eq!(map.get(&fnv1a_32("hello")), Some(&"hello"));
//! ```

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Computes the 32-bit FNV-1a hash of a word.
///
/// Each character's Unicode scalar value is XORed into the state, which is
/// then multiplied by [`FNV_PRIME`] with wrapping unsigned arithmetic. The
/// final state is reinterpreted as `i32`, the key type of the word index.
///
/// For ASCII input this is identical to byte-wise FNV-1a.
///
/// # Examples
///
/// ```
/// use wt_core::fnv1a_32;
///
/// // The empty word hashes to the offset basis.
/// assert_eq!(fnv1a_32(""), 2_166_136_261_u32 as i32);
/// assert_eq!(fnv1a_32("a"), -468_965_076);
/// ```
#[inline]
#[must_use]
#[allow(clippy::cast_possible_wrap)] // Reinterpretation as i32 is the storage format
pub fn fnv1a_32(word: &str) -> i32 {
    let mut hash = FNV_OFFSET_BASIS;
    for ch in word.chars() {
        hash ^= u32::from(ch);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash as i32
}

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
///
/// This is faster than the standard library's `HashMap` for string keys
/// but does not provide denial-of-service resistance.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;

/// The hasher used by [`FxHashMap`] and [`FxHashSet`].
pub type FxBuildHasher = rustc_hash::FxBuildHasher;

/// Creates a new empty [`FxHashMap`].
#[inline]
#[must_use]
pub fn fx_hash_map<K, V>() -> FxHashMap<K, V> {
    FxHashMap::default()
}

/// Creates a new empty [`FxHashSet`].
#[inline]
#[must_use]
pub fn fx_hash_set<V>() -> FxHashSet<V> {
    FxHashSet::default()
}

/// Creates a new [`FxHashMap`] with the specified capacity.
///
/// The map will be able to hold at least `capacity` elements without
/// reallocating.
///
/// # Examples
///
/// ```
/// use wt_core::fx_hash_map_with_capacity;
///
/// let map: wt_core::FxHashMap<i32, u64> = fx_hash_map_with_capacity(4096);
/// assert!(map.capacity() >= 4096);
/// ```
#[inline]
#[must_use]
pub fn fx_hash_map_with_capacity<K, V>(capacity: usize) -> FxHashMap<K, V> {
    FxHashMap::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
}
