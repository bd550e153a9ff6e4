//! Core types, errors, and hashing for the wordtally word counter.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - [`WordCount`], the record of a word and its occurrence tally
//! - [`fnv1a_32`], the 32-bit FNV-1a word hash used to key the word index
//! - Type aliases for `FxHashMap`/`FxHashSet` (faster than std)
//! - Configuration structures loaded from JSON ([`Config`])
//! - [`ConfigError`] for configuration failures

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod types;

pub use config::{Config, CountConfig, DisplayConfig, WalkConfig};
pub use error::ConfigError;
pub use hash::{
    FNV_OFFSET_BASIS, FNV_PRIME, FxBuildHasher, FxHashMap, FxHashSet, fnv1a_32, fx_hash_map,
    fx_hash_map_with_capacity, fx_hash_set,
};
pub use types::{LineEnding, TextFilter, WordCount};
