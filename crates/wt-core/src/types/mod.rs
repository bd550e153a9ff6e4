//! Domain types for the wordtally word counter.
//!
//! # Module Organization
//!
//! - [`word_count`] - The word/tally record produced by counting
//! - [`text`] - Line splitting and text filtering options
//!
//! All public types are re-exported at this module level and at the crate
//! root:
//!
//! ```
//! use wt_core::{LineEnding, TextFilter, WordCount};
//! ```

pub mod text;
pub mod word_count;

pub use text::{LineEnding, LineSplit, TextFilter};
pub use word_count::WordCount;
