//! Count statistics with atomic counters.
//!
//! This module provides [`CountStats`] for tallying progress while files are
//! counted in parallel and [`StatsSnapshot`] for point-in-time views.
//!
//! # Thread Safety
//!
//! All counters use [`AtomicU64`] with [`Relaxed`](std::sync::atomic::Ordering::Relaxed)
//! ordering. Statistics are informational and don't require strict ordering
//! guarantees.
//!
//! # Examples
//!
//! ```
//! use wt_counter::CountStats;
//!
//! let stats = CountStats::new();
//! stats.increment_files();
//! stats.add_tokens(12);
//!
//! let snapshot = stats.snapshot();
//! assert_eq!(snapshot.files, 1);
//! assert_eq!(snapshot.tokens, 12);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Atomic counters for count statistics.
#[derive(Debug, Default)]
pub struct CountStats {
    /// Number of files fully read.
    files: AtomicU64,
    /// Number of lines read, blank ones included.
    lines: AtomicU64,
    /// Number of lines skipped because they were empty after trimming.
    blank_lines: AtomicU64,
    /// Number of tokens recorded.
    tokens: AtomicU64,
}

impl CountStats {
    /// Creates a new [`CountStats`] with all counters at zero.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the files counter.
    #[inline]
    pub fn increment_files(&self) {
        self.files.fetch_add(1, Ordering::Relaxed);
    }

    /// Adds to the lines counter.
    #[inline]
    pub fn add_lines(&self, n: u64) {
        self.lines.fetch_add(n, Ordering::Relaxed);
    }

    /// Adds to the blank lines counter.
    #[inline]
    pub fn add_blank_lines(&self, n: u64) {
        self.blank_lines.fetch_add(n, Ordering::Relaxed);
    }

    /// Adds to the tokens counter.
    #[inline]
    pub fn add_tokens(&self, n: u64) {
        self.tokens.fetch_add(n, Ordering::Relaxed);
    }

    /// Returns a point-in-time snapshot of all statistics.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            files: self.files.load(Ordering::Relaxed),
            lines: self.lines.load(Ordering::Relaxed),
            blank_lines: self.blank_lines.load(Ordering::Relaxed),
            tokens: self.tokens.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of count statistics.
///
/// # Examples
///
/// ```
/// use wt_counter::StatsSnapshot;
///
/// let snap = StatsSnapshot {
///     files: 2,
///     lines: 10,
///     blank_lines: 2,
///     tokens: 40,
/// };
///
/// assert_eq!(snap.content_lines(), 8);
/// assert!((snap.tokens_per_line() - 5.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Number of files fully read.
    pub files: u64,
    /// Number of lines read, blank ones included.
    pub lines: u64,
    /// Number of blank lines.
    pub blank_lines: u64,
    /// Number of tokens recorded.
    pub tokens: u64,
}

impl StatsSnapshot {
    /// Returns the number of lines that contained at least one token.
    #[inline]
    #[must_use]
    pub const fn content_lines(&self) -> u64 {
        self.lines.saturating_sub(self.blank_lines)
    }

    /// Returns the mean number of tokens per non-blank line.
    ///
    /// Returns 0.0 when there are no non-blank lines.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Acceptable for statistics display
    pub fn tokens_per_line(&self) -> f64 {
        let lines = self.content_lines();
        if lines == 0 {
            return 0.0;
        }
        self.tokens as f64 / lines as f64
    }
}
