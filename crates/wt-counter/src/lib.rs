//! Word tokenizing and counting for wordtally.
//!
//! This crate turns text into word frequencies. The main entry point is
//! [`WordCounter`], which counts a string, a sequence of lines, a reader, a
//! single file, or a set of files and directories.
//!
//! # Overview
//!
//! - [`Tokens`]: whitespace tokenizer borrowing from the line
//! - [`WordIndex`]: FNV-1a keyed word index with a collision table
//! - [`count_words`]: lane-at-a-time word count that records nothing
//! - [`strip_symbols`]: optional cleanup before tokenizing
//! - [`TextWalker`]: directory traversal respecting `.gitignore`
//! - [`CountStats`]: atomic statistics shared by parallel workers
//! - [`rank`] / [`write_ranked`]: ordered `rank<TAB>word:<TAB>count` output
//!
//! # Example
//!
//! ```
//! use wt_core::CountConfig;
//! use wt_counter::WordCounter;
//!
//! let counter = WordCounter::new(CountConfig::default());
//! let index = counter.count_text("the quick fox\nthe lazy dog\n\nthe end");
//!
//! assert_eq!(index.get("the").map(|wc| wc.count()), Some(3));
//! assert_eq!(index.total(), 8);
//! ```
//!
//! # Architecture
//!
//! ```text
//! WordCounter (main entry point)
//!     │
//!     ├── TextWalker (expand directories)
//!     │       │
//!     │       └── WalkBuilder (ignore crate)
//!     │
//!     ├── per-file counting (rayon par_iter)
//!     │       │
//!     │       ├── apply_filter → Tokens
//!     │       └── WordIndex (FxHashMap<i32, WordCount> + collisions)
//!     │
//!     ├── WordIndex::merge (input order)
//!     │
//!     └── CountStats (atomic counters)
//! ```
//!
//! # Errors
//!
//! Every fallible operation is all-or-nothing: the first [`CountError`]
//! aborts the call and no partial index is returned.

#![deny(clippy::all)]
#![warn(missing_docs)]

mod clean;
mod error;
mod fast;
mod index;
mod rank;
mod stats;
mod tokenize;
mod walker;

pub use clean::{apply_filter, strip_symbols};
pub use error::CountError;
pub use fast::count_words;
pub use index::{Fnv1a, WordHasher, WordIndex};
pub use rank::{RankedWord, display_word_counts, rank, write_ranked};
pub use stats::{CountStats, StatsSnapshot};
pub use tokenize::Tokens;
pub use walker::TextWalker;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use tracing::{debug, info};
use wt_core::{Config, CountConfig, FxHashSet, WalkConfig, fx_hash_set};

/// Result of counting a set of files or a reader.
#[derive(Debug)]
pub struct CountResult {
    /// Merged word counts.
    pub index: WordIndex,
    /// Statistics gathered while counting.
    pub stats: StatsSnapshot,
}

impl CountResult {
    /// Returns the `limit` most frequent words (`0` for all).
    #[must_use]
    pub fn ranked(&self, limit: usize) -> Vec<RankedWord<'_>> {
        rank(self.index.iter(), limit)
    }

    /// Returns the number of distinct words.
    #[inline]
    #[must_use]
    pub fn unique(&self) -> usize {
        self.index.len()
    }
}

/// Counts words in strings, readers, files, and directory trees.
///
/// A `WordCounter` holds configuration only; every call builds and returns
/// its own [`WordIndex`], so calls never share state.
///
/// # Examples
///
/// ```
/// use wt_core::{CountConfig, TextFilter};
/// use wt_counter::WordCounter;
///
/// let config = CountConfig {
///     filter: TextFilter::StripSymbols,
///     ..CountConfig::default()
/// };
/// let counter = WordCounter::new(config);
///
/// let index = counter.count_lines(["Hello, world!", "", "hello world"]);
/// assert_eq!(index.get("world").map(|wc| wc.count()), Some(2));
/// assert_eq!(index.get("Hello").map(|wc| wc.count()), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    count: CountConfig,
    walk: WalkConfig,
}

impl WordCounter {
    /// Creates a counter with the given counting options and the default
    /// walk configuration.
    #[must_use]
    pub fn new(count: CountConfig) -> Self {
        Self {
            count,
            walk: WalkConfig::default(),
        }
    }

    /// Creates a counter from the root configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            count: config.count,
            walk: config.walk.clone(),
        }
    }

    /// Counts the words of an in-memory text.
    ///
    /// The text is split into lines with the configured
    /// [`LineEnding`](wt_core::LineEnding).
    #[must_use]
    pub fn count_text(&self, text: &str) -> WordIndex {
        self.count_lines(self.count.line_ending.split(text))
    }

    /// Counts the words of pre-split lines.
    ///
    /// Each line is trimmed; empty lines are skipped.
    #[must_use]
    pub fn count_lines<I, S>(&self, lines: I) -> WordIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stats = CountStats::new();
        let Ok(index) = self.tally_lines(
            lines.into_iter().map(Ok::<S, std::convert::Infallible>),
            &stats,
        );
        index
    }

    /// Counts the words of a buffered reader, line by line.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error from the reader, including
    /// [`InvalidData`](io::ErrorKind::InvalidData) for non-UTF-8 input.
    pub fn count_reader<R: BufRead>(&self, reader: R) -> io::Result<CountResult> {
        let stats = CountStats::new();
        let index = self.tally_lines(reader.lines(), &stats)?;
        Ok(CountResult {
            index,
            stats: stats.snapshot(),
        })
    }

    /// Counts the words of a single file, read line by line.
    ///
    /// # Errors
    ///
    /// - [`CountError::InvalidArgument`] if `path` is empty or a directory
    /// - [`CountError::NotFound`] if `path` does not exist
    /// - [`CountError::Read`] if reading fails part way
    pub fn count_file(&self, path: &Utf8Path) -> Result<WordIndex, CountError> {
        if path.as_str().is_empty() {
            return Err(CountError::invalid_argument("file path must not be empty"));
        }
        if path.is_dir() {
            return Err(CountError::invalid_argument(format!(
                "{path} is a directory; use count_paths to count directories"
            )));
        }

        self.count_file_with_stats(path, &CountStats::new())
    }

    /// Counts every file named in `paths`, expanding directories.
    ///
    /// Files are counted in parallel and merged in input order. Any error
    /// aborts the whole call.
    ///
    /// # Errors
    ///
    /// - [`CountError::InvalidArgument`] if `paths` is empty or contains an
    ///   empty path
    /// - [`CountError::NotFound`] if a path does not exist
    /// - [`CountError::Walk`] / [`CountError::NonUtf8Path`] from directory
    ///   traversal
    /// - [`CountError::Read`] if a file cannot be read
    /// - [`CountError::ThreadPool`] if the configured pool cannot be built
    pub fn count_paths(&self, paths: &[Utf8PathBuf]) -> Result<CountResult, CountError> {
        let files = self.collect_files(paths)?;
        info!(
            inputs = paths.len(),
            files = files.len(),
            jobs = ?self.count.max_parallel_jobs,
            line_ending = self.count.line_ending.label(),
            "Counting files"
        );

        let stats = CountStats::new();
        let count_all = || {
            files
                .par_iter()
                .map(|path| self.count_file_with_stats(path, &stats))
                .collect::<Result<Vec<_>, _>>()
        };

        let partials = match self.count.max_parallel_jobs {
            Some(jobs) => rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()?
                .install(count_all)?,
            None => count_all()?,
        };

        let mut partials = partials.into_iter();
        let mut index = partials.next().unwrap_or_default();
        for partial in partials {
            index.merge(partial);
        }

        let stats = stats.snapshot();
        info!(
            files = stats.files,
            tokens = stats.tokens,
            unique = index.len(),
            collisions = index.collision_count(),
            "Counting complete"
        );

        Ok(CountResult { index, stats })
    }

    /// Resolves `paths` to the list of files [`count_paths`](Self::count_paths)
    /// would read.
    ///
    /// Files named directly are kept whatever their extension; directories
    /// are walked with the configured [`WalkConfig`]. A file reached more
    /// than once (named directly and found in a directory, or through two
    /// spellings of the same path) is listed only at its first occurrence.
    ///
    /// # Errors
    ///
    /// Same as [`count_paths`](Self::count_paths), minus read errors.
    pub fn collect_files(&self, paths: &[Utf8PathBuf]) -> Result<Vec<Utf8PathBuf>, CountError> {
        if paths.is_empty() {
            return Err(CountError::invalid_argument("no input paths given"));
        }

        let mut files = Vec::new();
        let mut seen: FxHashSet<Utf8PathBuf> = fx_hash_set();
        for path in paths {
            if path.as_str().is_empty() {
                return Err(CountError::invalid_argument("file path must not be empty"));
            }
            if !path.exists() {
                return Err(CountError::NotFound(path.clone()));
            }

            if path.is_dir() {
                let found = TextWalker::from_config(path, &self.walk)?.collect_paths()?;
                debug!(dir = %path, files = found.len(), "Expanded directory");
                for file in found {
                    push_unique(&mut files, &mut seen, file)?;
                }
            } else {
                push_unique(&mut files, &mut seen, path.clone())?;
            }
        }

        Ok(files)
    }

    fn count_file_with_stats(
        &self,
        path: &Utf8Path,
        stats: &CountStats,
    ) -> Result<WordIndex, CountError> {
        let file = File::open(path).map_err(|e| CountError::read(path, e))?;
        let index = self
            .tally_lines(BufReader::new(file).lines(), stats)
            .map_err(|e| CountError::read(path, e))?;

        stats.increment_files();
        debug!(
            path = %path,
            tokens = index.total(),
            unique = index.len(),
            "Counted file"
        );
        Ok(index)
    }

    /// Shared line loop behind every counting entry point.
    fn tally_lines<I, S, E>(&self, lines: I, stats: &CountStats) -> Result<WordIndex, E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
    {
        let mut index = WordIndex::new();
        let mut line_count = 0;
        let mut blank_count = 0;

        for line in lines {
            let line = line?;
            line_count += 1;

            let trimmed = line.as_ref().trim();
            if trimmed.is_empty() {
                blank_count += 1;
                continue;
            }

            let cleaned = apply_filter(self.count.filter, trimmed);
            let cleaned = cleaned.trim();
            if cleaned.is_empty() {
                blank_count += 1;
                continue;
            }

            for token in Tokens::new(cleaned) {
                index.record(token);
            }
        }

        stats.add_lines(line_count);
        stats.add_blank_lines(blank_count);
        stats.add_tokens(index.total());
        Ok(index)
    }
}

/// Appends `path` unless its canonical form was already seen.
fn push_unique(
    files: &mut Vec<Utf8PathBuf>,
    seen: &mut FxHashSet<Utf8PathBuf>,
    path: Utf8PathBuf,
) -> Result<(), CountError> {
    let key = path
        .canonicalize_utf8()
        .map_err(|e| CountError::read(path.as_path(), e))?;
    if seen.insert(key) {
        files.push(path);
    } else {
        debug!(path = %path, "Skipping duplicate input");
    }
    Ok(())
}
