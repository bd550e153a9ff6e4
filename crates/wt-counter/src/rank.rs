//! Ranking and display of word counts.
//!
//! Words are ordered by descending count; equal counts are ordered by the
//! word itself (byte order) so the listing is deterministic.
//!
//! Each displayed line has the form `rank<TAB>word:<TAB>count`:
//!
//! ```text
//! 1	the:	3
//! 2	fox:	2
//! ```

use std::io::{self, Write};

use serde::Serialize;
use wt_core::WordCount;

/// A word with its position in a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedWord<'a> {
    /// 1-based position.
    pub rank: usize,
    /// The word.
    pub word: &'a str,
    /// Number of occurrences.
    pub count: u64,
}

/// Ranks `words` by descending count, keeping at most `limit` entries.
///
/// A `limit` of `0` keeps every word.
///
/// # Examples
///
/// ```
/// use wt_core::WordCount;
/// use wt_counter::rank;
///
/// let words = vec![
///     WordCount::with_count("fox", 2),
///     WordCount::with_count("the", 3),
///     WordCount::with_count("dog", 1),
/// ];
///
/// let top = rank(&words, 2);
/// assert_eq!(top.len(), 2);
/// assert_eq!(top[0].word, "the");
/// assert_eq!(top[1].rank, 2);
/// ```
#[must_use]
pub fn rank<'a, I>(words: I, limit: usize) -> Vec<RankedWord<'a>>
where
    I: IntoIterator<Item = &'a WordCount>,
{
    let mut sorted: Vec<&WordCount> = words.into_iter().collect();
    sorted.sort_unstable_by(|a, b| {
        b.count()
            .cmp(&a.count())
            .then_with(|| a.word().cmp(b.word()))
    });

    let keep = if limit == 0 { sorted.len() } else { limit };
    sorted
        .into_iter()
        .take(keep)
        .enumerate()
        .map(|(i, wc)| RankedWord {
            rank: i + 1,
            word: wc.word(),
            count: wc.count(),
        })
        .collect()
}

/// Writes a ranking, one `rank<TAB>word:<TAB>count` line per entry.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_ranked<W: Write>(out: &mut W, ranked: &[RankedWord<'_>]) -> io::Result<()> {
    for entry in ranked {
        writeln!(out, "{}\t{}:\t{}", entry.rank, entry.word, entry.count)?;
    }
    Ok(())
}

/// Prints the `number_to_display` most frequent words to stdout.
///
/// A `number_to_display` of `0` prints every word.
///
/// # Errors
///
/// Returns any error from writing to stdout.
pub fn display_word_counts<'a, I>(words: I, number_to_display: usize) -> io::Result<()>
where
    I: IntoIterator<Item = &'a WordCount>,
{
    let ranked = rank(words, number_to_display);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_ranked(&mut handle, &ranked)
}
