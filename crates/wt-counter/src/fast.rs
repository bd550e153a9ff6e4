//! Word counting without recording the words.
//!
//! [`count_words`] answers "how many tokens are in this text" in a single
//! pass. ASCII text is examined 16 bytes at a time: each lane is reduced to a
//! whitespace bitmask, and lanes that are entirely whitespace or entirely
//! word characters are settled without looking at individual bytes. Lanes
//! that contain non-ASCII bytes are decoded and classified per `char`, so the
//! result always matches [`Tokens`](crate::Tokens).
//!
//! # Examples
//!
//! ```
//! use wt_counter::count_words;
//!
//! assert_eq!(count_words("  Hello   world  "), 2);
//! assert_eq!(count_words("Tabs\tand\nnewlines\r\nare whitespace"), 5);
//! ```

/// Bytes examined per lane.
const LANE: usize = 16;

/// Mask of a lane where every byte is whitespace.
const ALL_WHITESPACE: u16 = u16::MAX;

/// Counts whitespace-delimited words in `text`.
#[must_use]
pub fn count_words(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut state = WordState::default();
    let mut pos = 0;

    while pos < bytes.len() {
        if let Some(lane) = bytes.get(pos..pos + LANE).filter(|lane| lane.is_ascii()) {
            match whitespace_mask(lane) {
                ALL_WHITESPACE => state.in_word = false,
                0 => state.step(false),
                _ => {
                    for &byte in lane {
                        state.step(is_ascii_whitespace(byte));
                    }
                }
            }
            pos += LANE;
            continue;
        }

        // Tail shorter than a lane, or a lane with multi-byte characters.
        // `pos` is always on a char boundary: it only advances by whole
        // ASCII lanes or whole chars.
        let Some(ch) = text.get(pos..).and_then(|rest| rest.chars().next()) else {
            break;
        };
        state.step(ch.is_whitespace());
        pos += ch.len_utf8();
    }

    state.count
}

#[derive(Debug, Default)]
struct WordState {
    in_word: bool,
    count: usize,
}

impl WordState {
    #[inline]
    fn step(&mut self, whitespace: bool) {
        if whitespace {
            self.in_word = false;
        } else if !self.in_word {
            self.in_word = true;
            self.count += 1;
        }
    }
}

/// Bit `i` is set when `lane[i]` is whitespace.
#[inline]
fn whitespace_mask(lane: &[u8]) -> u16 {
    lane.iter()
        .enumerate()
        .fold(0, |mask, (i, &byte)| {
            mask | (u16::from(is_ascii_whitespace(byte)) << i)
        })
}

/// ASCII bytes for which [`char::is_whitespace`] is true.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab (0x0B).
#[inline]
const fn is_ascii_whitespace(byte: u8) -> bool {
    matches!(byte, b'\t'..=b'\r' | b' ')
}
