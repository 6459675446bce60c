//! Word segmentation into pieces with known readings.
//!
//! [`all_segmentations`] enumerates every split (exponential; kept as the
//! reference ordering). [`valid_segmentations`] computes the minimal-piece
//! coverage by dynamic programming and yields the same solutions in the same
//! order as filtering the full enumeration would.


use std::collections::HashMap;
use std::iter;

use tracing::{debug, debug_span};

use crate::error::{Error, Result};

/// Piece → candidate readings. A piece is known iff its list is non-empty.
pub type ReadingMap = HashMap<String, Vec<String>>;

/// An ordered split of a word. The pieces concatenate to the word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    pub pieces: Vec<String>,
}

impl Segmentation {
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Whether every piece has at least one reading in `readings`.
    pub fn is_valid(&self, readings: &ReadingMap) -> bool {
        self.pieces.iter().all(|p| is_known(p, readings))
    }

    /// Total candidate readings across all pieces.
    pub fn reading_count(&self, readings: &ReadingMap) -> usize {
        self.pieces
            .iter()
            .map(|p| readings.get(p).map_or(0, Vec::len))
            .sum()
    }
}

impl<S: Into<String>> FromIterator<S> for Segmentation {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            pieces: iter.into_iter().map(Into::into).collect(),
        }
    }
}

fn is_known(piece: &str, readings: &ReadingMap) -> bool {
    readings.get(piece).is_some_and(|r| !r.is_empty())
}

/// Byte offsets of every char boundary, including `word.len()`.
fn char_bounds(word: &str) -> Vec<usize> {
    word.char_indices()
        .map(|(i, _)| i)
        .chain(iter::once(word.len()))
        .collect()
}

/// Every split of `word` into non-empty pieces, fewest pieces first.
///
/// Within one piece count, splits with a shorter first piece come first
/// (recursively), which is the order produced by choosing each prefix in
/// turn and stably sorting by length.
pub fn all_segmentations(word: &str) -> Vec<Segmentation> {
    enumerate(word)
        .into_iter()
        .map(|pieces| pieces.into_iter().collect())
        .collect()
}

fn enumerate(word: &str) -> Vec<Vec<&str>> {
    if word.is_empty() {
        return vec![Vec::new()];
    }
    let mut result = Vec::new();
    for &end in &char_bounds(word)[1..] {
        let (prefix, rest) = word.split_at(end);
        for suffix in enumerate(rest) {
            let mut pieces = Vec::with_capacity(suffix.len() + 1);
            pieces.push(prefix);
            pieces.extend(suffix);
            result.push(pieces);
        }
    }
    result.sort_by_key(Vec::len);
    result
}

/// All segmentations of `word` whose pieces are all known in `readings` and
/// whose piece count is minimal, in [`all_segmentations`] order.
///
/// Fails with `SegmentationExhausted` when no split, down to single
/// characters, is fully covered.
pub fn valid_segmentations(word: &str, readings: &ReadingMap) -> Result<Vec<Segmentation>> {
    let _span = debug_span!("valid_segmentations", word).entered();
    let bounds = char_bounds(word);
    let n = bounds.len() - 1;

    // min_pieces[i]: fewest known pieces covering chars i..n.
    let mut min_pieces: Vec<Option<usize>> = vec![None; n + 1];
    min_pieces[n] = Some(0);
    for i in (0..n).rev() {
        for j in (i + 1)..=n {
            let Some(rest) = min_pieces[j] else { continue };
            if is_known(&word[bounds[i]..bounds[j]], readings) {
                let count = rest + 1;
                if min_pieces[i].map_or(true, |best| count < best) {
                    min_pieces[i] = Some(count);
                }
            }
        }
    }

    let Some(best) = min_pieces[0] else {
        return Err(Error::SegmentationExhausted(word.to_string()));
    };

    let cover = MinimalCover {
        word,
        bounds: &bounds,
        min_pieces: &min_pieces,
        readings,
    };
    let mut out = Vec::new();
    let mut stack: Vec<&str> = Vec::with_capacity(best);
    cover.collect(0, &mut stack, &mut out);
    debug!(pieces = best, solutions = out.len());
    Ok(out)
}

struct MinimalCover<'a> {
    word: &'a str,
    bounds: &'a [usize],
    min_pieces: &'a [Option<usize>],
    readings: &'a ReadingMap,
}

impl<'a> MinimalCover<'a> {
    /// Walk the minimal-cover DAG from char `i`, shortest next piece first.
    fn collect(&self, i: usize, stack: &mut Vec<&'a str>, out: &mut Vec<Segmentation>) {
        let n = self.bounds.len() - 1;
        if i == n {
            out.push(stack.iter().copied().collect());
            return;
        }
        let Some(remaining) = self.min_pieces[i] else {
            return;
        };
        for j in (i + 1)..=n {
            if self.min_pieces[j] != Some(remaining - 1) {
                continue;
            }
            let piece = &self.word[self.bounds[i]..self.bounds[j]];
            if is_known(piece, self.readings) {
                stack.push(piece);
                self.collect(j, stack, out);
                stack.pop();
            }
        }
    }
}
