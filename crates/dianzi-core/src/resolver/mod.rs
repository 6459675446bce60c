//! Pronunciation resolver: candidate readings for every piece of a tagged
//! sentence.
//!
//! Known tokens keep their lexicon readings, narrowed by part of speech when
//! there are several. Unknown tokens are split into the fewest pieces the
//! lexicon knows. Remaining ambiguity is passed on, not guessed away.

mod pos_map;

use std::collections::HashSet;

use tracing::{debug, debug_span, warn};

use crate::classify::is_punctuation;
use crate::error::{Error, Result};
use crate::lexicon::{Lexicon, TaggedToken, Tagger};
use crate::segment::{valid_segmentations, ReadingMap};

pub use pos_map::{allowed_categories, PosTag};

/// A piece of the sentence with its candidate readings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPiece {
    pub text: String,
    pub readings: Vec<String>,
}

impl ResolvedPiece {
    pub fn new(text: impl Into<String>, readings: Vec<String>) -> Self {
        Self {
            text: text.into(),
            readings,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        self.readings.len() > 1
    }
}

fn lookup(lexicon: &dyn Lexicon, word: &str) -> Result<Vec<String>> {
    lexicon.lookup(word).map_err(|source| Error::Lexicon {
        word: word.to_string(),
        source,
    })
}

fn is_punctuation_token(token: &TaggedToken) -> bool {
    token.pos == PosTag::Punctuation
        || (!token.text.is_empty() && token.text.chars().all(is_punctuation))
}

/// Tag `sentence` and resolve the tokens.
///
/// Fails with `TokenMismatch` if the tagger's tokens do not reconstruct the
/// sentence.
pub fn resolve_sentence(
    lexicon: &dyn Lexicon,
    tagger: &dyn Tagger,
    sentence: &str,
) -> Result<Vec<ResolvedPiece>> {
    let tokens = tagger.tag(sentence).map_err(Error::Tagger)?;
    let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
    if joined != sentence {
        return Err(Error::TokenMismatch {
            expected: sentence.to_string(),
            found: joined,
        });
    }
    resolve(lexicon, &tokens)
}

/// Resolve each tagged token in order. Pieces cover the tokens exactly.
pub fn resolve(lexicon: &dyn Lexicon, tokens: &[TaggedToken]) -> Result<Vec<ResolvedPiece>> {
    let _span = debug_span!("resolve", tokens = tokens.len()).entered();
    let mut pieces = Vec::with_capacity(tokens.len());
    for token in tokens.iter().filter(|t| !t.text.is_empty()) {
        resolve_token(lexicon, token, &mut pieces)?;
    }
    Ok(pieces)
}

fn resolve_token(
    lexicon: &dyn Lexicon,
    token: &TaggedToken,
    out: &mut Vec<ResolvedPiece>,
) -> Result<()> {
    let text = token.text.as_str();
    if is_punctuation_token(token) {
        out.push(ResolvedPiece::new(text, vec![text.to_string()]));
        return Ok(());
    }

    let readings = lookup(lexicon, text)?;
    debug!(token = text, pos = ?token.pos, readings = readings.len());
    match readings.len() {
        0 => out.extend(segment_unknown(lexicon, text)?),
        1 => out.push(ResolvedPiece::new(text, readings)),
        _ => {
            let filtered = filter_by_pos(lexicon, token)?;
            if filtered.is_empty() {
                warn!(token = text, pos = ?token.pos, "no reading matches the tag");
                out.push(ResolvedPiece::new(text, readings));
            } else {
                out.push(ResolvedPiece::new(text, filtered));
            }
        }
    }
    Ok(())
}

/// Readings of `token` whose category its tag admits, deduplicated in order.
fn filter_by_pos(lexicon: &dyn Lexicon, token: &TaggedToken) -> Result<Vec<String>> {
    let allowed = allowed_categories(token.pos);
    let tagged = lexicon
        .lookup_with_category(&token.text)
        .map_err(|source| Error::Lexicon {
            word: token.text.clone(),
            source,
        })?;
    let mut filtered: Vec<String> = Vec::new();
    for (reading, category) in tagged {
        if allowed.contains(&category) && !filtered.contains(&reading) {
            filtered.push(reading);
        }
    }
    Ok(filtered)
}

/// Readings of every distinct substring of `word`; unknown substrings are
/// left out.
pub fn substring_readings(lexicon: &dyn Lexicon, word: &str) -> Result<ReadingMap> {
    let bounds: Vec<usize> = word
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(word.len()))
        .collect();
    let n = bounds.len() - 1;
    let mut queried: HashSet<&str> = HashSet::new();
    let mut readings = ReadingMap::new();
    for len in 1..=n {
        for start in 0..=(n - len) {
            let piece = &word[bounds[start]..bounds[start + len]];
            if !queried.insert(piece) {
                continue;
            }
            let found = lookup(lexicon, piece)?;
            if !found.is_empty() {
                readings.insert(piece.to_string(), found);
            }
        }
    }
    Ok(readings)
}

/// Split an unknown word into its minimal known pieces, preferring the split
/// with the fewest candidate readings overall.
fn segment_unknown(lexicon: &dyn Lexicon, word: &str) -> Result<Vec<ResolvedPiece>> {
    let _span = debug_span!("segment_unknown", word).entered();
    let readings = substring_readings(lexicon, word)?;
    let best = valid_segmentations(word, &readings)?
        .into_iter()
        .min_by_key(|seg| seg.reading_count(&readings))
        .ok_or_else(|| Error::SegmentationExhausted(word.to_string()))?;
    debug!(pieces = best.len());
    Ok(best
        .pieces
        .into_iter()
        .map(|piece| {
            let r = readings.get(&piece).cloned().unwrap_or_default();
            ResolvedPiece::new(piece, r)
        })
        .collect())
}
