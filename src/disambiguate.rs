//! The last step before transliteration: one reading per character.

use dianzi_core::classify::is_punctuation;
use dianzi_core::lexicon::Gloss;
use dianzi_core::resolver::ResolvedPiece;
use dianzi_core::CollaboratorError;

/// Dictionary senses of one ambiguous piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceGlosses {
    pub text: String,
    pub glosses: Vec<Gloss>,
}

/// Everything a disambiguator gets to look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisambiguationRequest {
    pub sentence: String,
    pub pieces: Vec<ResolvedPiece>,
    /// Senses for each distinct piece with more than one candidate reading.
    pub glosses: Vec<PieceGlosses>,
}

impl DisambiguationRequest {
    pub fn is_ambiguous(&self) -> bool {
        self.pieces.iter().any(ResolvedPiece::is_ambiguous)
    }
}

/// Picks the final reading of every character of a sentence.
///
/// Implementations return exactly one Zhuyin syllable per character of
/// `request.sentence`. Punctuation characters are returned as themselves.
pub trait Disambiguator {
    fn disambiguate(
        &self,
        request: &DisambiguationRequest,
    ) -> Result<Vec<String>, CollaboratorError>;
}

/// Takes the first candidate of every piece.
///
/// Lexicon order is usage order for moedict, so this is the most common
/// reading. Useful offline and as a baseline.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstReading;

impl Disambiguator for FirstReading {
    fn disambiguate(
        &self,
        request: &DisambiguationRequest,
    ) -> Result<Vec<String>, CollaboratorError> {
        let mut out = Vec::new();
        for piece in &request.pieces {
            if piece.text.chars().all(is_punctuation) {
                out.extend(piece.text.chars().map(String::from));
                continue;
            }
            let reading = piece
                .readings
                .first()
                .ok_or_else(|| format!("no reading for {}", piece.text))?;
            out.extend(reading.split_whitespace().map(str::to_string));
        }
        Ok(out)
    }
}
