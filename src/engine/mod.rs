//! Sentence → Zhuyin → Braille, end to end.


use std::sync::Arc;

use dianzi_core::classify::{ensure_supported, is_punctuation};
use dianzi_core::lexicon::{Lexicon, Tagger};
use dianzi_core::resolver::{resolve_sentence, ResolvedPiece};
use dianzi_core::{Error, LookupTable};
use tracing::{debug, debug_span};

use crate::disambiguate::{DisambiguationRequest, Disambiguator, PieceGlosses};
use crate::error::EngineError;

/// Result of a full conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Space-separated syllables, as handed to the transliterator.
    pub zhuyin: String,
    pub braille: String,
    pub pieces: Vec<ResolvedPiece>,
}

pub struct Engine<'t> {
    table: &'t LookupTable,
    lexicon: Arc<dyn Lexicon + Send + Sync>,
    tagger: Arc<dyn Tagger + Send + Sync>,
    disambiguator: Option<Arc<dyn Disambiguator + Send + Sync>>,
}

impl<'t> Engine<'t> {
    pub fn new(
        table: &'t LookupTable,
        lexicon: Arc<dyn Lexicon + Send + Sync>,
        tagger: Arc<dyn Tagger + Send + Sync>,
    ) -> Self {
        Self {
            table,
            lexicon,
            tagger,
            disambiguator: None,
        }
    }

    pub fn with_disambiguator(mut self, disambiguator: Arc<dyn Disambiguator + Send + Sync>) -> Self {
        self.disambiguator = Some(disambiguator);
        self
    }

    pub fn has_disambiguator(&self) -> bool {
        self.disambiguator.is_some()
    }

    /// Candidate readings for every piece of `sentence`.
    pub fn resolve(&self, sentence: &str) -> Result<Vec<ResolvedPiece>, EngineError> {
        ensure_supported(sentence)?;
        Ok(resolve_sentence(
            self.lexicon.as_ref(),
            self.tagger.as_ref(),
            sentence,
        )?)
    }

    /// Resolve `sentence` and attach senses for the pieces still ambiguous.
    pub fn request(&self, sentence: &str) -> Result<DisambiguationRequest, EngineError> {
        let pieces = self.resolve(sentence)?;
        let mut glosses: Vec<PieceGlosses> = Vec::new();
        for piece in pieces.iter().filter(|p| p.is_ambiguous()) {
            if glosses.iter().any(|g| g.text == piece.text) {
                continue;
            }
            let senses = self
                .lexicon
                .glosses(&piece.text)
                .map_err(|source| Error::Lexicon {
                    word: piece.text.clone(),
                    source,
                })?;
            glosses.push(PieceGlosses {
                text: piece.text.clone(),
                glosses: senses,
            });
        }
        Ok(DisambiguationRequest {
            sentence: sentence.to_string(),
            pieces,
            glosses,
        })
    }

    /// Convert a Chinese sentence to Braille.
    pub fn convert(&self, sentence: &str) -> Result<Conversion, EngineError> {
        let disambiguator = self
            .disambiguator
            .as_ref()
            .ok_or(EngineError::NoDisambiguator)?;
        let _span = debug_span!("convert", chars = sentence.chars().count()).entered();

        let request = self.request(sentence)?;
        let readings = disambiguator
            .disambiguate(&request)
            .map_err(EngineError::Disambiguator)?;
        let expected = sentence.chars().count();
        if readings.len() != expected {
            return Err(EngineError::MalformedDisambiguation {
                expected,
                found: readings.len(),
            });
        }

        let zhuyin = assemble_zhuyin(sentence, &readings);
        debug!(zhuyin = zhuyin.as_str());
        let braille = self.braille(&zhuyin)?;
        Ok(Conversion {
            zhuyin,
            braille,
            pieces: request.pieces,
        })
    }

    pub fn braille(&self, zhuyin: &str) -> Result<String, EngineError> {
        Ok(dianzi_core::braille(zhuyin, self.table)?)
    }

    pub fn braille_cells(&self, zhuyin: &str) -> Result<Vec<String>, EngineError> {
        Ok(dianzi_core::braille_cells(zhuyin, self.table)?)
    }
}

/// Join per-character readings with spaces. Adjacent punctuation stays
/// joined so that doubled marks like `……` reach the table as one key.
fn assemble_zhuyin(sentence: &str, readings: &[String]) -> String {
    let mut out = String::new();
    let mut prev_punctuation = false;
    for (i, (c, reading)) in sentence.chars().zip(readings).enumerate() {
        let punctuation = is_punctuation(c);
        if i > 0 && !(punctuation && prev_punctuation) {
            out.push(' ');
        }
        out.push_str(reading.trim());
        prev_punctuation = punctuation;
    }
    out
}
