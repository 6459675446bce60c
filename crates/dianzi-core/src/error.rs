use crate::table::Slot;

/// Error returned by an external collaborator (lexicon, tagger).
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("{symbol} cannot occupy the {expected} slot (table lists it as {found})")]
    SymbolTypeMismatch {
        symbol: String,
        expected: Slot,
        found: Slot,
    },

    #[error("ambiguous mapping for {0}: disambiguation is not supported")]
    AmbiguousMapping(String),

    #[error("no segmentation of {0} has a known reading")]
    SegmentationExhausted(String),

    #[error("unsupported character {ch:?} at position {position}")]
    UnsupportedInput { ch: char, position: usize },

    #[error("lexicon lookup failed for {word}: {source}")]
    Lexicon {
        word: String,
        #[source]
        source: CollaboratorError,
    },

    #[error("tagger failed: {0}")]
    Tagger(#[source] CollaboratorError),

    #[error("tagger tokens {found:?} do not reconstruct {expected:?}")]
    TokenMismatch { expected: String, found: String },
}
