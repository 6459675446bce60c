//! Traditional Chinese → Zhuyin → Braille.
//!
//! [`Engine`] ties together the pieces from [`dianzi_core`]: an input gate,
//! the pronunciation resolver over an external [`Lexicon`] and [`Tagger`], a
//! [`Disambiguator`] for the readings the resolver could not settle, and the
//! Zhuyin → Braille transliterator. [`dianzi_moedict`] provides moedict-backed
//! lexicons.

mod disambiguate;
mod engine;
mod error;
mod trace_init;

pub use disambiguate::{DisambiguationRequest, Disambiguator, FirstReading, PieceGlosses};
pub use engine::{Conversion, Engine};
pub use error::EngineError;
pub use trace_init::{init_tracing, init_tracing_with, DEFAULT_TRACE_FILTER, TRACE_FILE_NAME};

pub use dianzi_core::lexicon::{Category, Gloss, Lexicon, MemoryLexicon, TaggedToken, Tagger};
pub use dianzi_core::resolver::{PosTag, ResolvedPiece};
pub use dianzi_core::{CollaboratorError, Error, LookupTable, Slot};
pub use dianzi_moedict::{MoedictClient, MoedictConfig, MoedictError, OfflineLexicon};
