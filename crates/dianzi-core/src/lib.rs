//! Zhuyin → Braille transliteration and pronunciation resolution.
//!
//! Everything here is synchronous and pure over its inputs. The lookup table
//! is immutable once loaded and can be shared across threads. The lexicon and
//! tagger are external; see [`lexicon`].

pub mod braille;
pub mod classify;
pub mod cut;
mod error;
pub mod lexicon;
pub mod resolver;
pub mod segment;
pub mod syllable;
pub mod table;
pub mod transliterate;

pub use braille::{braille, braille_cells};
pub use error::{CollaboratorError, Error, Result};
pub use table::{LookupTable, Slot};
