//! Moedict (教育部重編國語辭典) backed lexicons.
//!
//! [`MoedictClient`] fetches entries over HTTP; [`OfflineLexicon`] reads them
//! from a JSON dump. Both implement [`dianzi_core::lexicon::Lexicon`].

mod client;
mod config;
mod entry;
mod offline;

use dianzi_core::lexicon::{Category, Gloss};
use tracing::debug;

pub use client::MoedictClient;
pub use config::{MoedictConfig, DEFAULT_MOEDICT_TOML};
pub use entry::{category_of, Definition, Heteronym, MoedictEntry};
pub use offline::OfflineLexicon;

#[derive(Debug, thiserror::Error)]
pub enum MoedictError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(String),
}

/// Anything that can hand out raw moedict entries by headword.
pub(crate) trait EntrySource {
    /// `Ok(None)` when the dictionary has no such headword.
    fn entry(&self, word: &str) -> Result<Option<MoedictEntry>, MoedictError>;

    /// The entry for `word`, following a variant-form redirect once.
    fn resolved_entry(&self, word: &str) -> Result<Option<MoedictEntry>, MoedictError> {
        let Some(entry) = self.entry(word)? else {
            return Ok(None);
        };
        match entry.variant_of() {
            Some(target) if !word.chars().eq(std::iter::once(target)) => {
                debug!(word, %target, "following variant redirect");
                let mut buf = [0u8; 4];
                Ok(self.entry(target.encode_utf8(&mut buf))?.or(Some(entry)))
            }
            _ => Ok(Some(entry)),
        }
    }

    fn readings(&self, word: &str) -> Result<Vec<String>, MoedictError> {
        Ok(self
            .resolved_entry(word)?
            .map(|e| e.readings())
            .unwrap_or_default())
    }

    fn readings_with_category(&self, word: &str) -> Result<Vec<(String, Category)>, MoedictError> {
        Ok(self
            .resolved_entry(word)?
            .map(|e| e.readings_with_category())
            .unwrap_or_default())
    }

    fn entry_glosses(&self, word: &str) -> Result<Vec<Gloss>, MoedictError> {
        Ok(self
            .resolved_entry(word)?
            .map(|e| e.glosses())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "trace")]
    #[test]
    fn trace_feature_enables_debug_events() {
        use tracing::level_filters::{LevelFilter, STATIC_MAX_LEVEL};
        assert!(STATIC_MAX_LEVEL >= LevelFilter::DEBUG);
    }

    #[test]
    fn error_messages_name_their_source() {
        let err = super::MoedictError::Http("https://example.org/x: timeout".to_string());
        assert_eq!(err.to_string(), "HTTP error: https://example.org/x: timeout");
        let err = super::MoedictError::Config("timeout_secs must be positive".to_string());
        assert!(err.to_string().starts_with("config error"));
    }
}
