use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use dianzi_core::lexicon::{Category, Gloss, Lexicon};
use dianzi_core::CollaboratorError;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, debug_span};

use crate::config::MoedictConfig;
use crate::entry::MoedictEntry;
use crate::{EntrySource, MoedictError};

/// Blocking moedict HTTP client.
///
/// Entries are memoized per client, misses included, so a sentence that
/// probes many substrings pays for each one once.
pub struct MoedictClient {
    agent: ureq::Agent,
    config: MoedictConfig,
    cache: Mutex<HashMap<String, Option<MoedictEntry>>>,
}

/// Everything outside RFC 3986's unreserved set is escaped in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, PATH_SEGMENT).to_string()
}

impl MoedictClient {
    pub fn new(config: MoedictConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .into();
        Self {
            agent,
            config,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &MoedictConfig {
        &self.config
    }

    fn entry_url(&self, word: &str) -> String {
        format!("{}{}", self.config.base_url, percent_encode(word))
    }

    fn fetch(&self, word: &str) -> Result<Option<MoedictEntry>, MoedictError> {
        let url = self.entry_url(word);
        let _span = debug_span!("moedict_fetch", word).entered();
        let response = self
            .agent
            .get(&url)
            .header("User-Agent", self.config.user_agent.as_str())
            .call();
        let body = match response {
            Ok(r) => r
                .into_body()
                .read_to_string()
                .map_err(|e| MoedictError::Http(format!("{url}: {e}")))?,
            Err(ureq::Error::StatusCode(404)) => {
                debug!("not found");
                return Ok(None);
            }
            Err(e) => return Err(MoedictError::Http(format!("{url}: {e}"))),
        };
        let entry: MoedictEntry = serde_json::from_str(&body)?;
        debug!(heteronyms = entry.heteronyms.len(), "fetched");
        Ok(Some(entry))
    }
}

impl Default for MoedictClient {
    fn default() -> Self {
        Self::new(MoedictConfig::default())
    }
}

impl EntrySource for MoedictClient {
    fn entry(&self, word: &str) -> Result<Option<MoedictEntry>, MoedictError> {
        if let Ok(cache) = self.cache.lock() {
            if let Some(hit) = cache.get(word) {
                return Ok(hit.clone());
            }
        }
        let entry = self.fetch(word)?;
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(word.to_string(), entry.clone());
        }
        Ok(entry)
    }
}

impl Lexicon for MoedictClient {
    fn lookup(&self, word: &str) -> Result<Vec<String>, CollaboratorError> {
        Ok(self.readings(word)?)
    }

    fn lookup_with_category(
        &self,
        word: &str,
    ) -> Result<Vec<(String, Category)>, CollaboratorError> {
        Ok(self.readings_with_category(word)?)
    }

    fn glosses(&self, word: &str) -> Result<Vec<Gloss>, CollaboratorError> {
        Ok(self.entry_glosses(word)?)
    }
}
