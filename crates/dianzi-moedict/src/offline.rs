use std::collections::HashMap;
use std::fs;
use std::path::Path;

use dianzi_core::lexicon::{Category, Gloss, Lexicon};
use dianzi_core::CollaboratorError;
use tracing::debug;

use crate::entry::MoedictEntry;
use crate::{EntrySource, MoedictError};

/// Lexicon over a local dump: a JSON object mapping headword to moedict entry.
#[derive(Debug, Default, Clone)]
pub struct OfflineLexicon {
    entries: HashMap<String, MoedictEntry>,
}

impl OfflineLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, MoedictError> {
        let entries: HashMap<String, MoedictEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn open(path: &Path) -> Result<Self, MoedictError> {
        let json = fs::read_to_string(path)?;
        let lexicon = Self::from_json(&json)?;
        debug!(path = %path.display(), entries = lexicon.len(), "offline lexicon loaded");
        Ok(lexicon)
    }

    pub fn insert(&mut self, word: impl Into<String>, entry: MoedictEntry) {
        self.entries.insert(word.into(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntrySource for OfflineLexicon {
    fn entry(&self, word: &str) -> Result<Option<MoedictEntry>, MoedictError> {
        Ok(self.entries.get(word).cloned())
    }
}

impl Lexicon for OfflineLexicon {
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

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const DUMP: &str = r#"{
        "行": {"heteronyms": [
            {"bopomofo": "ㄒㄧㄥˊ", "definitions": [{"type": "動", "def": "走。", "example": ["如：「行走」。"]}]},
            {"bopomofo": "ㄏㄤˊ", "definitions": [{"type": "名", "def": "行列。"}]}
        ]},
        "爲": {"heteronyms": [{"bopomofo": "ㄨㄟˊ", "definitions": [{"def": "「為」的異體字。"}]}]},
        "為": {"heteronyms": [{"bopomofo": "ㄨㄟˋ", "definitions": [{"type": "介", "def": "替。"}]}]},
        "銀行": {"heteronyms": [{"bopomofo": "ㄧㄣˊ ㄏㄤˊ", "definitions": [{"type": "名", "def": "經營存款的金融機構。"}]}]}
    }"#;

    #[test]
    fn test_lookup() {
        let lex = OfflineLexicon::from_json(DUMP).unwrap();
        assert_eq!(lex.len(), 4);
        assert_eq!(lex.lookup("行").unwrap(), vec!["ㄒㄧㄥˊ", "ㄏㄤˊ"]);
        assert_eq!(lex.lookup("銀行").unwrap(), vec!["ㄧㄣˊ ㄏㄤˊ"]);
        assert!(lex.lookup("走").unwrap().is_empty());
    }

    #[test]
    fn test_lookup_with_category() {
        let lex = OfflineLexicon::from_json(DUMP).unwrap();
        assert_eq!(
            lex.lookup_with_category("行").unwrap(),
            vec![
                ("ㄒㄧㄥˊ".to_string(), Category::Verb),
                ("ㄏㄤˊ".to_string(), Category::Noun),
            ]
        );
    }

    #[test]
    fn test_variant_redirect() {
        let lex = OfflineLexicon::from_json(DUMP).unwrap();
        assert_eq!(lex.lookup("爲").unwrap(), vec!["ㄨㄟˋ"]);
        assert_eq!(
            lex.lookup_with_category("爲").unwrap(),
            vec![("ㄨㄟˋ".to_string(), Category::Adposition)]
        );
    }

    #[test]
    fn test_variant_redirect_to_missing_target_keeps_entry() {
        let mut lex = OfflineLexicon::new();
        let entry: MoedictEntry = serde_json::from_str(
            r#"{"heteronyms": [{"bopomofo": "ㄐㄧ", "definitions": [{"def": "「雞」的異體字。"}]}]}"#,
        )
        .unwrap();
        lex.insert("鷄", entry);
        assert_eq!(lex.lookup("鷄").unwrap(), vec!["ㄐㄧ"]);
    }

    #[test]
    fn test_glosses() {
        let lex = OfflineLexicon::from_json(DUMP).unwrap();
        let glosses = lex.glosses("行").unwrap();
        assert_eq!(glosses.len(), 2);
        assert_eq!(glosses[0].examples, vec!["行走"]);
        assert_eq!(glosses[1].reading, "ㄏㄤˊ");
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DUMP.as_bytes()).unwrap();
        let lex = OfflineLexicon::open(file.path()).unwrap();
        assert_eq!(lex.lookup("為").unwrap(), vec!["ㄨㄟˋ"]);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = OfflineLexicon::open(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, MoedictError::Io(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = OfflineLexicon::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, MoedictError::Json(_)));
    }
}
