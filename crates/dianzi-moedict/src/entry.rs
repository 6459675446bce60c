//! Moedict JSON entries and what the resolver needs from them.

use dianzi_core::lexicon::{Category, Gloss};
use serde::{Deserialize, Serialize};

/// Prefix marking a literary reading; such readings are not offered.
const LITERARY: &str = "（讀音）";
/// Prefix marking an alternate reading; such readings are not offered.
const ALTERNATE: &str = "（又音）";
/// Prefix marking the colloquial reading; stripped, the reading is kept.
const COLLOQUIAL: &str = "（語音）";
/// Definition suffix of a variant-form entry: `「X」的異體字。`
const VARIANT_SUFFIX: &str = "的異體字。";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoedictEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub heteronyms: Vec<Heteronym>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Heteronym {
    #[serde(default)]
    pub bopomofo: Option<String>,
    #[serde(default)]
    pub pinyin: Option<String>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub def: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub example: Vec<String>,
}

/// Map a moedict part-of-speech tag (名, 動, …) to a [`Category`].
pub fn category_of(tag: &str) -> Category {
    match tag {
        "名" => Category::Noun,
        "動" => Category::Verb,
        "形" => Category::Adjective,
        "副" => Category::Adverb,
        "代" => Category::Pronoun,
        "介" => Category::Adposition,
        "連" => Category::Conjunction,
        "助" => Category::Particle,
        "數" => Category::Number,
        "符" => Category::Punctuation,
        "嘆" => Category::Exclamation,
        _ => Category::Unknown,
    }
}

/// The offered form of a heteronym's bopomofo, if it is offered at all.
fn offered_reading(bopomofo: &str) -> Option<&str> {
    if bopomofo.is_empty() || bopomofo.starts_with(LITERARY) || bopomofo.starts_with(ALTERNATE) {
        return None;
    }
    Some(bopomofo.strip_prefix(COLLOQUIAL).unwrap_or(bopomofo))
}

/// Examples from a definition's first example line:
/// `如：「行走」、「行路」。` → `["行走", "行路"]`.
fn parse_examples(definition: &Definition) -> Vec<String> {
    let Some(line) = definition.example.first() else {
        return Vec::new();
    };
    let line = line.trim_end_matches('。');
    let line = line.split_once('：').map_or(line, |(_, rest)| rest);
    line.split('、')
        .map(|e| e.trim_matches(|c| c == '「' || c == '」'))
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

impl MoedictEntry {
    /// Offered readings in heteronym order.
    pub fn readings(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for h in &self.heteronyms {
            if let Some(reading) = h.bopomofo.as_deref().and_then(offered_reading) {
                if !out.iter().any(|r| r == reading) {
                    out.push(reading.to_string());
                }
            }
        }
        out
    }

    /// Distinct `(reading, category)` pairs over all typed definitions.
    pub fn readings_with_category(&self) -> Vec<(String, Category)> {
        let mut out: Vec<(String, Category)> = Vec::new();
        for h in &self.heteronyms {
            let Some(reading) = h.bopomofo.as_deref().and_then(offered_reading) else {
                continue;
            };
            for d in &h.definitions {
                let Some(kind) = d.kind.as_deref() else {
                    continue;
                };
                let category = category_of(kind);
                if !out.iter().any(|(r, c)| r == reading && *c == category) {
                    out.push((reading.to_string(), category));
                }
            }
        }
        out
    }

    /// The character this entry is a variant form of, if it is one.
    pub fn variant_of(&self) -> Option<char> {
        let def = self
            .heteronyms
            .first()?
            .definitions
            .first()?
            .def
            .as_deref()?;
        if !def.ends_with(VARIANT_SUFFIX) {
            return None;
        }
        // 「X」的異體字。
        def.chars().nth(1)
    }

    /// Senses grouped by reading, skipping heteronyms without definitions
    /// and definitions carrying layout debris (`&nbsp`).
    pub fn glosses(&self) -> Vec<Gloss> {
        let mut out = Vec::new();
        for h in &self.heteronyms {
            let Some(bopomofo) = h.bopomofo.as_deref() else {
                continue;
            };
            let has_text = h
                .definitions
                .first()
                .and_then(|d| d.def.as_deref())
                .is_some_and(|d| !d.is_empty());
            if !has_text {
                continue;
            }
            let reading = bopomofo.strip_prefix(COLLOQUIAL).unwrap_or(bopomofo);
            for d in &h.definitions {
                let Some(def) = d.def.as_deref() else {
                    continue;
                };
                if def.contains("&nbsp") {
                    continue;
                }
                out.push(Gloss {
                    reading: reading.to_string(),
                    category: d.kind.as_deref().map_or(Category::Unknown, category_of),
                    definition: def.to_string(),
                    examples: parse_examples(d),
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XING: &str = r#"{
        "title": "行",
        "heteronyms": [
            {
                "bopomofo": "ㄒㄧㄥˊ",
                "pinyin": "xíng",
                "definitions": [
                    {"type": "動", "def": "走。", "example": ["如：「行走」、「步行」。"]},
                    {"type": "形", "def": "流動的、移動的。", "example": ["如：「行雲」。"]},
                    {"def": "姓。"}
                ]
            },
            {
                "bopomofo": "ㄏㄤˊ",
                "pinyin": "háng",
                "definitions": [
                    {"type": "名", "def": "行列。", "example": ["如：「單行」、「雙行」。"]},
                    {"type": "名", "def": "&nbsp;"}
                ]
            },
            {
                "bopomofo": "（讀音）ㄒㄧㄥˋ",
                "definitions": [{"type": "名", "def": "品行。"}]
            }
        ]
    }"#;

    fn xing() -> MoedictEntry {
        serde_json::from_str(XING).unwrap()
    }

    #[test]
    fn test_readings_skip_literary() {
        assert_eq!(xing().readings(), vec!["ㄒㄧㄥˊ", "ㄏㄤˊ"]);
    }

    #[test]
    fn test_colloquial_marker_stripped() {
        let entry: MoedictEntry = serde_json::from_str(
            r#"{"heteronyms": [
                {"bopomofo": "（語音）ㄉㄟˇ", "definitions": [{"type": "副", "def": "必須。"}]},
                {"bopomofo": "（又音）ㄉㄜˊ", "definitions": []}
            ]}"#,
        )
        .unwrap();
        assert_eq!(entry.readings(), vec!["ㄉㄟˇ"]);
        assert_eq!(
            entry.readings_with_category(),
            vec![("ㄉㄟˇ".to_string(), Category::Adverb)]
        );
    }

    #[test]
    fn test_readings_with_category() {
        assert_eq!(
            xing().readings_with_category(),
            vec![
                ("ㄒㄧㄥˊ".to_string(), Category::Verb),
                ("ㄒㄧㄥˊ".to_string(), Category::Adjective),
                ("ㄏㄤˊ".to_string(), Category::Noun),
            ]
        );
    }

    #[test]
    fn test_glosses() {
        let glosses = xing().glosses();
        // 3 under ㄒㄧㄥˊ, 1 under ㄏㄤˊ (&nbsp dropped), 1 under the literary reading.
        assert_eq!(glosses.len(), 5);
        assert_eq!(glosses[0].reading, "ㄒㄧㄥˊ");
        assert_eq!(glosses[0].category, Category::Verb);
        assert_eq!(glosses[0].definition, "走。");
        assert_eq!(glosses[0].examples, vec!["行走", "步行"]);
        assert_eq!(glosses[2].category, Category::Unknown);
        assert!(glosses[2].examples.is_empty());
        assert_eq!(glosses[3].examples, vec!["單行", "雙行"]);
    }

    #[test]
    fn test_variant_of() {
        let entry: MoedictEntry = serde_json::from_str(
            r#"{"heteronyms": [{"definitions": [{"def": "「為」的異體字。"}]}]}"#,
        )
        .unwrap();
        assert_eq!(entry.variant_of(), Some('為'));
        assert_eq!(xing().variant_of(), None);
    }

    #[test]
    fn test_missing_fields_default() {
        let entry: MoedictEntry = serde_json::from_str("{}").unwrap();
        assert!(entry.readings().is_empty());
        assert!(entry.glosses().is_empty());
        assert_eq!(entry.variant_of(), None);
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("名"), Category::Noun);
        assert_eq!(category_of("嘆"), Category::Exclamation);
        assert_eq!(category_of("綴"), Category::Unknown);
    }
}
