//! Interfaces to the external lexicon and part-of-speech tagger.

use std::collections::HashMap;

use crate::error::CollaboratorError;
use crate::resolver::PosTag;

/// Grammatical category attached to a lexicon reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Adposition,
    Conjunction,
    Particle,
    Number,
    Punctuation,
    Exclamation,
    Unknown,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Noun => "Noun",
            Category::Verb => "Verb",
            Category::Adjective => "Adjective",
            Category::Adverb => "Adverb",
            Category::Pronoun => "Pronoun",
            Category::Adposition => "Adposition",
            Category::Conjunction => "Conjunction",
            Category::Particle => "Particle",
            Category::Number => "Number",
            Category::Punctuation => "Punctuation",
            Category::Exclamation => "Exclamation",
            Category::Unknown => "Unknown",
        }
    }
}

/// One dictionary sense, used to brief the disambiguator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gloss {
    pub reading: String,
    pub category: Category,
    pub definition: String,
    pub examples: Vec<String>,
}

/// A token with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PosTag,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// Word → readings source.
pub trait Lexicon {
    /// Ordered readings of `word`; empty when the word is unknown.
    fn lookup(&self, word: &str) -> Result<Vec<String>, CollaboratorError>;

    /// Ordered `(reading, category)` pairs, one per distinct pair.
    fn lookup_with_category(&self, word: &str)
        -> Result<Vec<(String, Category)>, CollaboratorError>;

    /// Dictionary senses of `word`. Sources without definitions return none.
    fn glosses(&self, _word: &str) -> Result<Vec<Gloss>, CollaboratorError> {
        Ok(Vec::new())
    }
}

/// Sentence → tagged tokens. The token texts must concatenate to the sentence.
pub trait Tagger {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, CollaboratorError>;
}

/// In-memory lexicon: word → `(reading, category)` pairs in insertion order.
#[derive(Debug, Default, Clone)]
pub struct MemoryLexicon {
    entries: HashMap<String, Vec<(String, Category)>>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str, reading: &str, category: Category) {
        let list = self.entries.entry(word.to_string()).or_default();
        let pair = (reading.to_string(), category);
        if !list.contains(&pair) {
            list.push(pair);
        }
    }

    pub fn with(mut self, word: &str, reading: &str, category: Category) -> Self {
        self.insert(word, reading, category);
        self
    }
}

impl Lexicon for MemoryLexicon {
    fn lookup(&self, word: &str) -> Result<Vec<String>, CollaboratorError> {
        let mut readings: Vec<String> = Vec::new();
        for (reading, _) in self.entries.get(word).into_iter().flatten() {
            if !readings.contains(reading) {
                readings.push(reading.clone());
            }
        }
        Ok(readings)
    }

    fn lookup_with_category(
        &self,
        word: &str,
    ) -> Result<Vec<(String, Category)>, CollaboratorError> {
        Ok(self.entries.get(word).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_lexicon_dedups_readings() {
        let lex = MemoryLexicon::new()
            .with("行", "ㄒㄧㄥˊ", Category::Verb)
            .with("行", "ㄒㄧㄥˊ", Category::Adverb)
            .with("行", "ㄏㄤˊ", Category::Noun)
            .with("行", "ㄏㄤˊ", Category::Noun);
        assert_eq!(lex.lookup("行").unwrap(), vec!["ㄒㄧㄥˊ", "ㄏㄤˊ"]);
        assert_eq!(lex.lookup_with_category("行").unwrap().len(), 3);
        assert!(lex.lookup("無").unwrap().is_empty());
        assert!(lex.glosses("行").unwrap().is_empty());
    }
}
