//! Part-of-speech tags and the categories each tag admits.

use crate::lexicon::Category;

/// Universal Dependencies coarse tags, as emitted by the tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Pronoun,
    Adposition,
    Conjunction,
    Particle,
    Numeral,
    Punctuation,
    Interjection,
    Other,
}

impl PosTag {
    /// Parse a UD tag such as `"NOUN"` or `"CCONJ"`. Unlisted tags map to `Other`.
    pub fn from_ud(tag: &str) -> PosTag {
        match tag {
            "NOUN" => PosTag::Noun,
            "PROPN" => PosTag::ProperNoun,
            "VERB" => PosTag::Verb,
            "ADJ" => PosTag::Adjective,
            "ADV" => PosTag::Adverb,
            "DET" => PosTag::Determiner,
            "PRON" => PosTag::Pronoun,
            "ADP" => PosTag::Adposition,
            "CONJ" | "CCONJ" | "SCONJ" => PosTag::Conjunction,
            "PART" => PosTag::Particle,
            "NUM" => PosTag::Numeral,
            "PUNCT" => PosTag::Punctuation,
            "INTJ" => PosTag::Interjection,
            _ => PosTag::Other,
        }
    }
}

/// Lexicon categories a reading may carry for a token tagged `pos`.
///
/// Verbs also admit adverb readings. Determiners admit nouns and adjectives,
/// since classifiers are filed as nouns. Numerals admit nouns and adjectives
/// as well. Untagged material falls back to verb readings.
pub fn allowed_categories(pos: PosTag) -> &'static [Category] {
    match pos {
        PosTag::Noun | PosTag::ProperNoun => &[Category::Noun],
        PosTag::Verb => &[Category::Verb, Category::Adverb],
        PosTag::Adjective => &[Category::Adjective],
        PosTag::Adverb => &[Category::Adverb],
        PosTag::Determiner => &[Category::Noun, Category::Adjective],
        PosTag::Pronoun => &[Category::Pronoun],
        PosTag::Adposition => &[Category::Adposition],
        PosTag::Conjunction => &[Category::Conjunction],
        PosTag::Particle => &[Category::Particle],
        PosTag::Numeral => &[Category::Number, Category::Noun, Category::Adjective],
        PosTag::Punctuation => &[Category::Punctuation],
        PosTag::Interjection => &[Category::Exclamation],
        PosTag::Other => &[Category::Verb],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ud() {
        assert_eq!(PosTag::from_ud("NOUN"), PosTag::Noun);
        assert_eq!(PosTag::from_ud("CCONJ"), PosTag::Conjunction);
        assert_eq!(PosTag::from_ud("PUNCT"), PosTag::Punctuation);
        assert_eq!(PosTag::from_ud("X"), PosTag::Other);
        assert_eq!(PosTag::from_ud("AUX"), PosTag::Other);
    }

    #[test]
    fn test_allowed_categories() {
        assert_eq!(
            allowed_categories(PosTag::Verb),
            &[Category::Verb, Category::Adverb]
        );
        assert_eq!(
            allowed_categories(PosTag::Numeral),
            &[Category::Number, Category::Noun, Category::Adjective]
        );
        assert_eq!(allowed_categories(PosTag::Other), &[Category::Verb]);
        assert!(!allowed_categories(PosTag::Noun).contains(&Category::Unknown));
    }
}
