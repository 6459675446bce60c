//! Character-level classification for Zhuyin text and Chinese input.

use crate::error::{Error, Result};

/// Zhuyin initials (ㄅ..ㄙ).
pub const INITIALS: std::ops::RangeInclusive<char> = '\u{3105}'..='\u{3119}';

/// Zhuyin finals (ㄚ..ㄩ).
pub const FINALS: std::ops::RangeInclusive<char> = '\u{311A}'..='\u{3129}';

/// Neutral-tone dot. Written before a syllable, or after it in place of a tone mark.
pub const NEUTRAL_TONE: char = '˙';

/// Tone marks accepted after the final.
pub const TONE_MARKS: [char; 5] = ['ˉ', 'ˊ', 'ˇ', 'ˋ', NEUTRAL_TONE];

/// Punctuation that is written doubled and looked up as one two-char key.
pub const REPEATABLE: [char; 2] = ['…', '─'];

/// Accepted punctuation. The halves of `……` and `──` are members so that
/// a doubled mark stays inside one punctuation run.
pub const PUNCTUATION: [char; 28] = [
    '，', '、', '；', '：', '．', '…', '─', '。', '？', '！', '「', '」', '『', '』', '（',
    '）', '《', '》', '〈', '〉', '※', '◎', '［', '］', '｛', '｝', '—', '～',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    PhoneticOrSpace,
    Punctuation,
    Other,
}

pub fn is_zhuyin(c: char) -> bool {
    INITIALS.contains(&c) || FINALS.contains(&c) || TONE_MARKS.contains(&c)
}

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

pub fn is_repeatable(c: char) -> bool {
    REPEATABLE.contains(&c)
}

/// CJK Unified Ideographs, the range accepted as Chinese input.
pub fn is_hanzi(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

pub fn classify(c: char) -> CharacterClass {
    if is_zhuyin(c) || c.is_whitespace() {
        CharacterClass::PhoneticOrSpace
    } else if is_punctuation(c) {
        CharacterClass::Punctuation
    } else {
        CharacterClass::Other
    }
}

/// Reject a sentence containing anything but Chinese characters and
/// accepted punctuation.
///
/// Repeatable marks must come in pairs (`……`, `──`); the last mark of an
/// odd-length run is reported.
pub fn ensure_supported(sentence: &str) -> Result<()> {
    let mut chars = sentence.chars().enumerate().peekable();
    while let Some((position, ch)) = chars.next() {
        if !is_hanzi(ch) && !is_punctuation(ch) {
            return Err(Error::UnsupportedInput { ch, position });
        }
        if is_repeatable(ch) && chars.next_if(|&(_, next)| next == ch).is_none() {
            return Err(Error::UnsupportedInput { ch, position });
        }
    }
    Ok(())
}
