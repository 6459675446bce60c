//! Token → Braille cell sequence.

use crate::classify::is_repeatable;
use crate::error::Result;
use crate::syllable::{is_punctuation_token, Syllable};
use crate::table::LookupTable;

/// Transliterate one token: either a punctuation run or one Zhuyin syllable.
///
/// Fails without partial output on the first symbol the table cannot map.
pub fn transliterate(token: &str, table: &LookupTable) -> Result<String> {
    if is_punctuation_token(token) {
        transliterate_punctuation(token, table)
    } else {
        let syllable = Syllable::parse(token, table)?;
        Ok(syllable_cells(&syllable, table))
    }
}

/// Map a punctuation run char by char, taking a doubled repeatable mark
/// (`……`, `──`) as one key.
pub fn transliterate_punctuation(token: &str, table: &LookupTable) -> Result<String> {
    let mut out = String::new();
    let mut rest = token;
    while let Some(c) = rest.chars().next() {
        let n = c.len_utf8();
        let key_len = if is_repeatable(c) && rest[n..].starts_with(c) {
            2 * n
        } else {
            n
        };
        out.push_str(table.cell(&rest[..key_len])?);
        rest = &rest[key_len..];
    }
    Ok(out)
}

/// Emit cells in braille order: initial, final (or the vowel placeholder),
/// then tone mark, neutral dot or the full-tone placeholder.
pub fn syllable_cells(syllable: &Syllable<'_>, table: &LookupTable) -> String {
    let mut out = String::new();
    if let Some(initial) = syllable.initial {
        out.push_str(initial.cell);
    }
    match syllable.rime {
        Some(rime) => out.push_str(rime.cell),
        None => out.push_str(table.vowel_placeholder()),
    }
    match syllable.tone.or(syllable.neutral) {
        Some(tone) => out.push_str(tone.cell),
        None => out.push_str(table.full_tone()),
    }
    out
}
