//! Syllable parser: `[˙] [initial] [final final?] [tone]`.
//!
//! Slots are recognized by alphabet (initial range, final range, tone marks)
//! and then validated against the lookup table. Two-char finals are matched
//! before single ones.

use crate::classify::{
    is_punctuation, is_repeatable, FINALS, INITIALS, NEUTRAL_TONE, TONE_MARKS,
};
use crate::error::{Error, Result};
use crate::table::{LookupTable, Slot};

/// One parsed slot: the symbol as written and its table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part<'a> {
    pub symbol: &'a str,
    pub cell: &'a str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Syllable<'a> {
    /// Leading neutral-tone dot.
    pub neutral: Option<Part<'a>>,
    pub initial: Option<Part<'a>>,
    /// The final, one symbol or a medial + rime pair.
    pub rime: Option<Part<'a>>,
    /// Trailing tone mark.
    pub tone: Option<Part<'a>>,
}

/// Whether `token` takes the punctuation path instead of being parsed.
pub fn is_punctuation_token(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(a), _) if is_punctuation(a) => true,
        (Some(a), Some(b)) => a == b && is_repeatable(a),
        _ => false,
    }
}

fn part<'a>(table: &'a LookupTable, symbol: &'a str, slot: Slot) -> Result<Part<'a>> {
    let cell = table.cell_for(symbol, slot)?;
    Ok(Part { symbol, cell })
}

/// Byte length of the final at the start of `s`, preferring a two-char final.
fn final_len(s: &str, table: &LookupTable) -> usize {
    let mut chars = s.chars();
    let Some(first) = chars.next().filter(|c| FINALS.contains(c)) else {
        return 0;
    };
    if let Some(second) = chars.next().filter(|c| FINALS.contains(c)) {
        let pair_len = first.len_utf8() + second.len_utf8();
        if table.has_slot(&s[..pair_len], Slot::Final) {
            return pair_len;
        }
    }
    first.len_utf8()
}

/// Fail with `InvalidSymbol` on the first char that starts no table key.
///
/// Runs before any slot is checked, so an unknown symbol is reported as such
/// even when a misplaced known symbol precedes it.
fn ensure_known(token: &str, table: &LookupTable) -> Result<()> {
    let mut rest = token;
    while let Some(c) = rest.chars().next() {
        let n = c.len_utf8();
        let pair_len = rest[n..].chars().next().map(|d| n + d.len_utf8());
        if let Some(len) = pair_len.filter(|&len| table.contains(&rest[..len])) {
            rest = &rest[len..];
        } else if table.contains(&rest[..n]) {
            rest = &rest[n..];
        } else {
            return Err(Error::InvalidSymbol(rest[..n].to_string()));
        }
    }
    Ok(())
}

/// Strip one leading char of `s` if `accept` holds for it.
fn take_char(s: &str, accept: impl Fn(char) -> bool) -> Option<(&str, &str)> {
    let c = s.chars().next().filter(|&c| accept(c))?;
    Some(s.split_at(c.len_utf8()))
}

impl<'a> Syllable<'a> {
    pub fn parse(token: &'a str, table: &'a LookupTable) -> Result<Self> {
        ensure_known(token, table)?;
        let mut syllable = Syllable::default();
        let mut rest = token;

        if let Some((symbol, tail)) = take_char(rest, |c| c == NEUTRAL_TONE) {
            syllable.neutral = Some(part(table, symbol, Slot::Tone)?);
            rest = tail;
        }
        if let Some((symbol, tail)) = take_char(rest, |c| INITIALS.contains(&c)) {
            syllable.initial = Some(part(table, symbol, Slot::Initial)?);
            rest = tail;
        }
        let len = final_len(rest, table);
        if len > 0 {
            let (symbol, tail) = rest.split_at(len);
            syllable.rime = Some(part(table, symbol, Slot::Final)?);
            rest = tail;
        }
        if let Some((symbol, tail)) = take_char(rest, |c| TONE_MARKS.contains(&c)) {
            syllable.tone = Some(part(table, symbol, Slot::Tone)?);
            rest = tail;
        }

        match rest.chars().next() {
            None => Ok(syllable),
            Some(c) => Err(syllable.leftover(rest, c, table)),
        }
    }

    /// Error for input left after the last slot that could be filled.
    fn leftover(&self, rest: &str, c: char, table: &LookupTable) -> Error {
        let symbol = &rest[..c.len_utf8()];
        match table.cell_for(symbol, Slot::Tone) {
            // Nothing may follow a tone mark.
            _ if self.tone.is_some() => Error::InvalidSymbol(rest.to_string()),
            Err(e) => e,
            // A tone-slot symbol here would have been taken above.
            Ok(_) => Error::InvalidSymbol(rest.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> &'static LookupTable {
        LookupTable::global()
    }

    #[test]
    fn test_parse_full() {
        let s = Syllable::parse("ㄒㄧㄠˇ", table()).unwrap();
        assert_eq!(s.initial.unwrap().symbol, "ㄒ");
        assert_eq!(s.rime.unwrap().symbol, "ㄧㄠ");
        assert_eq!(s.tone.unwrap().symbol, "ˇ");
        assert!(s.neutral.is_none());
    }

    #[test]
    fn test_parse_neutral() {
        let s = Syllable::parse("˙ㄇㄚ", table()).unwrap();
        assert_eq!(s.neutral.unwrap().symbol, "˙");
        assert_eq!(s.initial.unwrap().symbol, "ㄇ");
        assert_eq!(s.rime.unwrap().symbol, "ㄚ");
        assert!(s.tone.is_none());
    }

    #[test]
    fn test_parse_trailing_neutral_is_tone() {
        let s = Syllable::parse("ㄇㄚ˙", table()).unwrap();
        assert!(s.neutral.is_none());
        assert_eq!(s.tone.unwrap().symbol, "˙");
    }

    #[test]
    fn test_parse_syllabic_initial() {
        let s = Syllable::parse("ㄓ", table()).unwrap();
        assert_eq!(s.initial.unwrap().symbol, "ㄓ");
        assert!(s.rime.is_none());
        assert!(s.tone.is_none());
    }

    #[test]
    fn test_parse_final_only() {
        let s = Syllable::parse("ㄧㄥˊ", table()).unwrap();
        assert!(s.initial.is_none());
        assert_eq!(s.rime.unwrap().symbol, "ㄧㄥ");
        assert_eq!(s.tone.unwrap().symbol, "ˊ");
    }

    #[test]
    fn test_parse_single_final_when_pair_unknown() {
        // ㄚㄧ is not a compound final: ㄚ is taken, ㄧ is left over.
        let err = Syllable::parse("ㄅㄚㄧ", table()).unwrap_err();
        assert!(matches!(
            err,
            Error::SymbolTypeMismatch {
                expected: Slot::Tone,
                found: Slot::Final,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_unknown_symbol() {
        let err = Syllable::parse("ㄅx", table()).unwrap_err();
        assert!(matches!(err, Error::InvalidSymbol(ref s) if s == "x"));
        let err = Syllable::parse("中", table()).unwrap_err();
        assert!(matches!(err, Error::InvalidSymbol(ref s) if s == "中"));
    }

    #[test]
    fn test_unknown_symbol_wins_over_misplaced_one() {
        // The second ㄅ is misplaced, but x is not in the table at all.
        let err = Syllable::parse("ㄅㄅx", table()).unwrap_err();
        assert!(matches!(err, Error::InvalidSymbol(ref s) if s == "x"));
        let err = Syllable::parse("ㄅㄚ…", table()).unwrap_err();
        assert!(matches!(err, Error::InvalidSymbol(ref s) if s == "…"));
    }

    #[test]
    fn test_parse_nothing_after_tone() {
        let err = Syllable::parse("ㄅㄚˇㄅ", table()).unwrap_err();
        assert!(matches!(err, Error::InvalidSymbol(ref s) if s == "ㄅ"));
    }

    #[test]
    fn test_parse_slot_type_mismatch() {
        // A table that files ㄅ as a final.
        let table = LookupTable::from_toml(
            r#"
symbols = [
    { symbol = "ㄅ", slot = "final", braille = "⠕" },
    { symbol = "ㄚ", slot = "final", braille = "⠜" },
]

[defaults]
vowel = "⠱"
tone = "⠄"
"#,
        )
        .unwrap();
        let err = Syllable::parse("ㄅㄚ", &table).unwrap_err();
        assert!(matches!(
            err,
            Error::SymbolTypeMismatch {
                expected: Slot::Initial,
                found: Slot::Final,
                ..
            }
        ));
    }

    #[test]
    fn test_is_punctuation_token() {
        assert!(is_punctuation_token("。"));
        assert!(is_punctuation_token("……"));
        assert!(is_punctuation_token("──"));
        assert!(is_punctuation_token("「ㄅ"));
        assert!(!is_punctuation_token("ㄅㄚ"));
        assert!(!is_punctuation_token(""));
    }
}
