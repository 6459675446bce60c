//! Sentence-level Zhuyin → Braille.

use tracing::debug_span;

use crate::cut::tokens;
use crate::error::Result;
use crate::table::LookupTable;
use crate::transliterate::transliterate;

/// Transliterate every token of a finalized Zhuyin sentence, in order.
pub fn braille_cells(zhuyin: &str, table: &LookupTable) -> Result<Vec<String>> {
    let _span = debug_span!("braille_cells", len = zhuyin.len()).entered();
    tokens(zhuyin)
        .into_iter()
        .map(|token| transliterate(token, table))
        .collect()
}

/// Transliterate a finalized Zhuyin sentence into one Braille string.
///
/// Token cells are concatenated without separators. The result is returned
/// as assembled; no trimming is applied.
pub fn braille(zhuyin: &str, table: &LookupTable) -> Result<String> {
    Ok(braille_cells(zhuyin, table)?.concat())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_sentence() {
        let table = LookupTable::global();
        let cells = braille_cells("ㄕㄠˇ ˙ㄌㄜ ㄐㄧˇ ㄐㄧㄢˋ。", table).unwrap();
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[4], "⠤");
        assert_eq!(braille("ㄕㄠˇ ˙ㄌㄜ ㄐㄧˇ ㄐㄧㄢˋ。", table).unwrap(), cells.concat());
    }

    #[test]
    fn test_known_cells() {
        let table = LookupTable::global();
        // ㄒ ㄧㄠ ˇ, then ㄇ ㄚ ˙
        assert_eq!(braille("ㄒㄧㄠˇ ˙ㄇㄚ", table).unwrap(), "⠑⠪⠈⠍⠜⠁");
    }

    #[test]
    fn test_empty() {
        let table = LookupTable::global();
        assert_eq!(braille("", table).unwrap(), "");
        assert!(braille_cells("   ", table).unwrap().is_empty());
    }

    #[test]
    fn test_failure_is_whole() {
        let table = LookupTable::global();
        let err = braille("ㄅㄚ ㄅx", table).unwrap_err();
        assert!(matches!(err, Error::InvalidSymbol(_)));
    }
}
