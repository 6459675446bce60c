use std::collections::BTreeMap;

use serde::Deserialize;

use super::Slot;

#[derive(Deserialize)]
struct TableConfig {
    symbols: Vec<RawRow>,
    defaults: Defaults,
}

#[derive(Deserialize)]
struct RawRow {
    symbol: String,
    slot: Slot,
    braille: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Defaults {
    pub vowel: String,
    pub tone: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("symbols table is empty")]
    Empty,
    #[error("empty symbol in row {0}")]
    EmptySymbol(usize),
    #[error("invalid Braille cell {cell:?} for {symbol}")]
    InvalidCell { symbol: String, cell: String },
    #[error("conflicting rows for {symbol} ({slot}): {first} vs {second}")]
    ConflictingRow {
        symbol: String,
        slot: Slot,
        first: String,
        second: String,
    },
    #[error("lookup table already initialized")]
    AlreadyInitialized,
}

/// Validated table contents: `(symbol, slot) → cell` plus the placeholder cells.
#[derive(Debug)]
pub(crate) struct ParsedTable {
    pub rows: BTreeMap<(String, Slot), String>,
    pub defaults: Defaults,
}

fn is_braille_cells(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| ('\u{2800}'..='\u{28FF}').contains(&c))
}

/// Parse and validate table TOML.
///
/// Identical duplicate rows collapse into one; a second row for the same
/// `(symbol, slot)` with a different cell is rejected.
pub(crate) fn parse_table_toml(toml_str: &str) -> Result<ParsedTable, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.symbols.is_empty() {
        return Err(TableError::Empty);
    }

    for (name, cell) in [
        ("defaults.vowel", &config.defaults.vowel),
        ("defaults.tone", &config.defaults.tone),
    ] {
        if !is_braille_cells(cell) {
            return Err(TableError::InvalidCell {
                symbol: name.to_string(),
                cell: cell.clone(),
            });
        }
    }

    let mut rows: BTreeMap<(String, Slot), String> = BTreeMap::new();
    for (i, row) in config.symbols.into_iter().enumerate() {
        if row.symbol.is_empty() {
            return Err(TableError::EmptySymbol(i));
        }
        if !is_braille_cells(&row.braille) {
            return Err(TableError::InvalidCell {
                symbol: row.symbol,
                cell: row.braille,
            });
        }
        match rows.get(&(row.symbol.clone(), row.slot)) {
            Some(existing) if *existing != row.braille => {
                return Err(TableError::ConflictingRow {
                    symbol: row.symbol,
                    slot: row.slot,
                    first: existing.clone(),
                    second: row.braille,
                });
            }
            Some(_) => {}
            None => {
                rows.insert((row.symbol, row.slot), row.braille);
            }
        }
    }

    Ok(ParsedTable {
        rows,
        defaults: config.defaults,
    })
}
