//! Zhuyin → Braille lookup table.
//!
//! Rows are `(symbol, slot, cell)` triples loaded from TOML. The default table
//! is embedded via `include_str!("default_table.toml")`; a custom one can be
//! installed with [`LookupTable::init_custom`] before the first
//! [`LookupTable::global`] call. The table is validated once at load and is
//! read-only afterwards.

mod config;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::trace;

use crate::error::{Error, Result};

pub use config::TableError;
use config::parse_table_toml;

pub const DEFAULT_TABLE_TOML: &str = include_str!("default_table.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Grammatical position a symbol may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Initial,
    Final,
    Tone,
    Punctuation,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Slot::Initial => "initial",
            Slot::Final => "final",
            Slot::Tone => "tone",
            Slot::Punctuation => "punctuation",
        })
    }
}

#[derive(Debug)]
pub struct LookupTable {
    /// symbol → rows, ordered by slot. At most one row per slot.
    by_symbol: HashMap<String, Vec<(Slot, String)>>,
    vowel: String,
    tone: String,
}

impl LookupTable {
    /// Build a table from TOML, rejecting conflicting rows.
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, TableError> {
        let parsed = parse_table_toml(toml_str)?;
        let mut by_symbol: HashMap<String, Vec<(Slot, String)>> = HashMap::new();
        // BTreeMap iteration keeps each symbol's rows in slot order.
        for ((symbol, slot), cell) in parsed.rows {
            by_symbol.entry(symbol).or_default().push((slot, cell));
        }
        Ok(Self {
            by_symbol,
            vowel: parsed.defaults.vowel,
            tone: parsed.defaults.tone,
        })
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> std::result::Result<(), TableError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static LookupTable {
        static INSTANCE: OnceLock<LookupTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TABLE_TOML);
            LookupTable::from_toml(toml_str).expect("lookup table TOML must be valid")
        })
    }

    /// Look up `symbol` regardless of slot.
    ///
    /// Fails with `AmbiguousMapping` when the symbol has rows under several
    /// slots that disagree on the cell.
    pub fn cell(&self, symbol: &str) -> Result<&str> {
        let rows = self
            .by_symbol
            .get(symbol)
            .ok_or_else(|| Error::InvalidSymbol(symbol.to_string()))?;
        let (_, first) = &rows[0];
        if rows.iter().any(|(_, cell)| cell != first) {
            return Err(Error::AmbiguousMapping(symbol.to_string()));
        }
        trace!(symbol, cell = first.as_str(), "lookup");
        Ok(first)
    }

    /// Look up `symbol` in a specific slot.
    pub fn cell_for(&self, symbol: &str, slot: Slot) -> Result<&str> {
        let rows = self
            .by_symbol
            .get(symbol)
            .ok_or_else(|| Error::InvalidSymbol(symbol.to_string()))?;
        match rows.iter().find(|(s, _)| *s == slot) {
            Some((_, cell)) => {
                trace!(symbol, %slot, cell = cell.as_str(), "lookup");
                Ok(cell)
            }
            None => Err(Error::SymbolTypeMismatch {
                symbol: symbol.to_string(),
                expected: slot,
                found: rows[0].0,
            }),
        }
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    pub fn has_slot(&self, symbol: &str, slot: Slot) -> bool {
        self.by_symbol
            .get(symbol)
            .is_some_and(|rows| rows.iter().any(|(s, _)| *s == slot))
    }

    /// Cell emitted for a syllable without a final.
    pub fn vowel_placeholder(&self) -> &str {
        &self.vowel
    }

    /// Cell emitted for a syllable without any tone marking.
    pub fn full_tone(&self) -> &str {
        &self.tone
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}
