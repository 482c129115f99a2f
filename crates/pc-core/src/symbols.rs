//! Base unit symbol table.
//!
//! Maps the short symbols found in constant tables (`kg`, `eV`, `ohm`, ...) to
//! the siunitx markup that typesets them. The table is an explicit value handed
//! to the formatter, so callers can extend or replace entries without touching
//! the formatting code.

use std::collections::BTreeMap;

use crate::error::{FormatError, FormatResult};

/// Symbols known out of the box, covering every unit used by the CODATA table.
pub const DEFAULT_SYMBOLS: &[(&str, &str)] = &[
    ("A", r"\ampere"),
    ("C", r"\coulomb"),
    ("F", r"\farad"),
    ("GeV", r"\giga\electronvolt"),
    ("Hz", r"\hertz"),
    ("J", r"\joule"),
    ("K", r"\kelvin"),
    ("MHz", r"\mega\hertz"),
    ("MeV", r"\mega\electronvolt"),
    ("N", r"\newton"),
    ("Pa", r"\pascal"),
    ("S", r"\siemens"),
    ("T", r"\tesla"),
    ("V", r"\volt"),
    ("W", r"\watt"),
    ("Wb", r"\weber"),
    ("c", r"\clight"),
    ("eV", r"\electronvolt"),
    ("fm", r"\femto\meter"),
    ("kg", r"\kilogram"),
    ("m", r"\metre"),
    ("mol", r"\mole"),
    ("ohm", r"\ohm"),
    ("s", r"\second"),
    ("sr", r"\steradian"),
    ("u", r"\atomicmassunit"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SymbolTable {
    entries: BTreeMap<String, String>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_SYMBOLS.iter().copied())
    }
}

impl SymbolTable {
    /// An empty table. Every lookup fails until entries are inserted.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn from_pairs<S, M>(pairs: impl IntoIterator<Item = (S, M)>) -> Self
    where
        S: Into<String>,
        M: Into<String>,
    {
        let mut table = Self::empty();
        table.extend(pairs);
        table
    }

    /// Default table with `overrides` layered on top (later entries win).
    pub fn with_overrides<S, M>(overrides: impl IntoIterator<Item = (S, M)>) -> Self
    where
        S: Into<String>,
        M: Into<String>,
    {
        let mut table = Self::default();
        table.extend(overrides);
        table
    }

    pub fn extend<S, M>(&mut self, pairs: impl IntoIterator<Item = (S, M)>)
    where
        S: Into<String>,
        M: Into<String>,
    {
        for (symbol, markup) in pairs {
            self.insert(symbol, markup);
        }
    }

    /// Insert or replace a symbol, returning the markup it previously mapped to.
    pub fn insert(
        &mut self,
        symbol: impl Into<String>,
        markup: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(symbol.into(), markup.into())
    }

    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.entries.get(symbol).map(String::as_str)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Markup for `symbol`, or `UnknownUnit` naming it.
    pub fn markup(&self, symbol: &str) -> FormatResult<&str> {
        self.get(symbol).ok_or_else(|| FormatError::UnknownUnit {
            symbol: symbol.to_string(),
        })
    }

    /// Entries in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, m)| (s.as_str(), m.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format a unit expression against this table.
    pub fn format_unit(&self, expr: &str) -> FormatResult<String> {
        crate::unit::format_unit(self, expr)
    }
}
