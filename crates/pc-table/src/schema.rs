//! Constant table schema definitions.

use std::collections::BTreeMap;

use pc_core::SymbolTable;
use serde::{Deserialize, Serialize};

/// Current on-disk table version.
pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstantTable {
    pub version: u32,
    pub name: String,
    /// Extra or replacement unit symbols, layered over the default table.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub units: BTreeMap<String, String>,
    #[serde(default)]
    pub constants: Vec<ConstantRecord>,
}

/// One row of the constant table.
///
/// Numbers are kept as the literal text from the source so that the value is
/// typeset exactly as published. Write them quoted in YAML/JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConstantRecord {
    pub name: String,
    pub value: String,
    /// Unit expression such as `kg m^-2`; empty for dimensionless constants.
    #[serde(default)]
    pub unit: String,
    pub uncertainty: String,
}

impl ConstantRecord {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        unit: impl Into<String>,
        uncertainty: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            unit: unit.into(),
            uncertainty: uncertainty.into(),
        }
    }
}

impl ConstantTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            units: BTreeMap::new(),
            constants: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ConstantRecord> {
        self.constants.iter().find(|c| c.name == name)
    }

    /// `base` with this table's unit entries applied on top.
    pub fn symbol_table(&self, base: SymbolTable) -> SymbolTable {
        let mut table = base;
        table.extend(self.units.iter().map(|(s, m)| (s.as_str(), m.as_str())));
        table
    }
}
