//! One `\physicalconstants@declare` line per constant.

use std::fmt;

use pc_core::{FormatResult, SymbolTable, format_uncertain_value};
use pc_table::ConstantRecord;

use crate::template::DECLARE_MACRO;

/// A fully formatted constant, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub uncertainty: String,
    pub uncertain_value: String,
}

impl Declaration {
    pub fn from_record(record: &ConstantRecord, symbols: &SymbolTable) -> FormatResult<Self> {
        let unit = symbols.format_unit(&record.unit)?;
        let uncertain_value = format_uncertain_value(&record.value, &record.uncertainty)?;
        Ok(Self {
            name: record.name.clone(),
            value: record.value.clone(),
            unit,
            uncertainty: record.uncertainty.clone(),
            uncertain_value,
        })
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{DECLARE_MACRO}{{{}}}{{{}}}{{{}}}{{{}}}{{{}}}",
            self.name, self.value, self.unit, self.uncertainty, self.uncertain_value
        )
    }
}
