//! Table validation logic.
//!
//! Structural checks only: whether a record's numbers and units actually format
//! is decided when the declarations are generated.

use std::collections::{BTreeMap, HashSet};

use crate::schema::{ConstantRecord, ConstantTable, LATEST_VERSION};

/// Characters that would break out of a TeX control-sequence name.
const RESERVED_NAME_CHARS: &[char] = &['{', '}', '\\', '%', '#', '\n', '\r'];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duplicate constant name: {name}")]
    DuplicateName { name: String },

    #[error("Empty {field} for constant '{name}'")]
    EmptyField { name: String, field: &'static str },

    #[error("Invalid constant name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid unit symbol '{symbol}': {reason}")]
    InvalidSymbol { symbol: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_table(table: &ConstantTable) -> Result<(), ValidationError> {
    if table.version == 0 || table.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: table.version,
        });
    }

    validate_symbols(&table.units)?;

    let mut names = HashSet::new();
    for record in &table.constants {
        validate_record(record)?;
        if !names.insert(record.name.as_str()) {
            return Err(ValidationError::DuplicateName {
                name: record.name.clone(),
            });
        }
    }

    Ok(())
}

fn validate_record(record: &ConstantRecord) -> Result<(), ValidationError> {
    if record.name.trim().is_empty() {
        return Err(ValidationError::InvalidName {
            name: record.name.clone(),
            reason: "name must not be blank".to_string(),
        });
    }
    if let Some(c) = record.name.chars().find(|c| RESERVED_NAME_CHARS.contains(c)) {
        return Err(ValidationError::InvalidName {
            name: record.name.clone(),
            reason: format!("contains reserved character {c:?}"),
        });
    }

    for (field, text) in [("value", &record.value), ("uncertainty", &record.uncertainty)] {
        if text.is_empty() {
            return Err(ValidationError::EmptyField {
                name: record.name.clone(),
                field,
            });
        }
    }

    Ok(())
}

/// Unit overrides must be letter-only symbols; anything else is never matched
/// by the unit tokenizer.
pub fn validate_symbols(units: &BTreeMap<String, String>) -> Result<(), ValidationError> {
    for (symbol, markup) in units {
        if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidSymbol {
                symbol: symbol.clone(),
                reason: "symbols must be ASCII letters only".to_string(),
            });
        }
        if markup.trim().is_empty() {
            return Err(ValidationError::InvalidSymbol {
                symbol: symbol.clone(),
                reason: "markup must not be empty".to_string(),
            });
        }
    }
    Ok(())
}
