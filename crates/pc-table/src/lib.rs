//! pc-table: constant table file format and validation.

pub mod schema;
pub mod validate;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub use schema::*;
pub use validate::{ValidationError, validate_symbols, validate_table};

pub type TableResult<T> = Result<T, TableError>;

#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported table format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> TableResult<ConstantTable> {
    let content = std::fs::read_to_string(path)?;
    let table: ConstantTable = serde_yaml::from_str(&content)?;
    validate_table(&table)?;
    Ok(table)
}

pub fn save_yaml(path: &Path, table: &ConstantTable) -> TableResult<()> {
    validate_table(table)?;
    let content = serde_yaml::to_string(table)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> TableResult<ConstantTable> {
    let content = std::fs::read_to_string(path)?;
    let table: ConstantTable = serde_json::from_str(&content)?;
    validate_table(&table)?;
    Ok(table)
}

pub fn save_json(path: &Path, table: &ConstantTable) -> TableResult<()> {
    validate_table(table)?;
    let content = serde_json::to_string_pretty(table)?;
    std::fs::write(path, content)?;
    Ok(())
}

enum Format {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> TableResult<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(TableError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Load a table, picking the format from the file extension.
pub fn load_table(path: &Path) -> TableResult<ConstantTable> {
    match format_of(path)? {
        Format::Yaml => load_yaml(path),
        Format::Json => load_json(path),
    }
}

pub fn save_table(path: &Path, table: &ConstantTable) -> TableResult<()> {
    match format_of(path)? {
        Format::Yaml => save_yaml(path, table),
        Format::Json => save_json(path, table),
    }
}

/// Load a flat `symbol: markup` YAML map of unit overrides.
pub fn load_symbol_overrides(path: &Path) -> TableResult<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path)?;
    let units: BTreeMap<String, String> = serde_yaml::from_str(&content)?;
    validate_symbols(&units)?;
    Ok(units)
}
