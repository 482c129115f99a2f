//! Table -> LaTeX declarations file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use pc_core::{FormatError, SymbolTable};
use pc_table::{ConstantRecord, ConstantTable};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::declare::Declaration;
use crate::error::{EmitError, EmitResult};
use crate::template::{POSTAMBLE, PREAMBLE};

/// What to do with a constant whose unit or numbers do not format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Fail the whole run on the first bad record (in table order)
    #[default]
    Abort,
    /// Leave the record out and keep going
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub name: String,
    pub error: FormatError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub declared: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// Request to turn a table file into a declarations file.
#[derive(Debug, Clone)]
pub struct GenerateRequest<'a> {
    pub table_path: &'a Path,
    /// Optional YAML map of extra unit symbols; wins over the table's own `units`
    pub units_path: Option<&'a Path>,
    pub output_path: &'a Path,
    pub policy: ErrorPolicy,
}

/// Default symbols, then the table's `units`, then the overrides file.
pub fn resolve_symbols(table: &ConstantTable, units_path: Option<&Path>) -> EmitResult<SymbolTable> {
    let mut symbols = table.symbol_table(SymbolTable::default());
    if let Some(path) = units_path {
        let overrides = pc_table::load_symbol_overrides(path)?;
        debug!(path = %path.display(), count = overrides.len(), "loaded unit overrides");
        symbols.extend(overrides);
    }
    Ok(symbols)
}

/// Format every record, preserving table order.
pub fn declare_all(
    records: &[ConstantRecord],
    symbols: &SymbolTable,
    policy: ErrorPolicy,
) -> EmitResult<(Vec<Declaration>, Vec<SkippedRecord>)> {
    let results: Vec<_> = records
        .par_iter()
        .map(|record| Declaration::from_record(record, symbols))
        .collect();

    let mut declarations = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for (record, result) in records.iter().zip(results) {
        match result {
            Ok(decl) => {
                debug!(name = %decl.name, uncertain_value = %decl.uncertain_value, "declared constant");
                declarations.push(decl);
            }
            Err(error) => match policy {
                ErrorPolicy::Abort => {
                    return Err(EmitError::Record {
                        name: record.name.clone(),
                        source: error,
                    });
                }
                ErrorPolicy::Skip => {
                    warn!(name = %record.name, %error, "skipping constant");
                    skipped.push(SkippedRecord {
                        name: record.name.clone(),
                        error,
                    });
                }
            },
        }
    }

    Ok((declarations, skipped))
}

/// Preamble, one line per declaration, postamble.
pub fn render_document(declarations: &[Declaration]) -> String {
    let mut text = String::from(PREAMBLE);
    for decl in declarations {
        text.push_str(&decl.to_string());
        text.push('\n');
    }
    text.push_str(POSTAMBLE);
    text
}

pub fn write_document<W: Write>(out: &mut W, declarations: &[Declaration]) -> std::io::Result<()> {
    out.write_all(render_document(declarations).as_bytes())?;
    out.flush()
}

/// Render a whole table to a string.
pub fn render_table(
    table: &ConstantTable,
    symbols: &SymbolTable,
    policy: ErrorPolicy,
) -> EmitResult<(String, GenerateReport)> {
    let (declarations, skipped) = declare_all(&table.constants, symbols, policy)?;
    let text = render_document(&declarations);
    Ok((
        text,
        GenerateReport {
            declared: declarations.len(),
            skipped,
        },
    ))
}

/// Load, format and write in one go.
///
/// Nothing is written when the run aborts on a bad record.
pub fn generate(request: &GenerateRequest<'_>) -> EmitResult<GenerateReport> {
    let table = pc_table::load_table(request.table_path)?;
    info!(
        table = %table.name,
        constants = table.constants.len(),
        "loaded constant table"
    );

    let symbols = resolve_symbols(&table, request.units_path)?;
    let (declarations, skipped) = declare_all(&table.constants, &symbols, request.policy)?;

    let write_err = |source: std::io::Error| EmitError::OutputWrite {
        path: request.output_path.to_path_buf(),
        source,
    };
    let file = File::create(request.output_path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    write_document(&mut out, &declarations).map_err(write_err)?;

    let report = GenerateReport {
        declared: declarations.len(),
        skipped,
    };
    info!(
        path = %request.output_path.display(),
        declared = report.declared,
        skipped = report.skipped.len(),
        "wrote declarations"
    );
    Ok(report)
}
