//! Error types for the declaration emitter.

use std::path::PathBuf;

use pc_core::FormatError;
use pc_table::TableError;

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Constant '{name}': {source}")]
    Record {
        name: String,
        #[source]
        source: FormatError,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pc-emit operations.
pub type EmitResult<T> = Result<T, EmitError>;
