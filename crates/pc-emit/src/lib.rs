//! Declaration emitter for physconst.
//!
//! Turns a constant table into the LaTeX support file: a fixed preamble, one
//! `\physicalconstants@declare` line per constant and a fixed postamble. Unit
//! and value formatting come from `pc-core`; records are formatted in parallel
//! and written in table order.

pub mod declare;
pub mod error;
pub mod generate;
pub mod template;

// Re-export key types for convenience
pub use declare::Declaration;
pub use error::{EmitError, EmitResult};
pub use generate::{
    ErrorPolicy, GenerateReport, GenerateRequest, SkippedRecord, declare_all, generate,
    render_document, render_table, resolve_symbols, write_document,
};
pub use template::{DECLARE_MACRO, POSTAMBLE, PREAMBLE};
