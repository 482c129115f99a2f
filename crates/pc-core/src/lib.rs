//! pc-core: formatting core for physconst.
//!
//! Contains:
//! - symbols (base unit symbol -> siunitx markup table)
//! - unit (unit expression tokenizer + formatter)
//! - decimal (structural decomposition of decimal literals)
//! - uncertainty (value/uncertainty digit alignment)
//! - error (shared error types)

pub mod decimal;
pub mod error;
pub mod symbols;
pub mod uncertainty;
pub mod unit;

// Re-exports: nice ergonomics for downstream crates
pub use decimal::DecimalParts;
pub use error::{FormatError, FormatResult};
pub use symbols::SymbolTable;
pub use uncertainty::format_uncertain_value;
pub use unit::{Power, UnitToken, format_unit, tokenize};
