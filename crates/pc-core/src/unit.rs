//! Unit expression tokenizer and siunitx formatter.
//!
//! A unit expression is a sequence of entries such as `kg m^-2 s^3`. Each entry
//! is an ASCII letter symbol, optionally followed by `^`, an optional `-` and a
//! digit run. Entries must stand alone as words; anything between them (spaces,
//! `/`, parentheses, or words that do not fit the entry shape) is skipped.
//!
//! Rendering emits, per entry and in input order:
//! - `\per` when the exponent was negative
//! - `\square`, `\cube` or `\raiseto{N}` for exponents other than 1, with `N`
//!   the digits exactly as written
//! - the symbol's markup from the [`SymbolTable`]

use std::fmt;

use crate::error::FormatResult;
use crate::symbols::SymbolTable;

/// Power marker implied by an entry's exponent digits.
///
/// Only the exact texts `1`, `2` and `3` are special; anything else (`01`,
/// `4`, a run of any length) is raised to the digits as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Power<'a> {
    /// Exponent absent or exactly `1`
    Plain,
    Square,
    Cube,
    Raised(&'a str),
}

impl<'a> Power<'a> {
    pub fn from_exponent(exponent: Option<&'a str>) -> Self {
        match exponent {
            None | Some("1") => Self::Plain,
            Some("2") => Self::Square,
            Some("3") => Self::Cube,
            Some(digits) => Self::Raised(digits),
        }
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            Self::Plain => {}
            Self::Square => out.push_str(r"\square"),
            Self::Cube => out.push_str(r"\cube"),
            Self::Raised(digits) => {
                out.push_str(r"\raiseto{");
                out.push_str(digits);
                out.push('}');
            }
        }
    }
}

/// One `symbol[^[-]digits]` entry of a unit expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitToken {
    pub base: String,
    pub reciprocal: bool,
    /// Exponent digits as written, without the sign
    pub exponent: Option<String>,
}

impl UnitToken {
    pub fn new(base: impl Into<String>, reciprocal: bool, exponent: Option<&str>) -> Self {
        Self {
            base: base.into(),
            reciprocal,
            exponent: exponent.map(str::to_string),
        }
    }

    pub fn power(&self) -> Power<'_> {
        Power::from_exponent(self.exponent.as_deref())
    }

    /// Append this token's markup to `out`.
    ///
    /// The symbol is resolved before anything is written, so `out` is left
    /// untouched when the symbol is unknown.
    pub fn render_into(&self, table: &SymbolTable, out: &mut String) -> FormatResult<()> {
        let markup = table.markup(&self.base)?;
        if self.reciprocal {
            out.push_str(r"\per");
        }
        self.power().write_markup(out);
        out.push_str(markup);
        Ok(())
    }

    pub fn render(&self, table: &SymbolTable) -> FormatResult<String> {
        let mut out = String::new();
        self.render_into(table, &mut out)?;
        Ok(out)
    }
}

impl fmt::Display for UnitToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        match (self.reciprocal, self.exponent.as_deref()) {
            (false, None) => Ok(()),
            (false, Some(digits)) => write!(f, "^{digits}"),
            // A sign is only ever read together with digits.
            (true, digits) => write!(f, "^-{}", digits.unwrap_or("1")),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn ends_word(chars: &[char], at: usize) -> bool {
    chars.get(at).is_none_or(|&c| !is_word_char(c))
}

fn scan_while(chars: &[char], from: usize, pred: impl Fn(char) -> bool) -> usize {
    chars[from..]
        .iter()
        .position(|&c| !pred(c))
        .map_or(chars.len(), |offset| from + offset)
}

/// `^`, optional `-`, digits starting at `at`.
/// Returns (reciprocal, digit range start, end of digits).
fn scan_exponent(chars: &[char], at: usize) -> Option<(bool, usize, usize)> {
    if chars.get(at) != Some(&'^') {
        return None;
    }
    let mut digits_start = at + 1;
    let reciprocal = chars.get(digits_start) == Some(&'-');
    if reciprocal {
        digits_start += 1;
    }
    let digits_end = scan_while(chars, digits_start, |c| c.is_ascii_digit());
    (digits_end > digits_start).then_some((reciprocal, digits_start, digits_end))
}

/// Split a unit expression into its entries, preserving input order.
pub fn tokenize(expr: &str) -> Vec<UnitToken> {
    let chars: Vec<char> = expr.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let starts_word = i == 0 || !is_word_char(chars[i - 1]);
        if !(starts_word && chars[i].is_ascii_alphabetic()) {
            i += 1;
            continue;
        }

        let base_end = scan_while(&chars, i, |c| c.is_ascii_alphabetic());
        let base: String = chars[i..base_end].iter().collect();

        if let Some((reciprocal, digits_start, end)) = scan_exponent(&chars, base_end) {
            if ends_word(&chars, end) {
                let digits: String = chars[digits_start..end].iter().collect();
                tokens.push(UnitToken {
                    base,
                    reciprocal,
                    exponent: Some(digits),
                });
                i = end;
                continue;
            }
        }

        if ends_word(&chars, base_end) {
            tokens.push(UnitToken::new(base, false, None));
            i = base_end;
        } else {
            // Letters glued to digits or underscores ("m2", "kg_x") are not an entry.
            i = scan_while(&chars, base_end, is_word_char);
        }
    }

    tokens
}

/// Render a unit expression as siunitx markup.
///
/// Fails on the first symbol missing from `table`.
pub fn format_unit(table: &SymbolTable, expr: &str) -> FormatResult<String> {
    let mut out = String::new();
    for token in tokenize(expr) {
        token.render_into(table, &mut out)?;
    }
    Ok(out)
}
