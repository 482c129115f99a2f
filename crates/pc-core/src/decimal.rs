//! Structural decomposition of decimal literals.
//!
//! Grammar (whole input, greedy):
//!
//! ```text
//! [+-]? digit+ '.'? digit* 'e'? ([+-]? digit*)
//! ```
//!
//! Every part is kept as the exact slice of the input it came from, so a parsed
//! literal always displays back to the text it was parsed from.

use std::fmt;

use crate::error::{FormatError, FormatResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecimalParts<'a> {
    pub sign: &'a str,
    pub integer: &'a str,
    pub point: bool,
    pub fraction: &'a str,
    pub exponent_marker: bool,
    /// Signed exponent digits, e.g. `-34` or `+23`
    pub exponent: &'a str,
    #[cfg_attr(feature = "serde", serde(skip))]
    exponent_value: i64,
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        match self.peek() {
            Some(b) if pred(b) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn eat_sign(&mut self) -> &'a str {
        let start = self.pos;
        self.eat(|b| b == b'+' || b == b'-');
        &self.input[start..self.pos]
    }

    fn eat_digits(&mut self) -> &'a str {
        let start = self.pos;
        while self.eat(|b| b.is_ascii_digit()) {}
        &self.input[start..self.pos]
    }

    fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }
}

impl<'a> DecimalParts<'a> {
    /// Decompose `input`, which must match the grammar in full.
    pub fn parse(input: &'a str) -> FormatResult<Self> {
        let mut cursor = Cursor { input, pos: 0 };

        let sign = cursor.eat_sign();
        let integer = cursor.eat_digits();
        if integer.is_empty() {
            return Err(FormatError::malformed(input));
        }
        let point = cursor.eat(|b| b == b'.');
        let fraction = cursor.eat_digits();
        let exponent_marker = cursor.eat(|b| b == b'e');
        let exponent_start = cursor.pos;
        let exponent_sign = cursor.eat_sign();
        let exponent_digits = cursor.eat_digits();
        let exponent = &input[exponent_start..cursor.pos];

        if !cursor.at_end() {
            return Err(FormatError::malformed(input));
        }

        let exponent_value = match (exponent_sign, exponent_digits) {
            ("", "") => 0,
            // A sign with nothing after it does not spell a number.
            (_, "") => return Err(FormatError::malformed(input)),
            _ => exponent
                .parse::<i64>()
                .map_err(|_| FormatError::malformed(input))?,
        };

        Ok(Self {
            sign,
            integer,
            point,
            fraction,
            exponent_marker,
            exponent,
            exponent_value,
        })
    }

    /// Power of ten given by the exponent suffix; 0 without one.
    pub fn exponent_value(&self) -> i64 {
        self.exponent_value
    }

    /// Power of ten of the rightmost written digit.
    pub fn least_significant_exponent(&self) -> i128 {
        i128::from(self.exponent_value) - self.fraction.len() as i128
    }

    /// Integer and fractional digit runs, concatenated.
    pub fn digits(&self) -> String {
        let mut digits = String::with_capacity(self.integer.len() + self.fraction.len());
        digits.push_str(self.integer);
        digits.push_str(self.fraction);
        digits
    }

    pub fn is_zero(&self) -> bool {
        self.integer
            .bytes()
            .chain(self.fraction.bytes())
            .all(|b| b == b'0')
    }

    /// Mantissa text: sign, integer part, point and fraction as written.
    pub fn mantissa(&self) -> String {
        let mut out = String::new();
        out.push_str(self.sign);
        out.push_str(self.integer);
        if self.point {
            out.push('.');
        }
        out.push_str(self.fraction);
        out
    }

    /// Exponent suffix as written, marker included.
    pub fn suffix(&self) -> String {
        let mut out = String::new();
        if self.exponent_marker {
            out.push('e');
        }
        out.push_str(self.exponent);
        out
    }
}

impl fmt::Display for DecimalParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.mantissa(), self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integer() {
        let p = DecimalParts::parse("299792458").unwrap();
        assert_eq!(p.sign, "");
        assert_eq!(p.integer, "299792458");
        assert!(!p.point);
        assert_eq!(p.fraction, "");
        assert!(!p.exponent_marker);
        assert_eq!(p.exponent_value(), 0);
        assert_eq!(p.least_significant_exponent(), 0);
    }

    #[test]
    fn parses_scientific_literal() {
        let p = DecimalParts::parse("-6.62607015e-34").unwrap();
        assert_eq!(p.sign, "-");
        assert_eq!(p.integer, "6");
        assert!(p.point);
        assert_eq!(p.fraction, "62607015");
        assert!(p.exponent_marker);
        assert_eq!(p.exponent, "-34");
        assert_eq!(p.exponent_value(), -34);
        assert_eq!(p.least_significant_exponent(), -42);
    }

    #[test]
    fn explicit_positive_exponent() {
        let p = DecimalParts::parse("6.02214076e+23").unwrap();
        assert_eq!(p.exponent, "+23");
        assert_eq!(p.exponent_value(), 23);
    }

    #[test]
    fn trailing_point_and_bare_marker() {
        let p = DecimalParts::parse("12.").unwrap();
        assert!(p.point);
        assert_eq!(p.fraction, "");

        let p = DecimalParts::parse("3e").unwrap();
        assert!(p.exponent_marker);
        assert_eq!(p.exponent_value(), 0);
        assert_eq!(p.to_string(), "3e");
    }

    #[test]
    fn exponent_without_marker_still_counts() {
        let p = DecimalParts::parse("1.5-3").unwrap();
        assert!(!p.exponent_marker);
        assert_eq!(p.exponent_value(), -3);
    }

    #[test]
    fn rejects_malformed() {
        for input in ["", ".5", "abc", "1.2.3", "1E5", "1e5x", " 1", "1e+", "--1", "1e99999999999999999999"] {
            assert_eq!(
                DecimalParts::parse(input).unwrap_err(),
                FormatError::MalformedNumber {
                    input: input.to_string()
                },
                "input {input:?}"
            );
        }
    }

    #[test]
    fn zero_detection() {
        assert!(DecimalParts::parse("0").unwrap().is_zero());
        assert!(DecimalParts::parse("0.000e5").unwrap().is_zero());
        assert!(!DecimalParts::parse("0.0001").unwrap().is_zero());
    }

    #[test]
    fn digits_join_integer_and_fraction() {
        assert_eq!(DecimalParts::parse("0.006").unwrap().digits(), "0006");
        assert_eq!(DecimalParts::parse("12e4").unwrap().digits(), "12");
    }

    #[test]
    fn displays_input_verbatim() {
        for input in ["1", "+1.50", "-0.0e+00", "9.1093837015e-31", "7.", "1.5-3"] {
            assert_eq!(DecimalParts::parse(input).unwrap().to_string(), input);
        }
    }
}
