use thiserror::Error;

pub type FormatResult<T> = Result<T, FormatError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unknown unit symbol: {symbol}")]
    UnknownUnit { symbol: String },

    #[error("Malformed number: '{input}'")]
    MalformedNumber { input: String },
}

impl FormatError {
    pub(crate) fn malformed(input: &str) -> Self {
        Self::MalformedNumber {
            input: input.to_string(),
        }
    }
}
