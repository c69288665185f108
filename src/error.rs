use std::num::ParseFloatError;

/// Error type for file-size operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported unit: {0:?}")]
    UnsupportedUnit(String),

    #[error("Malformed number {literal:?}: {source}")]
    MalformedNumber {
        literal: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

impl Error {
    pub(crate) fn unsupported_unit<S: Into<String>>(unit: S) -> Self {
        Error::UnsupportedUnit(unit.into())
    }

    pub(crate) fn malformed_number<S: Into<String>>(literal: S, source: ParseFloatError) -> Self {
        Error::MalformedNumber {
            literal: literal.into(),
            source,
        }
    }

    pub(crate) fn out_of_range<S: Into<String>>(msg: S) -> Self {
        Error::OutOfRange(msg.into())
    }
}

/// Result type for file-size operations
pub type Result<T> = std::result::Result<T, Error>;
