use std::str::FromStr;

use super::types::{FileSize, SizeUnit};
use crate::{Error, Result};

/// Number and unit tokens pulled out of a size string
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Tokens {
    pub number: String,
    pub unit: String,
}

/// Splits `text` into a number literal and a unit token.
///
/// Digits and dots always extend the number, wherever they appear. Letters
/// extend the unit once the number has started; letters before it are
/// dropped, as is everything else. "Letter" means the Unicode `Alphabetic`
/// property, which also covers letter-numbers such as `Ⅻ`.
pub(crate) fn scan(text: &str) -> Tokens {
    let mut tokens = Tokens::default();

    for c in text.chars() {
        if c.is_ascii_digit() || c == '.' {
            tokens.number.push(c);
        } else if c.is_alphabetic() && !tokens.number.is_empty() {
            tokens.unit.push(c);
        }
    }

    tokens
}

impl FileSize {
    /// Parses a human-readable size such as `"2 GB"`, `"212.5tb"` or `"21"`.
    ///
    /// Units are `b`, `kb`, `mb`, `gb` and `tb` in any case; no unit means
    /// bytes, and no number means zero. The scan is permissive: `"2GB3"` reads
    /// as 23 GB because digits after the unit still extend the number.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedUnit`] for any other unit and
    /// [`Error::MalformedNumber`] when the digits and dots do not form a
    /// decimal number, e.g. `"1.2.3 MB"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use file_size::{Error, FileSize};
    ///
    /// assert_eq!(FileSize::parse("2mb")?.bytes(), 2 * 1_048_576);
    /// assert_eq!(FileSize::parse("21B")?.bytes(), 21);
    /// assert!(matches!(FileSize::parse("5xx"), Err(Error::UnsupportedUnit(_))));
    /// # Ok::<(), file_size::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let tokens = scan(text);
        log::trace!("scanned {:?} into number {:?} and unit {:?}", text, tokens.number, tokens.unit);

        let unit = tokens.unit.parse::<SizeUnit>()?;
        let value = if tokens.number.is_empty() {
            0.0
        } else {
            tokens
                .number
                .parse::<f64>()
                .map_err(|e| Error::malformed_number(tokens.number.as_str(), e))?
        };

        Ok(FileSize::from_unit(value, unit))
    }

    /// Like [`FileSize::parse`], but returns `None` instead of an error.
    ///
    /// ```rust
    /// use file_size::FileSize;
    ///
    /// assert_eq!(FileSize::try_parse("21").map(|s| s.bytes()), Some(21));
    /// assert!(FileSize::try_parse("5xx").is_none());
    /// assert!(FileSize::try_parse("1.2.3").is_none());
    /// ```
    pub fn try_parse(text: &str) -> Option<Self> {
        match Self::parse(text) {
            Ok(size) => Some(size),
            Err(e) => {
                log::debug!("discarding unparsable size {:?}: {}", text, e);
                None
            }
        }
    }
}

impl FromStr for FileSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for FileSize {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for FileSize {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}
