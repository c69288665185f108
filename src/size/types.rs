use std::fmt;
use std::str::FromStr;

use super::constants::{BIT, BITS_PER_BYTE, GIGABYTE, KILOBYTE, MEGABYTE, TERABYTE};
use crate::{Error, Result};

/// A unit on the binary storage ladder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SizeUnit {
    /// One eighth of a byte
    Bit,
    /// A single byte
    #[default]
    Byte,
    /// 1024 bytes
    Kilobyte,
    /// 1024 kilobytes
    Megabyte,
    /// 1024 megabytes
    Gigabyte,
    /// 1024 gigabytes
    Terabyte,
}

impl SizeUnit {
    /// Every unit, smallest first
    pub const ALL: [SizeUnit; 6] = [
        SizeUnit::Bit,
        SizeUnit::Byte,
        SizeUnit::Kilobyte,
        SizeUnit::Megabyte,
        SizeUnit::Gigabyte,
        SizeUnit::Terabyte,
    ];

    /// Number of bytes in one of this unit
    pub fn scale(self) -> f64 {
        match self {
            Self::Bit => BIT,
            Self::Byte => 1.0,
            Self::Kilobyte => KILOBYTE as f64,
            Self::Megabyte => MEGABYTE as f64,
            Self::Gigabyte => GIGABYTE as f64,
            Self::Terabyte => TERABYTE as f64,
        }
    }

    /// Suffix used when rendering a size in this unit
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Bit => "bits",
            Self::Byte => "B",
            Self::Kilobyte => "KB",
            Self::Megabyte => "MB",
            Self::Gigabyte => "GB",
            Self::Terabyte => "TB",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Resolves a unit token as written after a number in a size string.
///
/// Matching is case-insensitive and ignores surrounding whitespace. The empty
/// token means bytes. Bits have no input token.
impl FromStr for SizeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "b" => Ok(Self::Byte),
            "kb" => Ok(Self::Kilobyte),
            "mb" => Ok(Self::Megabyte),
            "gb" => Ok(Self::Gigabyte),
            "tb" => Ok(Self::Terabyte),
            _ => Err(Error::unsupported_unit(s.trim())),
        }
    }
}

/// A quantity of digital storage.
///
/// The byte count is the only stored state; every other unit is a view derived
/// from it. Values are immutable: the `with_*` methods return a new size.
///
/// Conversions from a fractional unit round half away from zero and saturate at
/// the bounds of `i64`. `NaN` converts to zero.
///
/// # Examples
///
/// ```rust
/// use file_size::FileSize;
///
/// let size = FileSize::from_gigabytes(1.5);
/// assert_eq!(size.bytes(), 1_610_612_736);
/// assert_eq!(size.megabytes(), 1536.0);
/// assert_eq!(size.to_string(), "1.5 GB");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileSize {
    bytes: i64,
}

impl FileSize {
    /// The empty size
    pub const ZERO: FileSize = FileSize::new(0);

    /// Creates a size of exactly `bytes` bytes
    pub const fn new(bytes: i64) -> Self {
        Self { bytes }
    }

    /// Creates a size from a bit count
    pub fn from_bits(bits: i64) -> Self {
        Self::ZERO.with_bits(bits)
    }

    pub fn from_kilobytes(kilobytes: f64) -> Self {
        Self::ZERO.with_kilobytes(kilobytes)
    }

    pub fn from_megabytes(megabytes: f64) -> Self {
        Self::ZERO.with_megabytes(megabytes)
    }

    pub fn from_gigabytes(gigabytes: f64) -> Self {
        Self::ZERO.with_gigabytes(gigabytes)
    }

    pub fn from_terabytes(terabytes: f64) -> Self {
        Self::ZERO.with_terabytes(terabytes)
    }

    /// Creates a size of `value` units
    ///
    /// ```rust
    /// use file_size::{FileSize, SizeUnit};
    ///
    /// assert_eq!(FileSize::from_unit(2.0, SizeUnit::Megabyte).bytes(), 2 * 1_048_576);
    /// assert_eq!(FileSize::from_unit(12.0, SizeUnit::Bit).bytes(), 2);
    /// ```
    pub fn from_unit(value: f64, unit: SizeUnit) -> Self {
        Self::new(scale_to_bytes(value, unit.scale()))
    }

    /// Size in bytes
    pub const fn bytes(&self) -> i64 {
        self.bytes
    }

    /// Size in bits, saturating at the bounds of `i64`
    pub const fn bits(&self) -> i64 {
        self.bytes.saturating_mul(BITS_PER_BYTE)
    }

    pub fn kilobytes(&self) -> f64 {
        self.as_unit(SizeUnit::Kilobyte)
    }

    pub fn megabytes(&self) -> f64 {
        self.as_unit(SizeUnit::Megabyte)
    }

    pub fn gigabytes(&self) -> f64 {
        self.as_unit(SizeUnit::Gigabyte)
    }

    pub fn terabytes(&self) -> f64 {
        self.as_unit(SizeUnit::Terabyte)
    }

    /// Size expressed in `unit`
    pub fn as_unit(&self, unit: SizeUnit) -> f64 {
        self.bytes as f64 / unit.scale()
    }

    /// Returns a size of `bits` bits, rounded to the nearest whole byte
    pub fn with_bits(self, bits: i64) -> Self {
        let whole = bits / BITS_PER_BYTE;
        let rest = bits % BITS_PER_BYTE;
        // A remainder of half a byte or more rounds away from zero
        let bytes = if rest.abs() * 2 >= BITS_PER_BYTE { whole + rest.signum() } else { whole };
        Self::new(bytes)
    }

    pub fn with_bytes(self, bytes: i64) -> Self {
        Self::new(bytes)
    }

    pub fn with_kilobytes(self, kilobytes: f64) -> Self {
        Self::from_unit(kilobytes, SizeUnit::Kilobyte)
    }

    pub fn with_megabytes(self, megabytes: f64) -> Self {
        Self::from_unit(megabytes, SizeUnit::Megabyte)
    }

    pub fn with_gigabytes(self, gigabytes: f64) -> Self {
        Self::from_unit(gigabytes, SizeUnit::Gigabyte)
    }

    pub fn with_terabytes(self, terabytes: f64) -> Self {
        Self::from_unit(terabytes, SizeUnit::Terabyte)
    }

    /// Whether this size holds no bytes
    pub const fn is_zero(&self) -> bool {
        self.bytes == 0
    }

    /// Whether this size is below zero, as after subtracting a larger size
    pub const fn is_negative(&self) -> bool {
        self.bytes < 0
    }

    /// Magnitude of this size, saturating for `i64::MIN`
    pub const fn abs(&self) -> Self {
        Self::new(self.bytes.saturating_abs())
    }

    /// Adds two sizes, returning `None` on overflow
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.bytes.checked_add(rhs.bytes) {
            Some(bytes) => Some(Self::new(bytes)),
            None => None,
        }
    }

    /// Subtracts two sizes, returning `None` on overflow
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.bytes.checked_sub(rhs.bytes) {
            Some(bytes) => Some(Self::new(bytes)),
            None => None,
        }
    }
}

/// `round(value * scale)`, half away from zero; `as` saturates and maps NaN to 0
fn scale_to_bytes(value: f64, scale: f64) -> i64 {
    (value * scale).round() as i64
}
