use std::fmt;

use super::constants::DISPLAY_PRECISION;
use super::types::{FileSize, SizeUnit};

/// Rounds half away from zero to the display precision
fn round_for_display(value: f64) -> f64 {
    let factor = 10f64.powi(DISPLAY_PRECISION);
    (value * factor).round() / factor
}

impl FileSize {
    /// Largest unit that fits at least once into this size, ignoring sign.
    /// A zero size is shown in kilobytes.
    pub fn display_unit(&self) -> SizeUnit {
        if self.is_zero() {
            return SizeUnit::Kilobyte;
        }

        let magnitude = self.bytes().unsigned_abs() as f64;

        [SizeUnit::Terabyte, SizeUnit::Gigabyte, SizeUnit::Megabyte, SizeUnit::Kilobyte, SizeUnit::Byte]
            .into_iter()
            .find(|unit| magnitude >= unit.scale())
            .unwrap_or(SizeUnit::Bit)
    }

    /// Renders this size in `unit` rather than the automatically chosen one.
    ///
    /// Bits and bytes are whole numbers; larger units keep up to two decimals
    /// without trailing zeros.
    ///
    /// ```rust
    /// use file_size::{FileSize, SizeUnit};
    ///
    /// let size = FileSize::new(1536);
    /// assert_eq!(size.to_unit_string(SizeUnit::Kilobyte), "1.5 KB");
    /// assert_eq!(size.to_unit_string(SizeUnit::Byte), "1536 B");
    /// assert_eq!(size.to_unit_string(SizeUnit::Bit), "12288 bits");
    /// ```
    pub fn to_unit_string(&self, unit: SizeUnit) -> String {
        match unit {
            SizeUnit::Bit => format!("{} {}", self.bits(), unit),
            SizeUnit::Byte => format!("{} {}", self.bytes(), unit),
            _ => format!("{} {}", round_for_display(self.as_unit(unit)), unit),
        }
    }
}

/// Human-readable rendering in the largest fitting unit.
///
/// Zero renders as `0 KB`. The sign is kept, and the decimal separator is
/// always `.` with no digit grouping.
///
/// ```rust
/// use file_size::FileSize;
///
/// assert_eq!(FileSize::new(0).to_string(), "0 KB");
/// assert_eq!(FileSize::new(1023).to_string(), "1023 B");
/// assert_eq!(FileSize::new(-2048).to_string(), "-2 KB");
/// ```
impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_unit_string(self.display_unit()))
    }
}
