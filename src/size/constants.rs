/// Number of bits in one byte
pub const BITS_PER_BYTE: i64 = 8;

/// Bytes per bit on the scale ladder
pub const BIT: f64 = 0.125;

/// Binary unit ladder, in bytes
pub const KILOBYTE: i64 = 1024;
pub const MEGABYTE: i64 = KILOBYTE * 1024;
pub const GIGABYTE: i64 = MEGABYTE * 1024;
pub const TERABYTE: i64 = GIGABYTE * 1024;

/// Decimal places kept when rendering a fractional unit
pub const DISPLAY_PRECISION: i32 = 2;
