//! # Size Module
//!
//! The [`FileSize`] value type together with its unit ladder, parser and
//! formatter.
//!
//! Arithmetic saturates at the bounds of `i64`; use [`FileSize::checked_add`]
//! or [`FileSize::checked_sub`] to detect overflow instead.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::{Error, Result};

pub mod constants;
mod format;
mod parse;
#[cfg(feature = "serde")]
mod serde_impl;
mod types;

pub use types::{FileSize, SizeUnit};

impl Add for FileSize {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.bytes().saturating_add(rhs.bytes()))
    }
}

impl Sub for FileSize {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.bytes().saturating_sub(rhs.bytes()))
    }
}

impl AddAssign for FileSize {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for FileSize {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for FileSize {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(self.bytes().saturating_neg())
    }
}

impl Sum for FileSize {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, size| total + size)
    }
}

impl<'a> Sum<&'a FileSize> for FileSize {
    fn sum<I: Iterator<Item = &'a FileSize>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// Lossless integer conversions
macro_rules! impl_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for FileSize {
                fn from(bytes: $int) -> Self {
                    Self::new(i64::from(bytes))
                }
            }
        )*
    };
}

impl_from_int!(i8, u8, i16, u16, i32, u32, i64);

// Unsigned counts that may not fit
macro_rules! impl_try_from_unsigned {
    ($($int:ty),*) => {
        $(
            impl TryFrom<$int> for FileSize {
                type Error = Error;

                fn try_from(bytes: $int) -> Result<Self> {
                    i64::try_from(bytes)
                        .map(Self::new)
                        .map_err(|_| Error::out_of_range(format!("{} bytes exceeds {}", bytes, i64::MAX)))
                }
            }
        )*
    };
}

impl_try_from_unsigned!(u64, usize);

impl From<FileSize> for i64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}
