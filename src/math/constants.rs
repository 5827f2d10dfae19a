//! Named constants shared by the numerical routines.
//!
//! Only `GOLDEN_RATIO` is consumed internally (by the golden-section search);
//! `PI` and `EULER_NUMBER` are exported for callers.

#![allow(clippy::excessive_precision)]

pub const GOLDEN_RATIO: f64 = 1.6180339887498948;

pub const PI: f64 = 3.1415926535897932;

pub const EULER_NUMBER: f64 = 2.7182818284590452;

// Decimal 編碼：mantissa 與 scale，與上方 f64 字面值逐位相同
pub(crate) const GOLDEN_RATIO_MANTISSA: i64 = 16180339887498948;
pub(crate) const PI_MANTISSA: i64 = 31415926535897932;
pub(crate) const EULER_NUMBER_MANTISSA: i64 = 27182818284590452;
pub(crate) const CONSTANT_SCALE: u32 = 16;
