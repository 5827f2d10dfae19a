use std::fmt::Debug;
use std::ops::{
    Add,
    AddAssign,
    Div,
    Mul,
    Neg,
    Sub
};

use num_traits::{
    One,
    Zero
};
use rust_decimal::Decimal;

use crate::math::constants::{
    CONSTANT_SCALE,
    EULER_NUMBER,
    EULER_NUMBER_MANTISSA,
    GOLDEN_RATIO,
    GOLDEN_RATIO_MANTISSA,
    PI,
    PI_MANTISSA
};

// ─────────────────────────────────────────────────────────────────────────────
// Scalar
// ─────────────────────────────────────────────────────────────────────────────

/// Real-number type the integral, derivative and optimization routines are
/// generic over: an ordered field with negation.
///
/// Arithmetic is carried out in the implementing type, so `f32` callers get
/// single-precision results and `Decimal` callers get decimal rounding.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + Zero
    + One
{
    fn golden_ratio() -> Self;

    fn pi() -> Self;

    fn euler_number() -> Self;

    fn two() -> Self {
        Self::one() + Self::one()
    }

    fn four() -> Self {
        Self::two() + Self::two()
    }

    fn six() -> Self {
        Self::four() + Self::two()
    }
}

impl Scalar for f64 {
    fn golden_ratio() -> Self {
        GOLDEN_RATIO
    }

    fn pi() -> Self {
        PI
    }

    fn euler_number() -> Self {
        EULER_NUMBER
    }
}

impl Scalar for f32 {
    fn golden_ratio() -> Self {
        GOLDEN_RATIO as f32
    }

    fn pi() -> Self {
        PI as f32
    }

    fn euler_number() -> Self {
        EULER_NUMBER as f32
    }
}

impl Scalar for Decimal {
    fn golden_ratio() -> Self {
        Decimal::new(GOLDEN_RATIO_MANTISSA, CONSTANT_SCALE)
    }

    fn pi() -> Self {
        Decimal::new(PI_MANTISSA, CONSTANT_SCALE)
    }

    fn euler_number() -> Self {
        Decimal::new(EULER_NUMBER_MANTISSA, CONSTANT_SCALE)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// absolute
// ─────────────────────────────────────────────────────────────────────────────

/// Magnitude of `value`: `value` itself when non-negative, `-value` otherwise.
///
/// Only needs ordering, zero and negation, so signed integers work too.
/// Negating the most negative value of a two's-complement integer overflows.
pub fn absolute<T>(value: T) -> T
    where T: Copy + PartialOrd + Zero + Neg<Output = T> {
    if value < T::zero() {
        -value
    } else {
        value
    }
}
