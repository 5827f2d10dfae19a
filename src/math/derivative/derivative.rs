//! Closed-form finite-difference approximations at a point `x` with step `h`.
//!
//! `h = 0` is not guarded against: the division follows the scalar type's
//! own semantics (infinity or NaN for floats, a panic for `Decimal`).

use crate::math::scalar::Scalar;

/// Forward difference `(f(x+h) − f(x)) / h`, first order in `h`.
pub fn first_der_first_prec<T, F>(x: T, h: T, f: &F) -> T
    where T: Scalar, F: Fn(T) -> T + ?Sized {
    (f(x + h) - f(x)) / h
}

/// Symmetric difference `(f(x+h) − f(x−h)) / 2h`, second order in `h`.
pub fn first_der_symm_second_prec<T, F>(x: T, h: T, f: &F) -> T
    where T: Scalar, F: Fn(T) -> T + ?Sized {
    (f(x + h) - f(x - h)) / (T::two() * h)
}

/// Central second derivative `(f(x+h) − 2f(x) + f(x−h)) / h²`.
pub fn second_der_second_prec<T, F>(x: T, h: T, f: &F) -> T
    where T: Scalar, F: Fn(T) -> T + ?Sized {
    (f(x + h) - T::two() * f(x) + f(x - h)) / (h * h)
}

/// Third derivative `(f(x+2h) − 2f(x+h) + 2f(x−h) − f(x−2h)) / 2h³`.
pub fn third_der<T, F>(x: T, h: T, f: &F) -> T
    where T: Scalar, F: Fn(T) -> T + ?Sized {
    let two = T::two();
    (f(x + two * h) - two * f(x + h) + two * f(x - h) - f(x - two * h)) / (two * h * h * h)
}
