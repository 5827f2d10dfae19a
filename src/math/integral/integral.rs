//! Fixed-step composite quadrature over `[a, b]`.
//!
//! All three rules share one sampling loop: starting at `x = a`, sample and
//! accumulate, then advance `x` by `h` while `x < b`. The partial
//! sub-interval left after the last sample before `b` is never closed, and
//! because `x` is accumulated by repeated addition, float round-off decides
//! whether a sample lands just below `b` (e.g. `h = 0.1` on `[0, 1]` takes
//! 11 samples in `f64`).
//!
//! Callers must pass `h > 0`; otherwise `x` never reaches `b` and the loop
//! does not terminate.

use crate::math::scalar::Scalar;

/// Calls `accumulate` at each sample point `a, a + h, a + 2h, ...` below `b`.
fn sample<T, G>(a: T, b: T, h: T, mut accumulate: G)
    where T: Scalar, G: FnMut(T) {
    let mut x = a;
    while x < b {
        accumulate(x);
        x += h;
    }
}

/// Left-rectangle rule: `h · Σ f(x)`.
pub fn riemann_sum<T, F>(a: T, b: T, h: T, f: &F) -> T
    where T: Scalar, F: Fn(T) -> T + ?Sized {
    let mut sum = T::zero();
    sample(a, b, h, |x| sum += f(x));
    sum * h
}

/// Trapezoidal rule as `Σ (h/2)·f(x) + f(x + h)`.
///
/// The `h/2` weight only applies to the left sample and the total is not
/// scaled again, so the result is not the textbook composite trapezoid; for
/// `f = 1` on `[0, 1]` it returns roughly `n·(1 + h/2)` for `n` samples.
pub fn trapezoidal_rule<T, F>(a: T, b: T, h: T, f: &F) -> T
    where T: Scalar, F: Fn(T) -> T + ?Sized {
    let half_step = h / T::two();
    let mut sum = T::zero();
    sample(a, b, h, |x| sum += half_step * f(x) + f(x + h));
    sum
}

/// Simpson's rule: `(h/6) · Σ f(x) + 4·f(x + h/2) + f(x + h)`.
pub fn simpsons_rule<T, F>(a: T, b: T, h: T, f: &F) -> T
    where T: Scalar, F: Fn(T) -> T + ?Sized {
    let half_step = h / T::two();
    let four = T::four();
    let mut sum = T::zero();
    sample(a, b, h, |x| sum += f(x) + four * f(x + half_step) + f(x + h));
    (h / T::six()) * sum
}
