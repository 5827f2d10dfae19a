//! Golden-section search for the minimizer of a unimodal function.
//!
//! Each pass places two interior points at `b − (b−a)/φ` and `a + (b−a)/φ`,
//! keeps the side with the smaller value and repeats while the bracket is
//! wider than `eps`. The loop body always runs at least once, even when the
//! starting bracket is already narrower than `eps`.
//!
//! Preconditions, not checked: `a < b`, `eps > 0`, and `f` has exactly one
//! local minimum on `[a, b]`. With `eps <= 0` the width can stall above the
//! threshold at the precision floor and the search never ends; with several
//! minima it settles on one of them without notice.

use serde::{
    de::DeserializeOwned,
    Deserialize
};
use tracing::debug;

use crate::manager::managererror::ManagerError;
use crate::math::scalar::{
    absolute,
    Scalar
};

// ─────────────────────────────────────────────────────────────────────────────
// Bracket
// ─────────────────────────────────────────────────────────────────────────────

/// Final state of a search: the narrowed interval and how many passes it took.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bracket<T> {
    lower: T,
    upper: T,
    iterations: usize
}

impl<T> Bracket<T>
    where T: Scalar {
    pub fn lower(&self) -> T {
        self.lower
    }

    pub fn upper(&self) -> T {
        self.upper
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn width(&self) -> T {
        absolute(self.upper - self.lower)
    }

    pub fn midpoint(&self) -> T {
        (self.lower + self.upper) / T::two()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────────────────

/// Runs the search on local copies of `a` and `b` and returns the narrowed
/// bracket.
pub fn narrow_bracket<T, F>(a: T, b: T, eps: T, f: &F) -> Bracket<T>
    where T: Scalar, F: Fn(T) -> T + ?Sized {
    let ratio = T::golden_ratio();
    let mut lower = a;
    let mut upper = b;
    let mut iterations: usize = 0;

    loop {
        let x1 = upper - (upper - lower) / ratio;
        let x2 = lower + (upper - lower) / ratio;

        if f(x1) < f(x2) {
            upper = x2;
        } else {
            lower = x1;
        }
        iterations += 1;

        // a NaN width also ends the search
        let wider_than_eps = absolute(upper - lower) > eps;
        if !wider_than_eps {
            break;
        }
    }

    debug!(iterations, lower = ?lower, upper = ?upper, "golden-section search finished");
    Bracket { lower, upper, iterations }
}

/// Midpoint of the bracket left by [`narrow_bracket`].
pub fn golden_section_search<T, F>(a: T, b: T, eps: T, f: &F) -> T
    where T: Scalar, F: Fn(T) -> T + ?Sized {
    narrow_bracket(a, b, eps, f).midpoint()
}

// ─────────────────────────────────────────────────────────────────────────────
// GoldenSectionSearch
// ─────────────────────────────────────────────────────────────────────────────

/// A golden-section search bound to a tolerance, as registered in a
/// configuration.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct GoldenSectionSearch<T> {
    tolerance: T
}

impl<T> GoldenSectionSearch<T>
    where T: Scalar {
    pub fn new(tolerance: T) -> GoldenSectionSearch<T> {
        GoldenSectionSearch { tolerance }
    }

    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    pub fn minimize<F>(&self, a: T, b: T, f: &F) -> T
        where F: Fn(T) -> T + ?Sized {
        golden_section_search(a, b, self.tolerance, f)
    }

    pub fn bracket<F>(&self, a: T, b: T, f: &F) -> Bracket<T>
        where F: Fn(T) -> T + ?Sized {
        narrow_bracket(a, b, self.tolerance, f)
    }
}

impl<T> GoldenSectionSearch<T>
    where T: Scalar + DeserializeOwned {
    pub fn from_json(name: &str, json_value: serde_json::Value) -> Result<GoldenSectionSearch<T>, ManagerError> {
        let search: GoldenSectionSearch<T> = ManagerError::from_json_or_json_parse_error(json_value)?;
        ManagerError::require_positive(name, "tolerance", search.tolerance)?;
        debug!(name, tolerance = ?search.tolerance, "parsed golden-section search");
        Ok(search)
    }
}
