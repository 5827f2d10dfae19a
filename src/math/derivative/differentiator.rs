use serde::{
    de::DeserializeOwned,
    Deserialize,
    Serialize
};
use tracing::debug;

use crate::manager::managererror::ManagerError;
use crate::math::derivative::derivative::{
    first_der_first_prec,
    first_der_symm_second_prec,
    second_der_second_prec,
    third_der
};
use crate::math::scalar::Scalar;

// ─────────────────────────────────────────────────────────────────────────────
// DifferenceScheme
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceScheme {
    ForwardFirst,
    SymmetricFirst,
    CentralSecond,
    Third
}

impl DifferenceScheme {
    /// Which derivative the scheme approximates (f′ = 1, f″ = 2, f‴ = 3).
    pub fn derivative_order(&self) -> u32 {
        match self {
            DifferenceScheme::ForwardFirst | DifferenceScheme::SymmetricFirst => 1,
            DifferenceScheme::CentralSecond => 2,
            DifferenceScheme::Third => 3
        }
    }

    /// Power of `h` in the leading truncation error term.
    pub fn accuracy_order(&self) -> u32 {
        match self {
            DifferenceScheme::ForwardFirst => 1,
            DifferenceScheme::SymmetricFirst
            | DifferenceScheme::CentralSecond
            | DifferenceScheme::Third => 2
        }
    }

    pub fn evaluations(&self) -> usize {
        match self {
            DifferenceScheme::ForwardFirst | DifferenceScheme::SymmetricFirst => 2,
            DifferenceScheme::CentralSecond => 3,
            DifferenceScheme::Third => 4
        }
    }

    pub fn differentiate<T, F>(&self, x: T, h: T, f: &F) -> T
        where T: Scalar, F: Fn(T) -> T + ?Sized {
        match self {
            DifferenceScheme::ForwardFirst => first_der_first_prec(x, h, f),
            DifferenceScheme::SymmetricFirst => first_der_symm_second_prec(x, h, f),
            DifferenceScheme::CentralSecond => second_der_second_prec(x, h, f),
            DifferenceScheme::Third => third_der(x, h, f)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Differentiator
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Differentiator<T> {
    scheme: DifferenceScheme,
    step: T
}

impl<T> Differentiator<T>
    where T: Scalar {
    pub fn new(scheme: DifferenceScheme, step: T) -> Differentiator<T> {
        Differentiator { scheme, step }
    }

    pub fn scheme(&self) -> DifferenceScheme {
        self.scheme
    }

    pub fn step(&self) -> T {
        self.step
    }

    pub fn differentiate<F>(&self, x: T, f: &F) -> T
        where F: Fn(T) -> T + ?Sized {
        self.scheme.differentiate(x, self.step, f)
    }
}

impl<T> Differentiator<T>
    where T: Scalar + DeserializeOwned {
    pub fn from_json(name: &str, json_value: serde_json::Value) -> Result<Differentiator<T>, ManagerError> {
        let differentiator: Differentiator<T> = ManagerError::from_json_or_json_parse_error(json_value)?;
        ManagerError::require_positive(name, "step", differentiator.step)?;
        debug!(name, scheme = ?differentiator.scheme, step = ?differentiator.step, "parsed differentiator");
        Ok(differentiator)
    }
}
