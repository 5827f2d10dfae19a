use serde::{
    de::DeserializeOwned,
    Deserialize,
    Serialize
};
use tracing::debug;

use crate::manager::managererror::ManagerError;
use crate::math::integral::integral::{
    riemann_sum,
    simpsons_rule,
    trapezoidal_rule
};
use crate::math::scalar::Scalar;

// ─────────────────────────────────────────────────────────────────────────────
// IntegrationRule
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationRule {
    RiemannSum,
    TrapezoidalRule,
    SimpsonsRule
}

impl IntegrationRule {
    /// Calls to `f` made for every sub-interval.
    pub fn evaluations_per_step(&self) -> usize {
        match self {
            IntegrationRule::RiemannSum => 1,
            IntegrationRule::TrapezoidalRule => 2,
            IntegrationRule::SimpsonsRule => 3
        }
    }

    pub fn integrate<T, F>(&self, a: T, b: T, h: T, f: &F) -> T
        where T: Scalar, F: Fn(T) -> T + ?Sized {
        match self {
            IntegrationRule::RiemannSum => riemann_sum(a, b, h, f),
            IntegrationRule::TrapezoidalRule => trapezoidal_rule(a, b, h, f),
            IntegrationRule::SimpsonsRule => simpsons_rule(a, b, h, f)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Integrator
// ─────────────────────────────────────────────────────────────────────────────

/// A quadrature rule bound to a step size, as registered in a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Integrator<T> {
    rule: IntegrationRule,
    step: T
}

impl<T> Integrator<T>
    where T: Scalar {
    pub fn new(rule: IntegrationRule, step: T) -> Integrator<T> {
        Integrator { rule, step }
    }

    pub fn rule(&self) -> IntegrationRule {
        self.rule
    }

    pub fn step(&self) -> T {
        self.step
    }

    pub fn integrate<F>(&self, a: T, b: T, f: &F) -> T
        where F: Fn(T) -> T + ?Sized {
        self.rule.integrate(a, b, self.step, f)
    }
}

impl<T> Integrator<T>
    where T: Scalar + DeserializeOwned {
    /// Parses `{"rule": ..., "step": ...}`; the step must be strictly positive.
    pub fn from_json(name: &str, json_value: serde_json::Value) -> Result<Integrator<T>, ManagerError> {
        let integrator: Integrator<T> = ManagerError::from_json_or_json_parse_error(json_value)?;
        ManagerError::require_positive(name, "step", integrator.step)?;
        debug!(name, rule = ?integrator.rule, step = ?integrator.step, "parsed integrator");
        Ok(integrator)
    }
}
