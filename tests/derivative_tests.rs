//! Tests for the finite-difference formulas.

use approx::assert_abs_diff_eq;
use rust_decimal::Decimal;

use numkit::absolute;
use numkit::math::derivative::derivative::{
    first_der_first_prec,
    first_der_symm_second_prec,
    second_der_second_prec,
    third_der
};
use numkit::math::derivative::differentiator::{
    DifferenceScheme,
    Differentiator
};

fn square(x: f64) -> f64 {
    x * x
}

fn cube(x: f64) -> f64 {
    x * x * x
}

// ============================================================================
// Polynomials
// ============================================================================

#[test]
fn forward_difference_of_square() {
    let result = first_der_first_prec(2.0, 0.001, &square);
    // exact forward difference of x² is 2x + h
    assert_abs_diff_eq!(result, 4.001, epsilon = 1e-9);
}

#[test]
fn symmetric_difference_of_square() {
    let result = first_der_symm_second_prec(2.0, 0.001, &square);
    assert_abs_diff_eq!(result, 4.0, epsilon = 1e-9);
}

#[test]
fn second_derivative_of_square() {
    let result = second_der_second_prec(2.0, 0.001, &square);
    assert_abs_diff_eq!(result, 2.0, epsilon = 1e-5);
}

#[test]
fn third_derivative_of_square_is_noise() {
    let result = third_der(2.0, 0.001, &square);
    assert_abs_diff_eq!(result, 0.0, epsilon = 1e-5);
}

#[test]
fn third_derivative_of_cube() {
    let result = third_der(2.0, 0.01, &cube);
    assert_abs_diff_eq!(result, 6.0, epsilon = 1e-6);
}

#[test]
fn symmetric_difference_beats_forward_difference() {
    let x: f64 = 0.7;
    let h = 1e-3;
    let exact = x.cos();
    let forward = absolute(first_der_first_prec(x, h, &f64::sin) - exact);
    let symmetric = absolute(first_der_symm_second_prec(x, h, &f64::sin) - exact);
    assert!(symmetric < forward);
}

// ============================================================================
// Degenerate Step
// ============================================================================

#[test]
fn zero_step_propagates_float_semantics() {
    assert!(first_der_first_prec(1.0, 0.0, &square).is_nan());
    assert!(second_der_second_prec(1.0, 0.0, &square).is_nan());
    assert!(first_der_first_prec(1.0, 0.0, &|x: f64| if x > 0.5 { 1.0 } else { 0.0 }).is_nan());
    assert!(first_der_symm_second_prec(0.0, 0.0, &|x: f64| x + 1.0).is_nan());
}

// ============================================================================
// Scalar Types
// ============================================================================

#[test]
fn decimal_differences_are_exact_for_polynomials() {
    let x = Decimal::new(2, 0);
    let h = Decimal::new(1, 3);
    let f = |x: Decimal| x * x;

    assert_eq!(first_der_first_prec(x, h, &f), Decimal::new(4001, 3));
    assert_eq!(first_der_symm_second_prec(x, h, &f), Decimal::new(4, 0));
    assert_eq!(second_der_second_prec(x, h, &f), Decimal::new(2, 0));
    assert_eq!(third_der(x, h, &f), Decimal::ZERO);
}

#[test]
fn f32_symmetric_difference() {
    let result = first_der_symm_second_prec(2.0_f32, 0.01, &|x: f32| x * x);
    assert_abs_diff_eq!(result, 4.0_f32, epsilon = 1e-3);
}

// ============================================================================
// Schemes
// ============================================================================

#[test]
fn scheme_metadata() {
    let schemes = [
        (DifferenceScheme::ForwardFirst, 1, 1, 2),
        (DifferenceScheme::SymmetricFirst, 1, 2, 2),
        (DifferenceScheme::CentralSecond, 2, 2, 3),
        (DifferenceScheme::Third, 3, 2, 4),
    ];
    for (scheme, derivative, accuracy, evaluations) in schemes {
        assert_eq!(scheme.derivative_order(), derivative);
        assert_eq!(scheme.accuracy_order(), accuracy);
        assert_eq!(scheme.evaluations(), evaluations);
    }
}

#[test]
fn scheme_counts_its_evaluations() {
    use std::cell::Cell;

    let calls = Cell::new(0);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        x
    };
    for scheme in [
        DifferenceScheme::ForwardFirst,
        DifferenceScheme::SymmetricFirst,
        DifferenceScheme::CentralSecond,
        DifferenceScheme::Third,
    ] {
        calls.set(0);
        scheme.differentiate(1.0, 0.1, &f);
        assert_eq!(calls.get(), scheme.evaluations());
    }
}

#[test]
fn differentiator_is_repeatable() {
    let differentiator = Differentiator::new(DifferenceScheme::CentralSecond, 1e-4);
    let first = differentiator.differentiate(0.3, &f64::exp);
    let second = differentiator.differentiate(0.3, &f64::exp);
    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(differentiator.scheme(), DifferenceScheme::CentralSecond);
    assert_eq!(differentiator.step(), 1e-4);
    assert_abs_diff_eq!(first, 0.3_f64.exp(), epsilon = 1e-6);
}
