//! Tests for golden-section search.

use approx::assert_abs_diff_eq;
use rust_decimal::Decimal;

use numkit::absolute;
use numkit::math::optimization::goldensectionsearch::{
    golden_section_search,
    narrow_bracket,
    GoldenSectionSearch
};

fn shifted_parabola(x: f64) -> f64 {
    (x - 3.0) * (x - 3.0)
}

#[test]
fn finds_parabola_vertex() {
    let result = golden_section_search(0.0, 6.0, 1e-6, &shifted_parabola);
    assert_abs_diff_eq!(result, 3.0, epsilon = 1e-6);
}

#[test]
fn bracket_narrows_below_tolerance() {
    let bracket = narrow_bracket(0.0, 6.0, 1e-6, &shifted_parabola);
    assert!(bracket.width() <= 1e-6);
    assert!(bracket.lower() <= 3.0 && 3.0 <= bracket.upper());
    assert_eq!(bracket.midpoint(), golden_section_search(0.0, 6.0, 1e-6, &shifted_parabola));
    assert_eq!(bracket.iterations(), 33);
}

/// Each pass keeps 1/φ of the bracket.
#[test]
fn bracket_shrinks_by_golden_ratio() {
    let bracket = narrow_bracket(0.0, 6.0, 10.0, &shifted_parabola);
    assert_eq!(bracket.iterations(), 1);
    assert_abs_diff_eq!(bracket.width(), 6.0 / 1.6180339887498948, epsilon = 1e-12);
}

#[test]
fn nan_tolerance_stops_after_one_pass() {
    let bracket = narrow_bracket(0.0, 6.0, f64::NAN, &shifted_parabola);
    assert_eq!(bracket.iterations(), 1);
}

#[test]
fn nan_width_stops_after_one_pass() {
    let bracket = narrow_bracket(f64::NAN, 6.0, 1e-6, &shifted_parabola);
    assert_eq!(bracket.iterations(), 1);
    assert!(bracket.width().is_nan());
    assert!(golden_section_search(f64::NAN, 6.0, 1e-6, &shifted_parabola).is_nan());
}

#[test]
fn finds_cosine_minimum() {
    let result = golden_section_search(-1.0, 4.0, 1e-8, &f64::cos);
    assert_abs_diff_eq!(result, std::f64::consts::PI, epsilon = 1e-7);
}

#[test]
fn finds_minimum_near_left_edge() {
    let result = golden_section_search(0.0, 2.0, 1e-9, &|x: f64| -x * (-x).exp());
    assert_abs_diff_eq!(result, 1.0, epsilon = 1e-7);
}

/// Several minima: the search settles on one of them without complaint.
#[test]
fn multimodal_function_settles_on_a_local_minimum() {
    let result = golden_section_search(0.0, 20.0, 1e-8, &f64::sin);
    let derivative = result.cos();
    assert_abs_diff_eq!(derivative, 0.0, epsilon = 1e-6);
    assert!(result.sin() < 0.0);
}

#[test]
fn repeated_searches_are_bit_identical() {
    let f = |x: f64| (x - 1.25).powi(4) + 0.5;
    let first = golden_section_search(-3.0, 5.0, 1e-10, &f);
    let second = golden_section_search(-3.0, 5.0, 1e-10, &f);
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn f32_search() {
    let result = golden_section_search(0.0_f32, 6.0, 1e-4, &|x: f32| (x - 3.0) * (x - 3.0));
    assert_abs_diff_eq!(result, 3.0_f32, epsilon = 1e-3);
}

#[test]
fn decimal_search() {
    let three = Decimal::new(3, 0);
    let f = |x: Decimal| (x - three) * (x - three);
    let eps = Decimal::new(1, 8);
    let result = golden_section_search(Decimal::ZERO, Decimal::new(6, 0), eps, &f);
    assert!(absolute(result - three) < eps);
}

#[test]
fn configured_search() {
    let search = GoldenSectionSearch::new(1e-6);
    assert_eq!(search.tolerance(), 1e-6);
    let result = search.minimize(0.0, 6.0, &shifted_parabola);
    assert_abs_diff_eq!(result, 3.0, epsilon = 1e-6);
    assert_eq!(search.bracket(0.0, 6.0, &shifted_parabola).midpoint(), result);
}
