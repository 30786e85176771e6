use approx::relative_eq;

/// Assert `result` is within `relative_error` of `expected`. NaN only
/// matches NaN, and an infinity only matches itself.
pub(crate) fn test_rel(result: f64, expected: f64, relative_error: f64) {
    if expected.is_nan() || result.is_nan() {
        assert!(
            expected.is_nan() && result.is_nan(),
            "observed: {:?}, expected: {:?}",
            result,
            expected
        );
        return;
    }
    assert!(
        expected == 0.0 || expected.abs() >= f64::MIN_POSITIVE,
        "expected value {:?} is subnormal",
        expected
    );
    assert!(
        relative_eq!(result, expected, epsilon = 0.0, max_relative = relative_error),
        "observed: {:?}, expected: {:?}",
        result,
        expected
    );
}

/// f(x) = x^2, integral over [0, 1] is 1/3
pub(crate) fn square(x: f64) -> f64 {
    x * x
}

/// f(x) = -x^3 - x^2 + x + 3
pub(crate) fn cubic(x: f64) -> f64 {
    -x.powi(3) - x * x + x + 3.0
}

/// Exact integral of `cubic` over [a, b]
pub(crate) fn cubic_integral(a: f64, b: f64) -> f64 {
    let antiderivative = |x: f64| -x.powi(4) / 4.0 - x.powi(3) / 3.0 + x * x / 2.0 + 3.0 * x;
    antiderivative(b) - antiderivative(a)
}

/// f(x) = 1/sqrt(x), singular at 0, integral over [0, 1] is 2
pub(crate) fn inv_sqrt(x: f64) -> f64 {
    x.sqrt().recip()
}

/// f(x) = 1/x, singular at 0, not integrable there
pub(crate) fn reciprocal(x: f64) -> f64 {
    x.recip()
}

/// f(x) = 1/sqrt(|x - 1/2|), singular at 1/2, integral over [0, 1] is 2 sqrt(2)
pub(crate) fn inv_sqrt_abs_half(x: f64) -> f64 {
    (x - 0.5).abs().sqrt().recip()
}
