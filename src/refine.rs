use crate::error::IntegrationError;
use crate::result::{IntegrationResult, IntegrationRetCode};
use crate::rules::QuadratureRule;
use crate::utils::{as_f64, is_ordered_interval};
use log::debug;
use num::Float;

/// Partition count of the first estimate.
pub const INITIAL_PARTITIONS: usize = 4;

pub(crate) fn check_tolerance<T: Float>(epsilon: T) -> Result<(), IntegrationError> {
    if epsilon > T::zero() && epsilon.is_finite() {
        Ok(())
    } else {
        Err(IntegrationError::BadTolerance {
            epsilon: as_f64(epsilon),
        })
    }
}

pub(crate) fn check_bounds<T: Float>(a: T, b: T) -> Result<(), IntegrationError> {
    if is_ordered_interval(a, b) {
        Ok(())
    } else {
        Err(IntegrationError::InvalidBounds {
            a: as_f64(a),
            b: as_f64(b),
            reason: "bounds must be finite with lower bound below upper bound",
        })
    }
}

/// Evaluate `rule` and reject a non-finite estimate.
pub(crate) fn bounded_estimate<T, F>(
    f: &F,
    a: T,
    b: T,
    rule: QuadratureRule,
    n: usize,
) -> Result<T, IntegrationError>
where
    T: Float,
    F: Fn(T) -> T,
{
    let estimate = rule.evaluate(f, a, b, n);
    if estimate.is_finite() {
        Ok(estimate)
    } else {
        Err(IntegrationError::NumericInstability {
            a: as_f64(a),
            b: as_f64(b),
            partitions: n,
        })
    }
}

/// Integrate `f` over `[a, b]` by doubling the partition count of `rule`
/// until successive estimates agree within `epsilon`, or `max_iter`
/// doublings have been made.
///
/// # Arguments
/// - `f`: Function to integrate, bounded on `[a, b]`.
/// - `a`, `b`: Finite bounds with `a < b`.
/// - `rule`: Quadrature rule producing each estimate.
/// - `epsilon`: Acceptance threshold for `|current - previous|`.
/// - `max_iter`: Maximum number of doublings after the first estimate.
///
/// # Examples
/// ```
/// use stepwise_quadrature::prelude::*;
/// let res = refine(|x: f64| x.sin(), 0.0, std::f64::consts::PI, QuadratureRule::Simpson, 1e-4, 20).unwrap();
/// assert!((res.val - 2.0).abs() < 1e-4);
/// ```
pub fn refine<T, F>(
    f: F,
    a: T,
    b: T,
    rule: QuadratureRule,
    epsilon: T,
    max_iter: usize,
) -> Result<IntegrationResult<T>, IntegrationError>
where
    T: Float,
    F: Fn(T) -> T,
{
    check_bounds(a, b)?;
    check_tolerance(epsilon)?;

    let mut n = INITIAL_PARTITIONS;
    let mut prev = bounded_estimate(&f, a, b, rule, n)?;

    for _ in 0..max_iter {
        n = match n.checked_mul(2) {
            Some(next) => next,
            None => break,
        };
        let current = bounded_estimate(&f, a, b, rule, n)?;

        if (current - prev).abs() < epsilon {
            debug!("{} converged with {} partitions", rule, n);
            return Ok(IntegrationResult::new(current, n));
        }
        prev = current;
    }

    let result = IntegrationResult {
        val: prev,
        partitions: n,
        code: IntegrationRetCode::TooManyIters,
    };
    result.issue_warning(as_f64(epsilon));
    Ok(result)
}
