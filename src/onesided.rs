//! Refinement on an interval with a singular endpoint.
//!
//! The singular endpoint is excluded by a margin that starts at 1/100 of the
//! interval and is halved at every step while the partition count doubles,
//! so the resolution near the excluded endpoint keeps pace with the margin.
//! The integrand is never evaluated at the singular endpoint itself.

use crate::error::IntegrationError;
use crate::refine::{bounded_estimate, check_bounds, check_tolerance, INITIAL_PARTITIONS};
use crate::result::{IntegrationResult, IntegrationRetCode};
use crate::rules::QuadratureRule;
use crate::utils::{as_f64, cast};
use log::debug;
use num::Float;

/// Initial excluded margin as a fraction of the interval width.
pub const INITIAL_MARGIN: f64 = 0.01;
/// Number of margin halvings before the soft cap.
pub const MAX_HALVINGS: u32 = 19;

/// Which endpoint of the interval is singular.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    Lower,
    Upper,
}

/// Bounds of the truncated interval after `halvings` halvings, or `None`
/// once the margin no longer moves the endpoint in floating point.
fn truncated<T: Float>(
    a: T,
    b: T,
    delta: T,
    halvings: u32,
    boundary: Boundary,
) -> Option<(T, T)> {
    let margin = delta / cast::<T, _>(2).powi(halvings as i32);
    match boundary {
        Boundary::Lower => {
            let lo = a + margin;
            if lo > a {
                Some((lo, b))
            } else {
                None
            }
        }
        Boundary::Upper => {
            let hi = b - margin;
            if hi < b {
                Some((a, hi))
            } else {
                None
            }
        }
    }
}

/// Integrate `f` over `[a, b]` where `f` is singular at the endpoint named
/// by `boundary`.
///
/// Returns the first estimate that differs from its predecessor by less
/// than `epsilon`. After [`MAX_HALVINGS`] steps the last estimate is returned
/// with [`IntegrationRetCode::TooManyIters`]; if the margin collapses first,
/// the last estimate is returned with [`IntegrationRetCode::RoundOff`].
pub fn refine_excluding<T, F>(
    f: F,
    a: T,
    b: T,
    rule: QuadratureRule,
    epsilon: T,
    boundary: Boundary,
) -> Result<IntegrationResult<T>, IntegrationError>
where
    T: Float,
    F: Fn(T) -> T,
{
    check_bounds(a, b)?;
    check_tolerance(epsilon)?;

    let delta = (b - a) * cast::<T, _>(INITIAL_MARGIN);
    let (lo, hi) = truncated(a, b, delta, 0, boundary).ok_or(IntegrationError::InvalidBounds {
        a: as_f64(a),
        b: as_f64(b),
        reason: "interval too narrow to exclude the singular endpoint",
    })?;

    let mut n = INITIAL_PARTITIONS;
    let mut prev = bounded_estimate(&f, lo, hi, rule, n)?;

    for i in 1..=MAX_HALVINGS {
        let (lo, hi) = match truncated(a, b, delta, i, boundary) {
            Some(bounds) => bounds,
            None => {
                let result = IntegrationResult {
                    val: prev,
                    partitions: n,
                    code: IntegrationRetCode::RoundOff,
                };
                result.issue_warning(as_f64(epsilon));
                return Ok(result);
            }
        };
        n = INITIAL_PARTITIONS << i;
        let current = bounded_estimate(&f, lo, hi, rule, n)?;

        if (current - prev).abs() < epsilon {
            debug!(
                "{} converged with {} partitions, margin {:e}",
                rule,
                n,
                as_f64(delta) / f64::from(1u32 << i)
            );
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

/// Integrate `f` over `[a, b]` approaching a singular lower endpoint `a`.
pub fn refine_excluding_left<T, F>(
    f: F,
    a: T,
    b: T,
    rule: QuadratureRule,
    epsilon: T,
) -> Result<IntegrationResult<T>, IntegrationError>
where
    T: Float,
    F: Fn(T) -> T,
{
    refine_excluding(f, a, b, rule, epsilon, Boundary::Lower)
}

/// Integrate `f` over `[a, b]` approaching a singular upper endpoint `b`.
pub fn refine_excluding_right<T, F>(
    f: F,
    a: T,
    b: T,
    rule: QuadratureRule,
    epsilon: T,
) -> Result<IntegrationResult<T>, IntegrationError>
where
    T: Float,
    F: Fn(T) -> T,
{
    refine_excluding(f, a, b, rule, epsilon, Boundary::Upper)
}
