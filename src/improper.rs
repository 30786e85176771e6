use crate::error::IntegrationError;
use crate::onesided::{refine_excluding, Boundary};
use crate::refine::{check_bounds, check_tolerance};
use crate::result::{IntegrationResult, IntegrationRetCode};
use crate::rules::QuadratureRule;
use crate::singularity::{locate, Singularity};
use crate::utils::{as_f64, cast};
use log::debug;
use num::Float;

/// Sum two partial results. The code of the first non-converged part wins.
fn combine<T: Float>(
    left: IntegrationResult<T>,
    right: IntegrationResult<T>,
) -> IntegrationResult<T> {
    let code = if left.code != IntegrationRetCode::Success {
        left.code
    } else {
        right.code
    };
    IntegrationResult {
        val: left.val + right.val,
        partitions: left.partitions + right.partitions,
        code,
    }
}

/// Integrate `f` over `[a, b]` split at the interior singularity `mid`.
pub fn integrate_around<T, F>(
    f: F,
    a: T,
    mid: T,
    b: T,
    rule: QuadratureRule,
    epsilon: T,
) -> Result<IntegrationResult<T>, IntegrationError>
where
    T: Float,
    F: Fn(T) -> T,
{
    let half = epsilon / cast::<T, _>(2);
    let left = refine_excluding(&f, a, mid, rule, half, Boundary::Upper)?;
    let right = refine_excluding(&f, mid, b, rule, half, Boundary::Lower)?;
    Ok(combine(left, right))
}

/// Integrate `f` over `[a, b]` where `f` has one singularity on the closed
/// interval.
///
/// Returns [`IntegrationError::NoSingularity`] if the coarse scan finds
/// none; such integrands belong to [`crate::refine::refine`].
///
/// # Examples
/// ```
/// use stepwise_quadrature::prelude::*;
/// let f = |x: f64| x.sqrt().recip();
/// let res = integrate_improper(f, 0.0, 1.0, QuadratureRule::Simpson, 1e-5).unwrap();
/// assert!((res.val - 2.0).abs() < 1e-3);
/// ```
pub fn integrate_improper<T, F>(
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
    check_bounds(a, b)?;
    check_tolerance(epsilon)?;

    match locate(&f, a, b) {
        Some(singularity) => integrate_at(f, a, b, singularity, rule, epsilon),
        None => Err(IntegrationError::NoSingularity {
            a: as_f64(a),
            b: as_f64(b),
        }),
    }
}

/// Integrate `f` over `[a, b]` given an already located `singularity`.
pub fn integrate_at<T, F>(
    f: F,
    a: T,
    b: T,
    singularity: Singularity<T>,
    rule: QuadratureRule,
    epsilon: T,
) -> Result<IntegrationResult<T>, IntegrationError>
where
    T: Float,
    F: Fn(T) -> T,
{
    match singularity {
        Singularity::AtLowerBound => refine_excluding(f, a, b, rule, epsilon, Boundary::Lower),
        Singularity::AtUpperBound => refine_excluding(f, a, b, rule, epsilon, Boundary::Upper),
        Singularity::Interior(mid) => {
            debug!("Splitting [{}, {}] at {}", as_f64(a), as_f64(b), as_f64(mid));
            integrate_around(f, a, mid, b, rule, epsilon)
        }
    }
}
