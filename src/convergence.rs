//! Heuristic divergence test run before the improper path.
//!
//! Two probes look at a strip next to the singularity:
//! - the estimated pole order, from |f| sampled at geometrically decreasing
//!   distances (order >= [`POLE_ORDER_LIMIT`] is not integrable);
//! - a coarse one-sided trapezoid estimate of the strip, rejected when its
//!   magnitude exceeds [`DIVERGENCE_THRESHOLD`].
//!
//! Neither probe is a proof: both false positives and false negatives are
//! possible.

use crate::error::IntegrationError;
use crate::onesided::{refine_excluding, Boundary};
use crate::rules::QuadratureRule;
use crate::singularity::{checked_eval, locate, Singularity};
use crate::utils::{as_f64, cast};
use log::{debug, warn};
use num::Float;

/// Width of the strip probed next to an endpoint singularity.
pub const PROBE_WIDTH: f64 = 0.1;
/// Tolerance of the coarse strip estimate.
pub const PROBE_TOLERANCE: f64 = 1e-6;
/// Strip estimates larger than this in magnitude are treated as divergent.
pub const DIVERGENCE_THRESHOLD: f64 = 1e6;
/// Estimated pole orders at or above this are treated as divergent.
pub const POLE_ORDER_LIMIT: f64 = 0.995;
/// Number of decades sampled by the pole-order probe.
const ORDER_PROBES: i32 = 7;

/// Side of a declared singular point on which an integrand may be
/// integrated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The interval must start at or above the singular point.
    Above,
    /// The interval must end at or below the singular point.
    Below,
}

/// Reject bounds that put the interval on the wrong side of a declared
/// singular point.
pub fn check_domain<T: Float>(
    point: T,
    side: Side,
    a: T,
    b: T,
) -> Result<(), IntegrationError> {
    let reason = match side {
        Side::Above if a < point => "lower bound lies below the singular point",
        Side::Below if b > point => "upper bound lies above the singular point",
        _ => return Ok(()),
    };
    warn!("Rejecting [{}, {}]: {}", as_f64(a), as_f64(b), reason);
    Err(IntegrationError::InvalidBounds {
        a: as_f64(a),
        b: as_f64(b),
        reason,
    })
}

/// Strips adjacent to the singularity, each with the side the singular
/// point sits on.
fn probe_strips<T: Float>(a: T, b: T, singularity: Singularity<T>) -> Vec<(T, T, Boundary)> {
    let width = (b - a).min(cast(PROBE_WIDTH));
    match singularity {
        Singularity::AtLowerBound => vec![(a, a + width, Boundary::Lower)],
        Singularity::AtUpperBound => vec![(b - width, b, Boundary::Upper)],
        Singularity::Interior(mid) => {
            vec![(a, mid, Boundary::Upper), (mid, b, Boundary::Lower)]
        }
    }
}

/// Estimate the order `alpha` of `|f(x)| ~ |x - point|^-alpha` from the two
/// probes closest to `point`. `None` if fewer than two probes are usable.
pub fn pole_order<T, F>(f: &F, point: T, width: T, boundary: Boundary) -> Option<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    let ten: T = cast(10);
    let samples: Vec<(T, T)> = (1..=ORDER_PROBES)
        .filter_map(|k| {
            let distance = width / ten.powi(k);
            let x = match boundary {
                Boundary::Lower => point + distance,
                Boundary::Upper => point - distance,
            };
            let magnitude = checked_eval(f, x)?.abs();
            if magnitude > T::zero() {
                Some((distance, magnitude))
            } else {
                None
            }
        })
        .collect();

    if samples.len() < 2 {
        return None;
    }
    let (d0, m0) = samples[samples.len() - 2];
    let (d1, m1) = samples[samples.len() - 1];
    Some(-(m1.ln() - m0.ln()) / (d1.ln() - d0.ln()))
}

/// True if the probes judge the integral of `f` over `[a, b]` divergent at
/// `singularity`.
pub fn is_divergent<T, F>(f: &F, a: T, b: T, singularity: Singularity<T>) -> bool
where
    T: Float,
    F: Fn(T) -> T,
{
    let point = singularity.point(a, b);

    for (lo, hi, boundary) in probe_strips(a, b, singularity) {
        if let Some(alpha) = pole_order(f, point, hi - lo, boundary) {
            if alpha >= cast::<T, _>(POLE_ORDER_LIMIT) {
                debug!("Pole order {} at x = {}", as_f64(alpha), as_f64(point));
                return true;
            }
        }

        let tolerance: T = cast(PROBE_TOLERANCE);
        match refine_excluding(f, lo, hi, QuadratureRule::Trapezoid, tolerance, boundary) {
            Ok(estimate) if estimate.val.abs() <= cast::<T, _>(DIVERGENCE_THRESHOLD) => {}
            Ok(estimate) => {
                debug!(
                    "Strip [{}, {}] estimate {}",
                    as_f64(lo),
                    as_f64(hi),
                    as_f64(estimate.val)
                );
                return true;
            }
            Err(err) => {
                debug!("Strip [{}, {}] probe failed: {}", as_f64(lo), as_f64(hi), err);
                return true;
            }
        }
    }
    false
}

/// Locate the singularity of `f` on `[a, b]` and reject the integral if it
/// looks divergent there.
pub fn check_convergence<T, F>(f: &F, a: T, b: T) -> Result<Singularity<T>, IntegrationError>
where
    T: Float,
    F: Fn(T) -> T,
{
    let singularity = locate(f, a, b).ok_or(IntegrationError::NoSingularity {
        a: as_f64(a),
        b: as_f64(b),
    })?;

    if is_divergent(f, a, b, singularity) {
        let point = as_f64(singularity.point(a, b));
        warn!(
            "Integral over [{}, {}] judged divergent at x = {}",
            as_f64(a),
            as_f64(b),
            point
        );
        return Err(IntegrationError::Divergent { point });
    }
    Ok(singularity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reciprocal_diverges() {
        assert!(is_divergent(&reciprocal, 0.0, 1.0, Singularity::AtLowerBound));
        assert_eq!(
            check_convergence(&reciprocal, 0.0, 1.0),
            Err(IntegrationError::Divergent { point: 0.0 })
        );
    }

    #[test]
    fn test_inv_sqrt_converges() {
        assert!(!is_divergent(&inv_sqrt, 0.0, 1.0, Singularity::AtLowerBound));
        assert_eq!(
            check_convergence(&inv_sqrt, 0.0, 1.0),
            Ok(Singularity::AtLowerBound)
        );
    }

    #[test]
    fn test_inverse_square_diverges() {
        let f = |x: f64| (1.0 - x).powi(2).recip();
        assert!(is_divergent(&f, 0.0, 1.0, Singularity::AtUpperBound));
    }

    #[test]
    fn test_log_converges() {
        let f = |x: f64| x.ln();
        assert!(!is_divergent(&f, 0.0, 1.0, Singularity::AtLowerBound));
    }

    #[test]
    fn test_interior() {
        assert!(!is_divergent(
            &inv_sqrt_abs_half,
            0.0,
            1.0,
            Singularity::Interior(0.5)
        ));

        let f = |x: f64| (x - 0.5).recip();
        assert_eq!(
            check_convergence(&f, 0.0, 1.0),
            Err(IntegrationError::Divergent { point: 0.5 })
        );
    }

    #[test]
    fn test_large_strip_estimate_diverges() {
        // Integrable order, but the strip estimate is far above the threshold
        let f = |x: f64| 1e8 / x.sqrt();
        let alpha = pole_order(&f, 0.0, PROBE_WIDTH, Boundary::Lower).unwrap();
        assert!(alpha < POLE_ORDER_LIMIT);
        assert!(is_divergent(&f, 0.0, 1.0, Singularity::AtLowerBound));
        assert_eq!(
            check_convergence(&f, 0.0, 1.0),
            Err(IntegrationError::Divergent { point: 0.0 })
        );

        // Same shape, small enough constant
        let f = |x: f64| 1e3 / x.sqrt();
        assert!(!is_divergent(&f, 0.0, 1.0, Singularity::AtLowerBound));
    }

    #[test]
    fn test_failed_strip_estimate_diverges() {
        // Regular next to 0, undefined further inside the strip
        let f = |x: f64| {
            if x > 0.05 && x < 0.06 {
                f64::NAN
            } else {
                x.sqrt().recip()
            }
        };
        let alpha = pole_order(&f, 0.0, PROBE_WIDTH, Boundary::Lower).unwrap();
        assert!(alpha < POLE_ORDER_LIMIT);
        assert!(is_divergent(&f, 0.0, 1.0, Singularity::AtLowerBound));
    }

    #[test]
    fn test_order_just_below_one_converges() {
        let f = |x: f64| x.powf(-0.96);
        let alpha = pole_order(&f, 0.0, PROBE_WIDTH, Boundary::Lower).unwrap();
        assert_abs_diff_eq!(alpha, 0.96, epsilon = 1e-6);
        assert_eq!(check_convergence(&f, 0.0, 1.0), Ok(Singularity::AtLowerBound));

        let f = |x: f64| x.powf(-1.0);
        let alpha = pole_order(&f, 0.0, PROBE_WIDTH, Boundary::Lower).unwrap();
        assert!(alpha >= POLE_ORDER_LIMIT);
        assert!(is_divergent(&f, 0.0, 1.0, Singularity::AtLowerBound));
    }

    #[test]
    fn test_pole_order() {
        let alpha = pole_order(&inv_sqrt, 0.0, 0.1, Boundary::Lower).unwrap();
        assert_abs_diff_eq!(alpha, 0.5, epsilon = 1e-6);

        let f = |x: f64| (1.0 - x).powi(2).recip();
        let alpha = pole_order(&f, 1.0, 0.1, Boundary::Upper).unwrap();
        assert_abs_diff_eq!(alpha, 2.0, epsilon = 1e-3);

        // Bounded integrand yields order close to zero
        let alpha = pole_order(&square, 1.0, 0.1, Boundary::Upper).unwrap();
        assert!(alpha.abs() < 1e-3);

        // Nothing usable
        assert_eq!(pole_order(&|_x: f64| f64::NAN, 0.0, 0.1, Boundary::Lower), None);
    }

    #[test]
    fn test_no_singularity() {
        assert_eq!(
            check_convergence(&square, 0.0, 1.0),
            Err(IntegrationError::NoSingularity { a: 0.0, b: 1.0 })
        );
    }

    #[test]
    fn test_check_domain() {
        assert!(check_domain(0.0, Side::Above, 0.0, 1.0).is_ok());
        assert!(check_domain(0.0, Side::Above, 0.5, 1.0).is_ok());
        assert!(matches!(
            check_domain(0.0, Side::Above, -1.0, 1.0),
            Err(IntegrationError::InvalidBounds { .. })
        ));

        assert!(check_domain(1.0, Side::Below, 0.0, 1.0).is_ok());
        assert!(matches!(
            check_domain(1.0, Side::Below, 0.0, 2.0),
            Err(IntegrationError::InvalidBounds { .. })
        ));
    }
}
