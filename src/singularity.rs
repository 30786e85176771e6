use crate::utils::{as_f64, is_singular_value};
use log::debug;
use ndarray::Array1;
use num::Float;

/// Number of abscissae sampled by the coarse scan, endpoints included.
pub const SCAN_POINTS: usize = 101;

/// Where the integrand is infinite or undefined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Singularity<T> {
    AtLowerBound,
    AtUpperBound,
    Interior(T),
}

impl<T: Float> Singularity<T> {
    /// Abscissa of the singularity on `[a, b]`.
    pub fn point(&self, a: T, b: T) -> T {
        match *self {
            Singularity::AtLowerBound => a,
            Singularity::AtUpperBound => b,
            Singularity::Interior(x) => x,
        }
    }
}

/// Evaluate `f` at `x`, returning `None` if the value is infinite or NaN.
#[inline]
pub fn checked_eval<T, F>(f: &F, x: T) -> Option<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    let value = f(x);
    if is_singular_value(value) {
        None
    } else {
        Some(value)
    }
}

/// Find a singularity of `f` on `[a, b]`, or `None` if every probe is
/// finite.
///
/// Both endpoints are checked first, then [`SCAN_POINTS`] equally spaced
/// abscissae. A singularity strictly between two scan points is missed.
///
/// # Examples
/// ```
/// use stepwise_quadrature::prelude::*;
/// let f = |x: f64| (x - 0.25).recip();
/// assert_eq!(locate(&f, 0.0, 1.0), Some(Singularity::Interior(0.25)));
/// ```
pub fn locate<T, F>(f: &F, a: T, b: T) -> Option<Singularity<T>>
where
    T: Float,
    F: Fn(T) -> T,
{
    if checked_eval(f, a).is_none() {
        return Some(Singularity::AtLowerBound);
    }
    if checked_eval(f, b).is_none() {
        return Some(Singularity::AtUpperBound);
    }

    let grid = Array1::linspace(a, b, SCAN_POINTS);
    let found = grid.iter().find(|&&x| checked_eval(f, x).is_none());

    match found {
        Some(&x) => {
            debug!("Interior singularity located at x = {}", as_f64(x));
            Some(Singularity::Interior(x))
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(locate(&inv_sqrt, 0.0, 1.0), Some(Singularity::AtLowerBound));
        assert_eq!(
            locate(&|x: f64| (1.0 - x).powi(2).recip(), 0.0, 1.0),
            Some(Singularity::AtUpperBound)
        );
        // NaN counts as singular
        assert_eq!(locate(&|x: f64| x.ln(), -1.0, 1.0), Some(Singularity::AtLowerBound));
    }

    #[test]
    fn test_lower_bound_takes_precedence() {
        let f = |x: f64| (x * (1.0 - x)).recip();
        assert_eq!(locate(&f, 0.0, 1.0), Some(Singularity::AtLowerBound));
    }

    #[test]
    fn test_interior() {
        assert_eq!(
            locate(&inv_sqrt_abs_half, 0.0, 1.0),
            Some(Singularity::Interior(0.5))
        );
        // First failing probe is reported
        let f = |x: f64| if x > 0.705 && x < 0.9 { f64::NAN } else { 1.0 };
        match locate(&f, 0.0, 1.0) {
            Some(Singularity::Interior(x)) => assert!((x - 0.71).abs() < 1e-12),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_regular() {
        assert_eq!(locate(&square, 0.0, 1.0), None);
        assert_eq!(locate(&|x: f64| x.tan() * x.cos() + x, 0.0, 1.0), None);
    }

    #[test]
    fn test_missed_between_probes() {
        // 1/3 is not on the 101-point grid of [0, 1]
        let f = |x: f64| (x - 1.0 / 3.0).recip();
        assert_eq!(locate(&f, 0.0, 1.0), None);
    }

    #[test]
    fn test_point() {
        assert_eq!(Singularity::AtLowerBound.point(1.0, 2.0), 1.0);
        assert_eq!(Singularity::AtUpperBound.point(1.0, 2.0), 2.0);
        assert_eq!(Singularity::Interior(1.5).point(1.0, 2.0), 1.5);
    }

    #[test]
    fn test_checked_eval() {
        assert_eq!(checked_eval(&square, 2.0), Some(4.0));
        assert_eq!(checked_eval(&reciprocal, 0.0), None);
        assert_eq!(checked_eval(&|x: f64| x.sqrt(), -1.0), None);
    }
}
