use crate::utils::cast;
use num::Float;
use std::fmt;

/// Quadrature rule used to produce a single estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuadratureRule {
    LeftRect,
    RightRect,
    MidRect,
    Trapezoid,
    Simpson,
}

impl QuadratureRule {
    /// All rules, in menu order.
    pub const ALL: [QuadratureRule; 5] = [
        QuadratureRule::LeftRect,
        QuadratureRule::RightRect,
        QuadratureRule::MidRect,
        QuadratureRule::Trapezoid,
        QuadratureRule::Simpson,
    ];

    /// Estimate the integral of `f` over `[a, b]` with `n` sub-intervals.
    ///
    /// # Panics
    ///
    /// If `n == 0`, or if `n` is odd for [`QuadratureRule::Simpson`].
    pub fn evaluate<T, F>(self, f: F, a: T, b: T, n: usize) -> T
    where
        T: Float,
        F: Fn(T) -> T,
    {
        match self {
            QuadratureRule::LeftRect => left_rectangle(f, a, b, n),
            QuadratureRule::RightRect => right_rectangle(f, a, b, n),
            QuadratureRule::MidRect => midpoint_rectangle(f, a, b, n),
            QuadratureRule::Trapezoid => trapezoid(f, a, b, n),
            QuadratureRule::Simpson => simpson(f, a, b, n),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            QuadratureRule::LeftRect => "Left rectangle rule",
            QuadratureRule::RightRect => "Right rectangle rule",
            QuadratureRule::MidRect => "Midpoint rectangle rule",
            QuadratureRule::Trapezoid => "Trapezoidal rule",
            QuadratureRule::Simpson => "Simpson's rule",
        }
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Width of one of `n` equal sub-intervals of `[a, b]`.
fn step<T: Float>(a: T, b: T, n: usize) -> T {
    if n == 0 {
        panic!("Quadrature rules require a positive partition count.");
    }
    (b - a) / cast::<T, _>(n)
}

/// Sum `f(a + (i + offset) h)` for `i` in `range`.
fn node_sum<T, F>(f: &F, a: T, h: T, offset: T, range: std::ops::Range<usize>) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    range.fold(T::zero(), |acc, i| {
        acc + f(a + (cast::<T, _>(i) + offset) * h)
    })
}

/// Samples at the left edge of every sub-interval.
pub fn left_rectangle<T, F>(f: F, a: T, b: T, n: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let h = step(a, b, n);
    node_sum(&f, a, h, T::zero(), 0..n) * h
}

/// Samples at the right edge of every sub-interval.
pub fn right_rectangle<T, F>(f: F, a: T, b: T, n: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let h = step(a, b, n);
    node_sum(&f, a, h, T::one(), 0..n) * h
}

/// Samples at the center of every sub-interval.
pub fn midpoint_rectangle<T, F>(f: F, a: T, b: T, n: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let h = step(a, b, n);
    node_sum(&f, a, h, cast(0.5), 0..n) * h
}

/// Composite trapezoidal rule.
pub fn trapezoid<T, F>(f: F, a: T, b: T, n: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let h = step(a, b, n);
    let two: T = cast(2);
    let interior = node_sum(&f, a, h, T::zero(), 1..n);

    (f(a) + f(b) + two * interior) * h / two
}

/// Composite Simpson rule: weight 4 on odd nodes, 2 on even interior nodes.
///
/// # Panics
///
/// If `n` is zero or odd.
pub fn simpson<T, F>(f: F, a: T, b: T, n: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    if n % 2 != 0 {
        panic!("Simpson's rule requires an even partition count, got {}.", n);
    }
    let h = step(a, b, n);
    let two: T = cast(2);

    // Odd nodes sit at a + (2i + 1) h, even interior nodes at a + 2i h.
    let sum_odd = node_sum(&f, a, two * h, cast(0.5), 0..n / 2);
    let sum_even = node_sum(&f, a, two * h, T::zero(), 1..n / 2);

    (f(a) + f(b) + cast::<T, _>(4) * sum_odd + two * sum_even) * h / cast::<T, _>(3)
}
