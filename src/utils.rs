use num::{Float, ToPrimitive};

/// Convert a numeric constant into the working float type. Constants that
/// cannot be represented become NaN instead of panicking.
#[inline]
pub(crate) fn cast<T: Float, U: ToPrimitive>(x: U) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

/// Lossy view of a working float as `f64`, used for error payloads and logs.
#[inline]
pub(crate) fn as_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// True if `value` is infinite or NaN.
#[inline]
pub fn is_singular_value<T: Float>(value: T) -> bool {
    !value.is_finite()
}

/// True if `a < b` and both bounds are finite.
#[inline]
pub(crate) fn is_ordered_interval<T: Float>(a: T, b: T) -> bool {
    a.is_finite() && b.is_finite() && a < b
}
