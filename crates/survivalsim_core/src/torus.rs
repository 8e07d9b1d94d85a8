//! Geometry on the wrap-around playing field.

/// Wraps a coordinate into `[0, size)`.
///
/// `rem_euclid` can round a tiny negative value up to exactly `size`, so that
/// case is folded back to zero. Non-finite input lands on zero.
#[must_use]
pub fn wrap(value: f64, size: f64) -> f64 {
    if !value.is_finite() || size <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(size);
    if wrapped >= size {
        0.0
    } else {
        wrapped
    }
}
