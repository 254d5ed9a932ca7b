/// Wrap `value` into `[0, period)`.
///
/// Non-finite or non-positive periods leave the value untouched.
#[inline]
pub fn wrap(value: f64, period: f64) -> f64 {
    if !(period > 0.0) || !period.is_finite() {
        return value;
    }
    let w = value.rem_euclid(period);
    // rem_euclid can round up to `period` for tiny negative inputs.
    if w >= period { 0.0 } else { w }
}

/// Wrap an integer index into `[0, len)`.
#[inline]
pub fn wrap_index(index: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.rem_euclid(len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_handles_both_directions() {
        assert_eq!(wrap(0.0, 1500.0), 0.0);
        assert_eq!(wrap(1500.0, 1500.0), 0.0);
        assert_eq!(wrap(1600.0, 1500.0), 100.0);
        assert_eq!(wrap(-100.0, 1500.0), 1400.0);
        assert_eq!(wrap(3100.0, 1500.0), 100.0);
    }

    #[test]
    fn wrap_never_returns_the_period() {
        let w = wrap(-1e-18, 1500.0);
        assert!((0.0..1500.0).contains(&w));
    }

    #[test]
    fn wrap_ignores_degenerate_period() {
        assert_eq!(wrap(42.0, 0.0), 42.0);
        assert_eq!(wrap(42.0, f64::NAN), 42.0);
    }

    #[test]
    fn wrap_index_is_euclidean() {
        assert_eq!(wrap_index(-1, 5), 4);
        assert_eq!(wrap_index(5, 5), 0);
        assert_eq!(wrap_index(7, 5), 2);
        assert_eq!(wrap_index(3, 0), 0);
    }
}
