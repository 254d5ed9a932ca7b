/// Rubber-band damping for overscroll.
///
/// Grows linearly for small `excess` and saturates at `radius`, which gives
/// the decelerating pull past a scroll bound.
#[inline]
pub fn resist(excess: f64, radius: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    radius * (excess / radius).tanh()
}

/// Apply [`resist`] to whatever part of `raw` lies outside `[0, max]`.
pub fn resist_outside(raw: f64, max: f64, radius: f64) -> f64 {
    let max = max.max(0.0);
    if raw < 0.0 {
        -resist(-raw, radius)
    } else if raw > max {
        max + resist(raw - max, radius)
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resist_saturates_at_radius() {
        assert_eq!(resist(0.0, 100.0), 0.0);
        assert!(resist(10.0, 100.0) < 10.0);
        assert!(resist(10_000.0, 100.0) <= 100.0);
        assert!(resist(10_000.0, 100.0) > 99.9);
    }

    #[test]
    fn resist_outside_passes_through_in_range() {
        assert_eq!(resist_outside(50.0, 400.0, 100.0), 50.0);
        assert!(resist_outside(-50.0, 400.0, 100.0) > -50.0);
        assert!(resist_outside(-50.0, 400.0, 100.0) < 0.0);
        let past = resist_outside(450.0, 400.0, 100.0);
        assert!(past > 400.0 && past < 450.0);
    }
}
