use foundation::math::{ease_out_cubic, lerp};
use foundation::time::{Millis, TimeSpan};

/// Scalar animation from `from` to `to` over a fixed span.
///
/// Sampling is pure: the caller passes the current frame time, so the same
/// timestamps always yield the same values.
#[derive(Debug, Copy, Clone)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub span: TimeSpan,
    easing: fn(f64) -> f64,
}

impl Tween {
    pub fn new(from: f64, to: f64, start: Millis, duration_ms: f64, easing: fn(f64) -> f64) -> Self {
        Self {
            from,
            to,
            span: TimeSpan::starting_at(start, duration_ms),
            easing,
        }
    }

    pub fn ease_out(from: f64, to: f64, start: Millis, duration_ms: f64) -> Self {
        Self::new(from, to, start, duration_ms, ease_out_cubic)
    }

    pub fn sample(&self, now: Millis) -> f64 {
        let t = self.span.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        lerp(self.from, self.to, (self.easing)(t))
    }

    pub fn is_complete(&self, now: Millis) -> bool {
        self.span.is_complete(now)
    }
}

#[cfg(test)]
mod tests {
    use super::Tween;
    use foundation::time::Millis;

    #[test]
    fn ease_out_tween_lands_exactly_on_target() {
        let t = Tween::ease_out(250.0, 300.0, Millis(0.0), 280.0);
        assert_eq!(t.sample(Millis(0.0)), 250.0);
        assert_eq!(t.sample(Millis(280.0)), 300.0);
        assert_eq!(t.sample(Millis(10_000.0)), 300.0);
        let mid = t.sample(Millis(140.0));
        assert!(mid > 275.0 && mid < 300.0);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let t = Tween::ease_out(0.0, 42.0, Millis(5.0), 0.0);
        assert!(t.is_complete(Millis(5.0)));
        assert_eq!(t.sample(Millis(5.0)), 42.0);
    }
}
