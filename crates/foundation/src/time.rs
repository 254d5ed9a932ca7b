/// Time primitives.
///
/// Browser frame callbacks and `performance.now()` report milliseconds, so
/// that is the unit used everywhere above this crate.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
pub struct Millis(pub f64);

impl Millis {
    pub fn after(self, delay_ms: f64) -> Self {
        Millis(self.0 + delay_ms)
    }

    pub fn since(self, earlier: Millis) -> f64 {
        self.0 - earlier.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeSpan {
    pub start: Millis,
    pub end: Millis,
}

impl TimeSpan {
    pub fn starting_at(start: Millis, duration_ms: f64) -> Self {
        Self {
            start,
            end: start.after(duration_ms.max(0.0)),
        }
    }

    pub fn duration(&self) -> f64 {
        (self.end.0 - self.start.0).max(0.0)
    }

    /// Linear progress of `now` through the span, clamped to `[0, 1]`.
    ///
    /// A zero-length span is complete as soon as it starts.
    pub fn progress(&self, now: Millis) -> f64 {
        let d = self.duration();
        if d <= 0.0 {
            return if now.0 >= self.start.0 { 1.0 } else { 0.0 };
        }
        (now.since(self.start) / d).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, now: Millis) -> bool {
        now.0 >= self.end.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Millis, TimeSpan};

    #[test]
    fn progress_is_clamped() {
        let span = TimeSpan::starting_at(Millis(100.0), 200.0);
        assert_eq!(span.progress(Millis(0.0)), 0.0);
        assert_eq!(span.progress(Millis(200.0)), 0.5);
        assert_eq!(span.progress(Millis(1_000.0)), 1.0);
        assert!(span.is_complete(Millis(300.0)));
        assert!(!span.is_complete(Millis(299.0)));
    }

    #[test]
    fn zero_length_span_completes_immediately() {
        let span = TimeSpan::starting_at(Millis(5.0), 0.0);
        assert_eq!(span.duration(), 0.0);
        assert_eq!(span.progress(Millis(4.0)), 0.0);
        assert_eq!(span.progress(Millis(5.0)), 1.0);
    }

    #[test]
    fn negative_durations_collapse() {
        let span = TimeSpan::starting_at(Millis(10.0), -50.0);
        assert_eq!(span.end, Millis(10.0));
    }
}
