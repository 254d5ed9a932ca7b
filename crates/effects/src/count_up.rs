//! Statistic counters that tick from zero to their target once visible.

use foundation::time::Millis;
use runtime::Tween;
use tracing::debug;

/// Integer prefix of an attribute value, leniently: surrounding whitespace
/// and trailing garbage are ignored, anything unparsable counts as zero.
pub fn parse_target(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    match digits[..end].parse::<i64>() {
        Ok(v) => sign * v,
        Err(_) => {
            debug!(raw, "stat target is not a number");
            0
        }
    }
}

/// Text around the counted number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatFormat {
    pub prefix: String,
    pub suffix: String,
}

impl StatFormat {
    pub fn new(prefix: Option<String>, suffix: Option<String>) -> Self {
        Self {
            prefix: prefix.unwrap_or_default(),
            suffix: suffix.unwrap_or_default(),
        }
    }

    pub fn render(&self, value: i64) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CountUp {
    target: i64,
    tween: Tween,
}

impl CountUp {
    pub fn start(target: i64, now: Millis, duration_ms: f64) -> Self {
        Self {
            target,
            tween: Tween::ease_out(0.0, target as f64, now, duration_ms),
        }
    }

    /// Displayed value at `now`, rounded half up.
    pub fn value_at(&self, now: Millis) -> i64 {
        if self.tween.is_complete(now) {
            return self.target;
        }
        (self.tween.sample(now) + 0.5).floor() as i64
    }

    pub fn is_done(&self, now: Millis) -> bool {
        self.tween.is_complete(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn target_parsing_is_lenient() {
        assert_eq!(parse_target(Some("42")), 42);
        assert_eq!(parse_target(Some("  15+")), 15);
        assert_eq!(parse_target(Some("-7")), -7);
        assert_eq!(parse_target(Some("12.9")), 12);
        assert_eq!(parse_target(Some("abc")), 0);
        assert_eq!(parse_target(Some("")), 0);
        assert_eq!(parse_target(None), 0);
    }

    #[test]
    fn count_climbs_monotonically_and_lands_on_target() {
        let c = CountUp::start(250, Millis(1000.0), 1200.0);
        assert_eq!(c.value_at(Millis(1000.0)), 0);

        let mut prev = 0;
        for step in 1..=12 {
            let v = c.value_at(Millis(1000.0 + step as f64 * 100.0));
            assert!(v >= prev);
            prev = v;
        }
        assert_eq!(prev, 250);
        assert!(c.is_done(Millis(2200.0)));
        assert_eq!(c.value_at(Millis(99_999.0)), 250);
    }

    #[test]
    fn format_wraps_value() {
        let f = StatFormat::new(Some("+".into()), Some("%".into()));
        assert_eq!(f.render(98), "+98%");
        assert_eq!(StatFormat::default().render(3), "3");
    }
}
