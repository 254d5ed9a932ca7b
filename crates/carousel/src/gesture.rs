//! Direction-aware gesture recognition shared by every input modality.
//!
//! Mouse, touch and pen all feed the same [`GestureRecognizer`]; the only
//! modality-specific rule is whether a press commits to horizontal at once.

/// Input device behind a pointer sample.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Modality {
    #[default]
    Mouse,
    Touch,
    Pen,
}

impl Modality {
    /// Map a `PointerEvent.pointerType` string.
    pub fn from_pointer_type(s: &str) -> Self {
        match s {
            "touch" => Modality::Touch,
            "pen" => Modality::Pen,
            _ => Modality::Mouse,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerSample {
    pub modality: Modality,
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn new(modality: Modality, x: f64, y: f64) -> Self {
        Self { modality, x, y }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// How an undecided gesture commits to an axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LockRule {
    /// Horizontal when `|dx| > threshold` and `|dx| > |dy| + bias`;
    /// vertical when `|dy| > threshold` and `|dy| >= |dx|`.
    VerticalBiased { threshold_px: f64, bias_px: f64 },
    /// Horizontal when `|dx| > max(threshold, |dy|)`; never locks vertical,
    /// the page simply keeps scrolling.
    HorizontalOnly { threshold_px: f64 },
}

impl LockRule {
    pub fn decide(&self, dx: f64, dy: f64) -> Option<Axis> {
        let (adx, ady) = (dx.abs(), dy.abs());
        match *self {
            LockRule::VerticalBiased {
                threshold_px,
                bias_px,
            } => {
                if adx > threshold_px && adx > ady + bias_px {
                    Some(Axis::Horizontal)
                } else if ady > threshold_px && ady >= adx {
                    Some(Axis::Vertical)
                } else {
                    None
                }
            }
            LockRule::HorizontalOnly { threshold_px } => {
                (adx > threshold_px.max(ady)).then_some(Axis::Horizontal)
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Phase {
    Idle,
    Pending,
    Locked(Axis),
}

/// Result of feeding a move sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GestureStep {
    /// No gesture in progress.
    Idle,
    /// Not enough movement to pick an axis; leave the event alone.
    Undecided,
    /// The gesture belongs to native vertical scrolling.
    Vertical,
    /// Horizontal drag; `dx` is measured from the press point.
    Horizontal { dx: f64, locked_now: bool },
}

/// What a finished gesture looked like.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GestureSummary {
    pub modality: Modality,
    pub axis: Option<Axis>,
    /// Horizontal distance covered while locked horizontally, counted from
    /// the press point. Zero for gestures that never locked.
    pub travel_px: f64,
}

impl GestureSummary {
    pub fn was_horizontal(&self) -> bool {
        self.axis == Some(Axis::Horizontal)
    }
}

#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    rule: LockRule,
    /// Mouse presses skip the axis decision (there is no page pan to yield to).
    mouse_locks_immediately: bool,
    phase: Phase,
    modality: Modality,
    origin: [f64; 2],
    last_x: f64,
    travel_px: f64,
}

impl GestureRecognizer {
    pub fn new(rule: LockRule, mouse_locks_immediately: bool) -> Self {
        Self {
            rule,
            mouse_locks_immediately,
            phase: Phase::Idle,
            modality: Modality::default(),
            origin: [0.0, 0.0],
            last_x: 0.0,
            travel_px: 0.0,
        }
    }

    /// Start a gesture. Returns `true` when it is already a horizontal drag.
    pub fn press(&mut self, sample: PointerSample) -> bool {
        self.modality = sample.modality;
        self.origin = [sample.x, sample.y];
        self.last_x = sample.x;
        self.travel_px = 0.0;
        let immediate = self.mouse_locks_immediately && sample.modality == Modality::Mouse;
        self.phase = if immediate {
            Phase::Locked(Axis::Horizontal)
        } else {
            Phase::Pending
        };
        immediate
    }

    pub fn moved(&mut self, x: f64, y: f64) -> GestureStep {
        let dx = x - self.origin[0];
        let dy = y - self.origin[1];
        let locked_now = match self.phase {
            Phase::Idle => return GestureStep::Idle,
            Phase::Locked(Axis::Vertical) => return GestureStep::Vertical,
            Phase::Locked(Axis::Horizontal) => false,
            Phase::Pending => match self.rule.decide(dx, dy) {
                None => return GestureStep::Undecided,
                Some(Axis::Vertical) => {
                    self.phase = Phase::Locked(Axis::Vertical);
                    return GestureStep::Vertical;
                }
                Some(Axis::Horizontal) => {
                    self.phase = Phase::Locked(Axis::Horizontal);
                    true
                }
            },
        };
        self.travel_px += (x - self.last_x).abs();
        self.last_x = x;
        GestureStep::Horizontal { dx, locked_now }
    }

    /// Finish the gesture; `None` when nothing was in progress.
    pub fn release(&mut self) -> Option<GestureSummary> {
        let axis = match self.phase {
            Phase::Idle => return None,
            Phase::Pending => None,
            Phase::Locked(axis) => Some(axis),
        };
        self.phase = Phase::Idle;
        Some(GestureSummary {
            modality: self.modality,
            axis,
            travel_px: self.travel_px,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn biased() -> GestureRecognizer {
        GestureRecognizer::new(
            LockRule::VerticalBiased {
                threshold_px: 8.0,
                bias_px: 4.0,
            },
            true,
        )
    }

    #[test]
    fn diagonal_ambiguity_prefers_vertical() {
        let rule = LockRule::VerticalBiased {
            threshold_px: 8.0,
            bias_px: 4.0,
        };
        assert_eq!(rule.decide(10.0, 10.0), Some(Axis::Vertical));
        assert_eq!(rule.decide(12.0, 9.0), None);
        assert_eq!(rule.decide(14.0, 9.0), Some(Axis::Horizontal));
        assert_eq!(rule.decide(-14.0, 2.0), Some(Axis::Horizontal));
        assert_eq!(rule.decide(3.0, 3.0), None);
    }

    #[test]
    fn horizontal_only_rule() {
        let rule = LockRule::HorizontalOnly { threshold_px: 12.0 };
        assert_eq!(rule.decide(12.0, 0.0), None);
        assert_eq!(rule.decide(13.0, 0.0), Some(Axis::Horizontal));
        assert_eq!(rule.decide(20.0, 25.0), None);
    }

    #[test]
    fn touch_waits_for_intent_then_locks() {
        let mut g = biased();
        assert!(!g.press(PointerSample::new(Modality::Touch, 100.0, 100.0)));
        assert_eq!(g.moved(103.0, 101.0), GestureStep::Undecided);
        assert_eq!(
            g.moved(80.0, 102.0),
            GestureStep::Horizontal {
                dx: -20.0,
                locked_now: true
            }
        );
        assert_eq!(
            g.moved(70.0, 130.0),
            GestureStep::Horizontal {
                dx: -30.0,
                locked_now: false
            }
        );
        let summary = g.release().unwrap();
        assert!(summary.was_horizontal());
        assert_eq!(summary.travel_px, 30.0);
        assert_eq!(g.release(), None);
    }

    #[test]
    fn vertical_lock_ignores_later_horizontal_motion() {
        let mut g = biased();
        g.press(PointerSample::new(Modality::Touch, 0.0, 0.0));
        assert_eq!(g.moved(1.0, 20.0), GestureStep::Vertical);
        assert_eq!(g.moved(200.0, 20.0), GestureStep::Vertical);
        assert_eq!(g.release().unwrap().axis, Some(Axis::Vertical));
    }

    #[test]
    fn mouse_press_locks_immediately() {
        let mut g = biased();
        assert!(g.press(PointerSample::new(Modality::Mouse, 0.0, 0.0)));
        assert_eq!(
            g.moved(2.0, 30.0),
            GestureStep::Horizontal {
                dx: 2.0,
                locked_now: false
            }
        );
    }

    #[test]
    fn idle_recognizer_ignores_moves_and_releases() {
        let mut g = biased();
        assert_eq!(g.moved(50.0, 0.0), GestureStep::Idle);
        assert_eq!(g.release(), None);
    }

    #[test]
    fn pointer_type_mapping() {
        assert_eq!(Modality::from_pointer_type("touch"), Modality::Touch);
        assert_eq!(Modality::from_pointer_type("pen"), Modality::Pen);
        assert_eq!(Modality::from_pointer_type("mouse"), Modality::Mouse);
        assert_eq!(Modality::from_pointer_type(""), Modality::Mouse);
    }
}
