//! Bounded hold-and-drag scroller with rubber-band edges.
//!
//! Unlike [`crate::LoopCarousel`] this one has hard bounds `[0, max]`: the
//! drag may overshoot with [`resist`](foundation::math::resist) damping and a
//! tween brings it back on release.

use foundation::math::resist_outside;
use foundation::time::Millis;
use runtime::Tween;

use crate::config::ScrollerConfig;
use crate::gesture::{GestureRecognizer, GestureStep, LockRule, PointerSample};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ScrollerMove {
    Ignored,
    /// Still deciding; native scrolling proceeds.
    Pending,
    /// Follow the pointer: apply `scroll_left` and cancel the event.
    Follow { scroll_left: f64, locked_now: bool },
}

#[derive(Debug, Copy, Clone)]
pub struct ScrollerRelease {
    /// The press barely moved; treat it as a click on what is underneath.
    pub tap: bool,
    /// Animation back inside the bounds, when the drag ended outside them.
    pub rebound: Option<Tween>,
}

#[derive(Debug, Clone)]
pub struct BoundedScroller {
    config: ScrollerConfig,
    gesture: GestureRecognizer,
    scroll_start: f64,
    max_scroll: f64,
}

impl BoundedScroller {
    pub fn new(config: ScrollerConfig) -> Self {
        let gesture = GestureRecognizer::new(
            LockRule::HorizontalOnly {
                threshold_px: config.lock_threshold_px,
            },
            false,
        );
        Self {
            config,
            gesture,
            scroll_start: 0.0,
            max_scroll: 0.0,
        }
    }

    /// `max_scroll` is `scrollWidth - clientWidth`, clamped at zero.
    pub fn press(&mut self, sample: PointerSample, scroll_left: f64, max_scroll: f64) {
        self.scroll_start = scroll_left;
        self.max_scroll = max_scroll.max(0.0);
        self.gesture.press(sample);
    }

    pub fn moved(&mut self, x: f64, y: f64) -> ScrollerMove {
        match self.gesture.moved(x, y) {
            GestureStep::Idle => ScrollerMove::Ignored,
            GestureStep::Undecided | GestureStep::Vertical => ScrollerMove::Pending,
            GestureStep::Horizontal { dx, locked_now } => {
                let raw = self.scroll_start - dx;
                ScrollerMove::Follow {
                    scroll_left: resist_outside(
                        raw,
                        self.max_scroll,
                        self.config.resistance_radius_px,
                    ),
                    locked_now,
                }
            }
        }
    }

    /// End the press. `current` is the element's scroll offset right now.
    pub fn release(&mut self, current: f64, now: Millis) -> Option<ScrollerRelease> {
        let summary = self.gesture.release()?;
        let tap = summary.travel_px < self.config.tap_slop_px;
        let target = current.clamp(0.0, self.max_scroll);
        let rebound = (target != current).then(|| {
            Tween::ease_out(current, target, now, self.config.rebound_duration_ms)
        });
        Some(ScrollerRelease { tap, rebound })
    }
}

/// Whether a wheel event is clearly horizontal (and so should not scroll
/// the strip natively).
pub fn is_strong_horizontal_wheel(delta_x: f64, delta_y: f64, shift: bool, ratio: f64) -> bool {
    shift || delta_x.abs() > delta_y.abs() * ratio
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Modality;

    fn scroller() -> BoundedScroller {
        BoundedScroller::new(ScrollerConfig::default())
    }

    #[test]
    fn follows_inside_bounds_after_lock() {
        let mut s = scroller();
        s.press(PointerSample::new(Modality::Mouse, 500.0, 100.0), 200.0, 1_000.0);
        assert_eq!(s.moved(495.0, 100.0), ScrollerMove::Pending);
        assert_eq!(
            s.moved(400.0, 104.0),
            ScrollerMove::Follow {
                scroll_left: 300.0,
                locked_now: true
            }
        );
    }

    #[test]
    fn overscroll_is_damped_and_rebounds() {
        let mut s = scroller();
        s.press(PointerSample::new(Modality::Mouse, 0.0, 0.0), 0.0, 500.0);
        let ScrollerMove::Follow { scroll_left, .. } = s.moved(300.0, 0.0) else {
            panic!("expected a horizontal follow");
        };
        assert!(scroll_left < 0.0 && scroll_left > -100.0);

        let release = s.release(scroll_left, Millis(0.0)).unwrap();
        assert!(!release.tap);
        let rebound = release.rebound.unwrap();
        assert_eq!(rebound.sample(Millis(300.0)), 0.0);
    }

    #[test]
    fn overscroll_past_max() {
        let mut s = scroller();
        s.press(PointerSample::new(Modality::Mouse, 0.0, 0.0), 480.0, 500.0);
        let ScrollerMove::Follow { scroll_left, .. } = s.moved(-200.0, 0.0) else {
            panic!("expected a horizontal follow");
        };
        assert!(scroll_left > 500.0 && scroll_left < 600.0);
        let rebound = s.release(scroll_left, Millis(0.0)).unwrap().rebound.unwrap();
        assert_eq!(rebound.to, 500.0);
    }

    #[test]
    fn short_press_is_a_tap() {
        let mut s = scroller();
        s.press(PointerSample::new(Modality::Mouse, 10.0, 10.0), 50.0, 500.0);
        s.moved(13.0, 11.0);
        let release = s.release(50.0, Millis(0.0)).unwrap();
        assert!(release.tap);
        assert!(release.rebound.is_none());
        assert!(s.release(50.0, Millis(0.0)).is_none());
    }

    #[test]
    fn vertical_intent_never_follows() {
        let mut s = scroller();
        s.press(PointerSample::new(Modality::Touch, 0.0, 0.0), 0.0, 500.0);
        assert_eq!(s.moved(20.0, 40.0), ScrollerMove::Pending);
        assert_eq!(s.moved(30.0, 90.0), ScrollerMove::Pending);
    }

    #[test]
    fn wheel_classification() {
        assert!(is_strong_horizontal_wheel(40.0, 10.0, false, 1.6));
        assert!(!is_strong_horizontal_wheel(15.0, 10.0, false, 1.6));
        assert!(is_strong_horizontal_wheel(0.0, 100.0, true, 1.6));
    }
}
