//! Endlessly looping autoplay carousel.
//!
//! `position` is the pixel offset from the first original slide, kept in
//! `[0, cycle_length)`. The strip is laid out as three identical blocks (see
//! [`SlidePlan`]) and rendered at `-(cycle_length + position)`, so the
//! middle block is on screen and any wrap lands on identical pixels.

use foundation::math::{wrap, wrap_index};
use foundation::time::Millis;
use runtime::{EventBus, Frame, Stamped, Tween};
use tracing::debug;

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::gesture::{GestureRecognizer, GestureStep, LockRule, PointerSample};
use crate::track::SlidePlan;

/// Reasons autoplay may be held. Each is tracked independently.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PauseSource {
    /// Pointer over the carousel (desktop only).
    Hover,
    /// Window lost focus.
    WindowBlur,
    /// A touch or drag is in progress (or just ended).
    Touch,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
struct PauseSources {
    hover: bool,
    window_blur: bool,
    touch: bool,
}

impl PauseSources {
    fn set(&mut self, source: PauseSource, paused: bool) {
        match source {
            PauseSource::Hover => self.hover = paused,
            PauseSource::WindowBlur => self.window_blur = paused,
            PauseSource::Touch => self.touch = paused,
        }
    }

    fn get(&self, source: PauseSource) -> bool {
        match source {
            PauseSource::Hover => self.hover,
            PauseSource::WindowBlur => self.window_blur,
            PauseSource::Touch => self.touch,
        }
    }

    fn any(&self) -> bool {
        self.hover || self.window_blur || self.touch
    }
}

/// Per-frame playback state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Playback {
    Autoplaying,
    Dragging,
    Paused,
}

/// How the host should treat the pointer event that produced a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No gesture in progress.
    Ignored,
    /// Direction not decided yet; do not cancel the event.
    Pending,
    /// Gesture belongs to page scrolling.
    Scrolling,
    /// The carousel is following the pointer; cancel the event's default.
    Dragging,
}

/// Outcome of lifting the pointer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// Nothing was pressed.
    Idle,
    /// A press that never became a horizontal drag.
    Released,
    /// A horizontal drag ended and a snap toward `index` started.
    Snapping { index: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    Measured { slide_width: f64 },
    DragStarted { position: f64 },
    SnapStarted { from: f64, index: usize },
    Settled { index: usize },
    Paused(PauseSource),
    Resumed(PauseSource),
}

#[derive(Debug)]
pub struct LoopCarousel {
    config: CarouselConfig,
    plan: SlidePlan,
    slide_width: f64,
    position: f64,
    dragging: bool,
    drag_start_x: f64,
    drag_start_position: f64,
    pauses: PauseSources,
    /// When the touch hold lifts after a gesture ends.
    touch_resume_at: Option<Millis>,
    settle: Option<(Tween, usize)>,
    gesture: GestureRecognizer,
    frame_index: u64,
    events: EventBus<CarouselEvent>,
}

impl LoopCarousel {
    pub fn new(original_count: usize, config: CarouselConfig) -> Result<Self, CarouselError> {
        if original_count == 0 {
            return Err(CarouselError::EmptyTrack);
        }
        let gesture = GestureRecognizer::new(
            LockRule::VerticalBiased {
                threshold_px: config.lock_threshold_px,
                bias_px: config.vertical_bias_px,
            },
            true,
        );
        Ok(Self {
            config,
            plan: SlidePlan::new(original_count),
            slide_width: 0.0,
            position: 0.0,
            dragging: false,
            drag_start_x: 0.0,
            drag_start_position: 0.0,
            pauses: PauseSources::default(),
            touch_resume_at: None,
            settle: None,
            gesture,
            frame_index: 0,
            events: EventBus::new(),
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn plan(&self) -> &SlidePlan {
        &self.plan
    }

    pub fn original_count(&self) -> usize {
        self.plan.original_count()
    }

    pub fn is_measured(&self) -> bool {
        self.slide_width > 0.0
    }

    pub fn cycle_length(&self) -> f64 {
        self.slide_width * self.original_count() as f64
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Adopt a fresh container width and restart from the first original.
    pub fn measure(&mut self, width: f64) -> Result<(), CarouselError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(CarouselError::LayoutNotReady { width });
        }
        self.slide_width = width;
        self.position = 0.0;
        self.settle = None;
        debug!(
            slide_width = width,
            slides = self.plan.len(),
            "carousel measured"
        );
        self.events.emit(
            self.frame_index,
            CarouselEvent::Measured { slide_width: width },
        );
        Ok(())
    }

    /// Nearest original slide, always in `[0, original_count)`.
    pub fn current_index(&self) -> usize {
        if !self.is_measured() {
            return 0;
        }
        let approx = (self.position / self.slide_width).round() as i64;
        wrap_index(approx, self.original_count())
    }

    pub fn playback(&self) -> Playback {
        if self.dragging {
            Playback::Dragging
        } else if self.pauses.any() {
            Playback::Paused
        } else {
            Playback::Autoplaying
        }
    }

    pub fn is_paused_by(&self, source: PauseSource) -> bool {
        self.pauses.get(source)
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Horizontal translation to apply to the track, in pixels. The leading
    /// clones sit left of the first original.
    pub fn translate_x(&self) -> f64 {
        -(self.slide_width * self.plan.first_original() as f64 + self.position)
    }

    pub fn set_paused(&mut self, source: PauseSource, paused: bool) {
        if self.pauses.get(source) == paused {
            return;
        }
        self.pauses.set(source, paused);
        if source == PauseSource::Touch && !paused {
            self.touch_resume_at = None;
        }
        let event = if paused {
            CarouselEvent::Paused(source)
        } else {
            CarouselEvent::Resumed(source)
        };
        self.events.emit(self.frame_index, event);
    }

    /// Advance one display frame.
    pub fn tick(&mut self, frame: Frame) {
        self.frame_index = frame.index;
        if !self.is_measured() {
            return;
        }

        if let Some(at) = self.touch_resume_at
            && !self.dragging
            && frame.time >= at
        {
            self.set_paused(PauseSource::Touch, false);
        }

        if let Some((tween, index)) = self.settle {
            if tween.is_complete(frame.time) {
                self.settle = None;
                self.position = self.slide_width * index as f64;
                self.events.emit(frame.index, CarouselEvent::Settled { index });
            } else {
                self.position = tween.sample(frame.time);
            }
            return;
        }

        if self.config.autoplay && self.playback() == Playback::Autoplaying {
            self.position += self.config.speed_px_per_frame;
        }
        self.position = wrap(self.position, self.cycle_length());
    }

    /// Jump (or animate) to an original slide.
    pub fn snap_to(&mut self, index: usize, animate: bool, now: Millis) {
        if !self.is_measured() {
            return;
        }
        let index = index % self.original_count();
        let target = self.slide_width * index as f64;
        if animate {
            self.start_settle(target, index, now);
        } else {
            self.settle = None;
            self.position = target;
        }
    }

    fn start_settle(&mut self, target: f64, index: usize, now: Millis) {
        let tween = Tween::ease_out(self.position, target, now, self.config.snap_duration_ms);
        self.events.emit(
            self.frame_index,
            CarouselEvent::SnapStarted {
                from: self.position,
                index,
            },
        );
        self.settle = Some((tween, index));
    }

    /// Pointer, touch or mouse press over the carousel.
    pub fn pointer_down(&mut self, sample: PointerSample) {
        // A press interrupts a running snap where it currently is.
        if self.settle.take().is_some() {
            self.position = wrap(self.position, self.cycle_length());
        }
        self.touch_resume_at = None;
        self.drag_start_x = sample.x;
        self.drag_start_position = self.position;
        self.set_paused(PauseSource::Touch, true);
        if self.gesture.press(sample) {
            self.begin_drag();
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> MoveOutcome {
        match self.gesture.moved(x, y) {
            GestureStep::Idle => MoveOutcome::Ignored,
            GestureStep::Undecided => MoveOutcome::Pending,
            GestureStep::Vertical => MoveOutcome::Scrolling,
            GestureStep::Horizontal { locked_now, .. } => {
                if locked_now {
                    self.begin_drag();
                }
                self.follow(x);
                MoveOutcome::Dragging
            }
        }
    }

    fn begin_drag(&mut self) {
        self.dragging = true;
        self.events.emit(
            self.frame_index,
            CarouselEvent::DragStarted {
                position: self.position,
            },
        );
    }

    fn follow(&mut self, x: f64) {
        // Drag right moves the strip right, i.e. toward earlier slides.
        let raw = self.drag_start_position - (x - self.drag_start_x);
        self.position = wrap(raw, self.cycle_length());
    }

    pub fn pointer_up(&mut self, now: Millis) -> ReleaseOutcome {
        let Some(summary) = self.gesture.release() else {
            return ReleaseOutcome::Idle;
        };
        self.dragging = false;
        if !summary.was_horizontal() {
            self.touch_resume_at = Some(now.after(self.config.touch_resume_delay_ms));
            return ReleaseOutcome::Released;
        }

        let index = self.current_index();
        if self.is_measured() {
            // Settle the short way (possibly onto `cycle_length`), then
            // normalize once the tween lands.
            let target = (self.position / self.slide_width).round() * self.slide_width;
            self.start_settle(target, index, now);
        }
        // The settle holds the position until it lands, so the hold can
        // lift while the snap is still running.
        self.touch_resume_at = Some(now.after(self.config.drag_resume_delay_ms));
        debug!(index, "carousel drag released");
        ReleaseOutcome::Snapping { index }
    }

    /// Drain events raised since the last call.
    pub fn drain_events(&mut self) -> Vec<Stamped<CarouselEvent>> {
        self.events.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Modality;
    use runtime::FrameClock;

    fn carousel(n: usize, width: f64) -> LoopCarousel {
        let mut c = LoopCarousel::new(n, CarouselConfig::default()).unwrap();
        c.measure(width).unwrap();
        c
    }

    fn run_frames(c: &mut LoopCarousel, clock: &mut FrameClock, start_ms: f64, frames: usize) -> f64 {
        let mut t = start_ms;
        for _ in 0..frames {
            c.tick(clock.tick(Millis(t)));
            t += 16.0;
        }
        t
    }

    #[test]
    fn empty_track_is_rejected() {
        assert_eq!(
            LoopCarousel::new(0, CarouselConfig::default()).unwrap_err(),
            CarouselError::EmptyTrack
        );
    }

    #[test]
    fn setup_triples_the_strip_and_adopts_width() {
        for n in 1..=6 {
            let c = carousel(n, 320.0);
            assert_eq!(c.plan().len(), 3 * n);
            assert_eq!(c.cycle_length(), 320.0 * n as f64);
            assert_eq!(c.position(), 0.0);
            assert_eq!(c.current_index(), 0);
        }
    }

    #[test]
    fn zero_or_nan_width_is_layout_not_ready() {
        let mut c = LoopCarousel::new(3, CarouselConfig::default()).unwrap();
        assert!(matches!(
            c.measure(0.0),
            Err(CarouselError::LayoutNotReady { .. })
        ));
        assert!(c.measure(f64::NAN).is_err());
        assert!(!c.is_measured());
        // Frames before measurement are inert.
        c.tick(Frame::first(Millis(0.0)));
        assert_eq!(c.position(), 0.0);
    }

    #[test]
    fn autoplay_scenario_five_slides() {
        let mut c = carousel(5, 300.0);
        let mut clock = FrameClock::new();
        run_frames(&mut c, &mut clock, 0.0, 500);
        assert!((c.position() - 900.0).abs() < 1e-6);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn position_stays_in_cycle_every_frame() {
        let mut c = carousel(3, 97.0);
        let mut clock = FrameClock::new();
        let mut t = 0.0;
        for _ in 0..2_000 {
            c.tick(clock.tick(Millis(t)));
            t += 16.0;
            assert!(c.position() >= 0.0 && c.position() < c.cycle_length());
        }
    }

    #[test]
    fn render_offset_shows_middle_block() {
        let c = carousel(4, 200.0);
        assert_eq!(c.translate_x(), -800.0);
    }

    #[test]
    fn drag_scenario_snaps_to_next_slide() {
        let mut c = carousel(5, 300.0);
        c.pointer_down(PointerSample::new(Modality::Touch, 500.0, 200.0));
        assert_eq!(c.pointer_move(490.0, 201.0), MoveOutcome::Dragging);
        assert_eq!(c.playback(), Playback::Dragging);
        assert_eq!(c.pointer_move(250.0, 205.0), MoveOutcome::Dragging);
        assert_eq!(c.position(), 250.0);

        let outcome = c.pointer_up(Millis(1_000.0));
        assert_eq!(outcome, ReleaseOutcome::Snapping { index: 1 });
        assert!(c.is_settling());

        let mut clock = FrameClock::new();
        c.tick(clock.tick(Millis(1_140.0)));
        assert!(c.position() > 250.0 && c.position() < 300.0);
        c.tick(clock.tick(Millis(1_280.0)));
        assert_eq!(c.position(), 300.0);
        assert!(!c.is_settling());
    }

    #[test]
    fn speed_does_not_move_a_drag() {
        let mut c = carousel(5, 300.0);
        let mut clock = FrameClock::new();
        c.pointer_down(PointerSample::new(Modality::Mouse, 100.0, 0.0));
        c.pointer_move(80.0, 0.0);
        let held = c.position();
        run_frames(&mut c, &mut clock, 0.0, 120);
        assert_eq!(c.position(), held);
        assert_eq!(c.playback(), Playback::Dragging);
    }

    #[test]
    fn autoplay_resumes_after_drag_delay_while_snap_holds_position() {
        let mut c = carousel(5, 300.0);
        let cfg = c.config().clone();
        let mut clock = FrameClock::new();
        c.pointer_down(PointerSample::new(Modality::Mouse, 100.0, 0.0));
        c.pointer_move(40.0, 0.0);
        assert_eq!(c.pointer_up(Millis(0.0)), ReleaseOutcome::Snapping { index: 0 });
        assert_eq!(c.playback(), Playback::Paused);

        let resume = cfg.drag_resume_delay_ms;
        assert!(resume < cfg.snap_duration_ms);
        c.tick(clock.tick(Millis(resume - 1.0)));
        assert_eq!(c.playback(), Playback::Paused);

        c.tick(clock.tick(Millis(resume)));
        assert_eq!(c.playback(), Playback::Autoplaying);
        assert!(c.is_settling());
        assert!(c.position() > 0.0 && c.position() < 60.0);

        c.tick(clock.tick(Millis(cfg.snap_duration_ms)));
        assert!(!c.is_settling());
        assert_eq!(c.position(), 0.0);

        c.tick(clock.tick(Millis(cfg.snap_duration_ms + 16.0)));
        assert!((c.position() - cfg.speed_px_per_frame).abs() < 1e-9);
    }

    #[test]
    fn snap_lands_on_index_for_arbitrary_release_points() {
        let mut clock = FrameClock::new();
        let mut t = 0.0;
        for dx in [-1_740.0, -451.0, -149.0, 0.5, 151.0, 299.0, 1_234.0] {
            let mut c = carousel(5, 300.0);
            c.pointer_down(PointerSample::new(Modality::Mouse, 0.0, 0.0));
            c.pointer_move(dx, 0.0);
            let ReleaseOutcome::Snapping { index } = c.pointer_up(Millis(t)) else {
                panic!("expected a snap for dx {dx}");
            };
            assert!(index < 5);
            t += 1_000.0;
            c.tick(clock.tick(Millis(t)));
            assert_eq!(c.position(), 300.0 * index as f64);
        }
    }

    #[test]
    fn snap_near_cycle_end_goes_the_short_way() {
        let mut c = carousel(5, 300.0);
        c.pointer_down(PointerSample::new(Modality::Mouse, 0.0, 0.0));
        // Drag right by 100: position wraps to 1400, nearest slide is index 0.
        c.pointer_move(100.0, 0.0);
        assert_eq!(c.position(), 1_400.0);
        assert_eq!(c.pointer_up(Millis(0.0)), ReleaseOutcome::Snapping { index: 0 });
        let mut clock = FrameClock::new();
        c.tick(clock.tick(Millis(100.0)));
        assert!(c.position() > 1_400.0 && c.position() <= 1_500.0);
        c.tick(clock.tick(Millis(300.0)));
        assert_eq!(c.position(), 0.0);
    }

    #[test]
    fn vertical_touch_yields_and_resumes_after_touch_delay() {
        let mut c = carousel(5, 300.0);
        let mut clock = FrameClock::new();
        c.pointer_down(PointerSample::new(Modality::Touch, 0.0, 0.0));
        assert_eq!(c.playback(), Playback::Paused);
        assert_eq!(c.pointer_move(2.0, 30.0), MoveOutcome::Scrolling);
        assert_eq!(c.pointer_move(200.0, 30.0), MoveOutcome::Scrolling);
        assert_eq!(c.position(), 0.0);
        assert_eq!(c.pointer_up(Millis(0.0)), ReleaseOutcome::Released);
        c.tick(clock.tick(Millis(179.0)));
        assert_eq!(c.playback(), Playback::Paused);
        c.tick(clock.tick(Millis(180.0)));
        assert_eq!(c.playback(), Playback::Autoplaying);
    }

    #[test]
    fn hover_pause_keeps_position() {
        let mut c = carousel(5, 300.0);
        let mut clock = FrameClock::new();
        let t = run_frames(&mut c, &mut clock, 0.0, 10);
        let before = c.position();
        c.set_paused(PauseSource::Hover, true);
        let t = run_frames(&mut c, &mut clock, t, 30);
        assert_eq!(c.position(), before);
        c.set_paused(PauseSource::Hover, false);
        run_frames(&mut c, &mut clock, t, 1);
        assert!((c.position() - (before + 1.8)).abs() < 1e-9);
    }

    #[test]
    fn pause_sources_are_independent() {
        let mut c = carousel(2, 100.0);
        c.set_paused(PauseSource::WindowBlur, true);
        c.set_paused(PauseSource::Hover, true);
        c.set_paused(PauseSource::Hover, false);
        assert_eq!(c.playback(), Playback::Paused);
        assert!(c.is_paused_by(PauseSource::WindowBlur));
        c.set_paused(PauseSource::WindowBlur, false);
        assert_eq!(c.playback(), Playback::Autoplaying);
    }

    #[test]
    fn remeasure_resets_to_start() {
        let mut c = carousel(5, 300.0);
        let mut clock = FrameClock::new();
        run_frames(&mut c, &mut clock, 0.0, 100);
        assert!(c.position() > 0.0);
        c.measure(420.0).unwrap();
        assert_eq!(c.position(), 0.0);
        assert_eq!(c.cycle_length(), 2_100.0);
    }

    #[test]
    fn remeasure_mid_snap_restarts_from_the_new_layout() {
        let mut c = carousel(5, 300.0);
        let speed = c.config().speed_px_per_frame;
        let mut clock = FrameClock::new();
        c.snap_to(2, true, Millis(0.0));
        c.tick(clock.tick(Millis(100.0)));
        assert!(c.is_settling());

        c.measure(420.0).unwrap();
        assert!(!c.is_settling());
        assert_eq!(c.translate_x(), -2_100.0);

        clock.reset();
        let frame = clock.tick(Millis(5_000.0));
        assert_eq!(frame.index, 0);
        c.tick(frame);
        assert!((c.position() - speed).abs() < 1e-9);
    }

    #[test]
    fn press_during_snap_freezes_it() {
        let mut c = carousel(5, 300.0);
        c.pointer_down(PointerSample::new(Modality::Mouse, 0.0, 0.0));
        c.pointer_move(-200.0, 0.0);
        c.pointer_up(Millis(0.0));
        let mut clock = FrameClock::new();
        c.tick(clock.tick(Millis(50.0)));
        let mid = c.position();
        c.pointer_down(PointerSample::new(Modality::Mouse, 0.0, 0.0));
        assert!(!c.is_settling());
        assert_eq!(c.position(), mid);
    }

    #[test]
    fn events_trace_a_drag() {
        let mut c = carousel(3, 100.0);
        c.drain_events();
        c.pointer_down(PointerSample::new(Modality::Mouse, 0.0, 0.0));
        c.pointer_move(-120.0, 0.0);
        c.pointer_up(Millis(0.0));
        let kinds: Vec<CarouselEvent> = c.drain_events().into_iter().map(|s| s.event).collect();
        assert_eq!(
            kinds,
            vec![
                CarouselEvent::Paused(PauseSource::Touch),
                CarouselEvent::DragStarted { position: 0.0 },
                CarouselEvent::SnapStarted {
                    from: 120.0,
                    index: 1
                },
            ]
        );
    }

    #[test]
    fn snap_to_without_animation_is_immediate() {
        let mut c = carousel(4, 250.0);
        c.snap_to(6, false, Millis(0.0));
        assert_eq!(c.position(), 500.0);
        assert_eq!(c.current_index(), 2);
    }
}
