//! Browser binding for the looping carousel: clones the slides, sizes them,
//! drives the frame loop and feeds mouse, touch, hover and focus input into
//! [`LoopCarousel`].

use std::cell::RefCell;
use std::rc::Rc;

use carousel::{
    CarouselConfig, LoopCarousel, Modality, MoveOutcome, PauseSource, PointerSample,
    ReleaseOutcome, SlideRole,
};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{AnimationFrame, request_animation_frame};
use gloo_timers::callback::{Interval, Timeout};
use runtime::FrameClock;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlImageElement, MouseEvent, Node, TouchEvent, Window,
};

use crate::Component;
use crate::dom;
use crate::error::SiteResult;

pub struct CarouselView {
    window: Window,
    container: HtmlElement,
    track: HtmlElement,
    slides: Vec<Element>,
    state: RefCell<LoopCarousel>,
    clock: RefCell<FrameClock>,
    frame: RefCell<Option<AnimationFrame>>,
    retry: RefCell<Option<Timeout>>,
    align: RefCell<Option<Timeout>>,
    hover_poll: RefCell<Option<Interval>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl CarouselView {
    /// Build the looping strip inside `track`. `Ok(None)` when the track
    /// has no slides.
    pub fn install(
        window: &Window,
        document: &Document,
        container: HtmlElement,
        track: HtmlElement,
        config: &CarouselConfig,
        hover_fine: bool,
    ) -> SiteResult<Option<Rc<Self>>> {
        let originals = dom::children(&track);
        if originals.is_empty() {
            debug!("carousel track is empty");
            return Ok(None);
        }
        let state = LoopCarousel::new(originals.len(), config.clone())?;

        dom::set_style(&track, "display", "flex");
        dom::set_style(&track, "will-change", "transform");
        clone_slides(document, &track, &originals, &state)?;
        let slides = dom::children(&track);
        if slides.len() != state.plan().len() {
            warn!(
                expected = state.plan().len(),
                found = slides.len(),
                "carousel track changed while cloning"
            );
        }
        dom::set_style(&container, "touch-action", "pan-y");

        let view = Rc::new(Self {
            window: window.clone(),
            container,
            track,
            slides,
            state: RefCell::new(state),
            clock: RefCell::new(FrameClock::new()),
            frame: RefCell::new(None),
            retry: RefCell::new(None),
            align: RefCell::new(None),
            hover_poll: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        view.install_listeners(hover_fine);
        view.measure(true);
        view.schedule_align(config.initial_align_ms, true);
        view.start_loop();
        Ok(Some(view))
    }

    fn measure(self: &Rc<Self>, retry_on_failure: bool) {
        let width = self.container.get_bounding_client_rect().width();
        let measured = self.state.borrow_mut().measure(width);
        match measured {
            Ok(()) => {
                self.apply_widths(width);
                self.render();
                // New sizes invalidate the pending frame and its clock.
                self.restart_loop();
            }
            Err(err) if retry_on_failure => {
                debug!(%err, "carousel measure deferred");
                let view = Rc::clone(self);
                let delay = self.state.borrow().config().layout_retry_ms;
                let timeout = Timeout::new(delay, move || {
                    view.retry.borrow_mut().take();
                    view.measure(false);
                });
                *self.retry.borrow_mut() = Some(timeout);
            }
            // Resize and image loads measure again later.
            Err(err) => debug!(%err, "carousel still not laid out"),
        }
        self.log_events();
    }

    fn apply_widths(&self, width: f64) {
        let px = format!("{width}px");
        let basis = format!("0 0 {width}px");
        for slide in &self.slides {
            dom::set_style(slide, "min-width", &px);
            dom::set_style(slide, "flex", &basis);
            dom::set_style(slide, "width", &px);
        }
    }

    fn render(&self) {
        let x = self.state.borrow().translate_x();
        dom::set_style(&self.track, "transform", &format!("translateX({x}px)"));
    }

    /// Jump to the first slide without animation once layout is known,
    /// optionally restarting the frame loop.
    fn schedule_align(self: &Rc<Self>, delay_ms: u32, restart: bool) {
        let view = Rc::clone(self);
        let timeout = Timeout::new(delay_ms, move || {
            view.align.borrow_mut().take();
            if !view.state.borrow().is_measured() {
                return;
            }
            let now = dom::now(&view.window);
            view.state.borrow_mut().snap_to(0, false, now);
            view.render();
            if restart {
                view.restart_loop();
            }
        });
        *self.align.borrow_mut() = Some(timeout);
    }

    fn start_loop(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| view.on_frame(timestamp));
        *self.frame.borrow_mut() = Some(handle);
    }

    fn stop_loop(&self) {
        self.frame.borrow_mut().take();
        self.clock.borrow_mut().reset();
    }

    fn restart_loop(self: &Rc<Self>) {
        self.stop_loop();
        self.start_loop();
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        let frame = self.clock.borrow_mut().tick(foundation::Millis(timestamp));
        self.state.borrow_mut().tick(frame);
        self.render();
        self.log_events();
        self.start_loop();
    }

    fn log_events(&self) {
        for stamped in self.state.borrow_mut().drain_events() {
            debug!(frame = stamped.frame_index, event = ?stamped.event, "carousel");
        }
    }

    fn press(self: &Rc<Self>, sample: PointerSample) {
        self.state.borrow_mut().pointer_down(sample);
        if sample.modality == Modality::Mouse {
            dom::add_class(&self.container, "dragging");
        }
        self.restart_loop();
        self.log_events();
    }

    /// Returns whether the event's default should be cancelled.
    fn drag_to(&self, x: f64, y: f64) -> bool {
        let outcome = self.state.borrow_mut().pointer_move(x, y);
        if outcome != MoveOutcome::Dragging {
            return false;
        }
        dom::add_class(&self.container, "dragging");
        self.render();
        true
    }

    fn release(&self) {
        let now = dom::now(&self.window);
        let outcome = self.state.borrow_mut().pointer_up(now);
        if outcome == ReleaseOutcome::Idle {
            return;
        }
        dom::remove_class(&self.container, "dragging");
        let state = self.state.borrow();
        debug!(
            ?outcome,
            position = state.position(),
            settling = state.is_settling(),
            "carousel released"
        );
        drop(state);
        dom::set_style(&self.container, "touch-action", "pan-y");
        self.log_events();
    }

    fn set_paused(&self, source: PauseSource, paused: bool) {
        self.state.borrow_mut().set_paused(source, paused);
        self.log_events();
    }

    fn install_listeners(self: &Rc<Self>, hover_fine: bool) {
        let mut listeners = Vec::new();
        let container = self.container.clone();
        let window = self.window.clone();

        let view = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &container,
            "mousedown",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                event.prevent_default();
                view.press(PointerSample::new(
                    Modality::Mouse,
                    event.client_x() as f64,
                    event.client_y() as f64,
                ));
            },
        ));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&window, "mousemove", move |event: &Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                view.drag_to(event.client_x() as f64, event.client_y() as f64);
            }
        }));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&window, "mouseup", move |_event: &Event| {
            view.release();
        }));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&container, "touchstart", move |event: &Event| {
            if let Some((x, y)) = first_touch(event) {
                view.press(PointerSample::new(Modality::Touch, x, y));
            }
        }));

        let view = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &container,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some((x, y)) = first_touch(event) else {
                    return;
                };
                if view.drag_to(x, y) && event.cancelable() {
                    event.prevent_default();
                }
            },
        ));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&window, "touchend", move |_event: &Event| {
            view.release();
        }));

        if hover_fine {
            let view = Rc::clone(self);
            listeners.push(EventListener::new(&container, "pointerenter", move |_| {
                view.set_paused(PauseSource::Hover, true);
            }));
            let view = Rc::clone(self);
            listeners.push(EventListener::new(&container, "pointerleave", move |_| {
                view.set_paused(PauseSource::Hover, false);
            }));

            let view = Rc::clone(self);
            let interval_ms = self.state.borrow().config().hover_poll_ms;
            let poll = Interval::new(interval_ms, move || {
                // Leave events get lost when the pointer exits quickly.
                let hovered = view.container.matches(":hover").unwrap_or(false);
                if !hovered && view.state.borrow().is_paused_by(PauseSource::Hover) {
                    view.set_paused(PauseSource::Hover, false);
                }
            });
            *self.hover_poll.borrow_mut() = Some(poll);
        }

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&window, "blur", move |_| {
            view.set_paused(PauseSource::WindowBlur, true);
        }));
        let view = Rc::clone(self);
        listeners.push(EventListener::new(&window, "focus", move |_| {
            view.set_paused(PauseSource::WindowBlur, false);
        }));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&window, "resize", move |_| {
            view.measure(true);
        }));

        for img in dom::query_all_in(&self.track, "img") {
            let Ok(img) = img.dyn_into::<HtmlImageElement>() else {
                continue;
            };
            if img.complete() {
                continue;
            }
            let view = Rc::clone(self);
            listeners.push(EventListener::once(&img, "load", move |_| {
                view.measure(true);
                let delay = view.state.borrow().config().image_align_ms;
                view.schedule_align(delay, false);
            }));
            let src = img.src();
            listeners.push(EventListener::once(&img, "error", move |_| {
                warn!(%src, "carousel image failed to load");
            }));
        }

        *self.listeners.borrow_mut() = listeners;
    }
}

impl Component for CarouselView {
    fn name(&self) -> &'static str {
        "carousel"
    }

    fn dispose(&self) {
        self.listeners.borrow_mut().clear();
        self.hover_poll.borrow_mut().take();
        self.retry.borrow_mut().take();
        self.align.borrow_mut().take();
        self.stop_loop();
    }
}

/// Insert the leading and trailing clone blocks around the originals.
fn clone_slides(
    document: &Document,
    track: &HtmlElement,
    originals: &[Element],
    state: &LoopCarousel,
) -> SiteResult<()> {
    let plan = state.plan();
    let leading = document.create_document_fragment();
    for source in plan.leading_insertion_order() {
        let copy = originals[source].clone_node_with_deep(true)?;
        let first: Option<Node> = leading.first_child();
        leading.insert_before(&copy, first.as_ref())?;
    }
    let trailing = document.create_document_fragment();
    for slide in plan.slides() {
        if slide.role == SlideRole::TrailingClone {
            let copy = originals[slide.source].clone_node_with_deep(true)?;
            trailing.append_child(&copy)?;
        }
    }
    let first: Option<Node> = track.first_child();
    track.insert_before(&leading, first.as_ref())?;
    track.append_child(&trailing)?;
    Ok(())
}

fn first_touch(event: &Event) -> Option<(f64, f64)> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().item(0)?;
    Some((touch.client_x() as f64, touch.client_y() as f64))
}

/// Defers [`CarouselView`] until the window `load` event so slide images
/// have their final size.
pub struct DeferredCarousel {
    view: Rc<RefCell<Option<Rc<CarouselView>>>>,
    on_load: RefCell<Option<EventListener>>,
}

impl DeferredCarousel {
    pub fn install(
        window: &Window,
        document: &Document,
        container: HtmlElement,
        track: HtmlElement,
        config: &CarouselConfig,
        hover_fine: bool,
    ) -> Rc<Self> {
        let deferred = Rc::new(Self {
            view: Rc::new(RefCell::new(None)),
            on_load: RefCell::new(None),
        });
        let build = {
            let slot = Rc::clone(&deferred.view);
            let window = window.clone();
            let document = document.clone();
            let config = config.clone();
            move || match CarouselView::install(
                &window, &document, container, track, &config, hover_fine,
            ) {
                Ok(view) => *slot.borrow_mut() = view,
                Err(err) => warn!(%err, "carousel setup failed"),
            }
        };
        if dom::ready_state(document) == "complete" {
            build();
        } else {
            let listener = EventListener::once(window, "load", move |_| build());
            *deferred.on_load.borrow_mut() = Some(listener);
        }
        deferred
    }
}

impl Component for DeferredCarousel {
    fn name(&self) -> &'static str {
        "carousel"
    }

    fn dispose(&self) {
        self.on_load.borrow_mut().take();
        if let Some(view) = self.view.borrow_mut().take() {
            view.dispose();
        }
    }
}
