//! Hold-and-drag horizontal scrolling for the projects strip (desktop).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use carousel::{
    BoundedScroller, Modality, PointerSample, ScrollerConfig, ScrollerMove, ScrollerRelease,
    is_strong_horizontal_wheel,
};
use effects::OPEN_DETAIL_EVENT;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{AnimationFrame, request_animation_frame};
use runtime::Tween;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CustomEvent, CustomEventInit, Document, Element, Event, HtmlElement, MouseEvent,
    MouseEventInit, PointerEvent, WheelEvent, Window,
};

use crate::Component;
use crate::dom;

const CARD_SELECTOR: &str = ".project-topic-block";

pub struct ProjectsScroller {
    window: Window,
    document: Document,
    el: HtmlElement,
    config: ScrollerConfig,
    state: RefCell<BoundedScroller>,
    pointer_id: Cell<Option<i32>>,
    captured: Cell<bool>,
    prev_touch_action: RefCell<String>,
    rebound: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl ProjectsScroller {
    pub fn install(
        window: &Window,
        document: &Document,
        el: HtmlElement,
        config: &ScrollerConfig,
    ) -> Rc<Self> {
        let scroller = Rc::new(Self {
            window: window.clone(),
            document: document.clone(),
            el,
            config: config.clone(),
            state: RefCell::new(BoundedScroller::new(config.clone())),
            pointer_id: Cell::new(None),
            captured: Cell::new(false),
            prev_touch_action: RefCell::new(String::new()),
            rebound: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        for img in dom::query_all_in(&scroller.el, "img") {
            dom::set_attr(&img, "draggable", "false");
        }
        scroller.install_listeners();
        scroller
    }

    fn max_scroll(&self) -> f64 {
        (self.el.scroll_width() - self.el.client_width()).max(0) as f64
    }

    fn press(&self, event: &PointerEvent) {
        if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok())
            && dom::has_ancestor(&target, ".topic-download")
        {
            return;
        }
        let modality = Modality::from_pointer_type(&event.pointer_type());
        if modality == Modality::Mouse && event.button() != 0 {
            return;
        }
        self.rebound.borrow_mut().take();
        self.pointer_id.set(Some(event.pointer_id()));
        self.captured.set(false);
        dom::add_class(&self.el, "dragging");
        *self.prev_touch_action.borrow_mut() = dom::style_value(&self.el, "touch-action");
        let sample = PointerSample::new(modality, event.client_x() as f64, event.client_y() as f64);
        let scroll_left = self.el.scroll_left() as f64;
        let max = self.max_scroll();
        self.state.borrow_mut().press(sample, scroll_left, max);
    }

    fn moved(&self, event: &PointerEvent) {
        if self.pointer_id.get() != Some(event.pointer_id()) {
            return;
        }
        let step = self
            .state
            .borrow_mut()
            .moved(event.client_x() as f64, event.client_y() as f64);
        let ScrollerMove::Follow {
            scroll_left,
            locked_now,
        } = step
        else {
            return;
        };
        if locked_now {
            dom::set_style(&self.el, "touch-action", "none");
            if self.el.set_pointer_capture(event.pointer_id()).is_ok() {
                self.captured.set(true);
            }
        }
        if event.cancelable() {
            event.prevent_default();
        }
        self.el.set_scroll_left(scroll_left.round() as i32);
    }

    /// Drop the pointer and finish the drag, if any.
    fn finish(self: &Rc<Self>) -> Option<ScrollerRelease> {
        if let Some(id) = self.pointer_id.take()
            && self.captured.get()
        {
            let _ = self.el.release_pointer_capture(id);
        }
        self.captured.set(false);

        let now = dom::now(&self.window);
        let current = self.el.scroll_left() as f64;
        let release = self.state.borrow_mut().release(current, now)?;
        dom::remove_class(&self.el, "dragging");
        let prev = self.prev_touch_action.borrow().clone();
        let restore = if prev.is_empty() { "pan-y" } else { prev.as_str() };
        dom::set_style(&self.el, "touch-action", restore);
        if let Some(tween) = release.rebound {
            self.start_rebound(tween);
        }
        Some(release)
    }

    fn start_rebound(self: &Rc<Self>, tween: Tween) {
        let scroller = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            scroller.rebound.borrow_mut().take();
            let now = foundation::Millis(timestamp);
            scroller.el.set_scroll_left(tween.sample(now).round() as i32);
            if !tween.is_complete(now) {
                scroller.start_rebound(tween);
            }
        });
        *self.rebound.borrow_mut() = Some(handle);
    }

    fn end_pointer(self: &Rc<Self>, event: &PointerEvent) {
        if self.pointer_id.get() != Some(event.pointer_id()) {
            return;
        }
        let Some(release) = self.finish() else {
            return;
        };
        if release.tap {
            self.open_card_at(event.client_x(), event.client_y());
        }
    }

    /// A tap opens the card under the pointer.
    fn open_card_at(&self, x: i32, y: i32) {
        let hits = self.document.elements_from_point(x as f32, y as f32);
        let card = hits
            .iter()
            .filter_map(|v| v.dyn_into::<Element>().ok())
            .find_map(|el| el.closest(CARD_SELECTOR).ok().flatten());
        let Some(card) = card else {
            return;
        };
        let topic = card_topic(&card);
        let image = dom::query_in::<Element>(&card, ".topic-image");
        let rect = dom::rect(image.as_ref().unwrap_or(&card));
        if rect.is_empty() {
            // Not measurable, so no zoom: ask the overlay directly.
            if self.document.get_element_by_id("project-detail").is_some() {
                dispatch_open_detail(&self.window, &topic, &card);
            }
            return;
        }
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_client_x(x);
        init.set_client_y(y);
        match MouseEvent::new_with_mouse_event_init_dict("click", &init) {
            Ok(click) => {
                let _ = card.dispatch_event(&click);
            }
            Err(err) => debug!(?err, "synthetic card click failed"),
        }
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();
        let el = self.el.clone();

        let scroller = Rc::clone(self);
        listeners.push(EventListener::new(&el, "pointerdown", move |event: &Event| {
            if let Some(event) = event.dyn_ref::<PointerEvent>() {
                scroller.press(event);
            }
        }));

        let scroller = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &el,
            "pointermove",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                if let Some(event) = event.dyn_ref::<PointerEvent>() {
                    scroller.moved(event);
                }
            },
        ));

        for name in ["pointerup", "pointercancel"] {
            let scroller = Rc::clone(self);
            listeners.push(EventListener::new(&el, name, move |event: &Event| {
                if let Some(event) = event.dyn_ref::<PointerEvent>() {
                    scroller.end_pointer(event);
                }
            }));
        }

        let scroller = Rc::clone(self);
        listeners.push(EventListener::new(&el, "lostpointercapture", move |_| {
            scroller.captured.set(false);
            scroller.pointer_id.set(None);
            scroller.finish();
        }));

        let scroller = Rc::clone(self);
        listeners.push(EventListener::new(&el, "pointerleave", move |event: &Event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            if scroller.pointer_id.get() == Some(event.pointer_id()) {
                scroller.finish();
            }
        }));

        listeners.push(EventListener::new_with_options(
            &el,
            "dragstart",
            EventListenerOptions::enable_prevent_default(),
            |event: &Event| event.prevent_default(),
        ));

        let ratio = self.config.wheel_horizontal_ratio;
        listeners.push(EventListener::new_with_options(
            &el,
            "wheel",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                if is_strong_horizontal_wheel(
                    wheel.delta_x(),
                    wheel.delta_y(),
                    wheel.shift_key(),
                    ratio,
                ) {
                    event.prevent_default();
                }
            },
        ));

        *self.listeners.borrow_mut() = listeners;
    }
}

impl Component for ProjectsScroller {
    fn name(&self) -> &'static str {
        "projects-scroller"
    }

    fn dispose(&self) {
        self.listeners.borrow_mut().clear();
        self.rebound.borrow_mut().take();
    }
}

pub fn card_topic(card: &Element) -> String {
    dom::query_in::<Element>(card, ".topic-title")
        .and_then(|t| t.text_content())
        .map(|t| t.trim().to_string())
        .unwrap_or_default()
}

/// Emit the window-level request the project overlay listens for.
pub fn dispatch_open_detail(window: &Window, topic: &str, card: &Element) {
    let detail = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&detail, &"topic".into(), &JsValue::from_str(topic));
    let _ = js_sys::Reflect::set(&detail, &"card".into(), card);
    let init = CustomEventInit::new();
    init.set_detail(&detail);
    match CustomEvent::new_with_event_init_dict(OPEN_DETAIL_EVENT, &init) {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(err) => debug!(?err, "could not build the open-detail event"),
    }
}
