//! Project detail dialog: opening by topic, the zoom ghost from a card,
//! focus trapping and restoring focus on close.

use std::cell::RefCell;
use std::rc::Rc;

use effects::{
    FOCUSABLE_SELECTOR, GHOST_END_TRANSFORM, GHOST_SAFETY_TIMEOUT_MS, OPEN_DETAIL_EVENT,
    TrapAction, display_title, find_topic_slide, ghost_start_transform, trap_tab,
};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{AnimationFrame, request_animation_frame};
use gloo_timers::callback::Timeout;
use tracing::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{
    CustomEvent, Document, Element, Event, FocusOptions, HtmlElement, HtmlImageElement,
    KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::Component;
use crate::dom;
use crate::scroller::card_topic;

const CARD_SELECTOR: &str = ".projects-scroller .project-topic-block";

/// A running zoom from a card into the dialog.
struct Ghost {
    element: Element,
    topic: String,
    _grow: Option<AnimationFrame>,
    _safety: Timeout,
    _done: EventListener,
}

pub struct ProjectDetail {
    window: Window,
    document: Document,
    root: HtmlElement,
    title: Option<Element>,
    scroller: Option<HtmlElement>,
    page_containers: Vec<Element>,
    last_focused: RefCell<Option<HtmlElement>>,
    trap: RefCell<Option<EventListener>>,
    ghost: RefCell<Option<Ghost>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl ProjectDetail {
    pub fn install(window: &Window, document: &Document, root: HtmlElement) -> Rc<Self> {
        let page_containers = ["header.header", "main.main-content", "footer"]
            .into_iter()
            .filter_map(|sel| dom::query::<Element>(document, sel))
            .collect();
        let detail = Rc::new(Self {
            window: window.clone(),
            document: document.clone(),
            title: dom::query_in(&root, ".project-detail-title"),
            scroller: dom::query_in(&root, ".project-detail-scroller"),
            root,
            page_containers,
            last_focused: RefCell::new(None),
            trap: RefCell::new(None),
            ghost: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        if let Some(scroller) = &detail.scroller
            && detail.is_vertical()
        {
            for (property, value) in [
                ("cursor", "auto"),
                ("touch-action", "auto"),
                ("user-select", "auto"),
                ("overscroll-behavior", "auto"),
            ] {
                dom::set_style(scroller, property, value);
            }
            detail.ensure_media_scrollable();
        }
        detail.install_listeners();
        detail
    }

    pub fn is_open(&self) -> bool {
        dom::has_class(&self.root, "open")
    }

    fn is_vertical(&self) -> bool {
        let Some(scroller) = &self.scroller else {
            return false;
        };
        let Ok(Some(style)) = self.window.get_computed_style(scroller) else {
            return false;
        };
        let x = style.get_property_value("overflow-x").unwrap_or_default();
        let y = style.get_property_value("overflow-y").unwrap_or_default();
        x == "hidden" && y != "hidden"
    }

    fn ensure_media_scrollable(&self) {
        for img in dom::query_all_in(&self.root, ".detail-slide img") {
            dom::set_attr(&img, "draggable", "false");
            dom::set_style(&img, "-webkit-user-drag", "none");
            dom::set_style(&img, "user-select", "none");
            dom::set_style(&img, "touch-action", "pan-y");
        }
        for media in dom::query_all_in(
            &self.root,
            ".detail-slide .split-right, .process-step .step-media",
        ) {
            dom::set_style(&media, "touch-action", "pan-y");
        }
    }

    fn focusables(&self) -> Vec<HtmlElement> {
        dom::query_all_in(&self.root, FOCUSABLE_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .filter(|el| el.offset_parent().is_some())
            .collect()
    }

    pub fn open(self: &Rc<Self>, topic: &str) {
        if let Some(title) = &self.title {
            title.set_text_content(Some(display_title(topic)));
        }
        dom::add_class(&self.root, "open");
        dom::set_attr(&self.root, "aria-hidden", "false");
        *self.last_focused.borrow_mut() = self
            .document
            .active_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        for container in &self.page_containers {
            dom::set_attr(container, "aria-hidden", "true");
        }
        info!(topic, "project detail opened");

        let Some(scroller) = &self.scroller else {
            return;
        };
        let slides = dom::query_all_in(scroller, ".detail-slide");
        let topics: Vec<Option<String>> = slides
            .iter()
            .map(|s| s.get_attribute("data-topic"))
            .collect();
        let Some(index) = find_topic_slide(topics.iter().map(|t| t.as_deref()), topic) else {
            return;
        };
        let Some(target) = slides[index].dyn_ref::<HtmlElement>() else {
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Instant);
        if self.is_vertical() {
            options.set_block(ScrollLogicalPosition::Start);
            options.set_inline(ScrollLogicalPosition::Nearest);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            scroller.set_scroll_top(target.offset_top());
            dom::set_style(scroller, "overflow-y", "auto");
            dom::set_style(scroller, "overflow-x", "hidden");
            scroller.set_tab_index(-1);
            focus_quietly(scroller);
            self.ensure_media_scrollable();
            self.install_trap();
            if let Some(first) = self.focusables().first() {
                focus_quietly(first);
            }
        } else {
            options.set_block(ScrollLogicalPosition::Nearest);
            options.set_inline(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            scroller.set_scroll_left(target.offset_left());
        }
    }

    pub fn close(&self) {
        dom::remove_class(&self.root, "open");
        dom::set_attr(&self.root, "aria-hidden", "true");
        for container in &self.page_containers {
            let _ = container.remove_attribute("aria-hidden");
        }
        self.trap.borrow_mut().take();
        if let Some(prev) = self.last_focused.borrow_mut().take() {
            focus_quietly(&prev);
        }
        debug!("project detail closed");
    }

    fn install_trap(self: &Rc<Self>) {
        let detail = Rc::clone(self);
        let listener = EventListener::new_with_options(
            &self.root,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if key.key() != "Tab" {
                    return;
                }
                let focusables = detail.focusables();
                let active = detail.document.active_element();
                let index = active
                    .as_ref()
                    .and_then(|a| focusables.iter().position(|f| f.unchecked_ref::<Element>() == a));
                let on_root = active.as_ref() == Some(detail.root.unchecked_ref::<Element>());
                if let TrapAction::FocusAt(i) =
                    trap_tab(focusables.len(), index, on_root, key.shift_key())
                {
                    event.prevent_default();
                    let _ = focusables[i].focus();
                }
            },
        );
        *self.trap.borrow_mut() = Some(listener);
    }

    /// Zoom a copy of the card image up to the viewport, then open.
    fn open_from_card(self: &Rc<Self>, card: &Element, topic: String) {
        if let Some(previous) = self.ghost.borrow_mut().take() {
            previous.element.remove();
        }
        let Some(body) = self.document.body() else {
            self.open(&topic);
            return;
        };
        let image = dom::query_in::<HtmlImageElement>(card, ".topic-image");
        let source = match &image {
            Some(img) => dom::rect(img),
            None => dom::rect(card),
        };
        let Ok(ghost) = self.document.create_element("div") else {
            self.open(&topic);
            return;
        };
        ghost.set_class_name("project-zoom-ghost");
        if let Ok(copy) = self.document.create_element("img")
            && let Ok(copy) = copy.dyn_into::<HtmlImageElement>()
        {
            if let Some(img) = &image {
                let current = img.current_src();
                let src = if current.is_empty() { img.src() } else { current };
                copy.set_src(&src);
            }
            let _ = ghost.append_child(&copy);
        }
        if body.append_child(&ghost).is_err() {
            self.open(&topic);
            return;
        }

        let vw = self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let vh = self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        dom::set_style(&ghost, "transform", &ghost_start_transform(&source, vw, vh));
        // Force a style flush so the transition starts from the card.
        if let Some(html) = ghost.dyn_ref::<HtmlElement>() {
            let _ = html.offset_height();
        }

        let target = ghost.clone();
        let grow = request_animation_frame(move |_| {
            dom::set_style(&target, "transform", GHOST_END_TRANSFORM);
            dom::set_style(&target, "border-radius", "0px");
        });
        let detail = Rc::clone(self);
        let safety = Timeout::new(GHOST_SAFETY_TIMEOUT_MS, move || detail.finish_ghost());
        let detail = Rc::clone(self);
        let done = EventListener::once(&ghost, "transitionend", move |_| detail.finish_ghost());

        *self.ghost.borrow_mut() = Some(Ghost {
            element: ghost,
            topic,
            _grow: Some(grow),
            _safety: safety,
            _done: done,
        });
    }

    fn finish_ghost(self: &Rc<Self>) {
        let Some(ghost) = self.ghost.borrow_mut().take() else {
            return;
        };
        ghost.element.remove();
        self.open(&ghost.topic);
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        for card in dom::query_all(&self.document, CARD_SELECTOR) {
            dom::set_style(&card, "cursor", "pointer");
            dom::set_attr(&card, "tabindex", "0");

            let detail = Rc::clone(self);
            let target = card.clone();
            listeners.push(EventListener::new(&card, "click", move |_| {
                detail.activate_card(&target);
            }));

            let detail = Rc::clone(self);
            let target = card.clone();
            listeners.push(EventListener::new_with_options(
                &card,
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if dom::is_activation_key(&key.key()) {
                        event.prevent_default();
                        detail.activate_card(&target);
                    }
                },
            ));
        }

        // Download buttons keep their native action and never open the card.
        for button in dom::query_all(&self.document, &format!("{CARD_SELECTOR} .topic-download")) {
            listeners.push(EventListener::new(&button, "click", |event: &Event| {
                event.stop_propagation();
            }));
            listeners.push(EventListener::new(&button, "pointerdown", |event: &Event| {
                event.stop_propagation();
            }));
            listeners.push(EventListener::new(&button, "keydown", |event: &Event| {
                if let Some(key) = event.dyn_ref::<KeyboardEvent>()
                    && dom::is_activation_key(&key.key())
                {
                    event.stop_propagation();
                }
            }));
        }

        if let Some(close) = dom::query_in::<Element>(&self.root, ".project-detail-close") {
            let detail = Rc::clone(self);
            listeners.push(EventListener::new(&close, "click", move |_| detail.close()));
        }

        let detail = Rc::clone(self);
        listeners.push(EventListener::new(&self.document, "keydown", move |event: &Event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>()
                && key.key() == "Escape"
                && detail.is_open()
            {
                detail.close();
            }
        }));

        let detail = Rc::clone(self);
        listeners.push(EventListener::new(&self.window, OPEN_DETAIL_EVENT, move |event: &Event| {
            let Some(event) = event.dyn_ref::<CustomEvent>() else {
                return;
            };
            let payload = event.detail();
            let topic = js_sys::Reflect::get(&payload, &"topic".into())
                .ok()
                .and_then(|v| v.as_string())
                .filter(|t| !t.is_empty());
            let card = js_sys::Reflect::get(&payload, &"card".into())
                .ok()
                .and_then(|v| v.dyn_into::<Element>().ok());
            match (topic, card) {
                (Some(topic), Some(card)) => detail.open_from_card(&card, topic),
                (Some(topic), None) => detail.open(&topic),
                _ => debug!("open request without a topic"),
            }
        }));

        *self.listeners.borrow_mut() = listeners;
    }

    fn activate_card(self: &Rc<Self>, card: &Element) {
        if let Some(link) = card.get_attribute("data-detail-link") {
            if let Err(err) = self.window.location().set_href(&link) {
                debug!(?err, "navigation to detail link failed");
            }
            return;
        }
        self.open_from_card(card, card_topic(card));
    }
}

impl Component for ProjectDetail {
    fn name(&self) -> &'static str {
        "project-detail"
    }

    fn dispose(&self) {
        self.listeners.borrow_mut().clear();
        self.trap.borrow_mut().take();
        if let Some(ghost) = self.ghost.borrow_mut().take() {
            ghost.element.remove();
        }
    }
}

fn focus_quietly(el: &HtmlElement) {
    let options = FocusOptions::new();
    options.set_prevent_scroll(true);
    let _ = el.focus_with_options(&options);
}
