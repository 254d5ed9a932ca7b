//! Page chrome: loader, scroll-to-top button and the hero typewriter.

use std::cell::RefCell;
use std::rc::Rc;

use effects::{ChromeConfig, Typewriter, loading_cursor_position, scroll_top_visible};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions, Window,
};

use crate::Component;
use crate::dom;

/// Types one element's text, one character per tick.
struct TypeJob {
    el: Element,
    writer: RefCell<Typewriter>,
    interval_ms: u32,
    timer: RefCell<Option<Timeout>>,
}

impl TypeJob {
    fn start(el: Element, text: &str, interval_ms: u32) -> Rc<Self> {
        el.set_text_content(Some(""));
        let job = Rc::new(Self {
            el,
            writer: RefCell::new(Typewriter::new(text)),
            interval_ms,
            timer: RefCell::new(None),
        });
        job.type_next();
        job
    }

    fn type_next(self: &Rc<Self>) {
        self.timer.borrow_mut().take();
        let Some(typed) = self.writer.borrow_mut().next() else {
            return;
        };
        self.el.set_text_content(Some(&typed));
        let job = Rc::clone(self);
        let timeout = Timeout::new(self.interval_ms, move || job.type_next());
        *self.timer.borrow_mut() = Some(timeout);
    }
}

#[derive(Default)]
pub struct Chrome {
    listeners: RefCell<Vec<EventListener>>,
    timers: Rc<RefCell<Vec<Timeout>>>,
    jobs: Rc<RefCell<Vec<Rc<TypeJob>>>>,
}

impl Chrome {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn scroll_top(&self, window: &Window, button: &HtmlElement, config: &ChromeConfig) {
        let threshold = config.scroll_top_threshold_px;
        let update = {
            let window = window.clone();
            let button = button.clone();
            move || {
                let y = window.scroll_y().unwrap_or(0.0);
                dom::set_class(&button, "visible", scroll_top_visible(y, threshold));
            }
        };
        update();
        let mut listeners = self.listeners.borrow_mut();
        listeners.push(EventListener::new(window, "scroll", move |_| update()));

        let target = window.clone();
        listeners.push(EventListener::new(button, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_to_with_scroll_to_options(&options);
        }));
    }

    pub fn loader(
        &self,
        window: &Window,
        document: &Document,
        body: &HtmlElement,
        loader: Option<Element>,
        cursor: Option<HtmlElement>,
        config: &ChromeConfig,
    ) {
        dom::remove_class(body, "loading");
        let mut listeners = self.listeners.borrow_mut();
        let mut timers = self.timers.borrow_mut();

        if let Some(cursor) = cursor {
            let page = body.clone();
            let offset = config.cursor_offset_px;
            listeners.push(EventListener::new(document, "mousemove", move |event: &Event| {
                if !dom::has_class(&page, "loading") {
                    return;
                }
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let (left, top) =
                    loading_cursor_position(event.client_x() as f64, event.client_y() as f64, offset);
                dom::set_style(&cursor, "left", &left);
                dom::set_style(&cursor, "top", &top);
            }));
        }

        let dismiss = {
            let page = body.clone();
            let loader = loader.clone();
            move || {
                if let Some(loader) = &loader {
                    dom::add_class(loader, "loader-bottom");
                }
                dom::remove_class(&page, "loading");
            }
        };
        let delay = config.loader_delay_ms;
        if dom::ready_state(document) == "complete" {
            timers.push(Timeout::new(delay, dismiss));
        } else {
            let pending = Rc::clone(&self.timers);
            listeners.push(EventListener::once(window, "load", move |_| {
                pending.borrow_mut().push(Timeout::new(delay, dismiss));
            }));
        }

        let page = body.clone();
        timers.push(Timeout::new(config.loader_fallback_ms, move || {
            dom::remove_class(&page, "loading");
            if let Some(loader) = &loader
                && !dom::has_class(loader, "loader-bottom")
            {
                dom::add_class(loader, "loader-bottom");
            }
        }));
    }

    pub fn typewriter(&self, first: Element, last: Element, config: &ChromeConfig) {
        let interval = config.type_interval_ms;
        self.jobs
            .borrow_mut()
            .push(TypeJob::start(first, &config.first_name, interval));

        let jobs = Rc::clone(&self.jobs);
        let last_name = config.last_name.clone();
        self.timers
            .borrow_mut()
            .push(Timeout::new(config.last_name_delay_ms, move || {
                jobs.borrow_mut()
                    .push(TypeJob::start(last, &last_name, interval));
            }));
    }
}

impl Component for Chrome {
    fn name(&self) -> &'static str {
        "chrome"
    }

    fn dispose(&self) {
        self.listeners.borrow_mut().clear();
        self.timers.borrow_mut().clear();
        for job in self.jobs.borrow_mut().drain(..) {
            job.timer.borrow_mut().take();
        }
    }
}
