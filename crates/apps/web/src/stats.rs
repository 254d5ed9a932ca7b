//! About-page statistics counting up when they scroll into view.

use std::cell::RefCell;
use std::rc::Rc;

use effects::{CountUp, CountUpConfig, StatFormat, parse_target};
use gloo_render::{AnimationFrame, request_animation_frame};
use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use crate::Component;
use crate::dom;
use crate::error::SiteResult;

const COUNTED: &str = "data-counted";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn format_of(el: &Element) -> StatFormat {
    StatFormat::new(el.get_attribute("data-prefix"), el.get_attribute("data-suffix"))
}

fn target_of(el: &Element) -> i64 {
    parse_target(el.get_attribute("data-target").as_deref())
}

/// One running counter.
struct Counter {
    el: Element,
    format: StatFormat,
    count: CountUp,
    frame: RefCell<Option<AnimationFrame>>,
}

impl Counter {
    fn step(self: &Rc<Self>) {
        let counter = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            counter.frame.borrow_mut().take();
            let now = foundation::Millis(timestamp);
            counter
                .el
                .set_text_content(Some(&counter.format.render(counter.count.value_at(now))));
            if !counter.count.is_done(now) {
                counter.step();
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }
}

pub struct Stats {
    window: Window,
    config: CountUpConfig,
    observer: RefCell<Option<(IntersectionObserver, ObserverCallback)>>,
    running: RefCell<Vec<Rc<Counter>>>,
}

impl Stats {
    /// `None` when the page has no statistics.
    pub fn install(
        window: &Window,
        document: &Document,
        config: &CountUpConfig,
        reduced_motion: bool,
    ) -> SiteResult<Option<Rc<Self>>> {
        let values = dom::query_all(document, ".about-stats .stat-value");
        if values.is_empty() {
            return Ok(None);
        }
        let stats = Rc::new(Self {
            window: window.clone(),
            config: config.clone(),
            observer: RefCell::new(None),
            running: RefCell::new(Vec::new()),
        });

        if reduced_motion {
            for el in &values {
                dom::set_attr(el, COUNTED, "true");
                el.set_text_content(Some(&format_of(el).render(target_of(el))));
            }
            return Ok(Some(stats));
        }

        let callback: ObserverCallback = {
            let stats = Rc::downgrade(&stats);
            Closure::new(move |entries: Array, observer: IntersectionObserver| {
                let Some(stats) = stats.upgrade() else {
                    return;
                };
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let card = entry.target();
                    if let Some(value) = dom::query_in::<Element>(&card, ".stat-value") {
                        stats.start(value);
                    }
                    observer.unobserve(&card);
                }
            })
        };
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for card in dom::query_all(document, ".about-stats .stat-item") {
            observer.observe(&card);
        }
        *stats.observer.borrow_mut() = Some((observer, callback));
        Ok(Some(stats))
    }

    fn start(&self, el: Element) {
        if el.get_attribute(COUNTED).as_deref() == Some("true") {
            return;
        }
        dom::set_attr(&el, COUNTED, "true");
        let count = CountUp::start(target_of(&el), dom::now(&self.window), self.config.duration_ms);
        let counter = Rc::new(Counter {
            format: format_of(&el),
            el,
            count,
            frame: RefCell::new(None),
        });
        counter.step();
        self.running.borrow_mut().push(counter);
    }
}

impl Component for Stats {
    fn name(&self) -> &'static str {
        "stats"
    }

    fn dispose(&self) {
        if let Some((observer, _)) = self.observer.borrow_mut().take() {
            observer.disconnect();
        }
        for counter in self.running.borrow_mut().drain(..) {
            counter.frame.borrow_mut().take();
        }
    }
}
