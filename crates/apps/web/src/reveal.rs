//! Fade-in of page sections as they scroll into view.

use std::cell::RefCell;
use std::rc::Rc;

use effects::{
    REVEAL_EXCLUDED_WITHIN, RevealConfig, RevealMode, reveal_selector, stagger_delay,
};
use gloo_timers::callback::Timeout;
use js_sys::Array;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::Component;
use crate::dom;
use crate::error::SiteResult;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct Reveal {
    observer: Option<(IntersectionObserver, ObserverCallback)>,
    timers: Rc<RefCell<Vec<Timeout>>>,
}

impl Reveal {
    pub fn install(
        document: &Document,
        config: &RevealConfig,
        reduced_motion: bool,
        can_observe: bool,
    ) -> SiteResult<Rc<Self>> {
        let targets = collect_targets(document);
        let timers = Rc::new(RefCell::new(Vec::new()));
        let mode = RevealMode::choose(reduced_motion || !can_observe, targets.len());
        debug!(targets = targets.len(), ?mode, "reveal targets collected");

        if mode == RevealMode::Immediate {
            for el in &targets {
                dom::add_class(el, "is-visible");
            }
            return Ok(Rc::new(Self {
                observer: None,
                timers,
            }));
        }

        let targets = Rc::new(targets);
        let callback: ObserverCallback = {
            let targets = Rc::clone(&targets);
            let timers = Rc::clone(&timers);
            let config = config.clone();
            Closure::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let el = entry.target();
                    let index = targets.iter().position(|t| *t == el).unwrap_or(0);
                    let shown = el.clone();
                    let timer = Timeout::new(stagger_delay(index, &config), move || {
                        dom::add_class(&shown, "is-visible");
                    });
                    timers.borrow_mut().push(timer);
                    observer.unobserve(&el);
                }
            })
        };

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&config.root_margin);
        init.set_threshold(&JsValue::from_f64(config.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for el in targets.iter() {
            observer.observe(el);
        }
        Ok(Rc::new(Self {
            observer: Some((observer, callback)),
            timers,
        }))
    }
}

/// Mark the reveal targets in document order. Nothing inside the carousel
/// takes part, and stray reveal classes there are cleared.
fn collect_targets(document: &Document) -> Vec<Element> {
    let root = dom::query::<Element>(document, ".main-content")
        .or_else(|| document.body().map(Element::from));
    let mut targets: Vec<Element> = root
        .map(|r| dom::query_all_in(&r, &reveal_selector()))
        .unwrap_or_default()
        .into_iter()
        .filter(|el| !dom::has_ancestor(el, REVEAL_EXCLUDED_WITHIN))
        .collect();
    targets.extend(dom::query_all(document, ".info-column"));
    for el in &targets {
        dom::add_class(el, "reveal");
    }
    let carousel = format!("{REVEAL_EXCLUDED_WITHIN}, {REVEAL_EXCLUDED_WITHIN} *");
    for el in dom::query_all(document, &carousel) {
        dom::remove_class(&el, "reveal");
        dom::remove_class(&el, "is-visible");
    }
    targets
}

impl Component for Reveal {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn dispose(&self) {
        if let Some((observer, _)) = &self.observer {
            observer.disconnect();
        }
        self.timers.borrow_mut().clear();
    }
}
