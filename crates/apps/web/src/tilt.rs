//! Pointer-following effects: card tilt with spotlight and the magnetic
//! footer call to action.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use effects::{
    MAGNETIC_REST, MagneticConfig, TILT_RESET, TiltConfig, TiltFrame, magnetic_offset,
    magnetic_transform,
};
use foundation::Rect;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent};

use crate::Component;
use crate::dom;

fn pointer(event: &Event) -> Option<(f64, f64)> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some((event.client_x() as f64, event.client_y() as f64))
}

#[derive(Default)]
pub struct PointerEffects {
    listeners: RefCell<Vec<EventListener>>,
}

impl PointerEffects {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn tilt_cards(&self, document: &Document, config: &TiltConfig) {
        let mut listeners = self.listeners.borrow_mut();
        for card in dom::query_all(document, ".project-topic-block") {
            let image = dom::query_in::<HtmlElement>(&card, ".topic-image");
            // Measured on enter, reused for every move.
            let rect: Rc<Cell<Option<Rect>>> = Rc::new(Cell::new(None));

            let cached = Rc::clone(&rect);
            let target = card.clone();
            listeners.push(EventListener::new(&card, "pointerenter", move |_| {
                cached.set(Some(dom::rect(&target)));
            }));

            let cached = Rc::clone(&rect);
            let target = card.clone();
            let moved_image = image.clone();
            let config = config.clone();
            listeners.push(EventListener::new(&card, "pointermove", move |event: &Event| {
                let Some((x, y)) = pointer(event) else {
                    return;
                };
                let bounds = cached.get().unwrap_or_else(|| dom::rect(&target));
                cached.set(Some(bounds));
                let frame = TiltFrame::compute(&bounds, x, y, &config);
                for (property, value) in frame.spotlight() {
                    dom::set_style(&target, property, &value);
                }
                dom::set_style(&target, "transform", &frame.card_transform(&config));
                if let Some(img) = &moved_image {
                    dom::set_style(img, "transform", &frame.image_transform(&config));
                }
            }));

            for name in ["pointerleave", "pointercancel"] {
                let target = card.clone();
                let reset_image = image.clone();
                listeners.push(EventListener::new(&card, name, move |_| {
                    dom::set_style(&target, "transform", TILT_RESET);
                    if let Some(img) = &reset_image {
                        dom::set_style(img, "transform", TILT_RESET);
                    }
                }));
            }
        }
    }

    pub fn magnetic(&self, cta: &Element, config: &MagneticConfig) {
        let mut listeners = self.listeners.borrow_mut();
        let rect: Rc<Cell<Option<Rect>>> = Rc::new(Cell::new(None));

        let cached = Rc::clone(&rect);
        let target = cta.clone();
        listeners.push(EventListener::new(cta, "pointerenter", move |_| {
            cached.set(Some(dom::rect(&target)));
        }));

        let cached = Rc::clone(&rect);
        let target = cta.clone();
        let strength = config.strength_px;
        listeners.push(EventListener::new(cta, "pointermove", move |event: &Event| {
            let Some((x, y)) = pointer(event) else {
                return;
            };
            let bounds = cached.get().unwrap_or_else(|| dom::rect(&target));
            cached.set(Some(bounds));
            let offset = magnetic_offset(&bounds, x, y, strength);
            dom::set_style(&target, "transform", &magnetic_transform(offset));
        }));

        for name in ["pointerleave", "pointercancel"] {
            let target = cta.clone();
            listeners.push(EventListener::new(cta, name, move |_| {
                dom::set_style(&target, "transform", MAGNETIC_REST);
            }));
        }
    }
}

impl Component for PointerEffects {
    fn name(&self) -> &'static str {
        "pointer-effects"
    }

    fn dispose(&self) {
        self.listeners.borrow_mut().clear();
    }
}
