//! Hamburger navigation and the animated nav labels.

use std::cell::RefCell;
use std::rc::Rc;

use effects::{
    BODY_OPEN_CLASS, CLOSE_BUTTON_SELECTOR, HamburgerVisibility, HeroBounds, MenuConfig,
    MenuState, letter_delays,
};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{AnimationFrame, request_animation_frame};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Node, Window};

use crate::Component;
use crate::dom;

pub struct Menu {
    window: Window,
    body: Option<HtmlElement>,
    hamburger: HtmlElement,
    nav: Option<Element>,
    hero: Option<HtmlElement>,
    config: MenuConfig,
    state: RefCell<MenuState>,
    visibility: RefCell<HamburgerVisibility>,
    pending: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Menu {
    pub fn install(
        window: &Window,
        document: &Document,
        hamburger: HtmlElement,
        nav: Option<Element>,
        hero: Option<HtmlElement>,
        config: &MenuConfig,
    ) -> Rc<Self> {
        dom::set_attr(&hamburger, "role", "button");
        dom::set_attr(&hamburger, "tabindex", "0");
        dom::set_attr(&hamburger, "aria-label", "Toggle navigation");
        dom::set_attr(&hamburger, "aria-expanded", "false");

        let menu = Rc::new(Self {
            window: window.clone(),
            body: document.body(),
            hamburger,
            nav,
            hero,
            config: config.clone(),
            state: RefCell::new(MenuState::new()),
            visibility: RefCell::new(HamburgerVisibility::new()),
            pending: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        menu.apply_visibility();
        menu.install_listeners(document);
        menu
    }

    fn apply_visibility(&self) {
        let open = self.state.borrow().is_open();
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let hero = self.hero.as_ref().map(|h| HeroBounds {
            offset_top: h.offset_top() as f64,
            height: h.offset_height() as f64,
        });
        let changed = self
            .visibility
            .borrow_mut()
            .update(open, scroll_y, hero, &self.config);
        if let Some(visible) = changed {
            dom::set_class(&self.hamburger, "visible", visible);
        }
    }

    /// At most one visibility update per frame.
    fn schedule_visibility(self: &Rc<Self>) {
        if self.pending.borrow().is_some() {
            return;
        }
        let menu = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            menu.pending.borrow_mut().take();
            menu.apply_visibility();
        });
        *self.pending.borrow_mut() = Some(handle);
    }

    fn render_open(self: &Rc<Self>) {
        let state = self.state.borrow();
        let open = state.is_open();
        dom::set_class(&self.hamburger, "open", open);
        if let Some(nav) = &self.nav {
            dom::set_class(nav, "open", open);
        }
        if let Some(body) = &self.body {
            dom::set_class(body, BODY_OPEN_CLASS, open);
        }
        dom::set_attr(&self.hamburger, "aria-expanded", state.aria_expanded());
        drop(state);
        self.schedule_visibility();
    }

    fn close(self: &Rc<Self>) {
        let was_open = self.state.borrow_mut().close();
        if was_open {
            self.render_open();
        }
    }

    fn install_listeners(self: &Rc<Self>, document: &Document) {
        let mut listeners = Vec::new();

        for name in ["scroll", "resize"] {
            let menu = Rc::clone(self);
            listeners.push(EventListener::new(&self.window, name, move |_| {
                menu.schedule_visibility();
            }));
        }

        // Without a nav there is nothing to toggle.
        let Some(nav) = self.nav.clone() else {
            *self.listeners.borrow_mut() = listeners;
            return;
        };

        let menu = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.hamburger,
            "touchstart",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                event.prevent_default();
                event.stop_propagation();
                menu.state.borrow_mut().touch_toggle();
                menu.render_open();
            },
        ));

        let menu = Rc::clone(self);
        listeners.push(EventListener::new(&self.hamburger, "click", move |_| {
            let toggled = menu.state.borrow_mut().click();
            if toggled.is_some() {
                menu.render_open();
            }
        }));

        let menu = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.hamburger,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                if let Some(key) = event.dyn_ref::<KeyboardEvent>()
                    && dom::is_activation_key(&key.key())
                {
                    event.prevent_default();
                    menu.state.borrow_mut().toggle();
                    menu.render_open();
                }
            },
        ));

        let menu = Rc::clone(self);
        let hamburger: Node = self.hamburger.clone().into();
        listeners.push(EventListener::new(document, "click", move |event: &Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = target
                .as_ref()
                .is_some_and(|t| nav.contains(Some(t)) || hamburger.contains(Some(t)));
            if !inside {
                menu.close();
            }
        }));

        for button in dom::query_all(document, CLOSE_BUTTON_SELECTOR) {
            let menu = Rc::clone(self);
            listeners.push(EventListener::new(&button, "click", move |_| menu.close()));
        }

        for item in dom::query_all(document, ".nav-item") {
            let menu = Rc::clone(self);
            listeners.push(EventListener::new(&item, "click", move |_| menu.close()));
        }

        *self.listeners.borrow_mut() = listeners;
    }
}

impl Component for Menu {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn dispose(&self) {
        self.listeners.borrow_mut().clear();
        self.pending.borrow_mut().take();
    }
}

/// Split the trailing label of every `.nav-item` into letter spans with
/// staggered animation delays.
pub fn animate_nav_letters(document: &Document, config: &MenuConfig) {
    for item in dom::query_all(document, ".nav-item") {
        let Some(label) = item.last_child() else {
            continue;
        };
        let text = label.text_content().unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        label.set_text_content(Some(""));
        for (letter, delay) in letter_delays(text, config.letter_delay_s) {
            let Ok(span) = document.create_element("span") else {
                continue;
            };
            span.set_text_content(Some(&letter));
            dom::add_class(&span, "nav-animated");
            dom::set_style(&span, "animation-delay", &delay);
            let _ = item.append_child(&span);
        }
    }
}
