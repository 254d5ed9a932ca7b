//! Thin helpers over `web-sys` plus the start-up capability query.

use foundation::Rect;
use foundation::time::Millis;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::error::{SiteError, SiteResult};

pub fn window() -> SiteResult<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> SiteResult<Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// `document.readyState`, read reflectively so the string form is used
/// whatever the binding exposes.
pub fn ready_state(document: &Document) -> String {
    js_sys::Reflect::get(document, &"readyState".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

pub fn now(window: &Window) -> Millis {
    Millis(window.performance().map(|p| p.now()).unwrap_or(0.0))
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document.query_selector(selector).ok()??.dyn_into::<T>().ok()
}

pub fn query_in<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector).ok()??.dyn_into::<T>().ok()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn children(el: &Element) -> Vec<Element> {
    let list = el.children();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

pub fn rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub fn has_ancestor(el: &Element, selector: &str) -> bool {
    matches!(el.closest(selector), Ok(Some(_)))
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>()
        && let Err(err) = html.style().set_property(property, value)
    {
        tracing::debug!(property, ?err, "style update rejected");
    }
}

pub fn style_value(el: &Element, property: &str) -> String {
    el.dyn_ref::<HtmlElement>()
        .and_then(|html| html.style().get_property_value(property).ok())
        .unwrap_or_default()
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    let _ = el.set_attribute(name, value);
}

pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

fn media_matches(window: &Window, query: &str) -> bool {
    matches!(window.match_media(query), Ok(Some(list)) if list.matches())
}

/// What the browser offers, decided once at start-up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Hover-capable fine pointer (desktop mouse or trackpad).
    pub hover_fine: bool,
    pub reduced_motion: bool,
    pub intersection_observer: bool,
}

impl Capabilities {
    pub fn detect(window: &Window) -> Self {
        Self {
            hover_fine: media_matches(window, "(hover: hover) and (pointer: fine)"),
            reduced_motion: media_matches(window, "(prefers-reduced-motion: reduce)"),
            intersection_observer: js_sys::Reflect::has(window, &"IntersectionObserver".into())
                .unwrap_or(false),
        }
    }

    /// Motion effects that follow the pointer.
    pub fn pointer_effects(&self) -> bool {
        self.hover_fine && !self.reduced_motion
    }
}

/// The elements each behavior needs. A missing element switches its
/// behavior off.
#[derive(Debug, Clone)]
pub struct PageElements {
    pub body: Option<HtmlElement>,
    pub carousel: Option<(HtmlElement, HtmlElement)>,
    pub hamburger: Option<HtmlElement>,
    pub main_nav: Option<Element>,
    pub hero: Option<HtmlElement>,
    pub lang_toggle: Option<Element>,
    pub project_detail: Option<HtmlElement>,
    pub projects_scroller: Option<HtmlElement>,
    pub scroll_top: Option<HtmlElement>,
    pub loader: Option<Element>,
    pub loading_cursor: Option<HtmlElement>,
    pub first_name: Option<Element>,
    pub last_name: Option<Element>,
    pub cta: Option<HtmlElement>,
}

impl PageElements {
    pub fn discover(document: &Document) -> Self {
        let carousel = query::<HtmlElement>(document, ".carousel-container")
            .zip(query::<HtmlElement>(document, ".carousel-track"));
        Self {
            body: document.body(),
            carousel,
            hamburger: by_id(document, "hamburgerMenu"),
            main_nav: by_id(document, "mainNav"),
            hero: query(document, ".hero-section"),
            lang_toggle: by_id(document, "langToggle"),
            project_detail: by_id(document, "project-detail"),
            projects_scroller: query(document, ".projects-scroller"),
            scroll_top: by_id(document, "scrollTopBtn"),
            loader: by_id(document, "loader"),
            loading_cursor: by_id(document, "loading-cursor"),
            first_name: query(document, ".first-name"),
            last_name: query(document, ".last-name"),
            cta: query(document, ".footer-cta-link"),
        }
    }

    /// Names of the behaviors that found their elements, for the start-up
    /// log line.
    pub fn present(&self) -> Vec<&'static str> {
        [
            ("carousel", self.carousel.is_some()),
            ("menu", self.hamburger.is_some()),
            ("language", self.lang_toggle.is_some()),
            ("project-detail", self.project_detail.is_some()),
            ("projects-scroller", self.projects_scroller.is_some()),
            ("scroll-top", self.scroll_top.is_some()),
            ("loader", self.loader.is_some()),
            ("typewriter", self.first_name.is_some() && self.last_name.is_some()),
            ("magnetic-cta", self.cta.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, found)| found.then_some(name))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }

    #[test]
    fn pointer_effects_need_fine_hover_and_motion() {
        let caps = Capabilities {
            hover_fine: true,
            reduced_motion: false,
            intersection_observer: true,
        };
        assert!(caps.pointer_effects());
        assert!(
            !Capabilities {
                reduced_motion: true,
                ..caps
            }
            .pointer_effects()
        );
        assert!(!Capabilities::default().pointer_effects());
    }
}
