use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement};

use crate::dom;

/// The site is dark only: switch dark mode on and retire the toggle.
pub fn enforce_dark_mode(document: &Document) {
    if let Some(body) = document.body() {
        dom::add_class(&body, "dark-mode");
    }
    if let Some(icon) = document.get_element_by_id("darkModeIcon") {
        icon.set_inner_html(r#"<i class="fa fa-sun"></i>"#);
    }
    let Some(toggle) = document.get_element_by_id("darkModeToggle") else {
        return;
    };
    dom::set_attr(&toggle, "aria-hidden", "true");
    dom::set_attr(&toggle, "tabindex", "-1");
    match toggle.dyn_ref::<HtmlButtonElement>() {
        Some(button) => button.set_disabled(true),
        None => dom::set_attr(&toggle, "disabled", ""),
    }
    dom::set_style(&toggle, "display", "none");
}
