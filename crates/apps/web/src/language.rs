//! Interface language: applies the dictionary to the page and persists the
//! choice.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use i18n::{
    Dictionary, LANGUAGE_KEY, Language, LanguagePreference, PreferenceStore, inline_attr_attribute,
    inline_text_attribute,
};
use tracing::{info, warn};
use web_sys::{Document, Element};

use crate::Component;
use crate::dom;

/// Attributes that can be translated through `data-i18n-attr-<name>`.
const TRANSLATED_ATTRIBUTES: [&str; 2] = ["title", "aria-label"];

pub struct LanguageSwitch {
    document: Document,
    store: RefCell<LanguagePreference>,
    current: Cell<Language>,
    listeners: RefCell<Vec<EventListener>>,
}

impl LanguageSwitch {
    pub fn install(document: &Document, toggle: Option<Element>) -> Rc<Self> {
        let store = LanguagePreference::open();
        let saved = store.load();
        let declared = document
            .document_element()
            .and_then(|html| html.get_attribute("lang"))
            .unwrap_or_default();
        let initial = Language::resolve(saved.map(Language::code), &declared);

        let switch = Rc::new(Self {
            document: document.clone(),
            store: RefCell::new(store),
            current: Cell::new(initial),
            listeners: RefCell::new(Vec::new()),
        });
        switch.apply(initial);

        if let Some(toggle) = toggle {
            let target = Rc::clone(&switch);
            let listener = EventListener::new(&toggle, "click", move |_| {
                let next = target.current.get().toggled();
                target.apply(next);
            });
            switch.listeners.borrow_mut().push(listener);
        }
        switch
    }

    pub fn apply(&self, lang: Language) {
        let dict = Dictionary::for_language(lang);
        if let Some(html) = self.document.document_element() {
            dom::set_attr(&html, "lang", lang.code());
        }

        let inline = inline_text_attribute(lang);
        for el in dom::query_all(&self.document, "[data-i18n]") {
            let key = el.get_attribute("data-i18n");
            if let Some(text) = dict.translate(key.as_deref(), el.get_attribute(&inline)) {
                el.set_text_content(Some(&text));
            }
        }

        for el in dom::query_all(
            &self.document,
            "[data-i18n-attr-title], [data-i18n-attr-aria-label]",
        ) {
            for attr in TRANSLATED_ATTRIBUTES {
                let marker = format!("data-i18n-attr-{attr}");
                if !el.has_attribute(&marker) {
                    continue;
                }
                let key = el.get_attribute(&marker);
                let fallback = el.get_attribute(&inline_attr_attribute(attr, lang));
                if let Some(text) = dict.translate(key.as_deref(), fallback) {
                    dom::set_attr(&el, attr, &text);
                }
            }
        }

        if let Some(label) = self.document.get_element_by_id("langToggleLabel") {
            label.set_text_content(Some(dict.toggle_label()));
        }

        self.current.set(lang);
        if let Err(err) = self.store.borrow_mut().save(lang) {
            warn!(%err, key = LANGUAGE_KEY, "language preference not saved");
        }
        info!(%lang, "language applied");
    }
}

impl Component for LanguageSwitch {
    fn name(&self) -> &'static str {
        "language"
    }

    fn dispose(&self) {
        self.listeners.borrow_mut().clear();
    }
}
