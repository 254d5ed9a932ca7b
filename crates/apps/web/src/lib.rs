use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use gloo_events::EventListener;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod carousel;
mod chrome;
mod config;
mod dom;
mod error;
mod language;
mod logging;
mod menu;
mod project_detail;
mod reveal;
mod scroller;
mod stats;
mod theme;
mod tilt;

use carousel::DeferredCarousel;
use chrome::Chrome;
use config::SiteConfig;
use dom::{Capabilities, PageElements};
use error::SiteResult;
use language::LanguageSwitch;
use menu::Menu;
use project_detail::ProjectDetail;
use reveal::Reveal;
use scroller::ProjectsScroller;
use stats::Stats;
use tilt::PointerEffects;

// Guard against a second boot when the module is instantiated twice.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// A piece of page behaviour that owns listeners, timers or frame handles.
///
/// `dispose` releases all of them, which also breaks the `Rc` cycles that
/// callbacks hold back into their component.
pub(crate) trait Component {
    fn name(&self) -> &'static str;
    fn dispose(&self);
}

/// Everything installed on the current page.
#[derive(Default)]
pub struct SiteHandle {
    components: Vec<Rc<dyn Component>>,
}

impl SiteHandle {
    fn push(&mut self, component: Rc<dyn Component>) {
        debug!(component = component.name(), "installed");
        self.components.push(component);
    }

    fn push_result<C: Component + 'static>(&mut self, name: &str, result: SiteResult<Option<Rc<C>>>) {
        match result {
            Ok(Some(component)) => self.push(component),
            Ok(None) => debug!(component = name, "nothing to install"),
            Err(err) => warn!(component = name, error = %err, "install failed"),
        }
    }

    fn len(&self) -> usize {
        self.components.len()
    }

    pub fn dispose(&mut self) {
        for component in self.components.drain(..).rev() {
            component.dispose();
            debug!(component = component.name(), "disposed");
        }
    }
}

thread_local! {
    static SITE: RefCell<Option<SiteHandle>> = const { RefCell::new(None) };
}

/// TLS access that yields a default on teardown instead of panicking.
fn with_site<F, R>(f: F) -> R
where
    F: FnOnce(&RefCell<Option<SiteHandle>>) -> R,
    R: Default,
{
    SITE.try_with(f).unwrap_or_default()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    console_error_panic_hook::set_once();

    let window = dom::window()?;
    let document = dom::document()?;
    let (config, config_error) = SiteConfig::from_document(&document);
    logging::init(config.level());
    if let Some(err) = config_error {
        warn!(error = %err, "ignoring site configuration");
    }

    if must_wait_for_dom(&dom::ready_state(&document)) {
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_| {
            boot(&window, &document, &config);
        })
        .forget();
    } else {
        boot(&window, &document, &config);
    }
    Ok(())
}

/// Only a still-parsing document needs to wait for `DOMContentLoaded`.
fn must_wait_for_dom(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn boot(window: &Window, document: &Document, config: &SiteConfig) {
    let handle = init_site(window, document, config);
    info!(components = handle.len(), "site ready");
    with_site(|site| {
        if let Some(mut previous) = site.borrow_mut().replace(handle) {
            previous.dispose();
        }
    });
}

/// Tears down every installed component.
#[wasm_bindgen]
pub fn dispose_site() {
    with_site(|site| {
        if let Some(mut handle) = site.borrow_mut().take() {
            handle.dispose();
        }
    });
}

fn init_site(window: &Window, document: &Document, config: &SiteConfig) -> SiteHandle {
    let caps = Capabilities::detect(window);
    let page = PageElements::discover(document);
    debug!(?caps, present = ?page.present(), "page discovered");

    let mut site = SiteHandle::default();

    site.push(LanguageSwitch::install(document, page.lang_toggle.clone()));

    let chrome = Chrome::new();
    if let Some(button) = &page.scroll_top {
        chrome.scroll_top(window, button, &config.chrome);
    }
    if let Some(body) = &page.body {
        chrome.loader(
            window,
            document,
            body,
            page.loader.clone(),
            page.loading_cursor.clone(),
            &config.chrome,
        );
    }
    if let (Some(first), Some(last)) = (page.first_name.clone(), page.last_name.clone()) {
        chrome.typewriter(first, last, &config.chrome);
    }
    site.push(chrome);

    theme::enforce_dark_mode(document);

    match page.project_detail.clone() {
        Some(root) if config.project_detail => {
            site.push(ProjectDetail::install(window, document, root));
        }
        Some(_) => debug!("project detail disabled"),
        None => {}
    }

    menu::animate_nav_letters(document, &config.menu);
    if let Some(hamburger) = page.hamburger.clone() {
        site.push(Menu::install(
            window,
            document,
            hamburger,
            page.main_nav.clone(),
            page.hero.clone(),
            &config.menu,
        ));
    }

    match Reveal::install(
        document,
        &config.reveal,
        caps.reduced_motion,
        caps.intersection_observer,
    ) {
        Ok(reveal) => site.push(reveal),
        Err(err) => warn!(component = "reveal", error = %err, "install failed"),
    }

    let effects = PointerEffects::new();
    if caps.pointer_effects() {
        effects.tilt_cards(document, &config.tilt);
    }
    if !caps.reduced_motion
        && let Some(cta) = &page.cta
    {
        effects.magnetic(cta, &config.magnetic);
    }
    site.push(effects);

    site.push_result(
        "stats",
        Stats::install(window, document, &config.count_up, caps.reduced_motion),
    );

    // Touch devices keep native scrolling.
    if caps.hover_fine
        && let Some(el) = page.projects_scroller.clone()
    {
        site.push(ProjectsScroller::install(window, document, el, &config.scroller));
    }

    if let Some((container, track)) = page.carousel.clone() {
        site.push(DeferredCarousel::install(
            window,
            document,
            container,
            track,
            &config.carousel,
            caps.hover_fine,
        ));
    }

    site
}
