//! Hamburger menu state: open/closed, the touch-then-click guard and the
//! scroll-driven visibility with hysteresis.

use tracing::debug;

use crate::config::MenuConfig;

/// Class set on `<body>` while the menu is open.
pub const BODY_OPEN_CLASS: &str = "nav-open";
/// Dedicated close control inside the nav.
pub const CLOSE_BUTTON_SELECTOR: &str = ".close-btn";

#[derive(Debug, Default, Clone)]
pub struct MenuState {
    open: bool,
    /// Set by a touch toggle so the synthesized click that follows is
    /// swallowed instead of toggling back.
    touch_guard: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Flip and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        debug!(open = self.open, "menu toggled");
        self.open
    }

    pub fn touch_toggle(&mut self) -> bool {
        self.touch_guard = true;
        self.toggle()
    }

    /// Click on the button. `None` when the click only echoes a touch.
    pub fn click(&mut self) -> Option<bool> {
        if self.touch_guard {
            self.touch_guard = false;
            return None;
        }
        Some(self.toggle())
    }

    /// Close; `true` when the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Document-space vertical extent of the hero section.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeroBounds {
    pub offset_top: f64,
    pub height: f64,
}

impl HeroBounds {
    pub fn bottom(&self) -> f64 {
        self.offset_top + self.height
    }
}

/// Hamburger visibility. It appears once the page scrolls clearly past the
/// hero and hides only when scrolled clearly back above it.
#[derive(Debug, Default, Clone)]
pub struct HamburgerVisibility {
    visible: bool,
}

impl HamburgerVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    fn past_hero(&self, scroll_y: f64, hero: Option<HeroBounds>, config: &MenuConfig) -> bool {
        let Some(hero) = hero else {
            return scroll_y > config.fallback_scroll_px;
        };
        let bottom = hero.bottom();
        if self.visible {
            scroll_y > bottom - config.hysteresis_px
        } else {
            scroll_y > bottom + config.hysteresis_px
        }
    }

    /// Recompute; returns the new visibility only when it changed.
    pub fn update(
        &mut self,
        menu_open: bool,
        scroll_y: f64,
        hero: Option<HeroBounds>,
        config: &MenuConfig,
    ) -> Option<bool> {
        let show = menu_open || self.past_hero(scroll_y, hero, config);
        if show == self.visible {
            return None;
        }
        self.visible = show;
        Some(show)
    }
}

/// Per-letter animation delays for a nav label, e.g. `("b", "0.06s")`.
pub fn letter_delays(label: &str, step_s: f64) -> Vec<(String, String)> {
    label
        .chars()
        .enumerate()
        .map(|(i, c)| (c.to_string(), format!("{}s", i as f64 * step_s)))
        .collect()
}
