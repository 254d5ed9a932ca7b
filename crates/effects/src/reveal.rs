use crate::config::RevealConfig;

/// Elements that fade in on scroll, looked up inside the main content.
pub const REVEAL_SELECTORS: &[&str] = &[
    ".reveal",
    "section",
    ".section",
    ".stat-item",
    ".project-card",
    ".feature-card",
    ".service-card",
    ".grid-item",
    ".card",
    ".about-section",
    ".about-caption",
    ".about-caption .giant-text",
    ".about-stats",
    ".about-stats .stat-item",
    ".about-text",
    ".about-hero",
    "footer",
    ".footer",
    ".footer-cta",
    ".footer-headings",
    ".footer-cta-actions",
    ".footer-illustration",
];

/// Nothing inside this container is ever hidden for reveal.
pub const REVEAL_EXCLUDED_WITHIN: &str = ".carousel-container";

/// Joined into one `querySelectorAll` argument.
pub fn reveal_selector() -> String {
    REVEAL_SELECTORS.join(", ")
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RevealMode {
    /// Mark every target visible right away.
    Immediate,
    Observe,
}

impl RevealMode {
    pub fn choose(reduced_motion: bool, target_count: usize) -> Self {
        if reduced_motion || target_count == 0 {
            RevealMode::Immediate
        } else {
            RevealMode::Observe
        }
    }
}

/// Delay before the `index`-th target (in document order) turns visible.
pub fn stagger_delay(index: usize, config: &RevealConfig) -> u32 {
    let raw = (index as u64).saturating_mul(config.stagger_ms as u64);
    raw.min(config.max_delay_ms as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_capped() {
        let cfg = RevealConfig::default();
        assert_eq!(stagger_delay(0, &cfg), 0);
        assert_eq!(stagger_delay(3, &cfg), 90);
        assert_eq!(stagger_delay(15, &cfg), 450);
        assert_eq!(stagger_delay(400, &cfg), 450);
    }

    #[test]
    fn reduced_motion_or_empty_skips_observation() {
        assert_eq!(RevealMode::choose(true, 5), RevealMode::Immediate);
        assert_eq!(RevealMode::choose(false, 0), RevealMode::Immediate);
        assert_eq!(RevealMode::choose(false, 2), RevealMode::Observe);
    }

    #[test]
    fn selector_lists_every_entry_once() {
        let s = reveal_selector();
        assert!(s.starts_with(".reveal, section, "));
        assert_eq!(s.split(", ").count(), REVEAL_SELECTORS.len());
    }
}
