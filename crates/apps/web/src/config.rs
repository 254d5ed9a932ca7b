use carousel::{CarouselConfig, ScrollerConfig};
use effects::{ChromeConfig, CountUpConfig, MagneticConfig, MenuConfig, RevealConfig, TiltConfig};
use serde::Deserialize;
use tracing::Level;

use crate::error::SiteError;
use crate::logging::parse_level;

/// Id of the optional inline JSON element carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Page-wide tuning. Every field has a default, so the page works with no
/// configuration element at all.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub scroller: ScrollerConfig,
    pub tilt: TiltConfig,
    pub magnetic: MagneticConfig,
    pub count_up: CountUpConfig,
    pub menu: MenuConfig,
    pub reveal: RevealConfig,
    pub chrome: ChromeConfig,
    /// Open the project detail overlay from project cards.
    pub project_detail: bool,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            scroller: ScrollerConfig::default(),
            tilt: TiltConfig::default(),
            magnetic: MagneticConfig::default(),
            count_up: CountUpConfig::default(),
            menu: MenuConfig::default(),
            reveal: RevealConfig::default(),
            chrome: ChromeConfig::default(),
            project_detail: true,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse the configuration element's text. Absent or blank text gives
    /// the defaults; malformed text gives the defaults plus the error so it
    /// can be logged once logging is up.
    pub fn from_element_text(text: Option<&str>) -> (Self, Option<SiteError>) {
        match text.map(str::trim).filter(|t| !t.is_empty()) {
            None => (Self::default(), None),
            Some(t) => match Self::from_json(t) {
                Ok(cfg) => (cfg, None),
                Err(err) => (Self::default(), Some(err)),
            },
        }
    }

    pub fn from_document(document: &web_sys::Document) -> (Self, Option<SiteError>) {
        let text = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        Self::from_element_text(text.as_deref())
    }

    pub fn level(&self) -> Level {
        parse_level(&self.log_level).unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_element_uses_defaults() {
        let (cfg, err) = SiteConfig::from_element_text(None);
        assert_eq!(cfg, SiteConfig::default());
        assert!(err.is_none());
        assert!(cfg.project_detail);
        assert_eq!(cfg.carousel.speed_px_per_frame, 1.8);
        assert_eq!(cfg.reveal.max_delay_ms, 450);
    }

    #[test]
    fn nested_overrides_merge_with_defaults() {
        let text = r#"{
            "carousel": { "speed_px_per_frame": 2.5, "autoplay": false },
            "project_detail": false,
            "log_level": "debug"
        }"#;
        let (cfg, err) = SiteConfig::from_element_text(Some(text));
        assert!(err.is_none());
        assert_eq!(cfg.carousel.speed_px_per_frame, 2.5);
        assert!(!cfg.carousel.autoplay);
        assert_eq!(cfg.carousel.snap_duration_ms, 280.0);
        assert!(!cfg.project_detail);
        assert_eq!(cfg.level(), Level::DEBUG);
    }

    #[test]
    fn malformed_json_reports_and_falls_back() {
        let (cfg, err) = SiteConfig::from_element_text(Some("{ carousel: nope"));
        assert_eq!(cfg, SiteConfig::default());
        assert!(matches!(err, Some(SiteError::Config(_))));
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let cfg = SiteConfig {
            log_level: "loud".into(),
            ..SiteConfig::default()
        };
        assert_eq!(cfg.level(), Level::INFO);
    }
}
