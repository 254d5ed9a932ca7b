use serde::Deserialize;

/// Card tilt with a spotlight and image parallax.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// Rotation at the card edges, in degrees.
    pub max_tilt_deg: f64,
    pub perspective_px: f64,
    /// Zoom applied to the card image while hovered.
    pub image_scale: f64,
    /// Image shift range across the whole card, in pixels.
    pub image_shift_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt_deg: 8.0,
            perspective_px: 800.0,
            image_scale: 1.06,
            image_shift_px: 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MagneticConfig {
    /// Translation range across the element, in pixels.
    pub strength_px: f64,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self { strength_px: 14.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CountUpConfig {
    pub duration_ms: f64,
    /// Intersection ratio of the stat card that starts the count.
    pub threshold: f64,
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1200.0,
            threshold: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Half-width of the band around the hero bottom where the hamburger
    /// keeps its current visibility.
    pub hysteresis_px: f64,
    /// Scroll offset that shows the hamburger on pages without a hero.
    pub fallback_scroll_px: f64,
    /// Animation delay step between nav letters, in seconds.
    pub letter_delay_s: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            hysteresis_px: 60.0,
            fallback_scroll_px: 60.0,
            letter_delay_s: 0.06,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub stagger_ms: u32,
    pub max_delay_ms: u32,
    pub root_margin: String,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            stagger_ms: 30,
            max_delay_ms: 450,
            root_margin: "0px 0px -10% 0px".to_string(),
            threshold: 0.1,
        }
    }
}

/// Loader, scroll-to-top button and hero typewriter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub scroll_top_threshold_px: f64,
    /// Delay after window load before the loader slides away.
    pub loader_delay_ms: u32,
    /// Loader dismissal when the load event never arrives.
    pub loader_fallback_ms: u32,
    /// Offset of the custom loading cursor from the pointer.
    pub cursor_offset_px: f64,
    pub type_interval_ms: u32,
    /// Delay before the last name starts typing.
    pub last_name_delay_ms: u32,
    pub first_name: String,
    pub last_name: String,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            scroll_top_threshold_px: 20.0,
            loader_delay_ms: 400,
            loader_fallback_ms: 800,
            cursor_offset_px: 10.0,
            type_interval_ms: 80,
            last_name_delay_ms: 900,
            first_name: "Giuseppe".to_string(),
            last_name: "Lenti".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let tilt: TiltConfig = serde_json::from_str(r#"{ "max_tilt_deg": 4 }"#).unwrap();
        assert_eq!(
            tilt,
            TiltConfig {
                max_tilt_deg: 4.0,
                ..TiltConfig::default()
            }
        );

        let reveal: RevealConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(reveal, RevealConfig::default());
    }

    #[test]
    fn chrome_names_can_be_overridden() {
        let chrome: ChromeConfig =
            serde_json::from_str(r#"{ "first_name": "Ada", "last_name": "Lovelace" }"#).unwrap();
        assert_eq!(chrome.first_name, "Ada");
        assert_eq!(chrome.type_interval_ms, 80);
    }
}
