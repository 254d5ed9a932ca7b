use serde::Deserialize;

/// Tuning for the looping carousel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Autoplay enabled at all.
    pub autoplay: bool,
    /// Autoplay advance in pixels per animation frame.
    pub speed_px_per_frame: f64,
    /// Minimum displacement before a gesture commits to an axis.
    pub lock_threshold_px: f64,
    /// Extra horizontal displacement required over vertical (ambiguous
    /// diagonals go to page scroll).
    pub vertical_bias_px: f64,
    pub snap_duration_ms: f64,
    /// Delay after a drag release before autoplay resumes.
    pub drag_resume_delay_ms: f64,
    /// Delay after a touch that never became a drag.
    pub touch_resume_delay_ms: f64,
    /// Single retry delay when the container measures zero.
    pub layout_retry_ms: u32,
    /// Hover polling interval guarding against missed leave events.
    pub hover_poll_ms: u32,
    /// Delay before the first aligned frame is forced after setup.
    pub initial_align_ms: u32,
    /// Delay before re-aligning after an image finished loading.
    pub image_align_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            speed_px_per_frame: 1.8,
            lock_threshold_px: 8.0,
            vertical_bias_px: 4.0,
            snap_duration_ms: 280.0,
            drag_resume_delay_ms: 120.0,
            touch_resume_delay_ms: 180.0,
            layout_retry_ms: 50,
            hover_poll_ms: 400,
            initial_align_ms: 80,
            image_align_ms: 30,
        }
    }
}

/// Tuning for the bounded hold-and-drag scroller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollerConfig {
    pub lock_threshold_px: f64,
    /// Rubber-band radius past either bound.
    pub resistance_radius_px: f64,
    pub rebound_duration_ms: f64,
    /// Horizontal travel below this counts as a tap.
    pub tap_slop_px: f64,
    /// A wheel event is horizontal when `|dx| > ratio * |dy|`.
    pub wheel_horizontal_ratio: f64,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            lock_threshold_px: 12.0,
            resistance_radius_px: 100.0,
            rebound_duration_ms: 300.0,
            tap_slop_px: 6.0,
            wheel_horizontal_ratio: 1.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: CarouselConfig = serde_json::from_str(r#"{ "speed_px_per_frame": 2.5 }"#).unwrap();
        assert_eq!(cfg.speed_px_per_frame, 2.5);
        assert_eq!(cfg.snap_duration_ms, 280.0);
        assert!(cfg.autoplay);
    }

    #[test]
    fn scroller_defaults() {
        let cfg: ScrollerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, ScrollerConfig::default());
    }
}
