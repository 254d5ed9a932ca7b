//! Card tilt: rotation toward the pointer, a spotlight that follows it and
//! a slight counter-shift of the card image.

use foundation::Rect;

use crate::config::TiltConfig;
use crate::fixed;

/// Transform value restoring a card (and its image) on leave.
pub const TILT_RESET: &str = "none";

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TiltFrame {
    /// Pointer position inside the card, `[0, 1]` per axis.
    pub pointer: [f64; 2],
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub image_shift_px: [f64; 2],
}

impl TiltFrame {
    pub fn compute(card: &Rect, x: f64, y: f64, config: &TiltConfig) -> Self {
        let [px, py] = card.normalized(x, y);
        Self {
            pointer: [px, py],
            rotate_x_deg: (py - 0.5) * -2.0 * config.max_tilt_deg,
            rotate_y_deg: (px - 0.5) * 2.0 * config.max_tilt_deg,
            image_shift_px: [
                (0.5 - px) * config.image_shift_px,
                (0.5 - py) * config.image_shift_px,
            ],
        }
    }

    /// `--hx` / `--hy` custom properties consumed by the spotlight.
    pub fn spotlight(&self) -> [(&'static str, String); 2] {
        [
            ("--hx", format!("{}%", fixed(self.pointer[0] * 100.0, 2))),
            ("--hy", format!("{}%", fixed(self.pointer[1] * 100.0, 2))),
        ]
    }

    pub fn card_transform(&self, config: &TiltConfig) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            config.perspective_px,
            fixed(self.rotate_x_deg, 2),
            fixed(self.rotate_y_deg, 2)
        )
    }

    pub fn image_transform(&self, config: &TiltConfig) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            fixed(self.image_shift_px[0], 1),
            fixed(self.image_shift_px[1], 1),
            config.image_scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card() -> Rect {
        Rect::new(100.0, 50.0, 200.0, 100.0)
    }

    #[test]
    fn centered_pointer_is_flat() {
        let cfg = TiltConfig::default();
        let f = TiltFrame::compute(&card(), 200.0, 100.0, &cfg);
        assert_eq!(
            f.card_transform(&cfg),
            "perspective(800px) rotateX(0.00deg) rotateY(0.00deg)"
        );
        assert_eq!(f.image_transform(&cfg), "translate(0.0px, 0.0px) scale(1.06)");
        assert_eq!(
            f.spotlight(),
            [("--hx", "50.00%".to_string()), ("--hy", "50.00%".to_string())]
        );
    }

    #[test]
    fn corners_reach_the_maximum_tilt() {
        let cfg = TiltConfig::default();
        let top_left = TiltFrame::compute(&card(), 100.0, 50.0, &cfg);
        assert_eq!(top_left.rotate_x_deg, 8.0);
        assert_eq!(top_left.rotate_y_deg, -8.0);
        assert_eq!(top_left.image_shift_px, [6.0, 6.0]);

        let bottom_right = TiltFrame::compute(&card(), 300.0, 150.0, &cfg);
        assert_eq!(
            bottom_right.card_transform(&cfg),
            "perspective(800px) rotateX(-8.00deg) rotateY(8.00deg)"
        );
        assert_eq!(
            bottom_right.image_transform(&cfg),
            "translate(-6.0px, -6.0px) scale(1.06)"
        );
    }

    #[test]
    fn pointer_outside_the_card_is_clamped() {
        let cfg = TiltConfig::default();
        let f = TiltFrame::compute(&card(), -1000.0, 1000.0, &cfg);
        assert_eq!(f.pointer, [0.0, 1.0]);
        assert_eq!(f.rotate_x_deg, -8.0);
        assert_eq!(f.rotate_y_deg, -8.0);
    }
}
