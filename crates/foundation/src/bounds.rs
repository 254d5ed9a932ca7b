/// Axis-aligned client rectangle in CSS pixels, as reported by
/// `getBoundingClientRect`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect {
            left,
            top,
            width,
            height,
        }
    }

    /// True when layout has not produced a usable box yet.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Pointer position relative to the rect, each axis clamped to `[0, 1]`.
    ///
    /// Degenerate axes map to the center.
    pub fn normalized(&self, x: f64, y: f64) -> [f64; 2] {
        let px = if self.width > 0.0 {
            ((x - self.left) / self.width).clamp(0.0, 1.0)
        } else {
            0.5
        };
        let py = if self.height > 0.0 {
            ((y - self.top) / self.height).clamp(0.0, 1.0)
        } else {
            0.5
        };
        [px, py]
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn normalized_clamps_outside_points() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.normalized(60.0, 45.0), [0.5, 0.5]);
        assert_eq!(r.normalized(-500.0, 500.0), [0.0, 1.0]);
    }

    #[test]
    fn empty_rect_maps_to_center() {
        let r = Rect::default();
        assert!(r.is_empty());
        assert_eq!(r.normalized(3.0, 4.0), [0.5, 0.5]);
    }
}
