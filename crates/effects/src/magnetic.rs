use foundation::Rect;

use crate::fixed;

/// Rest transform once the pointer leaves.
pub const MAGNETIC_REST: &str = "translate(0, 0)";

/// Offset pulling the element toward the pointer, `strength` pixels across
/// its full extent.
pub fn magnetic_offset(target: &Rect, x: f64, y: f64, strength: f64) -> [f64; 2] {
    let [px, py] = target.normalized(x, y);
    [(px - 0.5) * strength, (py - 0.5) * strength]
}

pub fn magnetic_transform(offset: [f64; 2]) -> String {
    format!("translate({}px, {}px)", fixed(offset[0], 1), fixed(offset[1], 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn offset_follows_the_pointer() {
        let cta = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(magnetic_offset(&cta, 100.0, 0.0, 14.0), [7.0, -7.0]);
        assert_eq!(magnetic_transform([7.0, -7.0]), "translate(7.0px, -7.0px)");
        assert_eq!(
            magnetic_transform(magnetic_offset(&cta, 50.0, 20.0, 14.0)),
            "translate(0.0px, 0.0px)"
        );
    }
}
