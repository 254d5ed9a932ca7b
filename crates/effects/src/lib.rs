//! Host-independent pieces of the page effects: pointer-driven transforms,
//! count-up values, reveal staggering, menu state and page chrome.
//!
//! Everything here is plain data in, strings and numbers out. The browser
//! binding applies the results to elements.

pub mod chrome;
pub mod config;
pub mod count_up;
pub mod magnetic;
pub mod menu;
pub mod overlay;
pub mod reveal;
pub mod tilt;

pub use chrome::*;
pub use config::*;
pub use count_up::*;
pub use magnetic::*;
pub use menu::*;
pub use overlay::*;
pub use reveal::*;
pub use tilt::*;

/// Fixed-point rendering for CSS values.
///
/// Negative zero prints as `0`, so a pointer resting at a card's center
/// yields `rotateX(0.00deg)` rather than `-0.00deg`.
pub(crate) fn fixed(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::fixed;

    #[test]
    fn fixed_drops_negative_zero() {
        assert_eq!(fixed(-0.0, 2), "0.00");
        assert_eq!(fixed(-1.234, 1), "-1.2");
        assert_eq!(fixed(12.345_6, 2), "12.35");
    }
}
