//! Page chrome: the scroll-to-top button, the loading cursor and the hero
//! typewriter.

pub fn scroll_top_visible(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Where the loading cursor sits for a pointer at `(x, y)`.
pub fn loading_cursor_position(x: f64, y: f64, offset_px: f64) -> (String, String) {
    (format!("{}px", x + offset_px), format!("{}px", y + offset_px))
}

/// Yields the growing prefixes of a text, one character per step.
///
/// The first step yields the first character; an empty text yields nothing.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.typed >= self.chars.len()
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_finished() {
            return None;
        }
        self.typed += 1;
        Some(self.chars[..self.typed].iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn typewriter_types_one_char_per_step() {
        let steps: Vec<String> = Typewriter::new("Lenti").collect();
        assert_eq!(steps, vec!["L", "Le", "Len", "Lent", "Lenti"]);
        assert!(Typewriter::new("").is_finished());
    }

    #[test]
    fn scroll_top_threshold_is_exclusive() {
        assert!(!scroll_top_visible(20.0, 20.0));
        assert!(scroll_top_visible(21.0, 20.0));
    }

    #[test]
    fn loading_cursor_trails_pointer() {
        assert_eq!(
            loading_cursor_position(5.0, 7.5, 10.0),
            ("15px".to_string(), "17.5px".to_string())
        );
    }
}
