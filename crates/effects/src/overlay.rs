//! Decisions behind the project detail overlay: which slide a topic opens,
//! where Tab moves focus while the dialog traps it, and the zoom ghost's
//! starting transform.

use foundation::Rect;

/// Elements that can take focus inside the dialog.
pub const FOCUSABLE_SELECTOR: &str =
    "a[href], button:not([disabled]), textarea, input, select, [tabindex]:not([tabindex=\"-1\"])";

/// Name of the window event that asks the overlay to open.
pub const OPEN_DETAIL_EVENT: &str = "open-project-detail";

/// Final ghost transform; the CSS transition animates toward it.
pub const GHOST_END_TRANSFORM: &str = "translate(0px, 0px) scale(1, 1)";

/// Ghost removal when `transitionend` never fires.
pub const GHOST_SAFETY_TIMEOUT_MS: u32 = 450;

pub fn display_title(topic: &str) -> &str {
    if topic.is_empty() { "Project" } else { topic }
}

/// Index of the slide whose topic matches case-insensitively, falling back
/// to the first slide. `None` only when there are no slides.
pub fn find_topic_slide<'a, I>(slide_topics: I, topic: &str) -> Option<usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let wanted = topic.to_lowercase();
    let mut any = false;
    for (i, candidate) in slide_topics.into_iter().enumerate() {
        any = true;
        if candidate.unwrap_or_default().to_lowercase() == wanted {
            return Some(i);
        }
    }
    any.then_some(0)
}

/// What the focus trap does with a Tab keypress.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrapAction {
    /// Let the browser move focus.
    Pass,
    /// Cancel the keypress and focus the element at this index.
    FocusAt(usize),
}

/// `active` is the index of the focused element among the focusables,
/// `on_root` whether the dialog itself holds focus.
pub fn trap_tab(count: usize, active: Option<usize>, on_root: bool, shift: bool) -> TrapAction {
    if count == 0 {
        return TrapAction::Pass;
    }
    let last = count - 1;
    if count == 1 {
        return TrapAction::FocusAt(0);
    }
    if shift {
        if active == Some(0) || on_root {
            return TrapAction::FocusAt(last);
        }
    } else if active == Some(last) {
        return TrapAction::FocusAt(0);
    }
    TrapAction::Pass
}

/// Transform placing a full-viewport ghost (origin top left) over `source`.
pub fn ghost_start_transform(source: &Rect, viewport_width: f64, viewport_height: f64) -> String {
    let sx = (source.width / viewport_width).max(0.01);
    let sy = (source.height / viewport_height).max(0.01);
    format!(
        "translate({}px, {}px) scale({}, {})",
        source.left.round(),
        source.top.round(),
        sx,
        sy
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn topic_match_ignores_case_and_falls_back() {
        let slides = [Some("Branding"), None, Some("Web Design")];
        assert_eq!(find_topic_slide(slides, "web design"), Some(2));
        assert_eq!(find_topic_slide(slides, "Motion"), Some(0));
        assert_eq!(find_topic_slide(Vec::<Option<&str>>::new(), "Motion"), None);
        // A slide without a topic matches the empty topic.
        assert_eq!(find_topic_slide([Some("A"), None], ""), Some(1));
    }

    #[test]
    fn tab_wraps_at_both_ends() {
        assert_eq!(trap_tab(3, Some(2), false, false), TrapAction::FocusAt(0));
        assert_eq!(trap_tab(3, Some(0), false, true), TrapAction::FocusAt(2));
        assert_eq!(trap_tab(3, None, true, true), TrapAction::FocusAt(2));
        assert_eq!(trap_tab(3, Some(1), false, false), TrapAction::Pass);
        assert_eq!(trap_tab(1, Some(0), false, false), TrapAction::FocusAt(0));
        assert_eq!(trap_tab(0, None, true, false), TrapAction::Pass);
    }

    #[test]
    fn ghost_starts_over_the_card() {
        let r = Rect::new(10.4, 20.6, 400.0, 300.0);
        assert_eq!(
            ghost_start_transform(&r, 800.0, 600.0),
            "translate(10px, 21px) scale(0.5, 0.5)"
        );
        let hidden = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            ghost_start_transform(&hidden, 800.0, 600.0),
            "translate(0px, 0px) scale(0.01, 0.01)"
        );
    }

    #[test]
    fn empty_topic_gets_generic_title() {
        assert_eq!(display_title(""), "Project");
        assert_eq!(display_title("Branding"), "Branding");
    }
}
