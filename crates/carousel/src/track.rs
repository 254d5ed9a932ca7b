/// Where a rendered slide comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SlideRole {
    LeadingClone,
    Original,
    TrailingClone,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SlideRef {
    /// Index into the original slides.
    pub source: usize,
    pub role: SlideRole,
}

/// Layout of the tripled strip: `[leading clones][originals][trailing clones]`.
///
/// Both clone blocks keep the originals' order, so the strip is periodic with
/// period `original_count` and wrapping the offset by one cycle shows
/// identical pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidePlan {
    original_count: usize,
    slides: Vec<SlideRef>,
}

impl SlidePlan {
    pub fn new(original_count: usize) -> Self {
        let block = |role| (0..original_count).map(move |source| SlideRef { source, role });
        let slides = block(SlideRole::LeadingClone)
            .chain(block(SlideRole::Original))
            .chain(block(SlideRole::TrailingClone))
            .collect();
        Self {
            original_count,
            slides,
        }
    }

    pub fn original_count(&self) -> usize {
        self.original_count
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[SlideRef] {
        &self.slides
    }

    /// Order in which originals are cloned when each clone is inserted at
    /// the front of the leading block. Inserting in reverse keeps the block
    /// in source order.
    pub fn leading_insertion_order(&self) -> impl Iterator<Item = usize> {
        (0..self.original_count).rev()
    }

    /// Index of the first original within the strip.
    pub fn first_original(&self) -> usize {
        self.original_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strip_is_three_blocks() {
        for n in 1..=7 {
            let plan = SlidePlan::new(n);
            assert_eq!(plan.len(), 3 * n);
            assert_eq!(plan.first_original(), n);
            assert_eq!(plan.slides()[n].role, SlideRole::Original);
            assert_eq!(plan.slides()[0].role, SlideRole::LeadingClone);
            assert_eq!(plan.slides()[3 * n - 1].role, SlideRole::TrailingClone);
        }
    }

    #[test]
    fn strip_is_periodic() {
        let plan = SlidePlan::new(4);
        let sources: Vec<usize> = plan.slides().iter().map(|s| s.source).collect();
        assert_eq!(sources, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]);
    }

    #[test]
    fn reverse_front_insertion_restores_order() {
        let plan = SlidePlan::new(5);
        let mut leading: Vec<usize> = Vec::new();
        for source in plan.leading_insertion_order() {
            leading.insert(0, source);
        }
        assert_eq!(leading, vec![0, 1, 2, 3, 4]);
    }
}
