//! Scroll position to active section.

use super::Section;

/// Vertical extent of a section element in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open: the bottom edge belongs to whatever comes next.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// First section, in page order, whose extent contains `probe`.
///
/// `extent_of` returns `None` for sections missing from the document; those
/// are skipped.
pub fn active_section_at<F>(probe: f64, mut extent_of: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<SectionExtent>,
{
    Section::ALL
        .into_iter()
        .find(|&section| extent_of(section).is_some_and(|extent| extent.contains(probe)))
}
