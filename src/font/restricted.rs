//! Coverage-restricted font wrapper.

use super::{CodepointRanges, Font, FontMetrics, SharedFont};

/// A font whose coverage is limited to a set of code point ranges.
///
/// Two fonts may both cover Latin and CJK text while each is the better choice
/// for one script. Restricting the CJK font to ideographs lets it lead the
/// fallback list without also claiming the Latin text.
///
/// The wrapper is a distinct font: pieces rendered through it do not match
/// pieces rendered through the inner font.
#[derive(Debug)]
pub struct RestrictedFont {
    inner: SharedFont,
    ranges: CodepointRanges,
}

impl RestrictedFont {
    #[must_use]
    pub fn new(inner: SharedFont, ranges: CodepointRanges) -> Self {
        Self { inner, ranges }
    }

    /// The wrapped font.
    #[must_use]
    pub fn inner(&self) -> &SharedFont {
        &self.inner
    }
}

impl Font for RestrictedFont {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn has_rune(&self, ch: char) -> bool {
        self.ranges.contains(ch) && self.inner.has_rune(ch)
    }

    fn metrics(&self, size: f64) -> FontMetrics {
        self.inner.metrics(size)
    }

    fn string_width(&self, text: &str, size: f64) -> f64 {
        self.inner.string_width(text, size)
    }
}
