//! Table-driven font metrics.

use super::{CodepointRanges, Font, FontMetrics};
use std::collections::HashMap;

/// A font described entirely by metric tables in font units.
///
/// This is the shape of the data a metrics-file or outline-font parser
/// produces: global vertical metrics, a default advance, per-character
/// advances, and the set of characters the font covers. An empty coverage set
/// means "covers exactly the characters in the advance table".
#[derive(Clone, Debug)]
pub struct MetricsFont {
    name: String,
    units_per_em: u16,
    ascender: i16,
    descender: i16,
    line_gap: i16,
    underline_position: i16,
    underline_thickness: i16,
    default_advance: u16,
    advances: HashMap<char, u16>,
    coverage: CodepointRanges,
}

impl MetricsFont {
    /// Start building a font with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> MetricsFontBuilder {
        MetricsFontBuilder {
            font: Self {
                name: name.into(),
                units_per_em: 1000,
                ascender: 750,
                descender: -250,
                line_gap: 0,
                underline_position: -100,
                underline_thickness: 50,
                default_advance: 500,
                advances: HashMap::new(),
                coverage: CodepointRanges::new(),
            },
        }
    }

    fn scale(&self, units: f64, size: f64) -> f64 {
        units * size / f64::from(self.units_per_em)
    }

    fn advance(&self, ch: char) -> u16 {
        self.advances
            .get(&ch)
            .copied()
            .unwrap_or(self.default_advance)
    }
}

impl Font for MetricsFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_rune(&self, ch: char) -> bool {
        if self.coverage.is_empty() {
            self.advances.contains_key(&ch)
        } else {
            self.coverage.contains(ch)
        }
    }

    fn metrics(&self, size: f64) -> FontMetrics {
        FontMetrics {
            ascent: self.scale(f64::from(self.ascender), size),
            descent: self.scale(f64::from(self.descender), size),
            line_gap: self.scale(f64::from(self.line_gap), size),
            underline_position: self.scale(f64::from(self.underline_position), size),
            underline_thickness: self.scale(f64::from(self.underline_thickness), size),
        }
    }

    fn string_width(&self, text: &str, size: f64) -> f64 {
        // Sum in integer units first so equal advances scale exactly.
        let units: u64 = text.chars().map(|ch| u64::from(self.advance(ch))).sum();
        self.scale(units as f64, size)
    }
}

/// Builder for [`MetricsFont`].
#[derive(Clone, Debug)]
pub struct MetricsFontBuilder {
    font: MetricsFont,
}

impl MetricsFontBuilder {
    #[must_use]
    pub fn units_per_em(mut self, units: u16) -> Self {
        self.font.units_per_em = units.max(1);
        self
    }

    #[must_use]
    pub fn ascender(mut self, units: i16) -> Self {
        self.font.ascender = units;
        self
    }

    /// Descender in font units; negative below the baseline.
    #[must_use]
    pub fn descender(mut self, units: i16) -> Self {
        self.font.descender = units;
        self
    }

    #[must_use]
    pub fn line_gap(mut self, units: i16) -> Self {
        self.font.line_gap = units;
        self
    }

    #[must_use]
    pub fn underline(mut self, position: i16, thickness: i16) -> Self {
        self.font.underline_position = position;
        self.font.underline_thickness = thickness;
        self
    }

    /// Advance for characters without an explicit entry.
    #[must_use]
    pub fn default_advance(mut self, units: u16) -> Self {
        self.font.default_advance = units;
        self
    }

    /// Advance for one character.
    #[must_use]
    pub fn advance(mut self, ch: char, units: u16) -> Self {
        self.font.advances.insert(ch, units);
        self
    }

    /// Characters the font covers.
    #[must_use]
    pub fn coverage(mut self, coverage: CodepointRanges) -> Self {
        self.font.coverage = coverage;
        self
    }

    #[must_use]
    pub fn build(self) -> MetricsFont {
        self.font
    }
}
