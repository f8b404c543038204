//! Memoized measurement of pieces and trees.

use super::{Interior, RichText, TextPiece};

/// Horizontal and vertical extent of a piece or tree, in points.
///
/// For a tree, vertical values aggregate over all leaves (tallest ascent,
/// deepest descent, widest line gap, lowest and thickest underline) and width
/// is the sum of the leaf widths.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurement {
    pub ascent: f64,
    /// Below the baseline; zero or negative.
    pub descent: f64,
    /// `ascent - descent` of the combined extent.
    pub height: f64,
    pub line_gap: f64,
    pub underline_position: f64,
    pub underline_thickness: f64,
    pub width: f64,
}

impl Measurement {
    /// Distance between consecutive baselines.
    #[must_use]
    pub fn leading(&self) -> f64 {
        self.height + self.line_gap
    }

    fn combine(self, other: Self) -> Self {
        let ascent = self.ascent.max(other.ascent);
        let descent = self.descent.min(other.descent);
        Self {
            ascent,
            descent,
            height: ascent - descent,
            line_gap: self.line_gap.max(other.line_gap),
            underline_position: self.underline_position.min(other.underline_position),
            underline_thickness: self.underline_thickness.max(other.underline_thickness),
            width: self.width + other.width,
        }
    }
}

impl TextPiece {
    /// Width of `text` rendered with this piece's font and spacing.
    ///
    /// Character spacing applies after every character and word spacing after
    /// every ASCII space. A piece without a font has no width.
    #[must_use]
    pub fn advance(&self, text: &str) -> f64 {
        let Some(font) = &self.font else {
            return 0.0;
        };
        let mut width = font.string_width(text, self.font_size);
        if self.char_spacing != 0.0 {
            width += self.char_spacing * text.chars().count() as f64;
        }
        if self.word_spacing != 0.0 {
            width += self.word_spacing * text.chars().filter(|&c| c == ' ').count() as f64;
        }
        width
    }

    /// Cached measurement of this piece.
    #[must_use]
    pub fn measurement(&self) -> &Measurement {
        self.measurement.get_or_init(|| {
            let metrics = self
                .font
                .as_ref()
                .map(|font| font.metrics(self.font_size))
                .unwrap_or_default();
            Measurement {
                ascent: metrics.ascent,
                descent: metrics.descent,
                height: metrics.height(),
                line_gap: metrics.line_gap,
                underline_position: metrics.underline_position,
                underline_thickness: metrics.underline_thickness,
                width: self.advance(&self.text),
            }
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.measurement().width
    }
}

impl Interior {
    fn measurement(&self) -> &Measurement {
        self.measurement.get_or_init(|| {
            let mut children = self.children.iter().map(RichText::measurement);
            let first = children.next().unwrap_or_default();
            children.fold(first, Measurement::combine)
        })
    }
}

impl RichText {
    /// Cached measurement of the whole tree.
    #[must_use]
    pub fn measurement(&self) -> Measurement {
        match self {
            Self::Leaf(piece) => *piece.measurement(),
            Self::Interior(node) => *node.measurement(),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.measurement().width
    }

    #[must_use]
    pub fn ascent(&self) -> f64 {
        self.measurement().ascent
    }

    #[must_use]
    pub fn descent(&self) -> f64 {
        self.measurement().descent
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.measurement().height
    }

    #[must_use]
    pub fn line_gap(&self) -> f64 {
        self.measurement().line_gap
    }

    /// Height plus line gap.
    #[must_use]
    pub fn leading(&self) -> f64 {
        self.measurement().leading()
    }

    #[must_use]
    pub fn underline_position(&self) -> f64 {
        self.measurement().underline_position
    }

    #[must_use]
    pub fn underline_thickness(&self) -> f64 {
        self.measurement().underline_thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{MetricsFont, SharedFont};
    use crate::options::TextOptions;
    use std::sync::Arc;

    fn tall() -> SharedFont {
        Arc::new(
            MetricsFont::builder("Tall")
                .ascender(900)
                .descender(-100)
                .line_gap(200)
                .underline(-150, 40)
                .default_advance(500)
                .advance(' ', 250)
                .advance('a', 500)
                .build(),
        )
    }

    fn deep() -> SharedFont {
        Arc::new(
            MetricsFont::builder("Deep")
                .ascender(700)
                .descender(-300)
                .line_gap(100)
                .underline(-100, 80)
                .default_advance(500)
                .advance('b', 1000)
                .build(),
        )
    }

    #[test]
    fn test_piece_measurement() {
        let piece = TextPiece::new("a a", Some(tall()), 10.0, TextOptions::default());
        let m = piece.measurement();
        assert!((m.ascent - 9.0).abs() < 1e-9);
        assert!((m.descent - -1.0).abs() < 1e-9);
        assert!((m.height - 10.0).abs() < 1e-9);
        assert!((m.leading() - 12.0).abs() < 1e-9);
        assert!((m.width - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_spacing_adds_to_width() {
        let options = TextOptions::builder().char_spacing(1.0).word_spacing(2.0).build();
        let piece = TextPiece::new("a a", Some(tall()), 10.0, options);
        // 12.5 + 3 chars * 1.0 + 1 space * 2.0
        assert!((piece.width() - 17.5).abs() < 1e-9);
    }

    #[test]
    fn test_fontless_piece_measures_zero() {
        let piece = TextPiece::plain("abc");
        assert_eq!(*piece.measurement(), Measurement::default());
    }

    #[test]
    fn test_tree_aggregates_children() {
        let rt = RichText::new("a", &[tall()], 10.0, TextOptions::default())
            .unwrap()
            .add("bb", &[deep()], 10.0, TextOptions::default())
            .unwrap();
        let m = rt.measurement();
        assert!((m.ascent - 9.0).abs() < 1e-9);
        assert!((m.descent - -3.0).abs() < 1e-9);
        assert!((m.height - 12.0).abs() < 1e-9);
        assert!((m.line_gap - 2.0).abs() < 1e-9);
        assert!((m.underline_position - -1.5).abs() < 1e-9);
        assert!((m.underline_thickness - 0.8).abs() < 1e-9);
        assert!((m.width - 25.0).abs() < 1e-9);
        assert!((rt.leading() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_measurement_is_stable() {
        let rt = RichText::new("a a a", &[tall()], 10.0, TextOptions::default()).unwrap();
        let first = rt.measurement();
        let again = rt.clone().measurement();
        assert_eq!(first, again);
    }
}
