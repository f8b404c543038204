//! Font capability consumed by the layout engine.
//!
//! The engine never decodes font files. It asks a [`Font`] three questions:
//! does it cover a character, what are its vertical metrics at a size, and how
//! wide is a string at a size. Fonts are shared read-only between every piece
//! of text that uses them via [`SharedFont`]; two pieces use "the same font"
//! when they hold the same allocation.
//!
//! Key types:
//!
//! - [`Font`]: the capability trait
//! - [`MetricsFont`]: a table-driven font described in font units
//! - [`RestrictedFont`]: limits another font's coverage to code point ranges
//! - [`CodepointRanges`]: sorted code point range set with named blocks
//!
//! # Examples
//!
//! ```
//! use richtype::font::{CodepointRanges, Font, MetricsFont};
//!
//! let font = MetricsFont::builder("Mono")
//!     .ascender(800)
//!     .descender(-200)
//!     .default_advance(600)
//!     .coverage(CodepointRanges::from_names(&["Basic Latin"]).unwrap())
//!     .build();
//!
//! assert!(font.has_rune('a'));
//! assert!(!font.has_rune('д'));
//! assert_eq!(font.string_width("abc", 10.0), 18.0);
//! ```

mod metrics;
mod ranges;
mod restricted;

pub use metrics::{MetricsFont, MetricsFontBuilder};
pub use ranges::{CodepointRanges, NAMED_RANGES};
pub use restricted::RestrictedFont;

use std::fmt;
use std::sync::Arc;

/// A font shared between text pieces.
pub type SharedFont = Arc<dyn Font>;

/// Vertical metrics scaled to a font size, in points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FontMetrics {
    /// Distance from baseline to the top of the tallest glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of the lowest glyphs (negative).
    pub descent: f64,
    /// Extra space the font recommends between lines.
    pub line_gap: f64,
    /// Offset of the underline from the baseline (usually negative).
    pub underline_position: f64,
    pub underline_thickness: f64,
}

impl FontMetrics {
    /// Ascent to descent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ascent - self.descent
    }
}

/// Coverage and metric queries for one font.
///
/// Implementations must be side-effect free. `string_width` must be additive
/// over concatenation (no kerning), because the line packer measures prefixes
/// character by character.
pub trait Font: fmt::Debug + Send + Sync {
    /// Human-readable font name.
    fn name(&self) -> &str;

    /// Whether the font has a glyph for `ch`.
    fn has_rune(&self, ch: char) -> bool;

    /// Vertical metrics at `size` points.
    fn metrics(&self, size: f64) -> FontMetrics;

    /// Advance width of `text` at `size` points.
    fn string_width(&self, text: &str, size: f64) -> f64;
}

/// Whether two optional fonts are the same font instance.
#[must_use]
pub fn same_font(a: Option<&SharedFont>, b: Option<&SharedFont>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
        (None, None) => true,
        _ => false,
    }
}
