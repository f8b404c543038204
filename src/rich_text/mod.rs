//! Persistent attributed text trees.
//!
//! A [`RichText`] is either a [`Leaf`](RichText::Leaf) holding one
//! [`TextPiece`] (text plus font, size, color and decorations) or an
//! [`Interior`] node holding an ordered, non-empty list of child trees.
//!
//! Trees are values. Every operation that "changes" a tree (`add`, `split`,
//! `merge`, `insert_string_at_offsets`, the trim family, `wrap_to_width`)
//! returns a new tree and leaves the receiver untouched. Measurements are
//! memoized per node in a write-once cell; because nodes are never mutated,
//! the cells are never invalidated.
//!
//! All offsets are UTF-8 byte offsets into the flattened text, the same unit
//! as [`RichText::len`] and as break-flag indices.
//!
//! # Pipeline
//!
//! ```
//! use richtype::codepage::{CodepageSet, ISO_8859_1, ISO_8859_5};
//! use richtype::font::{CodepointRanges, MetricsFont, SharedFont};
//! use richtype::wordbreak::UnicodeWordBreaker;
//! use richtype::{RichText, TextOptions};
//! use std::sync::Arc;
//!
//! let latin: SharedFont = Arc::new(
//!     MetricsFont::builder("Mono")
//!         .default_advance(600)
//!         .coverage(CodepointRanges::from_names(&["Basic Latin", "Cyrillic"]).unwrap())
//!         .build(),
//! );
//!
//! // Segment by font, then classify break opportunities and wrap.
//! let text = RichText::new("Hello Мир and friends", &[latin], 10.0, TextOptions::default()).unwrap();
//! let flags = text.break_flags(&UnicodeWordBreaker);
//! let lines = text.wrap_to_width(60.0, &flags, false);
//! let strings: Vec<String> = lines.iter().map(ToString::to_string).collect();
//! assert_eq!(strings, vec!["Hello Мир", "and", "friends"]);
//!
//! // Re-segment the first line by output codepage.
//! let codepages = CodepageSet::new(vec![ISO_8859_1, ISO_8859_5]);
//! let mut runs = Vec::new();
//! lines[0].each_codepage(&codepages, |index, run, _piece| runs.push((index.0, run.to_string())));
//! assert_eq!(runs, vec![(0, "Hello ".to_string()), (1, "Мир".to_string())]);
//! ```

mod codepage;
mod edit;
mod fallback;
mod measure;
mod wrap;

pub use codepage::codepage_runs;
pub use measure::Measurement;
pub use wrap::{BreakKind, LineBreak, Remainder};

use crate::color::Color;
use crate::error::Result;
use crate::font::{SharedFont, same_font};
use crate::options::TextOptions;
use std::fmt;
use std::sync::OnceLock;


/// One span of text sharing a single attribute set.
///
/// Pieces are immutable; [`TextPiece::with_text`] derives a piece with the same
/// attributes and new text.
#[derive(Clone)]
pub struct TextPiece {
    text: String,
    font: Option<SharedFont>,
    font_size: f64,
    color: Color,
    underline: bool,
    strikeout: bool,
    char_spacing: f64,
    word_spacing: f64,
    no_break: bool,
    chars: usize,
    measurement: OnceLock<Measurement>,
}

impl TextPiece {
    /// Create a piece rendered in `font` at `font_size` points.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        font: Option<SharedFont>,
        font_size: f64,
        options: TextOptions,
    ) -> Self {
        let text = text.into();
        Self {
            chars: text.chars().count(),
            text,
            font,
            font_size,
            color: options.color,
            underline: options.underline,
            strikeout: options.strikeout,
            char_spacing: options.char_spacing,
            word_spacing: options.word_spacing,
            no_break: options.no_break,
            measurement: OnceLock::new(),
        }
    }

    /// A piece with no font and default attributes. It measures as zero.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, None, 0.0, TextOptions::default())
    }

    /// The same attributes with different text.
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            chars: text.chars().count(),
            text,
            font: self.font.clone(),
            font_size: self.font_size,
            color: self.color,
            underline: self.underline,
            strikeout: self.strikeout,
            char_spacing: self.char_spacing,
            word_spacing: self.word_spacing,
            no_break: self.no_break,
            measurement: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn font(&self) -> Option<&SharedFont> {
        self.font.as_ref()
    }

    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn underline(&self) -> bool {
        self.underline
    }

    #[must_use]
    pub fn strikeout(&self) -> bool {
        self.strikeout
    }

    #[must_use]
    pub fn char_spacing(&self) -> f64 {
        self.char_spacing
    }

    #[must_use]
    pub fn word_spacing(&self) -> f64 {
        self.word_spacing
    }

    #[must_use]
    pub fn no_break(&self) -> bool {
        self.no_break
    }

    /// Length in UTF-8 bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of Unicode scalar values.
    #[must_use]
    pub fn chars(&self) -> usize {
        self.chars
    }

    /// Whether both pieces render with the same font, size, color,
    /// decorations and spacing. Text and the no-break flag are not compared.
    #[must_use]
    pub fn matches_attributes(&self, other: &Self) -> bool {
        same_font(self.font.as_ref(), other.font.as_ref())
            && self.font_size == other.font_size
            && self.color == other.color
            && self.underline == other.underline
            && self.strikeout == other.strikeout
            && self.char_spacing == other.char_spacing
            && self.word_spacing == other.word_spacing
    }
}

impl PartialEq for TextPiece {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.no_break == other.no_break
            && self.matches_attributes(other)
    }
}

impl fmt::Debug for TextPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextPiece")
            .field("text", &self.text)
            .field("font", &self.font.as_ref().map(|font| font.name()))
            .field("font_size", &self.font_size)
            .field("color", &self.color)
            .field("underline", &self.underline)
            .field("strikeout", &self.strikeout)
            .field("char_spacing", &self.char_spacing)
            .field("word_spacing", &self.word_spacing)
            .field("no_break", &self.no_break)
            .finish_non_exhaustive()
    }
}

/// An attributed text tree.
#[derive(Clone, Debug, PartialEq)]
pub enum RichText {
    Leaf(TextPiece),
    Interior(Interior),
}

/// A node with two or more ordered children.
///
/// Only [`RichText::from_pieces`] and the tree operations construct interior
/// nodes, so a one-child interior never exists.
#[derive(Clone, Debug)]
pub struct Interior {
    children: Vec<RichText>,
    len: usize,
    chars: usize,
    measurement: OnceLock<Measurement>,
}

impl Interior {
    fn new(children: Vec<RichText>) -> Self {
        debug_assert!(children.len() > 1, "interior nodes hold at least two children");
        Self {
            len: children.iter().map(RichText::len).sum(),
            chars: children.iter().map(RichText::chars).sum(),
            children,
            measurement: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn children(&self) -> &[RichText] {
        &self.children
    }
}

impl PartialEq for Interior {
    fn eq(&self, other: &Self) -> bool {
        self.children == other.children
    }
}

impl Default for RichText {
    fn default() -> Self {
        Self::Leaf(TextPiece::plain(""))
    }
}

impl RichText {
    /// Build a tree for `text`, segmenting it across `fonts` in priority order.
    ///
    /// Each maximal run covered by the first font is rendered in it and split
    /// into tokens (newline, tab, whitespace run, word ending after its last
    /// hyphen group, word); runs it does not cover fall through to the
    /// remaining fonts. Construction is all-or-nothing: if any span is left
    /// with no font, the call fails with [`Error::NoFontForSpan`] unless the
    /// options request a [`FallbackPolicy::Substitute`] placeholder.
    ///
    /// [`Error::NoFontForSpan`]: crate::Error::NoFontForSpan
    /// [`FallbackPolicy::Substitute`]: crate::FallbackPolicy::Substitute
    pub fn new(
        text: &str,
        fonts: &[SharedFont],
        font_size: f64,
        options: TextOptions,
    ) -> Result<Self> {
        let template = TextPiece::new("", None, font_size, options);
        let pieces = fallback::resolve(&template, text, fonts, options.fallback)?;
        if pieces.is_empty() {
            return Ok(Self::Leaf(template));
        }
        Ok(Self::from_pieces(pieces.into_iter().map(Self::Leaf).collect()))
    }

    /// A single fontless leaf.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Leaf(TextPiece::plain(text))
    }

    /// Wrap `children` in a tree. No children gives an empty leaf and one child
    /// is returned as is.
    #[must_use]
    pub fn from_pieces(mut children: Vec<Self>) -> Self {
        if children.len() > 1 {
            Self::Interior(Interior::new(children))
        } else {
            children.pop().unwrap_or_default()
        }
    }

    /// Append `text` built as by [`RichText::new`].
    ///
    /// An empty receiver is replaced by the new text. A leaf receiver becomes
    /// the first child of a new node followed by the new pieces. An interior
    /// receiver gains the new text as one more child.
    pub fn add(
        &self,
        text: &str,
        fonts: &[SharedFont],
        font_size: f64,
        options: TextOptions,
    ) -> Result<Self> {
        let added = Self::new(text, fonts, font_size, options)?;
        if added.is_empty() {
            return Ok(self.clone());
        }
        Ok(match self {
            Self::Leaf(piece) if piece.is_empty() => added,
            Self::Leaf(_) => {
                let mut children = vec![self.clone()];
                children.extend(added.into_children());
                Self::from_pieces(children)
            }
            Self::Interior(node) => {
                let mut children = node.children.clone();
                children.push(added);
                Self::from_pieces(children)
            }
        })
    }

    fn into_children(self) -> Vec<Self> {
        match self {
            Self::Leaf(_) => vec![self],
            Self::Interior(node) => node.children,
        }
    }

    /// Length of the flattened text in UTF-8 bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Leaf(piece) => piece.len(),
            Self::Interior(node) => node.len,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of Unicode scalar values in the flattened text.
    #[must_use]
    pub fn chars(&self) -> usize {
        match self {
            Self::Leaf(piece) => piece.chars(),
            Self::Interior(node) => node.chars,
        }
    }

    /// Direct children; empty for a leaf.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Leaf(_) => &[],
            Self::Interior(node) => &node.children,
        }
    }

    #[must_use]
    pub fn as_leaf(&self) -> Option<&TextPiece> {
        match self {
            Self::Leaf(piece) => Some(piece),
            Self::Interior(_) => None,
        }
    }

    /// Leaf pieces in document order.
    #[must_use]
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    /// Number of leaf pieces.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Interior(node) => node.children.iter().map(Self::piece_count).sum(),
        }
    }

    #[must_use]
    pub fn first_leaf(&self) -> Option<&TextPiece> {
        self.leaves().next()
    }

    #[must_use]
    pub fn last_leaf(&self) -> Option<&TextPiece> {
        match self {
            Self::Leaf(piece) => Some(piece),
            Self::Interior(node) => node.children.last().and_then(Self::last_leaf),
        }
    }

    /// Whether every piece of both trees has the same attributes.
    ///
    /// A tree mixing sizes, colors or fonts matches nothing, itself included.
    #[must_use]
    pub fn matches_attributes(&self, other: &Self) -> bool {
        self.first_leaf().is_some_and(|reference| {
            self.leaves()
                .chain(other.leaves())
                .all(|piece| piece.matches_attributes(reference))
        })
    }

    /// Whether the text is exactly `"\n"` or `"\r\n"`.
    #[must_use]
    pub fn is_new_line(&self) -> bool {
        self.len() <= 2 && matches!(self.to_string().as_str(), "\n" | "\r\n")
    }

    /// Whether the text is non-empty and all whitespace.
    #[must_use]
    pub fn is_white_space(&self) -> bool {
        !self.is_empty()
            && self
                .leaves()
                .all(|piece| piece.text().chars().all(char::is_whitespace))
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in self.leaves() {
            f.write_str(piece.text())?;
        }
        Ok(())
    }
}

impl From<TextPiece> for RichText {
    fn from(piece: TextPiece) -> Self {
        Self::Leaf(piece)
    }
}

/// Iterator over the leaf pieces of a tree, in document order.
#[derive(Clone, Debug)]
pub struct Leaves<'a> {
    stack: Vec<&'a RichText>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a TextPiece;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                RichText::Leaf(piece) => return Some(piece),
                RichText::Interior(interior) => self.stack.extend(interior.children.iter().rev()),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::font::{CodepointRanges, MetricsFont};
    use crate::options::FallbackPolicy;
    use std::sync::Arc;

    pub(super) fn font(name: &str, blocks: &[&str], advance: u16) -> SharedFont {
        Arc::new(
            MetricsFont::builder(name)
                .default_advance(advance)
                .coverage(CodepointRanges::from_names(blocks).unwrap())
                .build(),
        )
    }

    pub(super) fn latin() -> SharedFont {
        font("Latin", &["Basic Latin", "Latin-1 Supplement"], 600)
    }

    fn texts(rt: &RichText) -> Vec<&str> {
        rt.leaves().map(TextPiece::text).collect()
    }

    #[test]
    fn test_new_tokenizes_covered_run() {
        let rt = RichText::new("Hello  big-world\tok\n", &[latin()], 10.0, TextOptions::default()).unwrap();
        assert_eq!(texts(&rt), vec!["Hello", "  ", "big-", "world", "\t", "ok", "\n"]);
        assert_eq!(rt.to_string(), "Hello  big-world\tok\n");
    }

    #[test]
    fn test_single_token_stays_a_leaf() {
        let rt = RichText::new("Hello", &[latin()], 10.0, TextOptions::default()).unwrap();
        assert!(rt.as_leaf().is_some());
        assert_eq!(rt.piece_count(), 1);
    }

    #[test]
    fn test_empty_text_is_empty_leaf() {
        let rt = RichText::new("", &[latin()], 10.0, TextOptions::default()).unwrap();
        assert!(rt.is_empty());
        assert!(rt.as_leaf().is_some());
        assert_eq!(rt.to_string(), "");
    }

    #[test]
    fn test_new_fails_without_font() {
        let err = RichText::new("abc表明", &[latin()], 10.0, TextOptions::default()).unwrap_err();
        assert_eq!(err, Error::NoFontForSpan { text: "表明".to_string() });
    }

    #[test]
    fn test_substitute_placeholder() {
        let options = TextOptions {
            fallback: FallbackPolicy::Substitute('?'),
            ..TextOptions::default()
        };
        let rt = RichText::new("abc表明你", &[latin()], 10.0, options).unwrap();
        assert_eq!(rt.to_string(), "abc???");
    }

    #[test]
    fn test_add_to_empty_leaf_and_interior() {
        let fonts = [latin()];
        let empty = RichText::default();
        let one = empty.add("Hello", &fonts, 10.0, TextOptions::default()).unwrap();
        assert_eq!(one.to_string(), "Hello");
        assert!(one.as_leaf().is_some());

        let two = one.add(" world", &fonts, 10.0, TextOptions::default()).unwrap();
        assert_eq!(two.to_string(), "Hello world");
        assert_eq!(texts(&two), vec!["Hello", " ", "world"]);
        assert_eq!(two.children().len(), 3);

        let three = two.add(" again!", &fonts, 12.0, TextOptions::default()).unwrap();
        assert_eq!(three.children().len(), 4);
        assert_eq!(three.to_string(), "Hello world again!");
        // The receiver is unchanged.
        assert_eq!(two.to_string(), "Hello world");
    }

    #[test]
    fn test_from_pieces_collapses() {
        assert!(RichText::from_pieces(vec![]).is_empty());
        let one = RichText::from_pieces(vec![RichText::plain("a")]);
        assert!(one.as_leaf().is_some());
        let two = RichText::from_pieces(vec![RichText::plain("a"), RichText::plain("bé")]);
        assert_eq!(two.len(), 3);
        assert_eq!(two.chars(), 2);
    }

    #[test]
    fn test_predicates() {
        assert!(RichText::plain("\n").is_new_line());
        assert!(RichText::plain("\r\n").is_new_line());
        assert!(!RichText::plain("\n\n").is_new_line());
        assert!(RichText::plain(" \t").is_white_space());
        assert!(!RichText::plain("").is_white_space());
        assert!(!RichText::plain(" a").is_white_space());
    }

    #[test]
    fn test_matches_attributes() {
        let fonts = [latin()];
        let plain = RichText::new("a", &fonts, 10.0, TextOptions::default()).unwrap();
        let also = RichText::new("b", &fonts, 10.0, TextOptions::default()).unwrap();
        let bigger = RichText::new("a", &fonts, 12.0, TextOptions::default()).unwrap();
        let other_font = RichText::new("a", &[latin()], 10.0, TextOptions::default()).unwrap();
        assert!(plain.matches_attributes(&also));
        assert!(!plain.matches_attributes(&bigger));
        assert!(!plain.matches_attributes(&other_font));
    }

    #[test]
    fn test_matches_attributes_checks_every_piece() {
        let fonts = [latin()];
        let uniform = RichText::new("a b", &fonts, 10.0, TextOptions::default()).unwrap();
        let mixed = uniform
            .add(" c", &fonts, 12.0, TextOptions::default())
            .unwrap();
        assert_eq!(mixed.first_leaf().map(TextPiece::font_size), Some(10.0));
        assert!(uniform.matches_attributes(&uniform));
        assert!(!mixed.matches_attributes(&uniform));
        assert!(!uniform.matches_attributes(&mixed));
        assert!(!mixed.matches_attributes(&mixed));
    }

    #[test]
    fn test_tree_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RichText>();
    }
}
