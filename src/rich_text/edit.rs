//! Structural edits: split, merge, insert and trim.

use super::{RichText, TextPiece};
use tracing::warn;

/// Largest char boundary of `text` at or below `offset`.
pub(super) fn floor_char_boundary(text: &str, offset: usize) -> usize {
    if offset >= text.len() {
        return text.len();
    }
    (0..=offset)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0)
}

impl RichText {
    /// Split at byte `offset` into the text before and after it.
    ///
    /// Offsets past the end clamp to the length; offsets inside a character
    /// round down to its start. An empty side is an empty leaf carrying the
    /// attributes of the nearest piece. Neither side shares a measurement
    /// cache with a leaf that was cut.
    #[must_use]
    pub fn split(&self, offset: usize) -> (Self, Self) {
        let offset = offset.min(self.len());
        match self {
            Self::Leaf(piece) => {
                let at = floor_char_boundary(piece.text(), offset);
                let (left, right) = piece.text().split_at(at);
                (Self::Leaf(piece.with_text(left)), Self::Leaf(piece.with_text(right)))
            }
            Self::Interior(node) => {
                let mut left = Vec::new();
                let mut right = Vec::new();
                let mut start = 0;
                for child in &node.children {
                    let end = start + child.len();
                    if end <= offset {
                        left.push(child.clone());
                    } else if start >= offset {
                        right.push(child.clone());
                    } else {
                        let (head, tail) = child.split(offset - start);
                        left.push(head);
                        right.push(tail);
                    }
                    start = end;
                }
                (
                    self.side(left, self.first_leaf()),
                    self.side(right, self.last_leaf()),
                )
            }
        }
    }

    fn side(&self, children: Vec<Self>, nearest: Option<&TextPiece>) -> Self {
        if children.is_empty() {
            let empty = nearest.map_or_else(|| TextPiece::plain(""), |piece| piece.with_text(""));
            return Self::Leaf(empty);
        }
        Self::from_pieces(children)
    }

    /// Flatten the tree and join adjacent pieces with identical attributes.
    ///
    /// The result is a single leaf or one interior node whose children are all
    /// leaves. The no-break flag is not part of the comparison: a joined piece
    /// keeps the flag of its leftmost part, so take break flags before merging.
    /// Merging is idempotent and preserves text and width.
    #[must_use]
    pub fn merge(&self) -> Self {
        let mut merged: Vec<TextPiece> = Vec::new();
        for piece in self.leaves() {
            match merged.last_mut() {
                Some(last) if last.matches_attributes(piece) => {
                    *last = last.with_text(format!("{}{}", last.text(), piece.text()));
                }
                _ => merged.push(piece.clone()),
            }
        }
        Self::from_pieces(merged.into_iter().map(Self::Leaf).collect())
    }

    /// Insert `s` at each of `offsets`, all relative to the original text.
    ///
    /// Inserted text takes the attributes of the piece that ends at (or
    /// contains) the offset; offset 0 goes to the first piece. Offsets past the
    /// end insert at the end. The tree keeps its shape.
    #[must_use]
    pub fn insert_string_at_offsets(&self, s: &str, offsets: &[usize]) -> Self {
        if s.is_empty() || offsets.is_empty() {
            return self.clone();
        }
        let len = self.len();
        if offsets.iter().any(|&o| o > len) {
            warn!(len, ?offsets, "insert offsets past the end are clamped");
        }
        let mut offsets: Vec<usize> = offsets.iter().map(|&o| o.min(len)).collect();
        offsets.sort_unstable();

        let mut pending = offsets.as_slice();
        let mut start = 0;
        self.map_leaves(&mut |piece| {
            let end = start + piece.len();
            let here = pending.partition_point(|&o| o <= end);
            let (mine, rest) = pending.split_at(here);
            pending = rest;
            let mapped = if mine.is_empty() {
                piece.clone()
            } else {
                let text = piece.text();
                let mut out = String::with_capacity(text.len() + s.len() * mine.len());
                let mut prev = 0;
                for &offset in mine {
                    let at = floor_char_boundary(text, offset - start);
                    out.push_str(&text[prev..at]);
                    out.push_str(s);
                    prev = at;
                }
                out.push_str(&text[prev..]);
                piece.with_text(out)
            };
            start = end;
            mapped
        })
    }

    fn map_leaves(&self, f: &mut impl FnMut(&TextPiece) -> TextPiece) -> Self {
        match self {
            Self::Leaf(piece) => Self::Leaf(f(piece)),
            Self::Interior(node) => {
                Self::from_pieces(node.children.iter().map(|child| child.map_leaves(f)).collect())
            }
        }
    }

    /// Drop leading characters matching `f`, across piece boundaries.
    #[must_use]
    pub fn trim_left_func(&self, f: impl FnMut(char) -> bool) -> Self {
        let text = self.to_string();
        let start = text.len() - text.trim_start_matches(f).len();
        if start == 0 {
            return self.clone();
        }
        self.split(start).1
    }

    /// Drop trailing characters matching `f`, across piece boundaries.
    #[must_use]
    pub fn trim_right_func(&self, f: impl FnMut(char) -> bool) -> Self {
        let text = self.to_string();
        let end = text.trim_end_matches(f).len();
        if end == text.len() {
            return self.clone();
        }
        self.split(end).0
    }

    #[must_use]
    pub fn trim_left_space(&self) -> Self {
        self.trim_left_func(char::is_whitespace)
    }

    #[must_use]
    pub fn trim_right_space(&self) -> Self {
        self.trim_right_func(char::is_whitespace)
    }

    #[must_use]
    pub fn trim_space(&self) -> Self {
        self.trim_left_space().trim_right_space()
    }
}
