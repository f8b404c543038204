//! Codepage segmentation for output encoding.

use super::{RichText, TextPiece};
use crate::codepage::{CodepageIndex, CodepageSet};
use std::ops::Range;

/// Split `text` into runs that each encode in one codepage.
///
/// A run stays in its codepage for as long as that codepage covers the next
/// character, even when an earlier codepage in the set would also cover it.
/// When it does not, the next run starts in the first covering codepage, or
/// [`CodepageIndex::NATIVE`] if none does. Consecutive native characters form
/// one run.
#[must_use]
pub fn codepage_runs(text: &str, codepages: &CodepageSet) -> Vec<(CodepageIndex, Range<usize>)> {
    let mut runs = Vec::new();
    let mut current: Option<CodepageIndex> = None;
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        if current.is_some_and(|index| codepages.covers(index, ch)) {
            continue;
        }
        let next = codepages
            .first_covering(ch)
            .unwrap_or(CodepageIndex::NATIVE);
        match current {
            Some(index) if index == next => {}
            Some(index) => {
                runs.push((index, start..idx));
                start = idx;
                current = Some(next);
            }
            None => current = Some(next),
        }
    }
    if let Some(index) = current {
        runs.push((index, start..text.len()));
    }
    runs
}

impl RichText {
    /// Call `f` with each codepage run of the merged text.
    ///
    /// The tree is merged first, then each piece is segmented independently
    /// with [`codepage_runs`], so the codepage choice restarts at every
    /// attribute change. `f` receives the run's codepage, its text and the
    /// piece carrying its attributes. Empty pieces produce no calls.
    pub fn each_codepage<F>(&self, codepages: &CodepageSet, mut f: F)
    where
        F: FnMut(CodepageIndex, &str, &TextPiece),
    {
        let merged = self.merge();
        for piece in merged.leaves() {
            for (index, range) in codepage_runs(piece.text(), codepages) {
                f(index, &piece.text()[range], piece);
            }
        }
    }
}
