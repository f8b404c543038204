//! Greedy line packing.

use super::RichText;
use super::edit::floor_char_boundary;
use crate::wordbreak::{BreakFlags, WordBreaker};
use tracing::{trace, warn};
use unicode_segmentation::UnicodeSegmentation;

/// Why a line ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakKind {
    /// The whole text fit.
    End,
    /// Broke at a word boundary.
    Word,
    /// Broke at a required break such as a newline.
    Mandatory,
    /// Broke at a soft hyphen; the line ends with an added `-`.
    Hyphen,
    /// Broke between graphemes because no word boundary fit.
    Hard,
    /// No word boundary fit, so the line is the first word and overflows.
    Overflow,
}

impl BreakKind {
    /// Whether whitespace at the start of the next line is dropped.
    #[must_use]
    pub const fn trims_next_line(self) -> bool {
        matches!(self, Self::Word | Self::Overflow)
    }
}

/// Text left over after a line, with its break flags.
#[derive(Clone, Debug, PartialEq)]
pub struct Remainder {
    pub text: RichText,
    pub flags: Vec<BreakFlags>,
}

/// Result of fitting one line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineBreak {
    pub line: RichText,
    /// `None` when the line took all of the text.
    pub remainder: Option<Remainder>,
    pub kind: BreakKind,
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    /// End of the line's text.
    cut: usize,
    /// Start of the remainder.
    resume: usize,
    hyphen: bool,
    kind: BreakKind,
}

fn trailing_space_len(text: &str) -> usize {
    text.len() - text.trim_end().len()
}

fn leading_space_len(text: &str) -> usize {
    text.len()
        - text
            .trim_start_matches(|c: char| c.is_whitespace() && !is_line_terminator(c))
            .len()
}

/// Characters that force a line break after them.
fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// End of the text without a final line terminator and the spaces before it.
fn content_end(text: &str) -> usize {
    if text.ends_with(is_line_terminator) {
        text.len() - trailing_space_len(text)
    } else {
        text.len()
    }
}

impl RichText {
    /// Classify break opportunities with `breaker`, then apply no-break runs.
    #[must_use]
    pub fn break_flags(&self, breaker: &impl WordBreaker) -> Vec<BreakFlags> {
        let text = self.to_string();
        let mut flags = vec![BreakFlags::empty(); text.len()];
        breaker.mark(&text, &mut flags);
        self.mark_no_break(&mut flags);
        flags
    }

    /// Forbid breaks strictly inside every run of consecutive no-break pieces.
    ///
    /// The boundaries at the start and end of a run are left alone.
    pub fn mark_no_break(&self, flags: &mut [BreakFlags]) {
        let mut offset = 0;
        let mut run_start = None;
        for piece in self.leaves() {
            if piece.no_break() {
                run_start.get_or_insert(offset);
            } else if let Some(start) = run_start.take() {
                forbid_breaks(flags, start, offset);
            }
            offset += piece.len();
        }
        if let Some(start) = run_start {
            forbid_breaks(flags, start, offset);
        }
    }

    /// Fit as much text as possible into `max_width` points.
    ///
    /// `flags` holds one entry per byte of the text. The line ends at the last
    /// allowed break whose prefix fits, with trailing whitespace dropped, or at
    /// the first mandatory break. Breaking at a soft hyphen keeps the soft
    /// hyphen and appends `-` to the line. When no break fits, the line is cut
    /// between graphemes if `allow_hard_break` is set (always taking at least
    /// one grapheme) and otherwise overflows to the first break.
    #[must_use]
    pub fn words_to_width(
        &self,
        max_width: f64,
        flags: &[BreakFlags],
        allow_hard_break: bool,
    ) -> LineBreak {
        let len = self.len();
        if flags.len() != len {
            warn!(expected = len, actual = flags.len(), "break flags do not match text length");
        }
        if len == 0 {
            return self.end_line(0);
        }

        let text = self.to_string();
        let flag_at = |i: usize| flags.get(i).copied().unwrap_or_default();

        let mut first = None;
        let mut best = None;
        let mut exhausted = true;
        for (b, _) in text.char_indices().skip(1) {
            let flag = flag_at(b);
            if !flag.is_break() {
                continue;
            }
            let mandatory = flag.is_mandatory();
            let hyphen = !mandatory && flag.contains(BreakFlags::SOFT_HYPHEN);
            let cut = if hyphen {
                b
            } else {
                b - trailing_space_len(&text[..b])
            };
            if cut == 0 && !mandatory {
                continue;
            }
            let width = self.prefix_width(cut, if hyphen { "-" } else { "" });
            let candidate = Candidate {
                cut,
                resume: if mandatory { b } else { cut },
                hyphen,
                kind: if mandatory {
                    BreakKind::Mandatory
                } else if hyphen {
                    BreakKind::Hyphen
                } else {
                    BreakKind::Word
                },
            };
            first.get_or_insert(candidate);
            if width > max_width {
                exhausted = false;
                break;
            }
            best = Some(candidate);
            if mandatory {
                exhausted = false;
                break;
            }
        }

        let end = content_end(&text);
        if exhausted {
            if self.prefix_width(end, "") <= max_width {
                return self.end_line(end);
            }
            let trimmed = len - trailing_space_len(&text);
            if trimmed < end && self.prefix_width(trimmed, "") <= max_width {
                return self.end_line(trimmed);
            }
        }
        if let Some(candidate) = best {
            return self.break_at(candidate, flags);
        }
        if allow_hard_break {
            return self.hard_break(&text, max_width, flags);
        }
        match first {
            Some(candidate) => {
                // An overlong line before a newline still ends at the newline.
                let kind = match candidate.kind {
                    BreakKind::Mandatory => BreakKind::Mandatory,
                    _ => BreakKind::Overflow,
                };
                self.break_at(Candidate { kind, ..candidate }, flags)
            }
            None => self.end_line(end),
        }
    }

    /// Last line: the first `cut` bytes, nothing left over.
    fn end_line(&self, cut: usize) -> LineBreak {
        let line = if cut >= self.len() {
            self.clone()
        } else {
            self.split(cut).0
        };
        LineBreak {
            line,
            remainder: None,
            kind: BreakKind::End,
        }
    }

    /// Width of `self.split(offset).0` with `suffix` appended to the piece
    /// holding its last character.
    ///
    /// Children are summed in the same order as the measurement of the split
    /// tree, so the result equals the width the cut line will report.
    fn prefix_width(&self, offset: usize, suffix: &str) -> f64 {
        match self {
            Self::Leaf(piece) => {
                if suffix.is_empty() && offset >= piece.len() {
                    return piece.width();
                }
                let head = &piece.text()[..floor_char_boundary(piece.text(), offset)];
                if suffix.is_empty() {
                    piece.advance(head)
                } else {
                    piece.advance(&format!("{head}{suffix}"))
                }
            }
            Self::Interior(node) => {
                let mut total: Option<f64> = None;
                let mut start = 0;
                for child in &node.children {
                    if start >= offset {
                        break;
                    }
                    let end = start + child.len();
                    let width = if end < offset || (end == offset && suffix.is_empty()) {
                        child.width()
                    } else {
                        child.prefix_width(offset - start, suffix)
                    };
                    total = Some(total.map_or(width, |sum| sum + width));
                    start = end;
                }
                total.unwrap_or(0.0)
            }
        }
    }

    fn break_at(&self, candidate: Candidate, flags: &[BreakFlags]) -> LineBreak {
        let mut line = self.split(candidate.cut).0;
        if candidate.hyphen {
            line = line.insert_string_at_offsets("-", &[line.len()]);
        }
        LineBreak {
            line,
            remainder: self.remainder(candidate.resume, flags),
            kind: candidate.kind,
        }
    }

    fn hard_break(&self, text: &str, max_width: f64, flags: &[BreakFlags]) -> LineBreak {
        let mut cut = 0;
        for (i, grapheme) in text.grapheme_indices(true) {
            let end = i + grapheme.len();
            if cut > 0 && self.prefix_width(end, "") > max_width {
                break;
            }
            cut = end;
        }
        let end = content_end(text);
        if cut >= end {
            return self.end_line(end);
        }
        LineBreak {
            line: self.split(cut).0,
            remainder: self.remainder(cut, flags),
            kind: BreakKind::Hard,
        }
    }

    fn remainder(&self, resume: usize, flags: &[BreakFlags]) -> Option<Remainder> {
        let text = self.split(resume).1;
        if text.is_empty() {
            return None;
        }
        let mut rest: Vec<BreakFlags> = flags.get(resume..).unwrap_or_default().to_vec();
        rest.resize(text.len(), BreakFlags::empty());
        Some(Remainder { text, flags: rest })
    }

    /// Pack the text into lines no wider than `max_width` points.
    ///
    /// Repeats [`RichText::words_to_width`] on the remainder until nothing is
    /// left. Whitespace after a word break is not carried to the next line.
    /// Empty text produces no lines.
    #[must_use]
    pub fn wrap_to_width(
        &self,
        max_width: f64,
        flags: &[BreakFlags],
        allow_hard_break: bool,
    ) -> Vec<Self> {
        let mut lines = Vec::new();
        let mut text = self.clone();
        let mut flags = flags.to_vec();
        while !text.is_empty() {
            let LineBreak {
                line,
                remainder,
                kind,
            } = text.words_to_width(max_width, &flags, allow_hard_break);
            trace!(line = %line, ?kind, width = line.width(), "packed line");
            lines.push(line);
            let Some(Remainder {
                text: mut rest,
                flags: mut rest_flags,
            }) = remainder
            else {
                break;
            };
            if kind.trims_next_line() {
                let skip = leading_space_len(&rest.to_string());
                if skip > 0 {
                    rest = rest.split(skip).1;
                    rest_flags.drain(..skip.min(rest_flags.len()));
                }
            }
            text = rest;
            flags = rest_flags;
        }
        lines
    }
}

fn forbid_breaks(flags: &mut [BreakFlags], start: usize, end: usize) {
    for flag in flags.iter_mut().take(end).skip(start + 1) {
        *flag = BreakFlags::NO_BREAK;
    }
}
