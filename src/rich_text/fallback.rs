//! Font fallback segmentation.

use super::TextPiece;
use crate::error::{Error, Result};
use crate::font::SharedFont;
use crate::options::FallbackPolicy;
use tracing::debug;

/// Split `text` into pieces, each rendered in the first font of `fonts` that
/// covers it.
pub(super) fn resolve(
    template: &TextPiece,
    text: &str,
    fonts: &[SharedFont],
    policy: FallbackPolicy,
) -> Result<Vec<TextPiece>> {
    let resolver = Resolver {
        template,
        fonts,
        policy,
    };
    let mut pieces = Vec::new();
    resolver.resolve(text, fonts, &mut pieces)?;
    Ok(pieces)
}

struct Resolver<'a> {
    template: &'a TextPiece,
    fonts: &'a [SharedFont],
    policy: FallbackPolicy,
}

impl Resolver<'_> {
    fn resolve(&self, text: &str, fonts: &[SharedFont], out: &mut Vec<TextPiece>) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let Some((font, rest)) = fonts.split_first() else {
            return self.unresolved(text, out);
        };
        for (run, covered) in coverage_runs(text, font) {
            if covered {
                let piece = self.piece(run, font);
                let tokens = tokenize(run);
                if tokens.len() > 1 {
                    out.extend(tokens.into_iter().map(|token| piece.with_text(token)));
                } else {
                    out.push(piece);
                }
            } else {
                debug!(font = font.name(), span = run, "falling back to next font");
                self.resolve(run, rest, out)?;
            }
        }
        Ok(())
    }

    fn piece(&self, text: &str, font: &SharedFont) -> TextPiece {
        let mut piece = self.template.with_text(text);
        piece.font = Some(SharedFont::clone(font));
        piece
    }

    fn unresolved(&self, text: &str, out: &mut Vec<TextPiece>) -> Result<()> {
        let no_font = || {
            debug!(span = text, "no font covers span");
            Error::NoFontForSpan {
                text: text.to_string(),
            }
        };
        let FallbackPolicy::Substitute(placeholder) = self.policy else {
            return Err(no_font());
        };
        let font = self
            .fonts
            .iter()
            .find(|font| font.has_rune(placeholder))
            .ok_or_else(no_font)?;
        let replacement: String = text.chars().map(|_| placeholder).collect();
        debug!(span = text, font = font.name(), "substituting placeholder");
        out.push(self.piece(&replacement, font));
        Ok(())
    }
}

/// Maximal runs of `text` that `font` does or does not cover.
fn coverage_runs<'t>(text: &'t str, font: &SharedFont) -> Vec<(&'t str, bool)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current = None;
    for (idx, ch) in text.char_indices() {
        let covered = font.has_rune(ch);
        match current {
            Some(state) if state == covered => {}
            Some(state) => {
                runs.push((&text[start..idx], state));
                start = idx;
                current = Some(covered);
            }
            None => current = Some(covered),
        }
    }
    if let Some(state) = current {
        runs.push((&text[start..], state));
    }
    runs
}

fn is_hyphen(ch: char) -> bool {
    ch == '-'
}

/// Split a covered run into layout tokens.
///
/// Tokens are `"\n"`, `"\t"`, maximal runs of other whitespace, and runs of
/// non-whitespace. A non-whitespace run containing hyphens is cut after its
/// last hyphen group, so `"a-b-c"` yields `"a-b-"` and `"c"`.
pub(super) fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        let end = if ch == '\n' || ch == '\t' {
            ch.len_utf8()
        } else if ch.is_whitespace() {
            rest.find(|c: char| !c.is_whitespace() || c == '\n' || c == '\t')
                .unwrap_or(rest.len())
        } else {
            let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..word_end];
            match word.rfind(is_hyphen) {
                Some(last) if last + 1 < word.len() => last + 1,
                _ => word_end,
            }
        };
        tokens.push(&rest[..end]);
        rest = &rest[end..];
    }
    tokens
}
