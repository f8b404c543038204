//! Line break opportunity classification.
//!
//! A classifier fills one [`BreakFlags`] entry per UTF-8 byte of a text. The
//! entry at byte `i` describes the boundary *before* byte `i`; only entries at
//! character boundaries carry meaning, and entry `0` is never a break.
//!
//! The default classifier, [`UnicodeWordBreaker`], applies the Unicode Line
//! Breaking Algorithm (UAX #14) through the `unicode-linebreak` crate:
//!
//! - Spaces: break allowed after the space run
//! - Hyphens: break allowed after `-`
//! - Soft hyphens (U+00AD): break allowed after, flagged [`BreakFlags::SOFT_HYPHEN`]
//! - Ideographs: break allowed between characters
//! - Newlines: break required after
//!
//! Attribute-driven policy (no-break text) is layered on afterwards by
//! [`RichText::mark_no_break`](crate::RichText::mark_no_break).
//!
//! # Examples
//!
//! ```
//! use richtype::wordbreak::{BreakFlags, break_flags};
//!
//! let flags = break_flags("Hello world");
//! assert!(flags[6].contains(BreakFlags::BREAK));
//! assert!(flags[3].is_empty());
//! ```

use bitflags::bitflags;
use unicode_linebreak::{BreakOpportunity, linebreaks};

/// U+00AD SOFT HYPHEN.
pub const SOFT_HYPHEN: char = '\u{AD}';

bitflags! {
    /// Break classification of the boundary before one text unit.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct BreakFlags: u8 {
        /// A line may break here.
        const BREAK       = 0x01;
        /// A line must break here.
        const MUST_BREAK  = 0x02;
        /// Breaking here renders a hyphen at the end of the line.
        const SOFT_HYPHEN = 0x04;
        /// A line must not break here. Overrides the other flags.
        const NO_BREAK    = 0x08;
    }
}

impl BreakFlags {
    /// Whether a line may (or must) break at this boundary.
    #[must_use]
    pub const fn is_break(self) -> bool {
        !self.contains(Self::NO_BREAK) && self.intersects(Self::BREAK.union(Self::MUST_BREAK))
    }

    /// Whether a line must break at this boundary.
    #[must_use]
    pub const fn is_mandatory(self) -> bool {
        !self.contains(Self::NO_BREAK) && self.contains(Self::MUST_BREAK)
    }
}

/// Fills break flags for a text.
///
/// `flags` is sized by the caller to the text's byte length. Implementations
/// must be deterministic and side-effect free.
pub trait WordBreaker {
    fn mark(&self, text: &str, flags: &mut [BreakFlags]);
}

impl<F> WordBreaker for F
where
    F: Fn(&str, &mut [BreakFlags]),
{
    fn mark(&self, text: &str, flags: &mut [BreakFlags]) {
        self(text, flags);
    }
}

/// UAX #14 line breaking with soft-hyphen detection.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeWordBreaker;

impl WordBreaker for UnicodeWordBreaker {
    fn mark(&self, text: &str, flags: &mut [BreakFlags]) {
        for (idx, opportunity) in linebreaks(text) {
            // The end of text is always a mandatory break; it has no slot.
            if idx == 0 || idx >= text.len() || idx >= flags.len() {
                continue;
            }
            let flag = &mut flags[idx];
            match opportunity {
                BreakOpportunity::Mandatory => *flag |= BreakFlags::MUST_BREAK,
                BreakOpportunity::Allowed => *flag |= BreakFlags::BREAK,
            }
            if text[..idx].ends_with(SOFT_HYPHEN) {
                *flag |= BreakFlags::SOFT_HYPHEN;
            }
        }
    }
}

/// Classify `text` with [`UnicodeWordBreaker`].
#[must_use]
pub fn break_flags(text: &str) -> Vec<BreakFlags> {
    let mut flags = vec![BreakFlags::empty(); text.len()];
    UnicodeWordBreaker.mark(text, &mut flags);
    flags
}
