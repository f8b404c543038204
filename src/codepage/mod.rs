//! Single-byte codepages for text output.
//!
//! A [`Codepage`] maps a subset of Unicode to byte values through a short list
//! of ranges, each with a constant offset. A [`CodepageSet`] is an ordered list
//! of codepages; a codepage's position in the set is its [`CodepageIndex`].
//! Choosing which codepage encodes which run of text is the layout engine's
//! job (see [`RichText::each_codepage`](crate::RichText::each_codepage)).
//!
//! # Examples
//!
//! ```
//! use richtype::codepage::{Codepage, CodepageSet, ISO_8859_1, ISO_8859_5};
//!
//! assert!(ISO_8859_5.covers('Ж'));
//! assert_eq!(ISO_8859_5.encode("Жa"), Some(vec![0xB6, b'a']));
//! assert_eq!(ISO_8859_1.encode("Ж"), None);
//!
//! let set = CodepageSet::new(vec![ISO_8859_1, ISO_8859_5]);
//! assert_eq!(set.first_covering('Ж').map(|i| i.0), Some(1));
//! ```

mod tables;

pub use tables::{CP1253, CP1254, ISO_8859_1, ISO_8859_5, ISO_8859_6, ISO_8859_15};

use std::borrow::Cow;
use std::fmt;

/// A contiguous run of code points that encode as `codepoint + delta`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodepageRange {
    pub low: u32,
    pub high: u32,
    pub delta: i32,
}

impl CodepageRange {
    #[must_use]
    pub const fn new(low: u32, high: u32, delta: i32) -> Self {
        Self { low, high, delta }
    }
}

/// A named single-byte encoding.
///
/// Ranges must be sorted by `low` and must not overlap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Codepage {
    name: Cow<'static, str>,
    ranges: Cow<'static, [CodepageRange]>,
}

impl Codepage {
    /// A codepage backed by static tables.
    #[must_use]
    pub const fn from_static(name: &'static str, ranges: &'static [CodepageRange]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            ranges: Cow::Borrowed(ranges),
        }
    }

    /// A codepage from owned ranges; the ranges are sorted here.
    #[must_use]
    pub fn new(name: impl Into<String>, mut ranges: Vec<CodepageRange>) -> Self {
        ranges.sort_by_key(|r| r.low);
        Self {
            name: Cow::Owned(name.into()),
            ranges: Cow::Owned(ranges),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn range_for(&self, ch: char) -> Option<&CodepageRange> {
        let cp = u32::from(ch);
        let idx = self.ranges.partition_point(|r| r.high < cp);
        self.ranges.get(idx).filter(|r| r.low <= cp)
    }

    /// Whether `ch` has a byte value in this codepage.
    #[must_use]
    pub fn covers(&self, ch: char) -> bool {
        self.encode_char(ch).is_some()
    }

    /// Byte value for `ch`.
    #[must_use]
    pub fn encode_char(&self, ch: char) -> Option<u8> {
        let range = self.range_for(ch)?;
        let value = i64::from(u32::from(ch)) + i64::from(range.delta);
        u8::try_from(value).ok()
    }

    /// Encode a whole string, or `None` if any character is not covered.
    #[must_use]
    pub fn encode(&self, text: &str) -> Option<Vec<u8>> {
        text.chars().map(|ch| self.encode_char(ch)).collect()
    }
}

/// Position of a codepage in a [`CodepageSet`].
///
/// [`CodepageIndex::NATIVE`] marks text no codepage covers; it must be written
/// with a multi-byte (font-native) encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodepageIndex(pub i32);

impl CodepageIndex {
    pub const NATIVE: Self = Self(-1);

    #[must_use]
    pub const fn is_native(self) -> bool {
        self.0 < 0
    }

    /// The set position, unless native.
    #[must_use]
    pub fn position(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl fmt::Display for CodepageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_native() {
            f.write_str("native")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Ordered codepages; earlier entries have priority.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodepageSet {
    codepages: Vec<Codepage>,
}

impl CodepageSet {
    #[must_use]
    pub fn new(codepages: Vec<Codepage>) -> Self {
        Self { codepages }
    }

    #[must_use]
    pub fn get(&self, index: CodepageIndex) -> Option<&Codepage> {
        index.position().and_then(|i| self.codepages.get(i))
    }

    /// Whether the codepage at `index` covers `ch`. Native covers nothing.
    #[must_use]
    pub fn covers(&self, index: CodepageIndex, ch: char) -> bool {
        self.get(index).is_some_and(|cp| cp.covers(ch))
    }

    /// The first codepage, in priority order, that covers `ch`.
    #[must_use]
    pub fn first_covering(&self, ch: char) -> Option<CodepageIndex> {
        self.codepages
            .iter()
            .position(|cp| cp.covers(ch))
            .and_then(|i| i32::try_from(i).ok())
            .map(CodepageIndex)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codepages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codepages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Codepage> {
        self.codepages.iter()
    }
}
