//! Error types for richtype.

use std::fmt;

/// Result type alias for richtype operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for richtype operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// No font in the fallback list covers this span of text.
    ///
    /// The text is the exact unmapped substring, so the caller can add a
    /// covering font to the list.
    NoFontForSpan { text: String },
    /// Invalid color (neither a known name nor a hex value).
    InvalidColor(String),
    /// An option was given a value of the wrong shape.
    InvalidOption { key: String, value: String },
    /// A named Unicode block that is not in the range table.
    UnknownCodepointRange(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFontForSpan { text } => write!(f, "no font found for \"{text}\""),
            Self::InvalidColor(s) => {
                write!(
                    f,
                    "invalid color: {s:?} (expected a color name or a hex value)"
                )
            }
            Self::InvalidOption { key, value } => {
                write!(f, "invalid value {value:?} for option {key:?}")
            }
            Self::UnknownCodepointRange(name) => {
                write!(f, "unknown codepoint range: {name}")
            }
        }
    }
}

impl std::error::Error for Error {}
