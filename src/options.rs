//! Text construction options.
//!
//! [`TextOptions`] carries every attribute of a text piece except its font and
//! size: color, decorations, spacing, the no-break flag and the policy applied
//! when no font covers a span.
//!
//! # Examples
//!
//! ```
//! use richtype::{Color, TextOptions};
//!
//! // Builder pattern
//! let heading = TextOptions::builder()
//!     .color(Color::RED)
//!     .underline()
//!     .build();
//!
//! // String pairs, as read from a markup attribute list
//! let parsed = TextOptions::from_pairs(&[("color", "red"), ("underline", "true")]).unwrap();
//! assert_eq!(heading, parsed);
//! ```

use crate::color::Color;
use crate::error::{Error, Result};
use tracing::warn;

/// What to do with a span that no font in the fallback list covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Fail the whole call with [`Error::NoFontForSpan`].
    #[default]
    Fail,
    /// Replace each uncovered character with this placeholder, rendered in
    /// the first font that covers the placeholder.
    Substitute(char),
}

/// Attributes applied to text when it is added to a rich text tree.
///
/// Defaults: black, no decorations, no extra spacing, breakable, and fail
/// when a span has no font.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextOptions {
    pub color: Color,
    pub underline: bool,
    pub strikeout: bool,
    /// Extra space added after every character, in points.
    pub char_spacing: f64,
    /// Extra space added after every ASCII space, in points.
    pub word_spacing: f64,
    /// Forbid line breaks inside this text.
    pub no_break: bool,
    pub fallback: FallbackPolicy,
}

impl TextOptions {
    /// Create a new options builder.
    #[must_use]
    pub fn builder() -> TextOptionsBuilder {
        TextOptionsBuilder::default()
    }

    /// Parse options from string key/value pairs.
    ///
    /// Recognized keys: `color`, `underline`, `strikeout` (alias
    /// `line_through`), `nobreak` (alias `no_break`), `char_spacing`,
    /// `word_spacing` and `substitute` (a single placeholder character).
    /// Unknown keys are ignored.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self> {
        let mut options = Self::default();
        for &(key, value) in pairs {
            match key {
                "color" => options.color = value.parse()?,
                "underline" => options.underline = parse_bool(key, value)?,
                "strikeout" | "line_through" => options.strikeout = parse_bool(key, value)?,
                "nobreak" | "no_break" => options.no_break = parse_bool(key, value)?,
                "char_spacing" => options.char_spacing = parse_f64(key, value)?,
                "word_spacing" => options.word_spacing = parse_f64(key, value)?,
                "substitute" => {
                    let mut chars = value.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) => options.fallback = FallbackPolicy::Substitute(ch),
                        _ => return Err(invalid(key, value)),
                    }
                }
                _ => warn!(key, value, "ignoring unknown text option"),
            }
        }
        Ok(options)
    }
}

fn invalid(key: &str, value: &str) -> Error {
    Error::InvalidOption {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" | "" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn parse_f64(key: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(key, value))
}

/// Builder for [`TextOptions`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TextOptionsBuilder {
    options: TextOptions,
}

impl TextOptionsBuilder {
    /// Set the fill color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.options.color = color;
        self
    }

    /// Underline the text.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.options.underline = true;
        self
    }

    /// Strike the text out.
    #[must_use]
    pub fn strikeout(mut self) -> Self {
        self.options.strikeout = true;
        self
    }

    /// Forbid line breaks inside the text.
    #[must_use]
    pub fn no_break(mut self) -> Self {
        self.options.no_break = true;
        self
    }

    /// Set extra space after every character.
    #[must_use]
    pub fn char_spacing(mut self, spacing: f64) -> Self {
        self.options.char_spacing = spacing;
        self
    }

    /// Set extra space after every ASCII space.
    #[must_use]
    pub fn word_spacing(mut self, spacing: f64) -> Self {
        self.options.word_spacing = spacing;
        self
    }

    /// Substitute `placeholder` for characters no font covers.
    #[must_use]
    pub fn substitute(mut self, placeholder: char) -> Self {
        self.options.fallback = FallbackPolicy::Substitute(placeholder);
        self
    }

    /// Build the options.
    #[must_use]
    pub fn build(self) -> TextOptions {
        self.options
    }
}
