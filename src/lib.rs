//! `richtype` - Rich text segmentation and line layout
//!
//! Builds attributed text trees from strings and a font fallback list,
//! measures them, packs them into lines of a given width, and segments them
//! into single-byte codepage runs for output.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_precision_loss)] // Character counts scale spacing
#![allow(clippy::module_name_repetitions)] // Allow codepage::CodepageSet etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::needless_pass_by_value)] // Options are small Copy types
#![allow(clippy::float_cmp)] // Attribute equality compares exact values
#![allow(clippy::struct_excessive_bools)] // Text pieces carry several flags

pub mod codepage;
pub mod color;
pub mod error;
pub mod font;
pub mod options;
pub mod rich_text;
pub mod wordbreak;

// Re-export core types at crate root
pub use color::Color;
pub use error::{Error, Result};
pub use options::{FallbackPolicy, TextOptions, TextOptionsBuilder};
pub use rich_text::{BreakKind, LineBreak, Measurement, Remainder, RichText, TextPiece};

// Re-export font and codepage types
pub use codepage::{Codepage, CodepageIndex, CodepageSet};
pub use font::{Font, FontMetrics, SharedFont};
pub use wordbreak::{BreakFlags, UnicodeWordBreaker, WordBreaker};
