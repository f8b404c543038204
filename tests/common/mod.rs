//! Shared fixtures for integration tests: metric fonts with predictable
//! widths, the codepage set used by the segmentation fixtures, and logging.

#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Each test binary uses a subset

use richtype::codepage::{CP1253, CodepageSet, ISO_8859_1, ISO_8859_5, ISO_8859_6, ISO_8859_15};
use richtype::font::{CodepointRanges, MetricsFont, SharedFont};
use std::sync::{Arc, Once};

/// Points per character for the Latin test fonts at size 10.
pub const LATIN_ADVANCE: f64 = 6.0;
/// Points per character for the CJK test font at size 10.
pub const CJK_ADVANCE: f64 = 10.0;

pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn font(name: &str, blocks: &[&str], advance: u16, ascender: i16, descender: i16) -> SharedFont {
    Arc::new(
        MetricsFont::builder(name)
            .ascender(ascender)
            .descender(descender)
            .line_gap(0)
            .underline(-100, 50)
            .default_advance(advance)
            .coverage(CodepointRanges::from_names(blocks).expect("known blocks"))
            .build(),
    )
}

/// Latin-1 coverage, 600 units per character.
pub fn helvetica() -> SharedFont {
    font("Helvetica", &["Basic Latin", "Latin-1 Supplement"], 600, 718, -207)
}

/// Latin-1 and Cyrillic coverage, 600 units per character.
pub fn arial() -> SharedFont {
    font(
        "Arial",
        &["Basic Latin", "Latin-1 Supplement", "Cyrillic"],
        600,
        905,
        -212,
    )
}

/// ASCII, CJK punctuation and ideographs, 1000 units per character.
pub fn fangsong() -> SharedFont {
    font(
        "Fangsong",
        &[
            "Basic Latin",
            "CJK Symbols And Punctuation",
            "CJK Unified Ideographs",
            "Halfwidth And Fullwidth Forms",
        ],
        1000,
        859,
        -141,
    )
}

/// Codepages in output priority order; Cyrillic is index 4.
pub fn codepages() -> CodepageSet {
    CodepageSet::new(vec![ISO_8859_1, ISO_8859_15, ISO_8859_6, CP1253, ISO_8859_5])
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
