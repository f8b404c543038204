//! Fuzz target for font fallback and line packing.
//!
//! Builds a tree from arbitrary text, then checks that splitting round trips
//! and that wrapping with hard breaks terminates with lines that fit.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use richtype::font::{CodepointRanges, MetricsFont, SharedFont};
use richtype::wordbreak::UnicodeWordBreaker;
use richtype::{RichText, TextOptions};
use std::sync::Arc;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    width: u16,
    split_at: u16,
    hard: bool,
}

fn fonts() -> Vec<SharedFont> {
    let latin = CodepointRanges::from_names(&["Basic Latin", "Latin-1 Supplement"]).unwrap();
    let cjk = CodepointRanges::from_names(&["CJK Unified Ideographs"]).unwrap();
    vec![
        Arc::new(MetricsFont::builder("Latin").default_advance(556).coverage(latin).build()),
        Arc::new(MetricsFont::builder("CJK").default_advance(1000).coverage(cjk).build()),
    ]
}

fuzz_target!(|input: Input<'_>| {
    let options = TextOptions::builder().substitute('?').build();
    let Ok(rt) = RichText::new(input.text, &fonts(), 10.0, options) else {
        return;
    };

    let (left, right) = rt.split(usize::from(input.split_at));
    assert_eq!(format!("{left}{right}"), rt.to_string());

    let width = f64::from(input.width) / 10.0;
    let flags = rt.break_flags(&UnicodeWordBreaker);
    let lines = rt.wrap_to_width(width, &flags, input.hard);
    assert!(lines.len() <= rt.chars() + 1);
});
