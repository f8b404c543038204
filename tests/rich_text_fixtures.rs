//! Literal fixtures for segmentation, tree edits, packing and codepage runs.

mod common;

use common::{
    CJK_ADVANCE, LATIN_ADVANCE, approx_eq, arial, codepages, fangsong, helvetica,
    setup_test_logging,
};
use richtype::font::{CodepointRanges, MetricsFont, RestrictedFont, SharedFont};
use richtype::wordbreak::UnicodeWordBreaker;
use richtype::{BreakKind, Color, Error, FallbackPolicy, RichText, TextOptions};
use std::sync::Arc;
use tracing::info;

const MIXED: &str = "Here is some Russian, Неприкосновенность, and some Chinese, 表明你已明确同意你的回答接受评估.";

fn fonts() -> Vec<SharedFont> {
    vec![helvetica(), arial(), fangsong()]
}

fn font_names(rt: &RichText) -> Vec<&str> {
    rt.leaves()
        .map(|piece| piece.font().map_or("", |font| font.name()))
        .collect()
}

fn wrap(rt: &RichText, width: f64, hard: bool) -> Vec<String> {
    let flags = rt.break_flags(&UnicodeWordBreaker);
    rt.wrap_to_width(width, &flags, hard)
        .iter()
        .map(ToString::to_string)
        .collect()
}

// ============================================================================
// Font fallback
// ============================================================================

#[test]
fn fallback_is_deterministic() {
    setup_test_logging();
    let rt = RichText::new("abc所有测def", &[helvetica(), fangsong()], 10.0, TextOptions::default())
        .unwrap();
    let texts: Vec<&str> = rt.leaves().map(|piece| piece.text()).collect();
    assert_eq!(texts, vec!["abc", "所有测", "def"]);
    assert_eq!(font_names(&rt), vec!["Helvetica", "Fangsong", "Helvetica"]);
}

#[test]
fn fallback_exhaustion_names_the_span() {
    setup_test_logging();
    let err = RichText::new("abc所有测", &[helvetica()], 10.0, TextOptions::default()).unwrap_err();
    assert_eq!(
        err,
        Error::NoFontForSpan {
            text: "所有测".to_string()
        }
    );
    assert!(err.to_string().contains("所有测"));
}

#[test]
fn fallback_failure_is_all_or_nothing() {
    let base = RichText::new("kept", &fonts(), 10.0, TextOptions::default()).unwrap();
    let result = base.add("ok then 😀 fails", &fonts(), 10.0, TextOptions::default());
    assert!(matches!(result, Err(Error::NoFontForSpan { ref text }) if text == "😀"));
    assert_eq!(base.to_string(), "kept");
}

#[test]
fn first_matching_font_wins() {
    let rt = RichText::new("所有测abc", &[fangsong(), helvetica()], 10.0, TextOptions::default())
        .unwrap();
    assert!(rt.as_leaf().is_some());
    assert_eq!(font_names(&rt), vec!["Fangsong"]);
}

#[test]
fn restricted_font_leads_only_for_its_ranges() {
    let cjk = CodepointRanges::from_names(&["CJK Unified Ideographs"]).unwrap();
    let restricted: SharedFont = Arc::new(RestrictedFont::new(fangsong(), cjk));
    let rt = RichText::new("所有测abc", &[restricted, helvetica()], 10.0, TextOptions::default())
        .unwrap();
    assert_eq!(font_names(&rt), vec!["Fangsong", "Helvetica"]);
}

#[test]
fn empty_text_without_fonts_is_empty() {
    let rt = RichText::new("", &[], 10.0, TextOptions::default()).unwrap();
    assert!(rt.is_empty());
    assert_eq!(rt.piece_count(), 1);
}

#[test]
fn substitute_policy_replaces_uncovered_text() {
    let options = TextOptions {
        fallback: FallbackPolicy::Substitute('?'),
        ..TextOptions::default()
    };
    let rt = RichText::new("abc所有测", &[arial()], 10.0, options).unwrap();
    assert_eq!(rt.to_string(), "abc???");
}

#[test]
fn options_from_pairs_reach_pieces() {
    let options = TextOptions::from_pairs(&[("color", "#008000"), ("underline", "true")]).unwrap();
    let rt = RichText::new("Green text", &fonts(), 10.0, options).unwrap();
    assert!(rt.leaves().all(|piece| piece.color() == Color::GREEN && piece.underline()));
}

// ============================================================================
// Measurement
// ============================================================================

#[test]
fn width_sums_leaves() {
    let rt = RichText::new("ab表明", &fonts(), 10.0, TextOptions::default()).unwrap();
    assert!(approx_eq(rt.width(), 2.0 * LATIN_ADVANCE + 2.0 * CJK_ADVANCE));
}

#[test]
fn height_aligns_baselines() {
    let rt = RichText::new("abc", &[helvetica()], 10.0, TextOptions::default())
        .unwrap()
        .add("Жж", &[arial()], 10.0, TextOptions::default())
        .unwrap();
    let latin = RichText::new("abc", &[helvetica()], 10.0, TextOptions::default()).unwrap();
    let cyrillic = RichText::new("Жж", &[arial()], 10.0, TextOptions::default()).unwrap();
    let expected = latin.ascent().max(cyrillic.ascent()) - latin.descent().min(cyrillic.descent());
    assert!(approx_eq(rt.height(), expected));
    assert!(approx_eq(rt.height(), 9.05 + 2.12));
    assert!(approx_eq(rt.leading(), rt.height() + rt.line_gap()));
}

// ============================================================================
// Tree edits
// ============================================================================

#[test]
fn merge_coalesces_and_keeps_original() {
    let rt = RichText::new(MIXED, &fonts(), 10.0, TextOptions::default()).unwrap();
    let merged = rt.merge();
    assert_eq!(merged.children().len(), 5);
    assert_eq!(merged.to_string(), MIXED);
    assert!(rt.piece_count() > 5);
    assert!(approx_eq(merged.width(), rt.width()));
    assert_eq!(merged.chars(), rt.chars());
}

#[test]
fn insert_hyphenation_points() {
    let rt = RichText::new(
        "Automatic hyphenation aids word wrapping.",
        &fonts(),
        10.0,
        TextOptions::default(),
    )
    .unwrap();
    let hyphenated = rt.insert_string_at_offsets("-", &[4, 16, 36]);
    assert_eq!(hyphenated.to_string(), "Auto-matic hyphen-ation aids word wrap-ping.");
}

#[test]
fn split_round_trips_across_scripts() {
    let rt = RichText::new(MIXED, &fonts(), 10.0, TextOptions::default()).unwrap();
    for offset in 0..=rt.len() {
        let (left, right) = rt.split(offset);
        assert_eq!(format!("{left}{right}"), MIXED, "offset {offset}");
    }
}

#[test]
fn trim_across_pieces() {
    let rt = RichText::new("  \t", &fonts(), 10.0, TextOptions::default())
        .unwrap()
        .add(" Lorem ipsum ", &fonts(), 12.0, TextOptions::default())
        .unwrap();
    assert_eq!(rt.trim_space().to_string(), "Lorem ipsum");
    assert!(rt.trim_space().leaves().all(|piece| piece.font_size() == 12.0));
    assert!(!rt.is_white_space());
    assert!(rt.split(3).0.is_white_space());
}

// ============================================================================
// Packing
// ============================================================================

#[test]
fn words_to_width_fixture() {
    setup_test_logging();
    let rt = RichText::new(MIXED, &fonts(), 10.0, TextOptions::default()).unwrap();
    let flags = rt.break_flags(&UnicodeWordBreaker);
    let result = rt.words_to_width(100.0, &flags, false);
    assert_eq!(result.line.to_string(), "Here is some");
    assert_eq!(result.kind, BreakKind::Word);
    let remainder = result.remainder.unwrap();
    assert_eq!(remainder.text.to_string(), &MIXED["Here is some".len()..]);
    assert_eq!(remainder.flags.len(), remainder.text.len());
}

#[test]
fn wrap_mixed_scripts() {
    setup_test_logging();
    let rt = RichText::new(MIXED, &fonts(), 10.0, TextOptions::default()).unwrap();
    let lines = wrap(&rt, 150.0, false);
    info!(?lines, "wrapped");
    assert_eq!(
        lines,
        vec![
            "Here is some Russian,",
            "Неприкосновенность, and",
            "some Chinese, 表明你已明确",
            "同意你的回答接受评估.",
        ]
    );
}

#[test]
fn hard_break_fixture() {
    let rt = RichText::new("Supercalifragilisticexpialidocious", &fonts(), 10.0, TextOptions::default())
        .unwrap();
    let flags = rt.break_flags(&UnicodeWordBreaker);
    let result = rt.words_to_width(80.0, &flags, true);
    assert_eq!(result.line.to_string(), "Supercalifrag");
    assert_eq!(result.kind, BreakKind::Hard);

    let overflow = rt.words_to_width(80.0, &flags, false);
    assert_eq!(overflow.line, rt);
    assert!(overflow.remainder.is_none());
}

#[test]
fn zero_width_wraps_one_character_per_line() {
    let rt = RichText::new("Lorem", &fonts(), 10.0, TextOptions::default()).unwrap();
    assert_eq!(wrap(&rt, 0.0, true), vec!["L", "o", "r", "e", "m"]);
}

#[test]
fn soft_hyphen_fixture() {
    let rt = RichText::new(
        "Super\u{AD}cali\u{AD}fragilistic\u{AD}expiali\u{AD}docious",
        &fonts(),
        10.0,
        TextOptions::default(),
    )
    .unwrap();
    let lines = wrap(&rt, 80.0, false);
    assert_eq!(
        lines,
        vec![
            "Super\u{AD}cali\u{AD}-",
            "fragilistic\u{AD}-",
            "expiali\u{AD}-",
            "docious",
        ]
    );
}

#[test]
fn empty_text_wraps_to_no_lines() {
    let rt = RichText::new("", &fonts(), 10.0, TextOptions::default()).unwrap();
    assert!(wrap(&rt, 100.0, true).is_empty());
}

#[test]
fn no_break_sentence_stays_whole() {
    let keep = TextOptions::builder().no_break().build();
    let rt = RichText::new("Here is a long sentence with mostly small words.", &fonts(), 10.0, keep)
        .unwrap();
    assert_eq!(wrap(&rt, 60.0, false).len(), 1);
}

#[test]
fn no_break_region_moves_as_a_unit() {
    let keep = TextOptions::builder().no_break().build();
    let rt = RichText::new("Here is a ", &fonts(), 10.0, TextOptions::default())
        .unwrap()
        .add("long sentence with mostly", &fonts(), 10.0, keep)
        .unwrap()
        .add(" small words.", &fonts(), 10.0, TextOptions::default())
        .unwrap();
    let lines = wrap(&rt, 80.0, false);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "long sentence with mostly");
}

#[test]
fn wrapped_lines_keep_attributes() {
    let options = TextOptions::builder().color(Color::BLUE).strikeout().build();
    let rt = RichText::new("Lorem ipsum dolor sit amet", &fonts(), 10.0, options).unwrap();
    let flags = rt.break_flags(&UnicodeWordBreaker);
    for line in rt.wrap_to_width(60.0, &flags, false) {
        assert!(line.matches_attributes(&rt));
        assert!(line.width() <= 60.0);
    }
}

// ============================================================================
// Codepages
// ============================================================================

fn codepage_runs(rt: &RichText) -> Vec<(i32, String)> {
    let mut runs = Vec::new();
    rt.each_codepage(&codepages(), |index, text, _| {
        runs.push((index.0, text.to_string()));
    });
    runs
}

#[test]
fn codepage_stickiness_fixture() {
    setup_test_logging();
    let rt = RichText::new(MIXED, &fonts(), 10.0, TextOptions::default()).unwrap();
    assert_eq!(
        codepage_runs(&rt),
        vec![
            (0, "Here is some Russian, ".to_string()),
            (4, "Неприкосновенность".to_string()),
            (0, ", and some Chinese, ".to_string()),
            (-1, "表明你已明确同意你的回答接受评估".to_string()),
            (0, ".".to_string()),
        ]
    );
}

#[test]
fn codepage_stays_current_within_one_piece() {
    let rt = RichText::new(
        "Here is some Russian, Неприкосновенность, and some random English.",
        &[arial()],
        10.0,
        TextOptions::default(),
    )
    .unwrap();
    assert_eq!(
        codepage_runs(&rt),
        vec![
            (0, "Here is some Russian, ".to_string()),
            (4, "Неприкосновенность, and some random English.".to_string()),
        ]
    );
}

#[test]
fn codepage_runs_cover_each_line() {
    let font: SharedFont = Arc::new(
        MetricsFont::builder("Mono")
            .default_advance(600)
            .coverage(CodepointRanges::from_names(&["Basic Latin", "Greek and Coptic"]).unwrap())
            .build(),
    );
    let rt = RichText::new("Alpha α beta β", &[font], 10.0, TextOptions::default()).unwrap();
    let flags = rt.break_flags(&UnicodeWordBreaker);
    let lines = rt.wrap_to_width(50.0, &flags, false);
    let mut joined = String::new();
    for line in &lines {
        line.each_codepage(&codepages(), |index, text, _| {
            let codepage = codepages().get(index).cloned().unwrap();
            assert!(codepage.encode(text).is_some());
            joined.push_str(text);
        });
    }
    assert_eq!(joined, "Alpha αbeta β");
}
