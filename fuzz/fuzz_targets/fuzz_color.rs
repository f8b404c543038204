//! Fuzz target for color parsing.
//!
//! Tests that named and hex color parsing handles arbitrary strings without
//! panicking, and that parsed colors survive a display round trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use richtype::Color;

fuzz_target!(|data: &str| {
    let _ = Color::from_hex(data);
    let _ = Color::named(data);

    if let Ok(color) = data.parse::<Color>() {
        let shown = color.to_string();
        let reparsed = if color.name().is_some() {
            shown.parse::<Color>().ok()
        } else {
            Color::from_hex(&shown)
        };
        assert_eq!(reparsed, Some(color));
    }
});
