// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tagsweep::display::{sanitize, ConsoleEncoding};
use tagsweep::rules::{first_match, CleanupRule};

#[derive(Arbitrary, Debug)]
struct Input {
    pattern: String,
    title: String,
    ascii: bool,
}

fuzz_target!(|input: Input| {
    let encoding = if input.ascii {
        ConsoleEncoding::Ascii
    } else {
        ConsoleEncoding::Utf8
    };
    let shown = sanitize(&input.title, encoding);
    if input.ascii {
        assert!(shown.is_ascii());
    }

    let Ok(rule) = CleanupRule::new(&input.pattern) else {
        return;
    };
    if let Some(change) = first_match(std::slice::from_ref(&rule), &input.title) {
        assert!(input.title.starts_with(&change.old_title));
        assert!(change.old_title.contains(&change.new_title));
    }
});
