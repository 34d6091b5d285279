// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Console-safe rendering of titles and paths.
//!
//! Only what is printed passes through here. Tag data written to files never does.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// What the console can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleEncoding {
    /// Any Unicode scalar value prints as-is
    #[default]
    #[serde(alias = "utf-8")]
    Utf8,
    /// Only printable ASCII prints as-is
    Ascii,
}

impl ConsoleEncoding {
    fn can_print(self, c: char) -> bool {
        if c == '\t' {
            return true;
        }
        if c.is_control() {
            return false;
        }
        match self {
            ConsoleEncoding::Utf8 => true,
            ConsoleEncoding::Ascii => c.is_ascii(),
        }
    }
}

/// Replace characters the console can't show with `\u{..}` escapes
pub fn sanitize(s: &str, encoding: ConsoleEncoding) -> Cow<'_, str> {
    if s.chars().all(|c| encoding.can_print(c)) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        if encoding.can_print(c) {
            out.push(c);
        } else {
            out.extend(c.escape_unicode());
        }
    }
    Cow::Owned(out)
}
