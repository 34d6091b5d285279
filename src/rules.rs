// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Cleanup rules: regexes with a `keep` group naming the part of a title to retain

use regex::Regex;

use crate::error::RewriteError;
use crate::{Result, TagsweepError};

/// Name of the capture group every cleanup pattern must define
pub const KEEP_GROUP: &str = "keep";

/// A compiled cleanup pattern
#[derive(Debug, Clone)]
pub struct CleanupRule {
    source: String,
    regex: Regex,
}

/// The outcome of a rule matching a title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleChange {
    /// Full text of the match
    pub old_title: String,
    /// Text of the `keep` group
    pub new_title: String,
}

impl CleanupRule {
    /// Compile a pattern. Matching is anchored at the start of the title.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;

        if !regex.capture_names().flatten().any(|name| name == KEEP_GROUP) {
            return Err(TagsweepError::Config(format!(
                "cleanup pattern {:?} has no `(?<{}>...)` group",
                pattern, KEEP_GROUP
            )));
        }

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as written in the settings
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Match against a title.
    ///
    /// `Ok(None)` means no match. An error means the rule matched but
    /// produced nothing usable, and the caller should move on to the next rule.
    pub fn apply(&self, title: &str) -> std::result::Result<Option<TitleChange>, RewriteError> {
        // Leftmost-first: if any match starts at 0, this is it
        let caps = match self.regex.captures(title) {
            Some(caps) if caps.get(0).is_some_and(|m| m.start() == 0) => caps,
            _ => return Ok(None),
        };

        let keep = caps.name(KEEP_GROUP).ok_or_else(|| RewriteError::Pattern {
            pattern: self.source.clone(),
            reason: format!("the `{}` group did not participate", KEEP_GROUP),
        })?;

        Ok(Some(TitleChange {
            old_title: caps[0].to_string(),
            new_title: keep.as_str().to_string(),
        }))
    }
}

/// Try each rule in order and return the first change.
///
/// Rules that fail at match time are skipped.
pub fn first_match(rules: &[CleanupRule], title: &str) -> Option<TitleChange> {
    for rule in rules {
        match rule.apply(title) {
            Ok(Some(change)) => return Some(change),
            Ok(None) => continue,
            Err(e) => {
                tracing::debug!("Skipping rule: {}", e);
                continue;
            }
        }
    }
    None
}
