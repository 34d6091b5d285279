// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! tagsweep: Music Library Title Cleaner
//!
//! Walks a directory tree, reads the title tag of every media file it finds and
//! strips unwanted decoration ("[Official Video]" and friends) using an ordered
//! list of regex rules.

pub mod config;
pub mod display;
pub mod error;
pub mod media;
pub mod rewriter;
pub mod rules;
pub mod runner;
pub mod walker;

pub use config::Settings;
pub use error::{PathError, RewriteError, Result, TagsweepError};
