// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Error types for tagsweep

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tagsweep operations
pub type Result<T> = std::result::Result<T, TagsweepError>;

/// Fatal errors. Any of these ends the run before or instead of processing.
#[derive(Error, Debug)]
pub enum TagsweepError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid cleanup pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// Problems with the search root, raised before any file is visited
#[derive(Error, Debug)]
pub enum PathError {
    #[error("Couldn't locate {0}")]
    NotFound(PathBuf),

    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    #[error("Couldn't resolve {path}: {source}")]
    Unresolvable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-file problems. The rewriter turns every one of these into "unchanged".
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("not loadable as tagged media: {0}")]
    NotLoadable(String),

    #[error("no title field")]
    NoTitleField,

    #[error("pattern {pattern:?} matched but {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("failed to save tags: {0}")]
    SaveFailed(String),
}

impl From<id3::Error> for RewriteError {
    fn from(e: id3::Error) -> Self {
        RewriteError::NotLoadable(e.to_string())
    }
}

impl From<lofty::error::LoftyError> for RewriteError {
    fn from(e: lofty::error::LoftyError) -> Self {
        RewriteError::NotLoadable(e.to_string())
    }
}
