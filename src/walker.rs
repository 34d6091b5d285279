// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Recursive discovery of media files

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use walkdir::WalkDir;

use crate::error::PathError;

/// Lazy, depth-first iterator over media files below a root directory
pub struct MediaWalker<'a> {
    inner: walkdir::IntoIter,
    extensions: &'a HashSet<String>,
}

/// Start walking `root`, yielding absolute paths of files whose suffix is in `extensions`.
///
/// The root is checked up front; nothing is yielded if it is missing or not a directory.
pub fn iter_media<'a>(
    root: &Path,
    extensions: &'a HashSet<String>,
) -> Result<MediaWalker<'a>, PathError> {
    if !root.exists() {
        return Err(PathError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(PathError::NotADirectory(root.to_path_buf()));
    }

    let root = root.canonicalize().map_err(|source| PathError::Unresolvable {
        path: root.to_path_buf(),
        source,
    })?;

    Ok(MediaWalker {
        inner: WalkDir::new(root).follow_links(true).into_iter(),
        extensions,
    })
}

/// Suffix of the file name including the leading dot, as `Path::extension` sees it
pub fn suffix(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
}

impl<'a> MediaWalker<'a> {
    fn accepts(&self, path: &Path) -> bool {
        suffix(path).is_some_and(|s| self.extensions.contains(&s))
    }
}

impl<'a> Iterator for MediaWalker<'a> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    if let Some(ancestor) = e.loop_ancestor() {
                        warn!("Symlink loop back to {:?}, not descending", ancestor);
                    } else {
                        warn!("Skipping unreadable entry: {}", e);
                    }
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if self.accepts(entry.path()) {
                trace!("Found media: {:?}", entry.path());
                return Some(entry.into_path());
            }
        }
    }
}
