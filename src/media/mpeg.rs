// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! ID3v2 backend for MP3 files

use id3::TagLike;
use std::path::{Path, PathBuf};

use super::{split_values, TaggedMedia};
use crate::error::RewriteError;

/// An MP3 file and its ID3v2 tag
pub struct Id3Media {
    path: PathBuf,
    tag: id3::Tag,
}

impl Id3Media {
    pub fn open(path: &Path) -> Result<Self, RewriteError> {
        let tag = id3::Tag::read_from_path(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            tag,
        })
    }
}

impl TaggedMedia for Id3Media {
    fn backend(&self) -> &'static str {
        "id3"
    }

    fn has_readable_fields(&self) -> bool {
        self.tag.frames().next().is_some()
    }

    fn titles(&self) -> Vec<String> {
        // TIT2
        self.tag.title().map(|t| split_values(t).collect()).unwrap_or_default()
    }

    fn set_title(&mut self, title: &str) {
        self.tag.set_title(title);
    }

    fn save(&mut self) -> Result<(), RewriteError> {
        // Keep whatever ID3v2 revision the file already uses
        self.tag
            .write_to_path(&self.path, self.tag.version())
            .map_err(|e| RewriteError::SaveFailed(e.to_string()))
    }
}
