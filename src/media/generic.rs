// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Multi-format backend (FLAC, Ogg, MP4, WAV, APE, ...) via lofty

use lofty::{Accessor, ItemKey, Tag, TagExt, TagType, TaggedFile, TaggedFileExt};
use std::path::{Path, PathBuf};

use super::{split_values, TaggedMedia};
use crate::error::RewriteError;

/// A media file and whichever of its tags carries the title
pub struct GenericMedia {
    path: PathBuf,
    file: TaggedFile,
    tag_type: Option<TagType>,
}

impl GenericMedia {
    pub fn open(path: &Path) -> Result<Self, RewriteError> {
        let file = lofty::read_from_path(path)?;
        let tag_type = title_tag_type(&file);

        Ok(Self {
            path: path.to_path_buf(),
            file,
            tag_type,
        })
    }

    fn tag(&self) -> Option<&Tag> {
        self.tag_type.and_then(|t| self.file.tag(t))
    }
}

/// Prefer the primary tag, then any other tag that has a title, then any tag at all
fn title_tag_type(file: &TaggedFile) -> Option<TagType> {
    let has_title = |t: &&Tag| t.title().is_some();

    file.primary_tag()
        .filter(has_title)
        .or_else(|| file.tags().iter().find(has_title))
        .or_else(|| file.primary_tag())
        .or_else(|| file.first_tag())
        .map(|t| t.tag_type())
}

impl TaggedMedia for GenericMedia {
    fn backend(&self) -> &'static str {
        "lofty"
    }

    fn has_readable_fields(&self) -> bool {
        self.file.tags().iter().any(|t| t.items().next().is_some())
    }

    fn titles(&self) -> Vec<String> {
        match self.tag() {
            Some(tag) => tag
                .get_strings(&ItemKey::TrackTitle)
                .flat_map(split_values)
                .collect(),
            None => Vec::new(),
        }
    }

    fn set_title(&mut self, title: &str) {
        if let Some(tag) = self.tag_type.and_then(|t| self.file.tag_mut(t)) {
            tag.set_title(title.to_string());
        }
    }

    fn save(&mut self) -> Result<(), RewriteError> {
        let tag = self
            .tag()
            .ok_or_else(|| RewriteError::SaveFailed("no tag to write".to_string()))?;
        tag.save_to_path(&self.path)
            .map_err(|e| RewriteError::SaveFailed(e.to_string()))
    }
}
