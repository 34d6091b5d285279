// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Tagged media handles over a common, simplified field mapping

#[cfg(test)]
pub(crate) mod fixtures;
pub mod generic;
pub mod mpeg;

use std::path::Path;
use tracing::trace;

use crate::error::RewriteError;

/// A media file opened for reading and rewriting its tags
pub trait TaggedMedia {
    /// Name of the tag backend handling this file
    fn backend(&self) -> &'static str;

    /// Whether the file exposes any readable tag fields at all
    fn has_readable_fields(&self) -> bool;

    /// All values of the title field, in stored order
    fn titles(&self) -> Vec<String>;

    /// Replace the title field with a single value
    fn set_title(&mut self, title: &str);

    /// Persist changes back to the file
    fn save(&mut self) -> Result<(), RewriteError>;

    /// The canonical title: the first stored value
    fn title(&self) -> Result<String, RewriteError> {
        self.titles()
            .into_iter()
            .next()
            .ok_or(RewriteError::NoTitleField)
    }
}

/// Open a file with the backend best suited to it.
///
/// MP3 files go through the ID3v2 backend first and fall back to the generic
/// one when they carry no ID3v2 tag.
pub fn open(path: &Path) -> Result<Box<dyn TaggedMedia>, RewriteError> {
    let is_mp3 = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("mp3"));

    let media: Box<dyn TaggedMedia> = if is_mp3 {
        match mpeg::Id3Media::open(path) {
            Ok(m) => Box::new(m),
            Err(e) => {
                trace!("ID3v2 open failed for {:?} ({}), trying generic", path, e);
                Box::new(generic::GenericMedia::open(path)?)
            }
        }
    } else {
        Box::new(generic::GenericMedia::open(path)?)
    };

    if !media.has_readable_fields() {
        return Err(RewriteError::NotLoadable("no readable tag fields".to_string()));
    }

    Ok(media)
}

/// Split a stored text value into its individual values.
///
/// ID3v2.4 and some Vorbis writers pack multiple values into one string
/// separated by NUL.
pub(crate) fn split_values(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split('\0').filter(|s| !s.is_empty()).map(String::from)
}
