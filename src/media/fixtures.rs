// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Small media files built on the fly for tests

use lofty::{Accessor, TagExt, TagType, TaggedFileExt};
use std::path::{Path, PathBuf};

/// Write a 0.1 s mono 16-bit PCM WAV with no tags
pub fn silent_wav(path: &Path) {
    let data = vec![0u8; 4410 * 2];
    let mut wav = Vec::with_capacity(44 + data.len());

    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data.len() as u32).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&44_100u32.to_le_bytes());
    wav.extend_from_slice(&(44_100u32 * 2).to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&(data.len() as u32).to_le_bytes());
    wav.extend_from_slice(&data);

    std::fs::write(path, wav).unwrap();
}

/// A WAV whose RIFF INFO chunk carries `title` (and an artist, so the tag is never empty)
pub fn tagged_wav(dir: &Path, name: &str, title: Option<&str>) -> PathBuf {
    let path = dir.join(name);
    silent_wav(&path);

    let mut tag = lofty::Tag::new(TagType::RiffInfo);
    tag.set_artist("Someone".to_string());
    if let Some(t) = title {
        tag.set_title(t.to_string());
    }
    tag.save_to_path(&path).unwrap();
    path
}

/// Title stored in a WAV's RIFF INFO chunk
pub fn wav_title(path: &Path) -> Option<String> {
    let file = lofty::read_from_path(path).unwrap();
    file.tag(TagType::RiffInfo)
        .and_then(|t| t.title().map(|c| c.into_owned()))
}
