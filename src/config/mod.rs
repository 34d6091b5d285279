// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Configuration management for tagsweep

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::display::ConsoleEncoding;
use crate::rules::CleanupRule;
use crate::{Result, TagsweepError};

/// Default settings file, looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "settings.toml";

/// Settings document as written on disk
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SettingsFile {
    /// Directory searched when no path is given on the command line
    pub default_path: String,

    /// File suffixes to consider, e.g. ".mp3"
    pub media_extensions: Vec<String>,

    /// Cleanup patterns, tried in order
    pub cleanup_regexes: Vec<String>,

    /// How much of Unicode the console can print
    #[serde(default)]
    pub console_encoding: ConsoleEncoding,
}

/// Loaded, validated settings. Read-only for the rest of the run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub default_path: PathBuf,
    pub media_extensions: HashSet<String>,
    pub cleanup_rules: Vec<CleanupRule>,
    pub console_encoding: ConsoleEncoding,
}

impl SettingsFile {
    /// Read a settings document. `.json` files are JSON, everything else TOML.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TagsweepError::Config(format!(
                "Settings file not found at {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Compile patterns and normalize extensions
    pub fn compile(self) -> Result<Settings> {
        let media_extensions = self
            .media_extensions
            .iter()
            .map(|e| e.trim())
            .filter(|e| !e.is_empty())
            .map(|e| {
                if e.starts_with('.') {
                    e.to_string()
                } else {
                    format!(".{}", e)
                }
            })
            .collect::<HashSet<_>>();

        if media_extensions.is_empty() {
            return Err(TagsweepError::Config(
                "media_extensions must list at least one suffix".to_string(),
            ));
        }

        let cleanup_rules = self
            .cleanup_regexes
            .iter()
            .map(|p| CleanupRule::new(p))
            .collect::<Result<Vec<_>>>()?;

        if cleanup_rules.is_empty() {
            tracing::warn!("No cleanup_regexes configured; nothing will be changed");
        }

        Ok(Settings {
            default_path: PathBuf::from(self.default_path),
            media_extensions,
            cleanup_rules,
            console_encoding: self.console_encoding,
        })
    }
}

impl Settings {
    /// Load and validate settings from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings = SettingsFile::load(path)?.compile()?;
        tracing::debug!(
            "Loaded {} extensions and {} cleanup rules from {:?}",
            settings.media_extensions.len(),
            settings.cleanup_rules.len(),
            path
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::first_match;
    use std::io::Write;

    const SAMPLE: &str = r#"
default_path = "~/Music"
media_extensions = [".mp3", "flac", ".m4a"]
cleanup_regexes = [
    '^(?<keep>.*) \[Official Video\]$',
    '^(?<keep>.*) \(Official Audio\)$',
]
"#;

    #[test]
    fn test_toml_settings() {
        let settings = SettingsFile::from_toml(SAMPLE).unwrap().compile().unwrap();
        assert_eq!(settings.default_path, PathBuf::from("~/Music"));
        assert!(settings.media_extensions.contains(".mp3"));
        assert!(settings.media_extensions.contains(".flac"));
        assert!(settings.media_extensions.contains(".m4a"));
        assert_eq!(settings.cleanup_rules.len(), 2);
        assert_eq!(
            settings.cleanup_rules[0].pattern(),
            r"^(?<keep>.*) \[Official Video\]$"
        );
        assert_eq!(settings.console_encoding, ConsoleEncoding::Utf8);
    }

    #[test]
    fn test_json_settings_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(
            f,
            r#"{{
                "default_path": ".",
                "media_extensions": [".mp3"],
                "cleanup_regexes": ["^(?<keep>.*) - Topic$"],
                "console_encoding": "ascii"
            }}"#
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.console_encoding, ConsoleEncoding::Ascii);
        assert_eq!(settings.cleanup_rules.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::from_file(Path::new("/does/not/exist/settings.toml")).unwrap_err();
        assert!(matches!(err, TagsweepError::Config(_)));
    }

    #[test]
    fn test_missing_field() {
        let err = SettingsFile::from_toml("default_path = \".\"").unwrap_err();
        assert!(matches!(err, TagsweepError::Toml(_)));
    }

    #[test]
    fn test_rule_without_keep_rejected() {
        let doc = SettingsFile {
            default_path: ".".to_string(),
            media_extensions: vec![".mp3".to_string()],
            cleanup_regexes: vec![r"^(.*) \[HD\]$".to_string()],
            console_encoding: ConsoleEncoding::Utf8,
        };
        assert!(matches!(doc.compile(), Err(TagsweepError::Config(_))));
    }

    #[test]
    fn test_empty_extensions_rejected() {
        let doc = SettingsFile {
            default_path: ".".to_string(),
            media_extensions: vec!["  ".to_string()],
            cleanup_regexes: vec![],
            console_encoding: ConsoleEncoding::Utf8,
        };
        assert!(matches!(doc.compile(), Err(TagsweepError::Config(_))));
    }

    #[test]
    fn test_shipped_example_settings() {
        let example = include_str!("../../settings.example.toml");
        let settings = SettingsFile::from_toml(example).unwrap().compile().unwrap();

        assert!(!settings.default_path.starts_with("~"));
        assert!(settings.default_path.is_relative());
        assert!(settings.media_extensions.contains(".wav"));
        assert_eq!(settings.cleanup_rules.len(), 4);
        assert_eq!(
            first_match(&settings.cleanup_rules, "Song [Official Video]").map(|c| c.new_title),
            Some("Song".to_string())
        );
    }
}
