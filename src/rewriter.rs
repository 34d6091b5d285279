// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Title rewriting for a single media file

use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

use crate::display::{sanitize, ConsoleEncoding};
use crate::error::RewriteError;
use crate::media::{self, TaggedMedia};
use crate::rules::{first_match, CleanupRule, TitleChange};

/// How a run reports and whether it writes
#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteOptions {
    /// Name every file visited, not only the ones that change
    pub verbose: bool,
    /// Report changes without saving them
    pub dry_run: bool,
    pub encoding: ConsoleEncoding,
}

/// Applies cleanup rules to media titles
pub struct TitleRewriter<'a> {
    rules: &'a [CleanupRule],
    options: RewriteOptions,
}

impl<'a> TitleRewriter<'a> {
    pub fn new(rules: &'a [CleanupRule], options: RewriteOptions) -> Self {
        Self { rules, options }
    }

    /// Process one file, writing report lines to `out`.
    ///
    /// Returns `Ok(true)` if the title was changed (or would be, in a dry run).
    /// Media problems never surface as errors; only failing to write to `out` does.
    pub fn handle<W: Write>(&self, path: &Path, out: &mut W) -> io::Result<bool> {
        if self.options.verbose {
            self.print_path(path, out)?;
        }

        let (mut media, change) = match self.find_change(path) {
            Ok(Some(found)) => found,
            Ok(None) => return Ok(false),
            Err(e) => {
                debug!("Skipping {:?}: {}", path, e);
                return Ok(false);
            }
        };

        if !self.options.verbose {
            self.print_path(path, out)?;
        }
        let line = format!("\t{} => {}", change.old_title, change.new_title);
        writeln!(out, "{}", sanitize(&line, self.options.encoding))?;

        if self.options.dry_run {
            return Ok(true);
        }

        media.set_title(&change.new_title);
        match media.save() {
            Ok(()) => {
                debug!("Retitled {:?} via {}", path, media.backend());
                Ok(true)
            }
            Err(e) => {
                warn!("Could not update {:?}: {}", path, e);
                Ok(false)
            }
        }
    }

    fn find_change(
        &self,
        path: &Path,
    ) -> Result<Option<(Box<dyn TaggedMedia>, TitleChange)>, RewriteError> {
        let media = media::open(path)?;
        let title = media.title()?;
        Ok(first_match(self.rules, &title).map(|change| (media, change)))
    }

    fn print_path<W: Write>(&self, path: &Path, out: &mut W) -> io::Result<()> {
        let shown = path.display().to_string();
        writeln!(out, "{}: ", sanitize(&shown, self.options.encoding))
    }
}
