// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! tagsweep: Music Library Title Cleaner
//!
//! Clean up media title tags in place, one directory tree at a time.

use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use tagsweep::config::{Settings, DEFAULT_SETTINGS_FILE};
use tagsweep::display::ConsoleEncoding;
use tagsweep::rewriter::{RewriteOptions, TitleRewriter};
use tagsweep::walker::iter_media;
use tagsweep::{runner, Result};

/// tagsweep CLI - Clean up media title tags
#[derive(Parser, Debug)]
#[command(name = "tagsweep")]
#[command(author = "Jonathan D. A. Jewell <hyperpolymath>")]
#[command(version = "1.0.0")]
#[command(about = "Clean up id3 tags", long_about = None)]
struct Cli {
    /// Path to settings file (TOML, or JSON with a .json extension)
    #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    /// Path to search for files to adjust (default: `default_path` from settings)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Name every file operated on
    #[arg(short, long)]
    verbose: bool,

    /// Don't modify any files, just name those which would be acted on
    #[arg(short, long)]
    dry_run: bool,

    /// Escape non-ASCII characters in output
    #[arg(long)]
    ascii: bool,

    /// Enable trace logging (most verbose)
    #[arg(long)]
    trace: bool,

    /// Suppress log output below warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let settings = Settings::from_file(&cli.config)?;

    let root = cli.path.unwrap_or_else(|| settings.default_path.clone());

    let options = RewriteOptions {
        verbose: cli.verbose,
        dry_run: cli.dry_run,
        encoding: if cli.ascii {
            ConsoleEncoding::Ascii
        } else {
            settings.console_encoding
        },
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    sweep(&settings, &root, options, &mut out)?;

    Ok(())
}

/// Clean every media file under `root`, reporting to `out`.
///
/// Dry and real runs log and print the same lines; only the files differ.
fn sweep<W: Write>(
    settings: &Settings,
    root: &Path,
    options: RewriteOptions,
    out: &mut W,
) -> Result<usize> {
    debug!("Searching {:?}", root);
    let paths = iter_media(root, &settings.media_extensions)?;

    if options.dry_run {
        debug!("Dry run, files will not be modified");
    }

    let rewriter = TitleRewriter::new(&settings.cleanup_rules, options);
    let modified = runner::run(paths, |path, out| rewriter.handle(path, out), out)?;
    Ok(modified)
}
