// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Sequential driver tying a path source to a per-file handler

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Feed every path to `handler`, count the ones it reports as modified and
/// print the total. Returns the count.
pub fn run<I, F, W>(paths: I, mut handler: F, out: &mut W) -> io::Result<usize>
where
    I: IntoIterator<Item = PathBuf>,
    F: FnMut(&Path, &mut W) -> io::Result<bool>,
    W: Write,
{
    let mut modifications = 0;
    let mut visited = 0;

    for path in paths {
        visited += 1;
        if handler(&path, out)? {
            modifications += 1;
        }
    }

    debug!("Visited {} media files", visited);
    writeln!(out, "{} media entries modified", modifications)?;
    Ok(modifications)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_truthy_results() {
        let paths = vec![
            PathBuf::from("/m/a.mp3"),
            PathBuf::from("/m/b.mp3"),
            PathBuf::from("/m/c.mp3"),
        ];
        let mut seen = Vec::new();
        let mut out = Vec::new();

        let n = run(
            paths,
            |p, _| {
                seen.push(p.to_path_buf());
                Ok(p.file_name().unwrap() != "b.mp3")
            },
            &mut out,
        )
        .unwrap();

        assert_eq!(n, 2);
        assert_eq!(seen.len(), 3);
        assert_eq!(String::from_utf8(out).unwrap(), "2 media entries modified\n");
    }

    #[test]
    fn test_empty_source() {
        let mut out = Vec::new();
        let n = run(Vec::new(), |_, _| Ok(true), &mut out).unwrap();
        assert_eq!(n, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "0 media entries modified\n");
    }

    #[test]
    fn test_handler_output_precedes_summary() {
        let mut out = Vec::new();
        run(
            vec![PathBuf::from("x.flac")],
            |p, out| {
                writeln!(out, "{}: ", p.display())?;
                Ok(true)
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "x.flac: \n1 media entries modified\n"
        );
    }
}
