//! Input resolution
//!
//! Determines the ordered list of PDFs to merge. A manifest file, when
//! present and matching at least one existing file, dictates the order;
//! otherwise the input directory is listed alphabetically.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;

use crate::config::Config;
use crate::error::{Error, Result};

/// List all `*.pdf` files in a directory, sorted lexicographically ascending.
///
/// The extension match is case-sensitive; `report.PDF` is not picked up.
/// A missing directory yields an empty list rather than an error.
pub fn list_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("*.pdf");
    let pattern = pattern.to_string_lossy();

    let mut files = Vec::new();
    for entry in glob(&pattern).map_err(|e| Error::InvalidGlob(e.to_string()))? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => return Err(Error::Io(e.into_error())),
        }
    }

    files.sort();
    Ok(files)
}

/// Resolve the ordered list of input files for a run.
///
/// If the manifest exists, its non-blank lines (trimmed, order preserved) are
/// joined against the incoming directory and filtered to regular files.
/// Entries naming missing files are skipped silently. If at least one entry
/// survives, that list is returned as-is. Otherwise resolution falls back to
/// every `*.pdf` in the incoming directory in alphabetical order.
///
/// An empty result is valid and means "nothing to merge".
pub fn resolve_inputs(config: &Config) -> Result<Vec<PathBuf>> {
    if config.manifest_path.is_file() {
        let text = fs::read_to_string(&config.manifest_path)?;

        let files: Vec<PathBuf> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|name| config.incoming_dir.join(name))
            .filter(|path| path.is_file())
            .collect();

        if !files.is_empty() {
            return Ok(files);
        }
    }

    list_pdfs(&config.incoming_dir)
}
