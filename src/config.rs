//! Run configuration
//!
//! All paths the tool touches are derived from a single project root and
//! carried in an explicit [`Config`] passed into each component. Directory
//! creation happens in [`Config::ensure_directories`], invoked once at the
//! start of a run, never as an import-time side effect.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Filesystem layout for one run.
///
/// Default layout relative to the project root:
/// - `incoming/` — input PDFs, consumed
/// - `docs/` — merged outputs and `index.html`, produced
/// - `manifest.txt` — optional ordering file, read-only
#[derive(Debug, Clone)]
pub struct Config {
    /// Project root all default paths derive from
    pub root: PathBuf,
    /// Directory scanned for input PDFs
    pub incoming_dir: PathBuf,
    /// Directory receiving merged outputs and the index
    pub docs_dir: PathBuf,
    /// Optional ordering manifest; need not exist
    pub manifest_path: PathBuf,
}

impl Config {
    /// Build the default layout under `root`.
    pub fn from_root<P: Into<PathBuf>>(root: P) -> Self {
        let root = root.into();
        Self {
            incoming_dir: root.join("incoming"),
            docs_dir: root.join("docs"),
            manifest_path: root.join("manifest.txt"),
            root,
        }
    }

    /// Create the input and output directories (with parents) if absent.
    ///
    /// The manifest file is never created; its absence is a valid state.
    pub fn ensure_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.incoming_dir)?;
        fs::create_dir_all(&self.docs_dir)?;
        Ok(())
    }

    /// Path of the generated HTML index inside the output directory.
    pub fn index_path(&self) -> PathBuf {
        self.docs_dir.join("index.html")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_root(Path::new("."))
    }
}
