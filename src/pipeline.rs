//! Run orchestration
//!
//! One run: resolve inputs, merge them into a timestamped output, rebuild
//! the index. Runs start-to-finish in-process with no state carried between
//! runs other than the filesystem. Fail-fast: the first unreadable input or
//! filesystem error aborts the run.

use std::path::PathBuf;

use chrono::Local;

use crate::config::Config;
use crate::error::Result;
use crate::index::build_index;
use crate::manifest::resolve_inputs;
use crate::pdf::{merge_pdfs, merged_filename, MergeOptions};

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Resolved input files, in merge order
    pub inputs: Vec<PathBuf>,
    /// Path of the merged output, or None when there was nothing to merge
    pub merged: Option<PathBuf>,
    /// Path of the regenerated index
    pub index: PathBuf,
}

/// Execute one full run over the configured directories.
///
/// An empty input set is a successful no-op for the merge step; the index
/// is rebuilt either way.
pub fn run(config: &Config) -> Result<RunSummary> {
    config.ensure_directories()?;

    let inputs = resolve_inputs(config)?;

    let merged = if inputs.is_empty() {
        println!(
            "Warning: no PDFs in {}. Nothing to merge.",
            config.incoming_dir.display()
        );
        None
    } else {
        println!("Merging {} file(s):", inputs.len());
        for path in &inputs {
            if let Some(name) = path.file_name() {
                println!("  {}", name.to_string_lossy());
            }
        }

        let output_path = config.docs_dir.join(merged_filename(Local::now()));
        let options = MergeOptions {
            input_paths: inputs.clone(),
            output_path: output_path.clone(),
        };

        let page_count = merge_pdfs(&options)?;
        println!("Generated: {} ({} pages)", output_path.display(), page_count);

        Some(output_path)
    };

    let index = build_index(&config.docs_dir)?;
    println!("Index updated: {}", index.display());

    Ok(RunSummary {
        inputs,
        merged,
        index,
    })
}
