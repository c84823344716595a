//! Static HTML index of merged outputs
//!
//! Scans the output directory and rewrites `index.html` with a table of
//! every merged PDF present there, newest first. The page is regenerated
//! in full on every run; re-running over an unchanged directory produces
//! byte-identical output.

use std::fs;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::manifest::list_pdfs;

/// One row of the index: a merged output file and its size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Filename within the output directory (also the link target)
    pub name: String,
    /// File size in bytes
    pub size_bytes: u64,
}

/// Format a byte count as mebibytes with two decimals, e.g. `3.27 MB`.
pub fn format_size(size_bytes: u64) -> String {
    let mb = size_bytes as f64 / (1024.0 * 1024.0);
    format!("{mb:.2} MB")
}

/// Collect the `*.pdf` files in the output directory, sorted by filename
/// descending. With `merged_YYYYMMDD_HHMM.pdf` names that puts the newest
/// output first.
pub fn scan_outputs(docs_dir: &Path) -> Result<Vec<IndexEntry>> {
    let mut entries = Vec::new();

    for path in list_pdfs(docs_dir)? {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        let size_bytes = fs::metadata(&path)?.len();
        entries.push(IndexEntry { name, size_bytes });
    }

    entries.sort_by(|a, b| b.name.cmp(&a.name));
    Ok(entries)
}

/// Render the full index page for the given entries.
pub fn render_index(entries: &[IndexEntry]) -> String {
    let mut rows = String::new();
    for entry in entries {
        let _ = write!(
            rows,
            "<tr><td><a href=\"{name}\">{name}</a></td><td>{size}</td></tr>",
            name = entry.name,
            size = format_size(entry.size_bytes),
        );
    }

    if rows.is_empty() {
        rows.push_str("<tr><td colspan=\"2\">Aún no hay archivos.</td></tr>");
    }

    format!(
        r#"<!doctype html>
<html lang="es"><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>PDFs fusionados</title>
<style>body{{font-family:system-ui,Arial,sans-serif;margin:2rem;}} table{{border-collapse:collapse;width:100%;}} td,th{{border:1px solid #ddd;padding:.6rem;}} th{{background:#f5f5f5;text-align:left;}}</style>
</head><body>
<h1>PDFs fusionados</h1>
<p>Generados automáticamente.</p>
<table>
<thead><tr><th>Archivo</th><th>Tamaño</th></tr></thead>
<tbody>
{rows}
</tbody>
</table>
</body></html>"#
    )
}

/// Rebuild `index.html` in the output directory, overwriting any previous
/// version. Returns the path of the written file.
pub fn build_index(docs_dir: &Path) -> Result<PathBuf> {
    let entries = scan_outputs(docs_dir)?;
    let html = render_index(&entries);

    let index_path = docs_dir.join("index.html");
    fs::write(&index_path, html)?;

    Ok(index_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(name: &str, size_bytes: u64) -> IndexEntry {
        IndexEntry {
            name: name.to_string(),
            size_bytes,
        }
    }

    #[test]
    fn test_format_size_zero_bytes() {
        assert_eq!(format_size(0), "0.00 MB");
    }

    #[test]
    fn test_format_size_multi_megabyte() {
        // 3.5 MiB exactly
        assert_eq!(format_size(3_670_016), "3.50 MB");
        // Rounds to two decimals
        assert_eq!(format_size(1_048_576 + 5_243), "1.01 MB");
    }

    #[test]
    fn test_render_empty_index_has_placeholder_row() {
        let html = render_index(&[]);
        assert!(html.contains("<tr><td colspan=\"2\">Aún no hay archivos.</td></tr>"));
        assert!(html.contains("<title>PDFs fusionados</title>"));
        assert!(html.contains("<th>Archivo</th><th>Tamaño</th>"));
    }

    #[test]
    fn test_render_index_links_and_sizes() {
        let html = render_index(&[entry("merged_20240101_0900.pdf", 0)]);
        assert!(html.contains(
            "<a href=\"merged_20240101_0900.pdf\">merged_20240101_0900.pdf</a>"
        ));
        assert!(html.contains("<td>0.00 MB</td>"));
        assert!(!html.contains("Aún no hay archivos."));
    }

    #[test]
    fn test_render_index_is_deterministic() {
        let entries = vec![
            entry("merged_20240102_0900.pdf", 123),
            entry("merged_20240101_0900.pdf", 456),
        ];
        assert_eq!(render_index(&entries), render_index(&entries));
    }

    #[test]
    fn test_scan_outputs_sorted_descending() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp.path().join("merged_20240101_0900.pdf"), b"a").unwrap();
        fs::write(temp.path().join("merged_20240102_0900.pdf"), b"bb").unwrap();
        fs::write(temp.path().join("notes.txt"), b"ignored").unwrap();

        let entries = scan_outputs(temp.path()).expect("Scan failed");
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["merged_20240102_0900.pdf", "merged_20240101_0900.pdf"]
        );
        assert_eq!(entries[0].size_bytes, 2);
        assert_eq!(entries[1].size_bytes, 1);
    }

    #[test]
    fn test_build_index_overwrites_and_is_idempotent() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp.path().join("index.html"), b"stale").unwrap();
        fs::write(temp.path().join("merged_20240101_0900.pdf"), b"x").unwrap();

        let path = build_index(temp.path()).expect("First build failed");
        let first = fs::read_to_string(&path).unwrap();
        assert!(first.contains("merged_20240101_0900.pdf"));
        assert!(!first.contains("stale"));

        build_index(temp.path()).expect("Second build failed");
        let second = fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_index_never_lists_itself() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = build_index(temp.path()).expect("Build failed");
        let html = fs::read_to_string(&path).unwrap();
        assert!(!html.contains("index.html"));
        assert!(html.contains("Aún no hay archivos."));
    }
}
