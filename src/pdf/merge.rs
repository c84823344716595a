//! PDF merging functionality using lopdf

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::{Error, Result};

/// Options for merging PDFs
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Input PDF file paths in the order they should be merged
    pub input_paths: Vec<PathBuf>,
    /// Output PDF file path
    pub output_path: PathBuf,
}

/// Output filename for a merge performed at `stamp`: `merged_YYYYMMDD_HHMM.pdf`.
///
/// Minute granularity; two runs within the same minute produce the same name
/// and the later write wins.
pub fn merged_filename(stamp: DateTime<Local>) -> String {
    format!("merged_{}.pdf", stamp.format("%Y%m%d_%H%M"))
}

/// Merge multiple PDF files into a single PDF.
///
/// Pages keep their original order within each file, and files are
/// concatenated in the order given. Returns the total page count of the
/// merged document.
///
/// Based on the lopdf merge example:
/// https://github.com/J-F-Liu/lopdf/blob/main/examples/merge.rs
///
/// # Example
///
/// ```no_run
/// use pdf_fusion::pdf::{merge_pdfs, MergeOptions};
/// use std::path::PathBuf;
///
/// let options = MergeOptions {
///     input_paths: vec![
///         PathBuf::from("incoming/1. intro.pdf"),
///         PathBuf::from("incoming/2. advanced.pdf"),
///     ],
///     output_path: PathBuf::from("docs/merged_20240101_0900.pdf"),
/// };
///
/// let pages = merge_pdfs(&options).expect("Failed to merge PDFs");
/// println!("{pages} pages");
/// ```
pub fn merge_pdfs(options: &MergeOptions) -> Result<usize> {
    if options.input_paths.is_empty() {
        return Err(Error::NoInputs);
    }

    for path in &options.input_paths {
        if !path.exists() {
            return Err(Error::FileNotFound(path.clone()));
        }
    }

    // Load every input up front; any parse failure aborts the merge before
    // anything is written.
    let mut documents: Vec<Document> = Vec::new();
    for path in &options.input_paths {
        let doc = Document::load(path)?;

        if doc.get_pages().is_empty() {
            return Err(Error::EmptyPdf(path.clone()));
        }

        documents.push(doc);
    }

    // Renumber each document into a shared id space and collect its pages
    // and objects in input order.
    let mut max_id = 1;
    let mut page_ids: Vec<ObjectId> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for mut doc in documents {
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        let pages = doc.get_pages();
        page_ids.extend(pages.into_values());

        objects.extend(doc.objects);
    }

    let mut merged = Document::with_version("1.5");
    merged.objects.extend(objects);

    // max_id must cover the ids just inserted, otherwise new_object_id()
    // would hand out colliding ids for the catalog and page tree.
    merged.max_id = max_id - 1;

    let pages_id = merged.new_object_id();

    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Count", Object::Integer(page_ids.len() as i64));
    pages_dict.set("Kids", Object::Array(kids));

    let catalog_id = merged.new_object_id();
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));

    merged.objects.insert(catalog_id, Object::Dictionary(catalog));
    merged.objects.insert(pages_id, Object::Dictionary(pages_dict));
    merged.trailer.set("Root", Object::Reference(catalog_id));

    // Reparent every page under the new Pages node.
    for &page_id in &page_ids {
        if let Ok(Object::Dictionary(ref mut dict)) = merged.get_object_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let page_count = page_ids.len();

    merged.compress();
    merged.save(&options.output_path)?;

    Ok(page_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::Path;

    #[test]
    fn test_merge_options_creation() {
        let options = MergeOptions {
            input_paths: vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
            output_path: PathBuf::from("merged.pdf"),
        };

        assert_eq!(options.input_paths.len(), 2);
        assert_eq!(options.output_path, Path::new("merged.pdf"));
    }

    #[test]
    fn test_merged_filename_format() {
        let stamp = Local.with_ymd_and_hms(2024, 1, 2, 9, 5, 59).unwrap();
        assert_eq!(merged_filename(stamp), "merged_20240102_0905.pdf");
    }

    #[test]
    fn test_merged_filename_drops_seconds() {
        let a = Local.with_ymd_and_hms(2024, 11, 20, 23, 59, 0).unwrap();
        let b = Local.with_ymd_and_hms(2024, 11, 20, 23, 59, 42).unwrap();
        assert_eq!(merged_filename(a), merged_filename(b));
    }

    #[test]
    fn test_merge_empty_input_list() {
        let options = MergeOptions {
            input_paths: vec![],
            output_path: PathBuf::from("merged.pdf"),
        };

        let result = merge_pdfs(&options);
        assert!(matches!(result, Err(Error::NoInputs)));
    }

    #[test]
    fn test_merge_nonexistent_file() {
        let options = MergeOptions {
            input_paths: vec![PathBuf::from("nonexistent.pdf")],
            output_path: PathBuf::from("merged.pdf"),
        };

        let result = merge_pdfs(&options);
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    // Merges over real documents are covered in tests/integration.rs
}
