//! PDF page counting

use std::path::Path;

use lopdf::{Document, Object};

use crate::error::{Error, Result};

/// Count pages by reading the Count field from the Pages dictionary.
/// This is more reliable than get_pages() which doesn't handle nested page trees.
fn count_pages_from_catalog(doc: &Document) -> Result<usize> {
    let catalog_ref = doc
        .trailer
        .get(b"Root")
        .map_err(|_| Error::General("No Root in trailer".to_string()))?;

    let catalog_id = match catalog_ref {
        Object::Reference(id) => *id,
        _ => return Err(Error::General("Root is not a reference".to_string())),
    };

    let catalog_dict = match doc.get_object(catalog_id)? {
        Object::Dictionary(dict) => dict,
        _ => return Err(Error::General("Catalog is not a dictionary".to_string())),
    };

    let pages_id = match catalog_dict
        .get(b"Pages")
        .map_err(|_| Error::General("No Pages in catalog".to_string()))?
    {
        Object::Reference(id) => *id,
        _ => return Err(Error::General("Pages is not a reference".to_string())),
    };

    let pages_dict = match doc.get_object(pages_id)? {
        Object::Dictionary(dict) => dict,
        _ => return Err(Error::General("Pages is not a dictionary".to_string())),
    };

    match pages_dict
        .get(b"Count")
        .map_err(|_| Error::General("No Count in Pages".to_string()))?
    {
        Object::Integer(n) => Ok(*n as usize),
        _ => Err(Error::General("Count is not an integer".to_string())),
    }
}

/// Count the number of pages in a PDF file.
///
/// Quick operation reading the Count field from the Pages dictionary.
pub fn count_pages(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    let page_count = count_pages_from_catalog(&doc)?;

    if page_count == 0 {
        return Err(Error::EmptyPdf(path.to_path_buf()));
    }

    Ok(page_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_pages_nonexistent_file() {
        let result = count_pages(Path::new("nonexistent.pdf"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    // Counts over real documents are covered in tests/integration.rs
}
