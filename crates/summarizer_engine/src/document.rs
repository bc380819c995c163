use std::fs;
use std::io;
use std::path::Path;

use summarizer_core::{Document, PDF_CONTENT_TYPE};
use thiserror::Error;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("{name} is not a PDF")]
    NotPdf { name: String },
    #[error("{name} is empty")]
    Empty { name: String },
}

/// Reads a user-chosen file into memory, accepting only PDFs.
pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    let name = display_name(path);
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        name: name.clone(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(LoadError::Empty { name });
    }
    if !has_pdf_extension(path) && !bytes.starts_with(PDF_MAGIC) {
        return Err(LoadError::NotPdf { name });
    }
    Ok(Document::new(name, PDF_CONTENT_TYPE, bytes))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
