use std::fs;

use summarizer_core::PDF_CONTENT_TYPE;
use summarizer_engine::{load_document, LoadError};
use tempfile::TempDir;

#[test]
fn loads_pdf_with_name_and_content_type() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.pdf");
    fs::write(&path, b"%PDF-1.7\nbody").unwrap();

    let document = load_document(&path).unwrap();

    assert_eq!(document.file_name(), "report.pdf");
    assert_eq!(document.content_type(), PDF_CONTENT_TYPE);
    assert_eq!(document.bytes().as_ref(), b"%PDF-1.7\nbody");
    assert_eq!(document.size(), 13);
}

#[test]
fn accepts_pdf_magic_without_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("download");
    fs::write(&path, b"%PDF-1.4 data").unwrap();

    let document = load_document(&path).unwrap();
    assert_eq!(document.file_name(), "download");
}

#[test]
fn rejects_non_pdf() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.txt");
    fs::write(&path, b"plain text").unwrap();

    let err = load_document(&path).unwrap_err();
    assert!(matches!(err, LoadError::NotPdf { .. }));
    assert_eq!(err.to_string(), "notes.txt is not a PDF");
}

#[test]
fn rejects_empty_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("blank.pdf");
    fs::write(&path, b"").unwrap();

    let err = load_document(&path).unwrap_err();
    assert!(matches!(err, LoadError::Empty { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    let err = load_document(&temp.path().join("gone.pdf")).unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().starts_with("Could not read gone.pdf"));
}
